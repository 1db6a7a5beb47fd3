//! Log setup for the `milestones` binary. Everything goes to stderr; stdout
//! carries only the report.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. `RUST_LOG` wins over `level`; later calls
/// are no-ops.
pub fn init_tracing(json: bool, level: Level) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let (json_layer, text_layer) = if json {
        let base = fmt::layer().with_writer(std::io::stderr).with_target(false);
        (Some(base.json()), None)
    } else {
        let base = fmt::layer().with_writer(std::io::stderr).with_target(false);
        (None, Some(base))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .try_init()
        .ok();
}

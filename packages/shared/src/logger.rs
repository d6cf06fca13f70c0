//! Logger initialisation.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the global tracing subscriber.
///
/// `RUST_LOG` takes precedence. Otherwise the filter enables `default_level`
/// for the calling crate and `tower_http`, and `warn` for everything else.
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let crate_target = crate_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{crate_target}={default_level},tower_http={default_level}"
        ))
    });

    // try_init: a second call (e.g. from tests) is a no-op instead of a panic
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

//! Console logging shared by both binaries.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter. Calling this again after a subscriber is installed does nothing.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let installed = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized");
    }
}

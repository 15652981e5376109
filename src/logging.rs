use std::sync::OnceLock;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

/// Install the tracing subscriber for host binaries and tests. Safe to call
/// more than once; subsequent calls are no-ops, as is a subscriber already
/// installed elsewhere.
pub fn init() {
    INIT.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false));
        let _ = subscriber.try_init();
    });
}

//! Tracing subscriber setup for consumers that want the library's spans
//! on stderr without wiring their own subscriber.

use std::sync::Once;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install a global fmt subscriber filtered by `RUST_LOG` (defaulting to
/// `warn`). Safe to call repeatedly; only the first call installs.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}

//! Opt-in diagnostic logging.

use std::sync::Once;

/// Environment variable holding the log filter, e.g. `EVT_LOG=evt_expr=trace`.
pub const LOG_ENV: &str = "EVT_LOG";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Does nothing unless `EVT_LOG` is set. Logs go to stderr, interleaved
/// with diagnostics but never with program output. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var_os(LOG_ENV).is_some() {
            let filter = EnvFilter::from_env(LOG_ENV);
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

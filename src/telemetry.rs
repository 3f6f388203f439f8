use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

/// Default directive when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_DIRECTIVE: &str = "payables=info";

/// Installs the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `directive`. Later calls are no-ops.
pub fn init_tracing(directive: &str) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(directive))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

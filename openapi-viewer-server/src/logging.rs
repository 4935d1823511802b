use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str =
    "info,openapi_viewer=debug,openapi_viewer_server=debug,tower_http=debug";

/// Initialize structured logging to stderr.
///
/// Filter is read from `RUST_LOG` and falls back to `info` with debug output of the viewer crates and
/// `tower_http` when unset or invalid.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

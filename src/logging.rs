use tracing_subscriber::EnvFilter;

/// Initialise logging. Debug builds default to `debug` level, release builds
/// to `info`. `RUST_LOG` may override the filter only when debug logging is
/// enabled, so a stray environment variable cannot make a release build
/// verbose.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the process.
///
/// `RUST_LOG` wins when set; otherwise `default_level` is used
/// (fed from `LOG_LEVEL`, defaulting to "info"). Called once at
/// startup; the process is single-threaded and short-lived, so no
/// further coordination is needed.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_ascii_lowercase()));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

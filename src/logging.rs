use tracing_subscriber::EnvFilter;

/// Initialize tracing for a host process.
///
/// Respects `RUST_LOG`, defaulting to `info`. Call once at startup.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

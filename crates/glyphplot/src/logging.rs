//! Logging setup for demos and host binaries.

/// Initialize the global tracing subscriber.
///
/// Library code only emits through `tracing` macros; binaries that want to
/// see the output call this once at startup. `RUST_LOG` overrides the
/// default filter.
pub fn init() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,glyphplot=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

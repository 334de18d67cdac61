use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;

/// Diagnostics go to stderr so stdout only ever carries the report.
pub fn init_telemetry() {
    let _ = Registry::default()
        .with(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("WARN")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

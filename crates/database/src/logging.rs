use config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber described by `logging_config`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_tracing(logging_config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging_config.filter_directive()));

    let _ = match logging_config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init(),
        "compact" => tracing_subscriber::fmt()
            .compact()
            .with_target(false)
            .with_env_filter(filter)
            .try_init(),
        _ => tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(filter)
            .try_init(),
    };
}

use dashdns_domain::Config;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber. The configured level is the
/// default directive; `RUST_LOG` takes precedence when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

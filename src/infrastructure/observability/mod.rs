use crate::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "userbook=debug,tower_http=debug,axum=debug";

pub fn init(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_thread_ids(true)
        .with_target(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!("Tracing initialized for {}", config.service_name);
    Ok(())
}

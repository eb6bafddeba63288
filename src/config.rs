use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub store_latency: Duration,
    pub service_name: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let server_port = lookup("SERVER_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let store_latency_ms: u64 = lookup("STORE_LATENCY_MS")
            .unwrap_or_else(|| "0".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidLatency)?;

        let service_name = lookup("SERVICE_NAME").unwrap_or_else(|| "userbook".to_string());

        Ok(Config {
            server_host,
            server_port,
            store_latency: Duration::from_millis(store_latency_ms),
            service_name,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("STORE_LATENCY_MS must be a whole number of milliseconds")]
    InvalidLatency,
}

use shared_utils::env::{env_str, env_u16};

/// Server configuration derived from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: String,
    pub port: u16,
    pub database_url: String,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self {
            bind: env_str("STOCK_HISTORY_BIND", "0.0.0.0"),
            port: env_u16("STOCK_HISTORY_PORT", 5000),
            database_url: env_str("DATABASE_URL", "stock_history.db"),
        }
    }
}

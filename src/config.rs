use std::env;

use crate::namespace::Namespace;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub namespace: Namespace,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://joalda.db?mode=rwc".to_string());
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let namespace = env::var("STORE_NAMESPACE").unwrap_or_else(|_| "joalda".to_string());
        let namespace = Namespace::parse(&namespace)?;
        Ok(Self {
            port,
            database_url,
            host,
            namespace,
        })
    }
}

use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Browser origin allowed by CORS. Any origin when unset.
    pub cors_allow_origin: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());
        Ok(Self {
            port,
            database_url,
            host,
            cors_allow_origin,
        })
    }
}

use serde::Deserialize;

/// Configuration options for the trivia service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Path or URL of the SQLite database.
    pub database_url: String,
    /// Socket address the HTTP server binds to.
    pub bind_address: String,
}

impl ServerConfig {
    /// Loads configuration from an optional `config.yaml` file and the
    /// process environment, with sensible defaults for local development.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database_url", "trivia.db")?
            .set_default("bind_address", "127.0.0.1:8080")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running next to the desktop shell
/// on the same machine.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `127.0.0.1`).
    pub host: String,
    /// Bind port (default: `4317`).
    pub port: u16,
    /// SQLite connection string.
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Model assigned to new prompts that do not name one. Ignored if the
    /// registry has no model with this id.
    pub default_model_id: Option<String>,
    /// Insert default models and tags into an empty database on startup.
    pub seed_defaults: bool,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                              |
    /// |------------------------|--------------------------------------|
    /// | `HOST`                 | `127.0.0.1`                          |
    /// | `PORT`                 | `4317`                               |
    /// | `DATABASE_URL`         | `sqlite://prompt-vault.db?mode=rwc`  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                 |
    /// | `DEFAULT_MODEL_ID`     | `gpt-4o` (empty disables)            |
    /// | `SEED_DEFAULTS`        | `true`                               |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "4317".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://prompt-vault.db?mode=rwc".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_model_id = Some(
            std::env::var("DEFAULT_MODEL_ID").unwrap_or_else(|_| "gpt-4o".into()),
        )
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

        let seed_defaults: bool = std::env::var("SEED_DEFAULTS")
            .unwrap_or_else(|_| "true".into())
            .parse()
            .expect("SEED_DEFAULTS must be true or false");

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            default_model_id,
            seed_defaults,
        }
    }
}

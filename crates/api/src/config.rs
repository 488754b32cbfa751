use axum::http::HeaderValue;

/// Which [`stresswatch_db::Store`] implementation backs the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// PostgreSQL through a sqlx connection pool.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local tables; everything is lost on shutdown.
    Memory,
}

impl StoreBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Memory => "memory",
        }
    }
}

/// Output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Invalid or missing configuration, reported once at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("DATABASE_URL must be set when STORE_BACKEND is 'postgres'")]
    MissingDatabaseUrl,
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development except
/// `DATABASE_URL`, which the Postgres backend requires.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<HeaderValue>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Persistence backend (default: Postgres).
    pub store_backend: StoreBackend,
    /// Log output format (default: pretty).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `5000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `postgres`                 |
    /// | `DATABASE_URL`         | (required for `postgres`)  |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `LOG_FORMAT`           | `pretty`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");
        let port = parse(&var("PORT", "5000"), "PORT", "a valid port number")?;

        let cors_origins = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|origin| {
                origin.parse::<HeaderValue>().map_err(|_| ConfigError::Invalid {
                    name: "CORS_ORIGINS",
                    expected: "a comma-separated list of origins",
                    value: origin.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let request_timeout_secs = parse(
            &var("REQUEST_TIMEOUT_SECS", "30"),
            "REQUEST_TIMEOUT_SECS",
            "a whole number of seconds",
        )?;

        let store_backend = match var("STORE_BACKEND", "postgres").as_str() {
            "postgres" => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::MissingDatabaseUrl)?,
                max_connections: parse(
                    &var("DB_MAX_CONNECTIONS", "20"),
                    "DB_MAX_CONNECTIONS",
                    "a positive integer",
                )?,
            },
            "memory" => StoreBackend::Memory,
            other => {
                return Err(ConfigError::Invalid {
                    name: "STORE_BACKEND",
                    expected: "'postgres' or 'memory'",
                    value: other.to_string(),
                })
            }
        };

        let log_format = match var("LOG_FORMAT", "pretty").as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(ConfigError::Invalid {
                    name: "LOG_FORMAT",
                    expected: "'pretty' or 'json'",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            log_format,
        })
    }
}

fn parse<T: std::str::FromStr>(
    value: &str,
    name: &'static str,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        name,
        expected,
        value: value.to_string(),
    })
}

use crate::auth::jwt::JwtConfig;

/// Which [`ucsb_db::Stores`] backend the server runs on.
#[derive(Clone)]
pub enum StoreBackend {
    /// PostgreSQL at `database_url`, with migrations applied at startup.
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    /// Process-local tables; everything is lost on shutdown.
    Memory,
}

impl StoreBackend {
    /// Resolve the backend from `STORE_BACKEND` and its companion settings.
    pub fn parse(
        kind: &str,
        database_url: Option<String>,
        max_connections: u32,
    ) -> Result<Self, String> {
        match kind.trim().to_ascii_lowercase().as_str() {
            "postgres" => {
                let database_url = database_url
                    .filter(|url| !url.is_empty())
                    .ok_or("DATABASE_URL must be set when STORE_BACKEND=postgres")?;
                Ok(StoreBackend::Postgres {
                    database_url,
                    max_connections,
                })
            }
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!(
                "STORE_BACKEND must be 'postgres' or 'memory', got '{other}'"
            )),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Postgres { .. } => "postgres",
            StoreBackend::Memory => "memory",
        }
    }
}

// Hand-written so the database URL (and its password) never reaches a log line.
impl std::fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Log output format for the `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret (and the database URL on the postgres
/// backend) have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub store_backend: StoreBackend,
    pub log_format: LogFormat,
    /// JWT validation settings.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `8080`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `STORE_BACKEND`            | `postgres`                 |
    /// | `DATABASE_URL`             | -- (required for postgres) |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`                       |
    /// | `LOG_FORMAT`               | `pretty`                   |
    ///
    /// # Panics
    ///
    /// Panics on malformed values; misconfiguration should stop startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:3000".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        let store_backend = StoreBackend::parse(
            &std::env::var("STORE_BACKEND").unwrap_or_else(|_| "postgres".into()),
            std::env::var("DATABASE_URL").ok(),
            max_connections,
        )
        .unwrap_or_else(|e| panic!("{e}"));

        let log_format = match std::env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            log_format,
            jwt,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn postgres_backend_requires_url() {
        assert!(StoreBackend::parse("postgres", None, 10).is_err());
        assert!(StoreBackend::parse("postgres", Some(String::new()), 10).is_err());
        assert_matches!(
            StoreBackend::parse("Postgres", Some("postgres://localhost/ucsb".into()), 5),
            Ok(StoreBackend::Postgres { max_connections: 5, .. })
        );
    }

    #[test]
    fn memory_backend_ignores_url() {
        assert_matches!(StoreBackend::parse("memory", None, 10), Ok(StoreBackend::Memory));
    }

    #[test]
    fn unknown_backend_is_rejected() {
        let err = StoreBackend::parse("h2", None, 10).unwrap_err();
        assert!(err.contains("'h2'"));
    }

    #[test]
    fn debug_output_hides_database_url() {
        let backend =
            StoreBackend::parse("postgres", Some("postgres://u:secret@db/ucsb".into()), 10)
                .unwrap();
        assert_eq!(format!("{backend:?}"), "postgres");
    }

    #[test]
    fn origins_are_trimmed_and_filtered() {
        assert_eq!(
            parse_origins(" http://a.test , ,http://b.test"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}

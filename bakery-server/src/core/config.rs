/// Outbound mail settings
///
/// Only built when server, username and password are all present.
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub username: String,
    pub password: String,
    /// Sender address, defaults to the SMTP username
    pub from: String,
}

impl MailConfig {
    /// Read SMTP settings, `None` when any credential is missing or blank
    pub fn from_env() -> Option<Self> {
        let non_blank = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());

        let smtp_server = non_blank("SMTP_SERVER")?;
        let username = non_blank("SMTP_USERNAME")?;
        let password = non_blank("SMTP_PASSWORD")?;
        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);
        let from = non_blank("MAIL_FROM").unwrap_or_else(|| username.clone());

        Some(Self {
            smtp_server,
            smtp_port,
            username,
            password,
            from,
        })
    }
}

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 8001 | HTTP listener port |
/// | API_PREFIX | /api | common route prefix |
/// | DATABASE_PATH | ./data/bakery.db | RocksDB directory, `memory` for in-memory |
/// | DB_NAMESPACE | bakery | SurrealDB namespace |
/// | DB_NAME | bakery | SurrealDB database |
/// | SMTP_SERVER / SMTP_PORT / SMTP_USERNAME / SMTP_PASSWORD | - / 587 / - / - | outbound mail |
/// | MAIL_FROM | SMTP_USERNAME | sender address |
/// | BUSINESS_NAME | Artisan Bakery & Café | shop name in greetings and emails |
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | default log level when RUST_LOG is unset |
/// | LOG_DIR | - | daily rolling log files go here when the directory exists |
/// | NOTIFY_QUEUE_SIZE | 256 | pending confirmation email capacity |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=memory HTTP_PORT=8080 cargo run -p bakery-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub api_prefix: String,
    pub database_path: String,
    pub db_namespace: String,
    pub db_name: String,
    /// `None` disables confirmation emails
    pub mail: Option<MailConfig>,
    pub business_name: String,
    /// development | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub notify_queue_size: usize,
}

/// `DATABASE_PATH` value selecting the in-memory engine
pub const MEMORY_DATABASE: &str = "memory";

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8001),
            api_prefix: std::env::var("API_PREFIX").unwrap_or_else(|_| "/api".into()),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./data/bakery.db".into()),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "bakery".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "bakery".into()),
            mail: MailConfig::from_env(),
            business_name: std::env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "Artisan Bakery & Café".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            notify_queue_size: std::env::var("NOTIFY_QUEUE_SIZE")
                .ok()
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(256),
        }
    }

    /// In-memory configuration with mail disabled
    ///
    /// Used by tests; does not read the environment.
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            api_prefix: "/api".into(),
            database_path: MEMORY_DATABASE.into(),
            db_namespace: "test".into(),
            db_name: "test".into(),
            mail: None,
            business_name: "Artisan Bakery & Café".into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            notify_queue_size: 16,
        }
    }

    /// Whether the in-memory SurrealDB engine is selected
    pub fn uses_memory_db(&self) -> bool {
        self.database_path == MEMORY_DATABASE
    }
}

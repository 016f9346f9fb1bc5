use std::{env, sync::Arc};

#[derive(Clone, Debug)]
/// Configuration struct for the server.
///
/// Holds the database connection details, bind address, worker count,
/// CORS origin, logging preferences and the session cookie settings
/// used by the dashboard API.
pub struct Config {
    // environment
    pub environment: String, // development or production
    /// The URL of the database to connect to.
    pub database_url: String,
    /// Upper bound on pooled database connections.
    pub db_max_connections: u32,
    /// The hostname or IP address the server will bind to.
    pub server_host: String,
    /// The port number the server will listen on.
    pub server_port: u16,
    /// The number of worker threads to spawn for handling requests.
    pub num_workers: usize,
    /// The allowed origin for CORS (Cross-Origin Resource Sharing).
    pub cors_allowed_origin: String,
    /// A boolean indicating whether console logging is enabled.
    pub console_logging_enabled: bool,
    /// File the logger mirrors its output to.
    pub log_file: String,
    /// Key material for signing session cookies. At least 64 bytes.
    pub session_secret: String,
    /// Where a successful sign-in redirects to.
    pub login_redirect_path: String,
    /// Where sign-out redirects to.
    pub logout_redirect_path: String,
}

impl Config {
    /// Creates a new `Config` instance from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Required:
    /// - `DATABASE_URL`: Connection string for the database
    /// - `SESSION_SECRET`: Session cookie signing key (64 bytes or more)
    ///
    /// Optional (with defaults):
    /// - `ENVIRONMENT`: "development" or "production" (default: "development")
    /// - `DB_MAX_CONNECTIONS`: Pool size (default: 10)
    /// - `IP`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `WORKERS`: Number of worker threads (default: 4)
    /// - `CORS_ALLOWED_ORIGIN`: Allowed CORS origin (default: "http://localhost:3000")
    /// - `ENABLE_CONSOLE_LOGGING`: Whether to enable console logging (default: true)
    /// - `LOG_FILE`: Log file path (default: "dashboard.log")
    /// - `LOGIN_REDIRECT_PATH`: default "/dashboard"
    /// - `LOGOUT_REDIRECT_PATH`: default "/login"
    ///
    /// # Panics
    ///
    /// This function will panic if required environment variables are missing
    /// or if the session secret is shorter than 64 bytes.
    pub fn from_env() -> Arc<Self> {
        dotenvy::dotenv().ok();

        let session_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set");
        assert!(
            session_secret.len() >= 64,
            "SESSION_SECRET must be at least 64 bytes long"
        );

        Arc::new(Config {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            server_host: env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            num_workers: env::var("WORKERS")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            console_logging_enabled: env::var("ENABLE_CONSOLE_LOGGING")
                .unwrap_or_else(|_| "true".to_string())
                .to_lowercase()
                == "true",
            log_file: env::var("LOG_FILE").unwrap_or_else(|_| "dashboard.log".to_string()),
            session_secret,
            login_redirect_path: env::var("LOGIN_REDIRECT_PATH")
                .unwrap_or_else(|_| "/dashboard".to_string()),
            logout_redirect_path: env::var("LOGOUT_REDIRECT_PATH")
                .unwrap_or_else(|_| "/login".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

//! Application configuration loaded from environment variables.

use domain::DEFAULT_CODE_ATTEMPTS;

/// Shell configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STOCK_DATABASE_URL` — SQLite database (default: `"sqlite://stock_management.db"`)
/// - `STOCK_CODE_ATTEMPTS` — order code attempts before giving up (default: `8`)
/// - `RUST_LOG` — tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub max_code_attempts: u32,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, falling back to defaults for
    /// missing or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            database_url: lookup("STOCK_DATABASE_URL").unwrap_or(defaults.database_url),
            max_code_attempts: lookup("STOCK_CODE_ATTEMPTS")
                .and_then(|v| v.parse().ok())
                .filter(|attempts| *attempts > 0)
                .unwrap_or(defaults.max_code_attempts),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://stock_management.db".to_string(),
            max_code_attempts: DEFAULT_CODE_ATTEMPTS,
            log_level: "info".to_string(),
        }
    }
}

//! Server configuration.
//!
//! # Responsibility
//! - Resolve bind address, database path, and logging settings from
//!   environment variables with sensible defaults.
//!
//! # Invariants
//! - Resolution itself never fails; invalid values surface later at the
//!   subsystem that consumes them (bind, open, logging init).

use std::path::PathBuf;
use tinynotes_core::default_log_level;

const ENV_ADDR: &str = "TINYNOTES_ADDR";
const ENV_DB: &str = "TINYNOTES_DB";
const ENV_LOG_DIR: &str = "TINYNOTES_LOG_DIR";
const ENV_LOG_LEVEL: &str = "TINYNOTES_LOG_LEVEL";

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_DB_FILE: &str = "tinynotes.db";

/// Resolved process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address the HTTP listener binds to.
    pub bind_addr: String,
    /// SQLite database file path.
    pub db_path: PathBuf,
    /// Absolute directory for rolling log files.
    pub log_dir: PathBuf,
    /// Log level passed to logging init.
    pub log_level: String,
}

impl ServerConfig {
    /// Resolves configuration from the process environment.
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok())
    }

    /// Resolves configuration from an arbitrary variable lookup.
    ///
    /// Split out so tests can exercise resolution without mutating the
    /// process environment.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_addr = lookup(ENV_ADDR)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let db_path = lookup(ENV_DB)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));
        let log_dir = lookup(ENV_LOG_DIR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("tinynotes").join("logs"));
        let log_level = lookup(ENV_LOG_LEVEL)
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default_log_level().to_string());

        Self {
            bind_addr,
            db_path,
            log_dir,
            log_level,
        }
    }
}

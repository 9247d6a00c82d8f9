//! CLI argument definitions using clap
//!
//! Every flag can also be set through the environment, so
//! `PORT=9000 bookshelf` works without arguments.

use bookshelf_api::HttpServerConfig;
use clap::Parser;
use std::path::PathBuf;

/// Sentinel database path selecting a throwaway in-memory store.
pub const IN_MEMORY_DATABASE: &str = ":memory:";

/// Bookshelf - CRUD HTTP service for the `book` table
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = bookshelf_api::config::DEFAULT_PORT)]
    pub port: u16,

    /// Public base URL used in resource `self` links
    #[arg(long, env = "BASE_URL", default_value = "http://localhost:8080")]
    pub base_url: String,

    /// SQLite database file, or `:memory:` for an in-memory store
    #[arg(long, env = "DATABASE_PATH", default_value = "bookshelf.sqlite3")]
    pub database: PathBuf,

    /// Number of pooled connections for file databases
    #[arg(long, env = "POOL_SIZE", default_value_t = 4)]
    pub pool_size: usize,

    /// Create the `book` table if it does not exist
    #[arg(long, env = "BOOTSTRAP_SCHEMA")]
    pub bootstrap_schema: bool,

    /// Log level: trace|debug|info|warn|error (defaults by build mode)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; stderr when unset
    #[arg(long, env = "LOG_DIR")]
    pub log_dir: Option<String>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.as_os_str() == IN_MEMORY_DATABASE
    }

    pub fn server_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
            base_url: self.base_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["bookshelf"]).unwrap();
        assert_eq!(args.database, PathBuf::from("bookshelf.sqlite3"));
        assert_eq!(args.pool_size, 4);
        assert!(!args.bootstrap_schema);
        assert!(!args.is_in_memory());
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "bookshelf",
            "--port",
            "9001",
            "--database",
            ":memory:",
            "--bootstrap-schema",
            "--base-url",
            "https://books.example",
        ])
        .unwrap();
        assert_eq!(args.port, 9001);
        assert!(args.is_in_memory());
        assert!(args.bootstrap_schema);

        let config = args.server_config();
        assert_eq!(config.port, 9001);
        assert_eq!(config.base_url, "https://books.example");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        assert!(Args::try_parse_from(["bookshelf", "--port", "not-a-port"]).is_err());
    }
}

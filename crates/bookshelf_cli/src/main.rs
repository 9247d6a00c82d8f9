//! `bookshelf` server entry point.
//!
//! # Responsibility
//! - Parse flags and environment into server and storage settings.
//! - Initialize logging, open the connection pool, and serve until Ctrl-C.
//! - Print startup failures to stderr and exit non-zero.

mod args;

use args::Args;
use bookshelf_api::HttpServer;
use bookshelf_core::db::bootstrap_schema;
use bookshelf_core::{
    default_log_level, init_logging, open_pool, open_pool_in_memory, DbError, DbPool,
    SqliteBookRepository,
};
use log::info;
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

#[derive(Debug)]
enum StartupError {
    Logging(String),
    Db(DbError),
    Io(std::io::Error),
}

impl Display for StartupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Db(err) => write!(f, "database setup failed: {err}"),
            Self::Io(err) => write!(f, "server failed: {err}"),
        }
    }
}

impl From<DbError> for StartupError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    match run(Args::parse_args()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), StartupError> {
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    init_logging(&level, args.log_dir.as_deref()).map_err(StartupError::Logging)?;

    let pool = open_store(&args)?;
    info!(
        "event=store_ready module=cli status=ok database={} pool_size={}",
        args.database.display(),
        pool.max_size()
    );

    let server = HttpServer::new(args.server_config(), SqliteBookRepository::new(pool));
    server.start().await?;
    Ok(())
}

fn open_store(args: &Args) -> Result<DbPool, DbError> {
    if args.is_in_memory() {
        return open_pool_in_memory();
    }

    let pool = open_pool(&args.database, args.pool_size)?;
    if args.bootstrap_schema {
        bootstrap_schema(&*pool.get()?)?;
    }
    Ok(pool)
}

//! SQLite storage bootstrap and connection pooling.
//!
//! # Responsibility
//! - Open and configure pooled SQLite connections for the book store.
//! - Create the `book` table on demand for fresh databases.
//!
//! # Invariants
//! - A pool always holds at least one connection.
//! - Every pooled connection has `busy_timeout` configured.

use r2d2_sqlite::SqliteConnectionManager;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::{open_pool, open_pool_in_memory};
pub use schema::{bootstrap_schema, BOOK_TABLE};

/// Shared, cloneable handle to the SQLite connection pool.
pub type DbPool = r2d2::Pool<SqliteConnectionManager>;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    Pool(r2d2::Error),
    InvalidPoolSize(usize),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Pool(err) => write!(f, "connection pool error: {err}"),
            Self::InvalidPoolSize(size) => {
                write!(f, "connection pool size must be between 1 and {}, got {size}", u32::MAX)
            }
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Pool(err) => Some(err),
            Self::InvalidPoolSize(_) => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<r2d2::Error> for DbError {
    fn from(value: r2d2::Error) -> Self {
        Self::Pool(value)
    }
}

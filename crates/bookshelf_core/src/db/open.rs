//! Pool bootstrap utilities for SQLite.
//!
//! # Responsibility
//! - Build file or in-memory connection pools.
//! - Configure every pooled connection the same way.
//!
//! # Invariants
//! - Pooled connections have `busy_timeout` set.
//! - In-memory pools hold exactly one connection that is never recycled,
//!   with the schema applied.

use super::schema::BOOK_SCHEMA_SQL;
use super::{DbError, DbPool, DbResult};
use log::{error, info};
use r2d2_sqlite::SqliteConnectionManager;
use std::path::Path;
use std::time::{Duration, Instant};

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

/// Opens a pool of `size` connections to a SQLite database file.
///
/// The `book` table is expected to exist already; call
/// [`super::bootstrap_schema`] on a checked-out connection for a fresh file.
///
/// # Side effects
/// - Creates the database file when it does not exist.
/// - Emits `db_open` logging events with duration and status.
pub fn open_pool(path: impl AsRef<Path>, size: usize) -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=file pool_size={size}");

    let max_size = match u32::try_from(size) {
        Ok(max_size) if max_size > 0 => max_size,
        _ => {
            error!(
                "event=db_open module=db status=error mode=file error_code=invalid_pool_size pool_size={size}"
            );
            return Err(DbError::InvalidPoolSize(size));
        }
    };

    let manager = SqliteConnectionManager::file(path.as_ref())
        .with_init(|conn| conn.busy_timeout(BUSY_TIMEOUT));
    let built = r2d2::Pool::builder()
        .max_size(max_size)
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager);

    finish_open("file", started_at, built)
}

/// Opens a single-connection in-memory pool with the `book` table created.
///
/// # Side effects
/// - Emits `db_open` logging events with duration and status.
pub fn open_pool_in_memory() -> DbResult<DbPool> {
    let started_at = Instant::now();
    info!("event=db_open module=db status=start mode=memory");

    let manager = SqliteConnectionManager::memory().with_init(|conn| {
        conn.busy_timeout(BUSY_TIMEOUT)?;
        conn.execute_batch(BOOK_SCHEMA_SQL)
    });
    // Each in-memory connection is its own database; recycling it drops data.
    let built = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_timeout(CHECKOUT_TIMEOUT)
        .build(manager);

    finish_open("memory", started_at, built)
}

fn finish_open(
    mode: &str,
    started_at: Instant,
    built: Result<DbPool, r2d2::Error>,
) -> DbResult<DbPool> {
    match built {
        Ok(pool) => {
            info!(
                "event=db_open module=db status=ok mode={mode} pool_size={} duration_ms={}",
                pool.max_size(),
                started_at.elapsed().as_millis()
            );
            Ok(pool)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={mode} duration_ms={} error_code=db_open_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

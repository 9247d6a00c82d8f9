//! `book` table definition.
//!
//! This is a create-if-missing bootstrap for fresh or in-memory databases,
//! not a versioned migration path. Production databases are expected to be
//! provisioned ahead of time.

use super::DbResult;
use log::info;
use rusqlite::Connection;

/// Name of the single table owned by this service.
pub const BOOK_TABLE: &str = "book";

pub(super) const BOOK_SCHEMA_SQL: &str = include_str!("schema.sql");

/// Creates the `book` table when it does not exist yet.
pub fn bootstrap_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(BOOK_SCHEMA_SQL)?;
    info!("event=schema_bootstrap module=db status=ok table={BOOK_TABLE}");
    Ok(())
}

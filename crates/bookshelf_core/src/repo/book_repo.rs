//! Book repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `book` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Each operation executes exactly one SQL statement on one pooled connection.
//! - Request values reach SQLite only as bound parameters.
//! - Read paths reject rows that cannot be mapped instead of masking them.

use crate::db::{DbError, DbPool};
use crate::model::book::{Book, BookAttributes, BookId};
use rusqlite::{params, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const BOOK_SELECT_SQL: &str = "SELECT
    id,
    isbn,
    judul,
    pengarang
FROM book";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for book persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted book data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<r2d2::Error> for RepoError {
    fn from(value: r2d2::Error) -> Self {
        Self::Db(DbError::Pool(value))
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for book CRUD operations.
///
/// Mutating operations report affected row counts; deciding what a zero
/// count means is left to callers.
pub trait BookRepository: Send + Sync {
    fn list_books(&self) -> RepoResult<Vec<Book>>;
    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>>;
    fn create_book(&self, attributes: &BookAttributes) -> RepoResult<BookId>;
    fn update_book(&self, id: BookId, attributes: &BookAttributes) -> RepoResult<usize>;
    fn delete_book(&self, id: BookId) -> RepoResult<usize>;
}

/// SQLite-backed book repository.
#[derive(Clone)]
pub struct SqliteBookRepository {
    pool: DbPool,
}

impl SqliteBookRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl BookRepository for SqliteBookRepository {
    /// Rows come back in whatever order SQLite yields them.
    fn list_books(&self) -> RepoResult<Vec<Book>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut books = Vec::new();

        while let Some(row) = rows.next()? {
            books.push(parse_book_row(row)?);
        }

        Ok(books)
    }

    fn get_book(&self, id: BookId) -> RepoResult<Option<Book>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(&format!("{BOOK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id.get()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_book_row(row)?));
        }

        Ok(None)
    }

    fn create_book(&self, attributes: &BookAttributes) -> RepoResult<BookId> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO book (isbn, judul, pengarang) VALUES (?1, ?2, ?3);",
            params![
                attributes.isbn.as_str(),
                attributes.title.as_str(),
                attributes.author.as_str(),
            ],
        )?;

        Ok(BookId::new(conn.last_insert_rowid()))
    }

    fn update_book(&self, id: BookId, attributes: &BookAttributes) -> RepoResult<usize> {
        let conn = self.pool.get()?;
        let changed = conn.execute(
            "UPDATE book
             SET
                isbn = ?1,
                judul = ?2,
                pengarang = ?3
             WHERE id = ?4;",
            params![
                attributes.isbn.as_str(),
                attributes.title.as_str(),
                attributes.author.as_str(),
                id.get(),
            ],
        )?;

        Ok(changed)
    }

    fn delete_book(&self, id: BookId) -> RepoResult<usize> {
        let conn = self.pool.get()?;
        let changed = conn.execute("DELETE FROM book WHERE id = ?1;", params![id.get()])?;
        Ok(changed)
    }
}

fn parse_book_row(row: &Row<'_>) -> RepoResult<Book> {
    Ok(Book {
        id: BookId::new(row.get("id")?),
        isbn: required_text(row, "isbn")?,
        title: required_text(row, "judul")?,
        author: required_text(row, "pengarang")?,
    })
}

fn required_text(row: &Row<'_>, column: &str) -> RepoResult<String> {
    row.get::<_, Option<String>>(column)?
        .ok_or_else(|| RepoError::InvalidData(format!("NULL value in book.{column}")))
}

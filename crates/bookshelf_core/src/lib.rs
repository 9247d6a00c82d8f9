//! Core domain logic for the Bookshelf service.
//! This crate owns the book model, storage access and use-case rules.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_pool, open_pool_in_memory, DbError, DbPool, DbResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::book::{Book, BookAttributes, BookId, BookIdParseError};
pub use repo::book_repo::{BookRepository, RepoError, RepoResult, SqliteBookRepository};
pub use service::book_service::{BookService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}

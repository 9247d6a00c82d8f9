//! Book use-case service.
//!
//! # Responsibility
//! - Provide the five CRUD entry points used by the HTTP layer.
//! - Decide what a missing row means for each use case.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - `get_book` and `delete_book` report a missing row as `NotFound`.
//! - `update_book` does not check existence and echoes the submitted data.

use crate::model::book::{Book, BookAttributes, BookId};
use crate::repo::book_repo::{BookRepository, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Use-case level error for book operations.
#[derive(Debug)]
pub enum ServiceError {
    NotFound(BookId),
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "book not found: {id}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service wrapper for book CRUD operations.
pub struct BookService<R: BookRepository> {
    repo: R,
}

impl<R: BookRepository> BookService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists every stored book in store order.
    pub fn list_books(&self) -> ServiceResult<Vec<Book>> {
        let books = self.repo.list_books()?;
        debug!(
            "event=book_list module=service status=ok total={}",
            books.len()
        );
        Ok(books)
    }

    /// Gets one book by id.
    ///
    /// Returns `ServiceError::NotFound` when no row has this id.
    pub fn get_book(&self, id: BookId) -> ServiceResult<Book> {
        self.repo.get_book(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Inserts a book and returns it with the store-assigned id.
    pub fn create_book(&self, attributes: BookAttributes) -> ServiceResult<Book> {
        let id = self.repo.create_book(&attributes)?;
        info!("event=book_create module=service status=ok id={id}");
        Ok(Book::from_attributes(id, attributes))
    }

    /// Overwrites all attributes of the row with `id`.
    ///
    /// # Contract
    /// - No existence check: a missing id is a silent no-op.
    /// - The returned book is built from `id` and `attributes`, not re-read.
    pub fn update_book(&self, id: BookId, attributes: BookAttributes) -> ServiceResult<Book> {
        let changed = self.repo.update_book(id, &attributes)?;
        if changed == 0 {
            debug!("event=book_update module=service status=noop id={id} rows_affected=0");
        } else {
            info!("event=book_update module=service status=ok id={id} rows_affected={changed}");
        }
        Ok(Book::from_attributes(id, attributes))
    }

    /// Hard-deletes a book by id.
    ///
    /// Returns `ServiceError::NotFound` when no row was deleted.
    pub fn delete_book(&self, id: BookId) -> ServiceResult<()> {
        let changed = self.repo.delete_book(id)?;
        if changed == 0 {
            debug!("event=book_delete module=service status=not_found id={id}");
            return Err(ServiceError::NotFound(id));
        }
        info!("event=book_delete module=service status=ok id={id}");
        Ok(())
    }
}

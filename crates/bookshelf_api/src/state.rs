//! Shared handler state.
//!
//! Built once at startup and cloned into every request; the repository is
//! injected here so tests can substitute their own implementation.

use std::sync::Arc;

use bookshelf_core::{BookRepository, BookService, ServiceResult};
use log::error;

use crate::document::ResourceCodec;
use crate::errors::{ApiError, ApiResult};

pub struct AppState<R: BookRepository> {
    pub service: Arc<BookService<R>>,
    pub codec: Arc<ResourceCodec>,
}

impl<R: BookRepository> AppState<R> {
    pub fn new(repo: R, codec: ResourceCodec) -> Self {
        Self {
            service: Arc::new(BookService::new(repo)),
            codec: Arc::new(codec),
        }
    }
}

impl<R: BookRepository + 'static> AppState<R> {
    /// Runs a service call on the blocking thread pool.
    ///
    /// SQLite calls block, so they never run on an executor thread.
    pub async fn run_blocking<T, F>(&self, op: F) -> ApiResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&BookService<R>) -> ServiceResult<T> + Send + 'static,
    {
        let service = Arc::clone(&self.service);
        let outcome = tokio::task::spawn_blocking(move || op(&service))
            .await
            .map_err(|err| {
                error!("event=blocking_task module=http status=error error={err}");
                ApiError::Internal
            })?;
        outcome.map_err(ApiError::from)
    }
}

impl<R: BookRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            codec: Arc::clone(&self.codec),
        }
    }
}

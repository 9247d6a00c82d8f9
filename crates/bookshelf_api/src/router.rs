//! Route table and request logging.

use std::time::Instant;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};
use bookshelf_core::BookRepository;
use log::info;

use crate::handlers::{create_book, delete_book, get_book, health, list_books, update_book};
use crate::state::AppState;

/// Create the book routes plus `/health`.
///
/// Unknown paths fall through to axum's 404; known paths with an unrouted
/// method get its 405.
pub fn book_routes<R: BookRepository + 'static>(state: AppState<R>) -> Router {
    Router::new()
        .route("/api/book", get(list_books::<R>).post(create_book::<R>))
        .route(
            "/api/book/:id",
            get(get_book::<R>)
                .put(update_book::<R>)
                .delete(delete_book::<R>),
        )
        .route("/health", get(health))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

async fn log_request(request: Request, next: Next) -> Response {
    let started_at = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    info!(
        "event=http_request module=http method={} path={} status={} duration_ms={}",
        method,
        path,
        response.status().as_u16(),
        started_at.elapsed().as_millis()
    );
    response
}

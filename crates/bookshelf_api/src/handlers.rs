//! Book HTTP handlers.
//!
//! One handler per route. Each borrows one pooled connection, runs one
//! statement through the service and renders one document.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bookshelf_core::{BookId, BookRepository};
use log::debug;
use serde::Serialize;

use crate::document::MEDIA_TYPE;
use crate::errors::{ApiError, ApiResult};
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/book
pub async fn list_books<R: BookRepository + 'static>(
    State(state): State<AppState<R>>,
) -> ApiResult<Response> {
    let books = state.run_blocking(|service| service.list_books()).await?;
    Ok(document_response(StatusCode::OK, state.codec.list(&books)))
}

/// GET /api/book/:id
pub async fn get_book<R: BookRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_book_id(&raw_id)?;
    let book = state
        .run_blocking(move |service| service.get_book(id))
        .await?;
    Ok(document_response(StatusCode::OK, state.codec.single(&book)))
}

/// POST /api/book
pub async fn create_book<R: BookRepository + 'static>(
    State(state): State<AppState<R>>,
    body: Bytes,
) -> ApiResult<Response> {
    let attributes = state.codec.decode_attributes(&body)?;
    let book = state
        .run_blocking(move |service| service.create_book(attributes))
        .await?;
    Ok(document_response(StatusCode::CREATED, state.codec.single(&book)))
}

/// PUT /api/book/:id
///
/// Echoes the path id as sent and the submitted attributes. A missing row is
/// not an error, and an id that cannot match any row skips the store entirely.
pub async fn update_book<R: BookRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> ApiResult<Response> {
    let attributes = state.codec.decode_attributes(&body)?;
    let document = state.codec.echo(&raw_id, attributes.clone());

    match raw_id.parse::<BookId>() {
        Ok(id) => {
            state
                .run_blocking(move |service| service.update_book(id, attributes))
                .await?;
        }
        Err(_) => {
            debug!("event=book_update module=api status=noop reason=non_numeric_id id={raw_id}");
        }
    }

    Ok(document_response(StatusCode::OK, document))
}

/// DELETE /api/book/:id
pub async fn delete_book<R: BookRepository + 'static>(
    State(state): State<AppState<R>>,
    Path(raw_id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_book_id(&raw_id)?;
    state
        .run_blocking(move |service| service.delete_book(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// A non-numeric id can never match a row.
fn parse_book_id(raw_id: &str) -> ApiResult<BookId> {
    raw_id
        .parse::<BookId>()
        .map_err(|_| ApiError::NotFound(raw_id.to_string()))
}

fn document_response<T: Serialize>(status: StatusCode, document: T) -> Response {
    (status, [(header::CONTENT_TYPE, MEDIA_TYPE)], Json(document)).into_response()
}

#[cfg(test)]
mod tests {
    use super::parse_book_id;
    use crate::errors::ApiError;
    use bookshelf_core::BookId;

    #[test]
    fn parse_book_id_accepts_integers() {
        assert_eq!(parse_book_id("17").unwrap(), BookId::new(17));
    }

    #[test]
    fn parse_book_id_maps_garbage_to_not_found() {
        assert_eq!(
            parse_book_id("1 OR 1=1").unwrap_err(),
            ApiError::NotFound("1 OR 1=1".to_string())
        );
    }
}

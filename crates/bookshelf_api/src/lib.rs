//! HTTP surface for the Bookshelf service.
//!
//! # Responsibility
//! - Map `/api/book` routes onto `BookService` use cases.
//! - Encode and decode JSON:API style resource documents.
//! - Render every failure as an error document instead of crashing.

pub mod config;
pub mod document;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::HttpServerConfig;
pub use document::{DecodeError, ResourceCodec, MEDIA_TYPE, RESOURCE_TYPE};
pub use errors::ApiError;
pub use router::book_routes;
pub use server::HttpServer;
pub use state::AppState;

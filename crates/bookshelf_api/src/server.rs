//! # HTTP Server
//!
//! Binds the configured address and serves the book router until Ctrl-C.

use axum::Router;
use bookshelf_core::BookRepository;
use log::{info, warn};
use tokio::net::TcpListener;

use crate::config::HttpServerConfig;
use crate::document::ResourceCodec;
use crate::router::book_routes;
use crate::state::AppState;

/// HTTP server for the book API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server around an injected repository
    pub fn new<R: BookRepository + 'static>(config: HttpServerConfig, repo: R) -> Self {
        let state = AppState::new(repo, ResourceCodec::new(config.base_url.clone()));
        let router = book_routes(state);
        Self { config, router }
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Consume the server and hand back its router without binding
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server and run until a shutdown signal arrives
    pub async fn start(self) -> Result<(), std::io::Error> {
        let listener = TcpListener::bind((self.config.host.as_str(), self.config.port)).await?;
        let local_addr = listener.local_addr()?;

        info!(
            "event=server_start module=http status=ok addr={} base_url={}",
            local_addr, self.config.base_url
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("event=server_stop module=http status=ok");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("event=shutdown_signal module=http status=error error={err}");
        // Without a signal handler, keep serving until the process is killed.
        std::future::pending::<()>().await;
    }
}

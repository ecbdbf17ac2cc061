mod classify;
mod extract;
mod failure;
mod fallback;
mod health;
mod panic;
mod request_context;
mod responder;
mod secured_area;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use faultline_config::Config;
use faultline_responder::ErrorResponder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use classify::classify;
pub use extract::Checked;
pub use failure::{Failure, descriptor_response};
pub use panic::Panicked;
pub use responder::UnmarkedResponse;

/// Assembled server with application routes and the error-handling stack
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server around `routes`, logging errors through `tracing`
    pub fn new(config: &Config, routes: Router) -> Self {
        Self::with_responder(config, routes, ErrorResponder::default())
    }

    /// Build the server around `routes` with an explicit responder
    ///
    /// Unmatched routes, secured-area rejections, handler failures, handler
    /// panics and error responses built without a [`Failure`] (such as
    /// axum's own extractor rejections) are all answered by `responder`.
    pub fn with_responder(config: &Config, routes: Router, responder: ErrorResponder) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));

        let mut app = routes;

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Unmatched routes
        app = app.fallback(fallback::route_not_found);

        // Apply middleware layers (innermost first)

        // Secured area (innermost, so its rejections reach the responder)
        if let Some(area) = config.server.secured_area.as_ref().filter(|area| area.enabled) {
            let area = Arc::new(area.clone());
            app = app.layer(axum::middleware::from_fn(move |req, next| {
                let area = Arc::clone(&area);
                async move { secured_area::secured_area_middleware(area, req, next).await }
            }));
        }

        // Panics in handlers and the gate above become unhandled failures
        app = app.layer(CatchPanicLayer::custom(panic::panic_response));

        // Error responder
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let responder = responder.clone();
            async move { responder::error_responder_middleware(responder, req, next).await }
        }));

        // Request context (outside the responder so every failure can be enriched)
        app = app.layer(axum::middleware::from_fn(request_context::request_context_middleware));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the listen address (e.g. from the command line)
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/*
   Module `inbound` exposes the dungeon domain over HTTP.
*/

use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use axum::routing::{get, post};
use tokio::net;

use crate::domain::ports::DungeonService;

mod api;
mod handlers;

/// The application state shared between all request handlers.
#[derive(Debug, Clone)]
struct AppState<DS: DungeonService> {
    dungeon_service: Arc<DS>,
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct HttpServerConfig<'a> {
    /// The port the server should bind to.
    pub port: &'a str,
}

/// The application's HTTP server. The underlying HTTP package is opaque to module consumers.
pub struct HttpServer {
    router: Router,
    listener: net::TcpListener,
}

impl HttpServer {
    /// Returns a new HTTP server bound to the port specified in `config`.
    pub async fn new(
        dungeon_service: impl DungeonService,
        config: HttpServerConfig<'_>,
    ) -> anyhow::Result<Self> {
        let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
            |request: &axum::extract::Request<_>| {
                let uri = request.uri().to_string();
                tracing::info_span!("http_request", method = ?request.method(), uri)
            },
        );

        let state = AppState {
            dungeon_service: Arc::new(dungeon_service),
        };

        let router = Router::new()
            .route("/generate-dungeon", post(handlers::generate_dungeon_handler))
            .route("/save-dungeon", post(handlers::save_dungeon_handler))
            .route("/load-dungeon/{stage}", get(handlers::load_dungeon_handler))
            .layer(trace_layer)
            .with_state(state);

        let listener = net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
            .await
            .with_context(|| format!("failed to listen on {}", config.port))?;

        Ok(Self { router, listener })
    }

    /// Runs the HTTP server.
    pub async fn run(self) -> anyhow::Result<()> {
        tracing::debug!(
            "listening on {}",
            self.listener
                .local_addr()
                .context("failed to read the bound address")?
        );
        axum::serve(self.listener, self.router)
            .await
            .context("received error from running server")?;

        Ok(())
    }
}

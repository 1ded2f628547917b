//! HTTP front for the compiled web bundle.
//!
//! Every path that is not a file in the assets directory falls back to
//! `index.html`, so client-side routes like `/register` survive a reload.

use crate::portal::handlers::health;
use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{HeaderName, HeaderValue, Request},
    routing::get,
};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::PropagateRequestIdLayer,
    services::{ServeDir, ServeFile},
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{Span, debug_span, error, info};
use ulid::Ulid;

pub mod handlers;

pub const INDEX_FILE: &str = "index.html";

const REQUEST_ID: &str = "x-request-id";

/// Build the portal router serving `assets_dir`.
#[must_use]
pub fn router(assets_dir: &Path) -> Router {
    let bundle =
        ServeDir::new(assets_dir).fallback(ServeFile::new(assets_dir.join(INDEX_FILE)));

    Router::new()
        .route("/health", get(health::health).options(health::health))
        .fallback_service(bundle)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(REQUEST_ID),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span)),
        )
}

/// Serve the portal until ctrl-c.
/// # Errors
/// Returns an error if the listener cannot be bound or the server fails
pub async fn new(port: u16, assets_dir: PathBuf) -> Result<()> {
    let app = router(&assets_dir);

    let listener = TcpListener::bind(format!("::0:{port}")).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {}", err);
        std::future::pending::<()>().await;
    }
    info!("Gracefully shutdown");
}

fn make_span(request: &Request<Body>) -> Span {
    let headers = request.headers();
    let path = request.uri().path();
    let request_id = headers
        .get(REQUEST_ID)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");

    debug_span!("http-request", path, ?headers, request_id)
}

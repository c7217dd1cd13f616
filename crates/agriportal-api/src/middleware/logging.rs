//! Structured request logging.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{info, warn};

/// Emit one structured line per completed request.
///
/// Server errors log at warn so they survive filters that drop the
/// info-level request log.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        warn!(%method, path, status, elapsed_ms, "HTTP request failed");
    } else {
        info!(%method, path, status, elapsed_ms, "HTTP request");
    }

    response
}

//! services/api/src/web/middleware.rs
//!
//! Request tracing middleware.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

/// Wraps every request in a tracing span and logs the response status and latency.
///
/// 5xx responses are logged at `warn`, everything else at `info`.
pub async fn trace_requests(req: Request, next: Next) -> Response {
    let span = info_span!(
        "request",
        request.id = %Uuid::new_v4(),
        request.method = %req.method(),
        request.uri = %req.uri(),
    );

    async move {
        let started = Instant::now();
        let response = next.run(req).await;
        let latency = started.elapsed();
        let status = response.status();

        if status.is_server_error() {
            warn!(%status, ?latency, "request failed");
        } else {
            info!(%status, ?latency, "request finished");
        }
        response
    }
    .instrument(span)
    .await
}

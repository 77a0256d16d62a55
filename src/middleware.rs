//! Per-request tracing span.
//!
//! Every request, including ones that hit the 404 fallback or a 405, runs
//! inside a `request` span tagged with a fresh UUID v4, the method and the path.
//! Orchestrators poll `/_health` every few seconds, so the completion event is
//! emitted at `debug`: the default filter stays quiet under steady probing and
//! `--log-level healthcheck_server=debug` brings the per-request lines back.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

/// Wraps request handling in a `request` span and logs the outcome.
///
/// Installed as the outermost layer so the fallback routes are covered too.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
        duration_ms = tracing::field::Empty,
    );

    let start = Instant::now();
    async move {
        let response = next.run(request).await;
        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        tracing::Span::current().record("duration_ms", duration_ms);
        tracing::debug!(status = response.status().as_u16(), "Request completed");

        response
    }
    .instrument(span)
    .await
}

//! Request-scoped logging context.
//!
//! Every request runs inside an `http_request` span. Write handlers add a
//! nested `recipe` span carrying the name of the recipe being written, so
//! each line they log is tagged with `recipe_name`. The span is bound to the
//! handler future: concurrent requests never see each other's value and the
//! tag is gone as soon as the future completes.

use axum::body::Body;
use axum::extract::MatchedPath;
use axum::http::{Request, Response};
use std::future::Future;
use std::time::Duration;
use tracing::{Instrument, Span};

/// Run `fut` with `recipe_name` attached to its logging context.
///
/// The tag is released when `fut` completes, whatever it returns.
pub async fn with_recipe_name<F>(recipe_name: impl Into<String>, fut: F) -> F::Output
where
    F: Future,
{
    let recipe_name = recipe_name.into();
    fut.instrument(tracing::info_span!("recipe", recipe_name = %recipe_name))
        .await
}

/// Span for one inbound request, keyed by route template rather than raw path
/// so `/api/recipes/1` and `/api/recipes/2` group together.
pub(crate) fn http_span(request: &Request<Body>) -> Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or_else(|| request.uri().path());

    tracing::info_span!("http_request", method = %request.method(), route = %route)
}

pub(crate) fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status();
    let latency_ms = latency.as_millis();

    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            latency_ms,
            "request failed with server error"
        );
    } else {
        tracing::info!(status = status.as_u16(), latency_ms, "request completed");
    }
}

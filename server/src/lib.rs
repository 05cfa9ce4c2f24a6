pub mod api;
pub mod config;
pub mod telemetry;

use axum::Router;
use recipeshare_core::RecipeStore;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared across all handlers
pub type AppState = Arc<dyn RecipeStore>;

/// Build the full application: recipe routes, API docs and request tracing.
pub fn app(store: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .nest("/api/recipes", api::recipes::router())
        .merge(swagger_ui)
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(telemetry::http_span)
                .on_request(())
                .on_response(telemetry::log_response),
        )
}

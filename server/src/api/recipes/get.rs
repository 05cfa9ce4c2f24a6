use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recipeshare_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = Recipe),
        (status = 404, description = "Recipe not found"),
        (status = 500, description = "Recipe could not be loaded")
    )
)]
pub async fn get_recipe(State(store): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    tracing::info!("Received request: GET /api/recipes/{}", id);

    match store.get_by_id(id) {
        Ok(Some(recipe)) => {
            tracing::info!("Successfully found recipe with id={}", id);
            (StatusCode::OK, Json(recipe)).into_response()
        }
        Ok(None) => {
            tracing::warn!("Recipe not found with id={}", id);
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            tracing::error!(
                error = ?e,
                "Error occurred while retrieving recipe with id={}: {}",
                id,
                e
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

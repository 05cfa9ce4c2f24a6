use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use recipeshare_core::Recipe;

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    responses(
        (status = 200, description = "All recipes, ordered by id", body = Vec<Recipe>),
        (status = 500, description = "Recipes could not be loaded")
    )
)]
pub async fn list_recipes(State(store): State<AppState>) -> impl IntoResponse {
    tracing::info!("Received request: GET /api/recipes");

    match store.get_all() {
        Ok(recipes) => {
            tracing::info!("Successfully retrieved {} recipes", recipes.len());
            (StatusCode::OK, Json(recipes)).into_response()
        }
        Err(e) => {
            tracing::error!(error = ?e, "Error occurred while retrieving all recipes: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

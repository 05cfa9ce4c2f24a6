use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    responses(
        (status = 204, description = "Recipe deleted"),
        (status = 404, description = "Recipe not found"),
        (status = 500, description = "Recipe could not be deleted")
    )
)]
pub async fn delete_recipe(
    State(store): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    tracing::info!("Received request: DELETE /api/recipes/{}", id);

    match store.delete(id) {
        Ok(true) => {
            tracing::info!("Successfully deleted recipe with id={}", id);
            StatusCode::NO_CONTENT
        }
        Ok(false) => {
            tracing::warn!("Attempted to delete non-existing recipe with id={}", id);
            StatusCode::NOT_FOUND
        }
        Err(e) => {
            tracing::error!(
                error = ?e,
                "Error occurred while deleting recipe with id={}: {}",
                id,
                e
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

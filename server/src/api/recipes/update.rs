use crate::telemetry::with_recipe_name;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use recipeshare_core::{Recipe, RecipeBuilder, RecipeError, RecipeRequest};

/// Full replacement: optional fields missing from the body are cleared.
#[utoipa::path(
    put,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = i64, Path, description = "Recipe ID")
    ),
    request_body = RecipeRequest,
    responses(
        (status = 200, description = "Recipe updated", body = Recipe),
        (status = 404, description = "Recipe not found"),
        (status = 500, description = "Recipe could not be built or stored")
    )
)]
pub async fn update_recipe(
    State(store): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<RecipeRequest>,
) -> impl IntoResponse {
    let recipe_name = request.title.clone().unwrap_or_default();

    with_recipe_name(recipe_name, async move {
        tracing::info!("Received request: PUT /api/recipes/{}", id);
        tracing::debug!(
            "update_recipe request body summary: name={:?}, type={:?}",
            request.title,
            request.recipe_type
        );

        let result: Result<Option<Recipe>, RecipeError> =
            RecipeBuilder::from_request(&request).and_then(|draft| store.update(id, draft));

        match result {
            Ok(Some(recipe)) => {
                tracing::info!("Successfully updated recipe with id={}", id);
                (StatusCode::OK, Json(recipe)).into_response()
            }
            Ok(None) => {
                tracing::warn!("Cannot update; recipe not found with id={}", id);
                StatusCode::NOT_FOUND.into_response()
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    "Error occurred while updating recipe with id={}: {}",
                    id,
                    e
                );
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    })
    .await
}

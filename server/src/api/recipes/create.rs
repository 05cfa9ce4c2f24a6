use crate::telemetry::with_recipe_name;
use crate::AppState;
use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use recipeshare_core::{Recipe, RecipeBuilder, RecipeError, RecipeRequest};

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = RecipeRequest,
    responses(
        (status = 201, description = "Recipe created", body = Recipe,
            headers(("Location" = String, description = "URL of the new recipe"))),
        (status = 500, description = "Recipe could not be built or stored")
    )
)]
pub async fn create_recipe(
    State(store): State<AppState>,
    OriginalUri(uri): OriginalUri,
    Json(request): Json<RecipeRequest>,
) -> impl IntoResponse {
    let recipe_name = request.title.clone().unwrap_or_default();

    with_recipe_name(recipe_name, async move {
        tracing::info!("Received request: POST /api/recipes");
        tracing::debug!(
            "create_recipe request body summary: name={:?}, type={:?}",
            request.title,
            request.recipe_type
        );

        let result: Result<Recipe, RecipeError> =
            RecipeBuilder::from_request(&request).and_then(|draft| store.add(draft));

        match result {
            Ok(saved) => {
                let location = format!("{}/{}", uri.path().trim_end_matches('/'), saved.id);
                tracing::info!("Successfully created recipe with id={}", saved.id);
                (
                    StatusCode::CREATED,
                    [(header::LOCATION, location)],
                    Json(saved),
                )
                    .into_response()
            }
            Err(e) => {
                tracing::error!(error = ?e, "Error occurred while adding recipe: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    })
    .await
}

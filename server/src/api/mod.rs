pub mod recipes;

use utoipa::OpenApi;

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(info(
        title = "recipeshare",
        description = "CRUD API for recipes"
    ))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    let modules: Vec<utoipa::openapi::OpenApi> = vec![recipes::ApiDoc::openapi()];

    for module_spec in modules {
        spec.merge(module_spec);
    }

    spec
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_recipe_routes() {
        let spec = openapi();
        let paths = &spec.paths.paths;
        assert!(paths.contains_key("/api/recipes"));
        assert!(paths.contains_key("/api/recipes/{id}"));

        let schemas = &spec.components.as_ref().unwrap().schemas;
        assert!(schemas.contains_key("Recipe"));
        assert!(schemas.contains_key("RecipeRequest"));
    }
}

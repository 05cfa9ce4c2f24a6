use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeError {
    #[error("Invalid recipe: {0}")]
    Validation(String),

    #[error("Recipe storage failed: {0}")]
    Storage(String),
}

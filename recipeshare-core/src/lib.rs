pub mod builder;
pub mod error;
pub mod store;
pub mod types;

pub use builder::RecipeBuilder;
pub use error::RecipeError;
pub use store::{InMemoryRecipeStore, RecipeStore};
pub use types::{Recipe, RecipeDraft, RecipePatch, RecipeRequest, RecipeType};

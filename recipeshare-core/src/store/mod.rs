//! Persistence seam for recipes.
//!
//! The HTTP layer only talks to `RecipeStore`; swapping the backend means
//! providing another implementation of the trait.

mod memory;

pub use memory::InMemoryRecipeStore;

use crate::error::RecipeError;
use crate::types::{Recipe, RecipeDraft, RecipePatch};
use std::fmt;

/// Owner of persisted recipe state.
///
/// Absence is reported through `Ok(None)` / `Ok(false)`; `Err` is reserved
/// for genuine failures.
pub trait RecipeStore: Send + Sync + fmt::Debug {
    /// Persist a new recipe and assign its id.
    fn add(&self, draft: RecipeDraft) -> Result<Recipe, RecipeError>;

    /// Every stored recipe, ordered by id.
    fn get_all(&self) -> Result<Vec<Recipe>, RecipeError>;

    fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, RecipeError>;

    /// Returns `true` if a recipe was removed.
    fn delete(&self, id: i64) -> Result<bool, RecipeError>;

    /// Replace everything but the id. Optional fields missing from the draft
    /// are cleared and a missing type becomes the default type.
    fn update(&self, id: i64, draft: RecipeDraft) -> Result<Option<Recipe>, RecipeError>;

    /// Overwrite only the fields the patch carries.
    fn patch(&self, id: i64, patch: RecipePatch) -> Result<Option<Recipe>, RecipeError>;
}

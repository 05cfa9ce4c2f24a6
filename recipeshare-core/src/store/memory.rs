use super::RecipeStore;
use crate::error::RecipeError;
use crate::types::{Recipe, RecipeDraft, RecipePatch};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Process-local recipe store.
///
/// Ids start at 1 and are never reused, even after a delete.
#[derive(Debug)]
pub struct InMemoryRecipeStore {
    recipes: RwLock<BTreeMap<i64, Recipe>>,
    next_id: AtomicI64,
}

impl Default for InMemoryRecipeStore {
    fn default() -> Self {
        Self {
            recipes: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl InMemoryRecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i64, Recipe>>, RecipeError> {
        self.recipes
            .read()
            .map_err(|_| RecipeError::Storage("recipe table lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i64, Recipe>>, RecipeError> {
        self.recipes
            .write()
            .map_err(|_| RecipeError::Storage("recipe table lock poisoned".to_string()))
    }
}

impl RecipeStore for InMemoryRecipeStore {
    fn add(&self, draft: RecipeDraft) -> Result<Recipe, RecipeError> {
        let mut recipes = self.write()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let recipe = Recipe::from_draft(id, draft);
        recipes.insert(id, recipe.clone());
        tracing::debug!(id, "stored new recipe");
        Ok(recipe)
    }

    fn get_all(&self) -> Result<Vec<Recipe>, RecipeError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn get_by_id(&self, id: i64) -> Result<Option<Recipe>, RecipeError> {
        Ok(self.read()?.get(&id).cloned())
    }

    fn delete(&self, id: i64) -> Result<bool, RecipeError> {
        Ok(self.write()?.remove(&id).is_some())
    }

    fn update(&self, id: i64, draft: RecipeDraft) -> Result<Option<Recipe>, RecipeError> {
        let mut recipes = self.write()?;
        let Some(existing) = recipes.get_mut(&id) else {
            return Ok(None);
        };
        *existing = Recipe::from_draft(id, draft);
        Ok(Some(existing.clone()))
    }

    fn patch(&self, id: i64, patch: RecipePatch) -> Result<Option<Recipe>, RecipeError> {
        let mut recipes = self.write()?;
        let Some(existing) = recipes.get_mut(&id) else {
            return Ok(None);
        };
        existing.merge(patch);
        Ok(Some(existing.clone()))
    }
}

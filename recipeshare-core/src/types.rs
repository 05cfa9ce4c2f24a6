use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Kind of dish a recipe produces.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecipeType {
    #[default]
    Basic,
    Main,
    Side,
    Vegetarian,
    Dessert,
}

impl RecipeType {
    pub const ALL: &'static [RecipeType] = &[
        RecipeType::Basic,
        RecipeType::Main,
        RecipeType::Side,
        RecipeType::Vegetarian,
        RecipeType::Dessert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeType::Basic => "BASIC",
            RecipeType::Main => "MAIN",
            RecipeType::Side => "SIDE",
            RecipeType::Vegetarian => "VEGETARIAN",
            RecipeType::Dessert => "DESSERT",
        }
    }

    /// Case-insensitive lookup; surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inbound payload for create, update and patch.
///
/// Nothing is validated here; `RecipeBuilder` decides what is acceptable.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct RecipeRequest {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub recipe_type: Option<String>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub servings: Option<u32>,
}

/// A validated recipe that has not been given an id yet.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub recipe_type: Option<RecipeType>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub servings: Option<u32>,
}

/// A validated partial update. `None` means "leave the stored value alone".
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub recipe_type: Option<RecipeType>,
    pub description: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub instructions: Option<String>,
    pub servings: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub recipe_type: RecipeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
}

impl Recipe {
    pub fn from_draft(id: i64, draft: RecipeDraft) -> Self {
        Self {
            id,
            title: draft.title,
            recipe_type: draft.recipe_type.unwrap_or_default(),
            description: draft.description,
            ingredients: draft.ingredients.unwrap_or_default(),
            instructions: draft.instructions,
            servings: draft.servings,
        }
    }

    /// Overwrite only the fields the patch carries.
    pub fn merge(&mut self, patch: RecipePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(recipe_type) = patch.recipe_type {
            self.recipe_type = recipe_type;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(instructions) = patch.instructions {
            self.instructions = Some(instructions);
        }
        if let Some(servings) = patch.servings {
            self.servings = Some(servings);
        }
    }
}

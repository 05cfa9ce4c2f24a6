//! Turns inbound `RecipeRequest` payloads into validated drafts and patches.

use crate::error::RecipeError;
use crate::types::{RecipeDraft, RecipePatch, RecipeRequest, RecipeType};

pub struct RecipeBuilder;

impl RecipeBuilder {
    /// Validate and normalize a request for create or full update.
    ///
    /// A title is required. Optional strings are trimmed and dropped when
    /// blank; blank ingredient lines are skipped.
    pub fn from_request(request: &RecipeRequest) -> Result<RecipeDraft, RecipeError> {
        let patch = Self::from_patch_request(request)?;
        let Some(title) = patch.title else {
            return Err(RecipeError::Validation("title cannot be empty".to_string()));
        };

        Ok(RecipeDraft {
            title,
            recipe_type: patch.recipe_type,
            description: patch.description,
            ingredients: patch.ingredients,
            instructions: patch.instructions,
            servings: patch.servings,
        })
    }

    /// Validate and normalize a request for a partial update.
    ///
    /// Every field may be omitted. A title that is sent must not be blank.
    pub fn from_patch_request(request: &RecipeRequest) -> Result<RecipePatch, RecipeError> {
        let title = match request.title.as_deref() {
            Some(raw) => match non_blank(Some(raw)) {
                Some(t) => Some(t),
                None => {
                    return Err(RecipeError::Validation("title cannot be empty".to_string()))
                }
            },
            None => None,
        };

        let recipe_type = match request.recipe_type.as_deref() {
            Some(raw) => Some(RecipeType::parse(raw).ok_or_else(|| {
                RecipeError::Validation(format!("unknown recipe type: {}", raw))
            })?),
            None => None,
        };

        if request.servings == Some(0) {
            return Err(RecipeError::Validation(
                "servings must be at least 1".to_string(),
            ));
        }

        let ingredients = request.ingredients.as_ref().map(|lines| {
            lines
                .iter()
                .filter_map(|line| non_blank(Some(line.as_str())))
                .collect::<Vec<_>>()
        });

        Ok(RecipePatch {
            title,
            recipe_type,
            description: non_blank(request.description.as_deref()),
            ingredients,
            instructions: non_blank(request.instructions.as_deref()),
            servings: request.servings,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, recipe_type: Option<&str>) -> RecipeRequest {
        RecipeRequest {
            title: Some(title.to_string()),
            recipe_type: recipe_type.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_builds_minimal_request() {
        let draft = RecipeBuilder::from_request(&request("Soup", Some("MAIN"))).unwrap();
        assert_eq!(draft.title, "Soup");
        assert_eq!(draft.recipe_type, Some(RecipeType::Main));
        assert!(draft.description.is_none());
        assert!(draft.ingredients.is_none());
    }

    #[test]
    fn test_missing_type_stays_unset() {
        let draft = RecipeBuilder::from_request(&request("Soup", None)).unwrap();
        assert_eq!(draft.recipe_type, None);
    }

    #[test]
    fn test_rejects_missing_or_blank_title() {
        let missing = RecipeRequest::default();
        assert!(matches!(
            RecipeBuilder::from_request(&missing),
            Err(RecipeError::Validation(_))
        ));

        let blank = request("   ", Some("MAIN"));
        assert!(matches!(
            RecipeBuilder::from_request(&blank),
            Err(RecipeError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = RecipeBuilder::from_request(&request("Soup", Some("BRUNCH"))).unwrap_err();
        assert_eq!(
            err,
            RecipeError::Validation("unknown recipe type: BRUNCH".to_string())
        );
    }

    #[test]
    fn test_rejects_zero_servings() {
        let mut req = request("Soup", None);
        req.servings = Some(0);
        assert!(RecipeBuilder::from_request(&req).is_err());

        req.servings = Some(4);
        assert_eq!(RecipeBuilder::from_request(&req).unwrap().servings, Some(4));
    }

    #[test]
    fn test_trims_and_drops_blank_values() {
        let req = RecipeRequest {
            title: Some("  Salad ".to_string()),
            recipe_type: Some(" side ".to_string()),
            description: Some("   ".to_string()),
            ingredients: Some(vec![
                " lettuce ".to_string(),
                "".to_string(),
                "tomato".to_string(),
            ]),
            instructions: Some(" Toss. ".to_string()),
            servings: None,
        };

        let draft = RecipeBuilder::from_request(&req).unwrap();
        assert_eq!(draft.title, "Salad");
        assert_eq!(draft.recipe_type, Some(RecipeType::Side));
        assert_eq!(draft.description, None);
        assert_eq!(
            draft.ingredients,
            Some(vec!["lettuce".to_string(), "tomato".to_string()])
        );
        assert_eq!(draft.instructions.as_deref(), Some("Toss."));
    }

    #[test]
    fn test_patch_request_may_omit_title() {
        let req = RecipeRequest {
            servings: Some(2),
            ..Default::default()
        };

        let patch = RecipeBuilder::from_patch_request(&req).unwrap();
        assert_eq!(
            patch,
            RecipePatch {
                servings: Some(2),
                ..Default::default()
            }
        );
        assert!(RecipeBuilder::from_request(&req).is_err());
    }

    #[test]
    fn test_patch_request_rejects_blank_title_and_bad_type() {
        let blank = request("  ", None);
        assert!(matches!(
            RecipeBuilder::from_patch_request(&blank),
            Err(RecipeError::Validation(_))
        ));

        let bad_type = RecipeRequest {
            recipe_type: Some("BRUNCH".to_string()),
            ..Default::default()
        };
        assert!(RecipeBuilder::from_patch_request(&bad_type).is_err());
    }
}

// recipe.rs
use serde::{Deserialize, Serialize};

use crate::error::RecipeError;
use crate::util::RecipeId;

/// A named list of ingredient lines, owned by the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Payload of a creation request. The store assigns the id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub name: String,
    pub ingredients: Vec<String>,
}

/// Full replacement of a recipe's mutable fields.
///
/// `id` may be repeated in the body; if it is, it has to agree with the id the
/// request is addressed to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeUpdate {
    #[serde(default)]
    pub id: Option<RecipeId>,
    pub name: String,
    pub ingredients: Vec<String>,
}

fn validate_name(name: &str) -> Result<(), RecipeError> {
    if name.trim().is_empty() {
        return Err(RecipeError::Validation(String::from(
            "`name` must not be empty",
        )));
    }
    Ok(())
}

impl NewRecipe {
    pub fn new(name: &str, ingredients: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), RecipeError> {
        validate_name(&self.name)
    }

    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}

impl RecipeUpdate {
    pub fn validate(&self) -> Result<(), RecipeError> {
        validate_name(&self.name)
    }

    /// Checks the body id (if any) against the id from the request path.
    pub fn check_id(&self, path_id: &str) -> Result<(), RecipeError> {
        match &self.id {
            Some(body_id) if body_id != path_id => Err(RecipeError::IdMismatch {
                path: path_id.to_string(),
                body: body_id.clone(),
            }),
            _ => Ok(()),
        }
    }

    pub fn apply_to(self, recipe: &mut Recipe) {
        recipe.name = self.name;
        recipe.ingredients = self.ingredients;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        let recipe = NewRecipe::new("   ", &["1 egg"]);
        assert!(matches!(recipe.validate(), Err(RecipeError::Validation(_))));
        assert!(NewRecipe::new("omelette", &[]).validate().is_ok());
    }

    #[test]
    fn test_missing_field_fails_to_parse() {
        let parsed: Result<NewRecipe, _> = serde_json::from_str(r#"{"name": "cake"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_update_id_check() {
        let update: RecipeUpdate =
            serde_json::from_str(r#"{"id": "abc", "name": "cake", "ingredients": []}"#).unwrap();
        assert!(update.check_id("abc").is_ok());
        assert_eq!(
            update.check_id("xyz"),
            Err(RecipeError::IdMismatch {
                path: "xyz".into(),
                body: "abc".into()
            })
        );

        let update: RecipeUpdate =
            serde_json::from_str(r#"{"name": "cake", "ingredients": []}"#).unwrap();
        assert!(update.id.is_none());
        assert!(update.check_id("anything").is_ok());
    }
}

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::recipe_client::RCError;

/// Id type for recipes. The server generates these and treats them as opaque.
pub type RecipeId = String;

/// [`Recipe`] as returned by the recipes service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    pub id: RecipeId,
    pub name: String,
    pub ingredients: Vec<String>,
}

/// [`RecipeDraft`] carries the fields a caller controls, used both to create a
/// recipe and to replace an existing one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RecipeDraft {
    pub name: String,
    pub ingredients: Vec<String>,
}

impl RecipeDraft {
    pub fn new(name: &str, ingredients: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            ingredients,
        }
    }
}

/// [`RecipeClient`] is the interface for talking to a recipes service.
#[async_trait]
pub trait RecipeClient: Send + Sync + 'static {
    /// Returns every recipe, in the order the server stores them.
    async fn list(&self) -> Result<Vec<Recipe>, RCError>;

    async fn get(&self, id: &str) -> Result<Recipe, RCError>;

    /// Creates a recipe and returns it with its server-assigned id.
    async fn create(&self, draft: &RecipeDraft) -> Result<Recipe, RCError>;

    /// Replaces name and ingredients of an existing recipe.
    async fn update(&self, id: &str, draft: &RecipeDraft) -> Result<(), RCError>;

    async fn delete(&self, id: &str) -> Result<(), RCError>;

    /// Returns true if the server answers its health check.
    async fn healthy(&self) -> bool;
}

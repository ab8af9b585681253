// server/src/store/recipe_store.rs
use async_trait::async_trait;
use std::sync::Arc;

use crate::error::RecipeError;
use crate::recipe::{NewRecipe, Recipe, RecipeUpdate};

/// Store handle shared between the server node and its request handlers.
pub type SharedStore = Arc<dyn RecipeStore + Send + Sync>;

#[async_trait]
pub trait RecipeStore {
    /// All live recipes, in insertion order.
    async fn list(&self) -> Vec<Recipe>;

    async fn get(&self, id: &str) -> Result<Recipe, RecipeError>;

    /// Validates `recipe`, assigns it a fresh id and appends it.
    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RecipeError>;

    /// Replaces the mutable fields of the recipe with the given id.
    async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, RecipeError>;

    /// Deletes the recipe with the given id and hands it back.
    async fn remove(&self, id: &str) -> Result<Recipe, RecipeError>;

    async fn len(&self) -> usize;
}

use async_trait::async_trait;
use log::debug;
use tokio::sync::Mutex;

use super::recipe_store::RecipeStore;
use crate::error::RecipeError;
use crate::recipe::{NewRecipe, Recipe, RecipeUpdate};
use crate::util::generate_id;

/// Process-local recipe store. Contents are lost on restart.
pub struct MemoryRecipeStore {
    recipes: Mutex<Vec<Recipe>>,
}

impl MemoryRecipeStore {
    pub fn new() -> Self {
        Self {
            recipes: Mutex::new(Vec::new()),
        }
    }

    /// Builds a store that already holds `seed`, in order, each with its own id.
    pub fn with_recipes(seed: Vec<NewRecipe>) -> Self {
        let recipes = seed
            .into_iter()
            .map(|recipe| recipe.into_recipe(generate_id()))
            .collect();
        Self {
            recipes: Mutex::new(recipes),
        }
    }
}

impl Default for MemoryRecipeStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Recipes a fresh server starts out with.
pub fn seed_recipes() -> Vec<NewRecipe> {
    vec![
        NewRecipe::new(
            "boiled white rice",
            &["1 cup white rice", "2 cups water", "pinch of salt"],
        ),
        NewRecipe::new(
            "milkshake",
            &["2 tbsp cocoa", "2 cups vanilla ice cream", "1 cup milk"],
        ),
    ]
}

#[async_trait]
impl RecipeStore for MemoryRecipeStore {
    async fn list(&self) -> Vec<Recipe> {
        self.recipes.lock().await.clone()
    }

    async fn get(&self, id: &str) -> Result<Recipe, RecipeError> {
        let recipes = self.recipes.lock().await;
        recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .cloned()
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))
    }

    async fn create(&self, recipe: NewRecipe) -> Result<Recipe, RecipeError> {
        recipe.validate()?;
        let recipe = recipe.into_recipe(generate_id());
        self.recipes.lock().await.push(recipe.clone());
        debug!("Created recipe {} ({})", recipe.id, recipe.name);
        Ok(recipe)
    }

    async fn update(&self, id: &str, update: RecipeUpdate) -> Result<Recipe, RecipeError> {
        update.validate()?;
        update.check_id(id)?;
        let mut recipes = self.recipes.lock().await;
        let recipe = recipes
            .iter_mut()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))?;
        update.apply_to(recipe);
        debug!("Updated recipe {}", id);
        Ok(recipe.clone())
    }

    async fn remove(&self, id: &str) -> Result<Recipe, RecipeError> {
        let mut recipes = self.recipes.lock().await;
        let index = recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))?;
        debug!("Removed recipe {}", id);
        Ok(recipes.remove(index))
    }

    async fn len(&self) -> usize {
        self.recipes.lock().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::runtime::Runtime;

    fn replacement(name: &str, ingredients: &[&str]) -> RecipeUpdate {
        RecipeUpdate {
            id: None,
            name: name.to_string(),
            ingredients: ingredients.iter().map(|i| i.to_string()).collect(),
        }
    }

    #[test]
    fn test_create_appends_in_order() {
        let store = MemoryRecipeStore::new();
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let cake = store
                .create(NewRecipe::new("cake", &["2 cups flour", "2 eggs"]))
                .await
                .unwrap();
            let toast = store.create(NewRecipe::new("toast", &["bread"])).await.unwrap();
            assert_ne!(cake.id, toast.id);
            assert_eq!(cake.ingredients, vec!["2 cups flour", "2 eggs"]);

            let names: Vec<_> = store.list().await.into_iter().map(|r| r.name).collect();
            assert_eq!(names, vec!["cake", "toast"]);
        });
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let store = MemoryRecipeStore::new();
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let result = store.create(NewRecipe::new("", &["water"])).await;
            assert!(matches!(result, Err(RecipeError::Validation(_))));
            assert_eq!(store.len().await, 0);
        });
    }

    #[test]
    fn test_update_in_place() {
        let store = MemoryRecipeStore::with_recipes(seed_recipes());
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let before = store.list().await;
            let target = before[0].id.clone();
            let updated = store
                .update(&target, replacement("fried rice", &["rice", "egg"]))
                .await
                .unwrap();
            assert_eq!(updated.id, target);

            let after = store.list().await;
            assert_eq!(after.len(), before.len());
            assert_eq!(after[0].name, "fried rice");
            assert_eq!(after[0].ingredients, vec!["rice", "egg"]);
            assert_eq!(after[1], before[1]);
        });
    }

    #[test]
    fn test_update_unknown_id() {
        let store = MemoryRecipeStore::new();
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let result = store.update("missing", replacement("x", &[])).await;
            assert_eq!(result, Err(RecipeError::NotFound("missing".into())));
        });
    }

    #[test]
    fn test_remove_twice() {
        let store = MemoryRecipeStore::with_recipes(seed_recipes());
        let rt = Runtime::new().unwrap();
        rt.block_on(async {
            let id = store.list().await[1].id.clone();
            let removed = store.remove(&id).await.unwrap();
            assert_eq!(removed.name, "milkshake");
            assert_eq!(store.len().await, 1);
            assert!(store.get(&id).await.is_err());
            assert_eq!(
                store.remove(&id).await,
                Err(RecipeError::NotFound(id.clone()))
            );
        });
    }
}

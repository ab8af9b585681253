pub mod memory_recipe_store;
pub mod recipe_store;

pub use memory_recipe_store::{seed_recipes, MemoryRecipeStore};
pub use recipe_store::{RecipeStore, SharedStore};

// util.rs
use uuid::Uuid;

pub type RecipeId = String;

/// Generates a fresh opaque identifier for a recipe.
pub fn generate_id() -> RecipeId {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_unique() {
        let a = generate_id();
        let b = generate_id();
        assert!(!a.is_empty());
        assert_ne!(a, b);
    }
}

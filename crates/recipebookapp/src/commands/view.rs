use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, ids: &[u32]) -> Result<CmdResult> {
    let recipes = ids
        .iter()
        .map(|id| store.get(*id))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdResult::default().with_recipes(recipes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn returns_recipes_in_requested_order() {
        let store = RecipeStore::open(MemBackend::new());
        let result = run(&store, &[2, 1]).unwrap();
        assert_eq!(result.recipes[0].title, "Simple Pancakes");
        assert_eq!(result.recipes[1].title, "Grandma's Apple Pie");
    }

    #[test]
    fn missing_id_fails() {
        let store = RecipeStore::open(MemBackend::new());
        let result = run(&store, &[1, 8]);
        assert!(matches!(result, Err(RecipeError::RecipeNotFound(8))));
    }
}

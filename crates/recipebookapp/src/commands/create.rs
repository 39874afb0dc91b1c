use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{RecipeDraft, DIFFICULTIES};
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, draft: RecipeDraft) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if let Some(warning) = difficulty_warning(&draft.difficulty) {
        result.add_message(warning);
    }

    let recipe = store.create(draft)?;
    result.add_message(CmdMessage::success(format!(
        "Recipe created ({}): {}",
        recipe.id, recipe.title
    )));
    result.recipes.push(recipe);
    Ok(result)
}

/// Labels outside Easy/Medium/Hard are stored as given, but worth flagging.
pub(crate) fn difficulty_warning(difficulty: &str) -> Option<CmdMessage> {
    if difficulty.is_empty() || DIFFICULTIES.contains(&difficulty) {
        return None;
    }
    Some(CmdMessage::warning(format!(
        "Unusual difficulty \"{}\" (expected one of {})",
        difficulty,
        DIFFICULTIES.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn creates_recipe_with_next_id() {
        let store = RecipeStore::open(MemBackend::new());
        let result = run(&store, RecipeDraft::new("Tea Cake").with_difficulty("Easy")).unwrap();

        assert_eq!(result.recipes.len(), 1);
        assert_eq!(result.recipes[0].id, 3);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("Tea Cake"));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn unusual_difficulty_is_stored_with_warning() {
        let store = RecipeStore::open(MemBackend::new());
        let result = run(&store, RecipeDraft::new("Souffle").with_difficulty("Expert")).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.get(3).unwrap().difficulty, "Expert");
    }
}

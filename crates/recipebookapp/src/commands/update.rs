use crate::commands::create::difficulty_warning;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecipeDraft;
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

pub fn run<B: StorageBackend>(
    store: &RecipeStore<B>,
    id: u32,
    draft: RecipeDraft,
) -> Result<CmdResult> {
    let warning = difficulty_warning(&draft.difficulty);
    let recipe = store.update(id, draft)?;

    let mut result = CmdResult::default();
    if let Some(warning) = warning {
        result.add_message(warning);
    }
    result.add_message(CmdMessage::success(format!(
        "Recipe updated ({}): {}",
        recipe.id, recipe.title
    )));
    result.recipes.push(recipe);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecipeError;
    use crate::model::CommentDraft;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn updates_fields_and_keeps_comments() {
        let store = RecipeStore::open(MemBackend::new());
        store.add_comment(2, CommentDraft::new("Ann", "Yum")).unwrap();

        let result = run(
            &store,
            2,
            RecipeDraft::new("Buttermilk Pancakes").with_difficulty("Medium"),
        )
        .unwrap();

        let recipe = &result.recipes[0];
        assert_eq!(recipe.id, 2);
        assert_eq!(recipe.title, "Buttermilk Pancakes");
        assert_eq!(recipe.category, "Other");
        assert_eq!(recipe.comments.len(), 1);
        assert!(result.messages[0].content.contains("Buttermilk Pancakes"));
    }

    #[test]
    fn missing_recipe_is_not_found() {
        let store = RecipeStore::open(MemBackend::new());
        let result = run(&store, 12, RecipeDraft::new("Nope"));
        assert!(matches!(result, Err(RecipeError::RecipeNotFound(12))));
    }
}

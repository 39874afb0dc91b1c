use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

/// Delete each id in turn. Stops at the first id that does not resolve;
/// recipes deleted before it stay deleted.
pub fn run<B: StorageBackend>(store: &RecipeStore<B>, ids: &[u32]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let recipe = store.delete(*id)?;
        result.add_message(CmdMessage::success(format!(
            "Recipe deleted ({}): {}",
            recipe.id, recipe.title
        )));
        result.recipes.push(recipe);
    }

    Ok(result)
}

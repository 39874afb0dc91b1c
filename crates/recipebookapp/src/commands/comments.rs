use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::CommentDraft;
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

pub fn add<B: StorageBackend>(
    store: &RecipeStore<B>,
    recipe_id: u32,
    draft: CommentDraft,
) -> Result<CmdResult> {
    let comment = store.add_comment(recipe_id, draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Comment {} added to recipe {}",
        comment.id, recipe_id
    )));
    Ok(result.with_comments(vec![comment]))
}

pub fn delete<B: StorageBackend>(
    store: &RecipeStore<B>,
    recipe_id: u32,
    comment_id: u32,
) -> Result<CmdResult> {
    let comment = store.delete_comment(recipe_id, comment_id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Comment {} deleted from recipe {}",
        comment.id, recipe_id
    )));
    Ok(result.with_comments(vec![comment]))
}

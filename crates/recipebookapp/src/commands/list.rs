use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Recipe;
use crate::store::backend::StorageBackend;
use crate::store::RecipeStore;

/// Criteria for narrowing a listing. Every criterion that is set must match.
#[derive(Debug, Clone, Default)]
pub struct RecipeFilter {
    /// Case-insensitive substring of the title or description.
    pub search: Option<String>,
    /// Exact category.
    pub category: Option<String>,
    /// Exact difficulty label.
    pub difficulty: Option<String>,
}

impl RecipeFilter {
    pub fn is_active(&self) -> bool {
        self.search.is_some() || self.category.is_some() || self.difficulty.is_some()
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let search_ok = self.search.as_ref().is_none_or(|term| {
            let term = term.to_lowercase();
            recipe.title.to_lowercase().contains(&term)
                || recipe.description.to_lowercase().contains(&term)
        });
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|c| recipe.category == *c);
        let difficulty_ok = self
            .difficulty
            .as_ref()
            .is_none_or(|d| recipe.difficulty == *d);

        search_ok && category_ok && difficulty_ok
    }
}

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, filter: &RecipeFilter) -> Result<CmdResult> {
    let all = store.list();
    let total = all.len();
    let listed: Vec<Recipe> = all.into_iter().filter(|r| filter.matches(r)).collect();

    let mut result = CmdResult::default();
    if filter.is_active() {
        result.add_message(CmdMessage::info(format!(
            "Showing {} of {} recipes",
            listed.len(),
            total
        )));
    }
    Ok(result.with_recipes(listed))
}

/// Distinct categories in the order they first appear.
pub fn categories<B: StorageBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    let mut seen: Vec<String> = Vec::new();
    for recipe in store.list() {
        if !seen.contains(&recipe.category) {
            seen.push(recipe.category);
        }
    }
    Ok(CmdResult {
        categories: seen,
        ..Default::default()
    })
}

//! # Data Model
//!
//! A [`Recipe`] is a dish record with its ordered ingredients and steps, some free-text
//! metadata, and its comment thread. A [`Comment`] belongs to exactly one recipe.
//!
//! Identity is owned by the store: callers never hand in ids or timestamps. Input comes
//! in as a [`RecipeDraft`] or [`CommentDraft`], which simply have no field for them.
//! When a draft is read from JSON, stray `id`, `comments` or `createdAt` keys are ignored.
//!
//! The serialized form uses camelCase keys (`estimatedTime`, `imageUrl`, `createdAt`),
//! matching the backing document and what browser clients send.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CATEGORY: &str = "Other";

/// Conventional difficulty labels. Clients offer these; the store accepts any string.
pub const DIFFICULTIES: [&str; 3] = ["Easy", "Medium", "Hard"];

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u32,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub estimated_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Recipe {
    /// Build a stored recipe from a draft. Comments always start empty.
    pub fn from_draft(id: u32, draft: RecipeDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            ingredients: draft.ingredients,
            steps: draft.steps,
            difficulty: draft.difficulty,
            estimated_time: draft.estimated_time,
            image_url: draft.image_url,
            category: draft.category,
            comments: Vec::new(),
        }
    }

    /// Overwrite every user-editable field. `id` and `comments` are left alone.
    pub fn apply(&mut self, draft: RecipeDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.ingredients = draft.ingredients;
        self.steps = draft.steps;
        self.difficulty = draft.difficulty;
        self.estimated_time = draft.estimated_time;
        self.image_url = draft.image_url;
        self.category = draft.category;
    }

    /// Next comment id for this recipe: one past the current max, or 1.
    /// `None` when the max is already `u32::MAX`.
    pub fn next_comment_id(&self) -> Option<u32> {
        match self.comments.iter().map(|c| c.id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        }
    }

    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients: self.ingredients.clone(),
            steps: self.steps.clone(),
            difficulty: self.difficulty.clone(),
            estimated_time: self.estimated_time.clone(),
            image_url: self.image_url.clone(),
            category: self.category.clone(),
        }
    }
}

/// Caller-supplied recipe fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub difficulty: String,
    pub estimated_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub category: String,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            difficulty: String::new(),
            estimated_time: String::new(),
            image_url: None,
            category: default_category(),
        }
    }
}

impl RecipeDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }

    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

/// Caller-supplied comment fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentDraft {
    pub author: String,
    pub text: String,
}

impl CommentDraft {
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

impl Comment {
    pub fn from_draft(id: u32, draft: CommentDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author: draft.author,
            text: draft.text,
            created_at,
        }
    }
}

/// The recipes a fresh catalog starts with, in creation order.
pub fn seed_drafts() -> Vec<RecipeDraft> {
    vec![
        RecipeDraft::new("Grandma's Apple Pie")
            .with_description("A classic apple pie recipe passed down through generations.")
            .with_ingredients(["Apples", "Flour", "Sugar", "Butter", "Cinnamon"])
            .with_steps([
                "Peel and slice apples",
                "Mix dough",
                "Fill pie",
                "Bake at 180C for 45 mins",
            ])
            .with_difficulty("Medium")
            .with_estimated_time("90 mins")
            .with_category("Pastry"),
        RecipeDraft::new("Simple Pancakes")
            .with_description("Fluffy pancakes for a perfect breakfast.")
            .with_ingredients(["Flour", "Milk", "Eggs", "Baking Powder", "Sugar"])
            .with_steps([
                "Mix dry ingredients",
                "Whisk wet ingredients",
                "Combine",
                "Cook on griddle",
            ])
            .with_difficulty("Easy")
            .with_estimated_time("20 mins")
            .with_category("No-Bake"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_serializes_camel_case() {
        let recipe = Recipe::from_draft(
            3,
            RecipeDraft::new("Tea Cake")
                .with_estimated_time("40 mins")
                .with_image_url("/images/x.png"),
        );
        let value = serde_json::to_value(&recipe).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["estimatedTime"], "40 mins");
        assert_eq!(value["imageUrl"], "/images/x.png");
        assert_eq!(value["category"], "Other");
        assert!(value["comments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_missing_image_url_is_omitted() {
        let recipe = Recipe::from_draft(1, RecipeDraft::new("Plain"));
        let value = serde_json::to_value(&recipe).unwrap();
        assert!(value.get("imageUrl").is_none());
    }

    #[test]
    fn test_recipe_tolerates_missing_optional_keys() {
        let json = r#"{"id": 9, "title": "Bare"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.id, 9);
        assert_eq!(recipe.category, "Other");
        assert!(recipe.comments.is_empty());
        assert!(recipe.image_url.is_none());
    }

    #[test]
    fn test_draft_ignores_store_owned_keys() {
        let json = r#"{
            "id": 42,
            "title": "Scones",
            "comments": [{"id": 7, "author": "x", "text": "y", "createdAt": "2020-01-01T00:00:00Z"}],
            "category": "Pastry"
        }"#;
        let draft: RecipeDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft.title, "Scones");
        assert_eq!(draft.category, "Pastry");
        assert!(draft.ingredients.is_empty());
    }

    #[test]
    fn test_comment_draft_ignores_id_and_timestamp() {
        let json = r#"{"id": 99, "author": "Alice", "text": "Great!", "createdAt": "1999-01-01T00:00:00Z"}"#;
        let draft: CommentDraft = serde_json::from_str(json).unwrap();
        assert_eq!(draft, CommentDraft::new("Alice", "Great!"));
    }

    #[test]
    fn test_apply_keeps_id_and_comments() {
        let mut recipe = Recipe::from_draft(5, RecipeDraft::new("Old"));
        recipe.comments.push(Comment::from_draft(
            1,
            CommentDraft::new("Bob", "Nice"),
            Utc::now(),
        ));

        recipe.apply(RecipeDraft::new("New").with_category("Bread"));

        assert_eq!(recipe.id, 5);
        assert_eq!(recipe.title, "New");
        assert_eq!(recipe.category, "Bread");
        assert_eq!(recipe.comments.len(), 1);
    }

    #[test]
    fn test_next_comment_id() {
        let mut recipe = Recipe::from_draft(1, RecipeDraft::new("Soup"));
        assert_eq!(recipe.next_comment_id(), Some(1));

        let now = Utc::now();
        recipe.comments.push(Comment::from_draft(4, CommentDraft::new("a", "b"), now));
        recipe.comments.push(Comment::from_draft(2, CommentDraft::new("c", "d"), now));
        assert_eq!(recipe.next_comment_id(), Some(5));

        recipe
            .comments
            .push(Comment::from_draft(u32::MAX, CommentDraft::new("e", "f"), now));
        assert_eq!(recipe.next_comment_id(), None);
    }

    #[test]
    fn test_seed_drafts() {
        let seeds = seed_drafts();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].title, "Grandma's Apple Pie");
        assert_eq!(seeds[0].category, "Pastry");
        assert_eq!(seeds[1].title, "Simple Pancakes");
        assert_eq!(seeds[1].category, "No-Bake");
    }
}

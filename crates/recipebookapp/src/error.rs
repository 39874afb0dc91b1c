use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u32),

    #[error("Comment {comment_id} not found on recipe {recipe_id}")]
    CommentNotFound { recipe_id: u32, comment_id: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RecipeError>;

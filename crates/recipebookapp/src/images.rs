//! Image intake.
//!
//! Images live next to the catalog but are not part of it: this module copies a file
//! into the images directory under a fresh name and hands back the relative URL.
//! What a recipe does with that URL is up to the caller.

use crate::error::{RecipeError, Result};
use std::fs;
use std::path::Path;
use uuid::Uuid;

pub const ALLOWED_EXTENSIONS: [&str; 4] = [".jpg", ".jpeg", ".png", ".gif"];

/// URL prefix under which stored images are served.
pub const IMAGE_URL_PREFIX: &str = "/images";

/// Lowercased extension of `path` with a leading dot, if it is an accepted image type.
pub fn image_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    let ext = format!(".{}", ext);
    ALLOWED_EXTENSIONS.contains(&ext.as_str()).then_some(ext)
}

/// Copy `source` into `images_dir` as `<uuid><ext>` and return `/images/<uuid><ext>`.
pub fn store_image(images_dir: &Path, source: &Path, max_bytes: u64) -> Result<String> {
    let meta = match fs::metadata(source) {
        Ok(meta) if meta.is_file() => meta,
        _ => return Err(RecipeError::Image("No file uploaded".to_string())),
    };
    if meta.len() == 0 {
        return Err(RecipeError::Image("No file uploaded".to_string()));
    }

    let ext = image_extension(source).ok_or_else(|| {
        RecipeError::Image(
            "Invalid file type. Only jpg, jpeg, png, and gif are allowed.".to_string(),
        )
    })?;

    if meta.len() > max_bytes {
        return Err(RecipeError::Image(format!(
            "File too large: {} bytes (limit {})",
            meta.len(),
            max_bytes
        )));
    }

    if !images_dir.exists() {
        fs::create_dir_all(images_dir).map_err(RecipeError::Io)?;
    }

    let file_name = format!("{}{}", Uuid::new_v4(), ext);
    fs::copy(source, images_dir.join(&file_name)).map_err(RecipeError::Io)?;
    tracing::debug!(file = %file_name, "stored image");

    Ok(format!("{}/{}", IMAGE_URL_PREFIX, file_name))
}

use crate::commands::{CmdMessage, CmdResult, RecipePaths};
use crate::config::RecipeConfig;
use crate::error::Result;
use crate::images::store_image;
use std::path::Path;

pub fn run(paths: &RecipePaths, config: &RecipeConfig, source: &Path) -> Result<CmdResult> {
    let url = store_image(&paths.images_dir, source, config.max_image_bytes)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Image stored: {}", url)));
    result.image_urls.push(url);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn stores_into_configured_images_dir() {
        let temp = TempDir::new().unwrap();
        let config = RecipeConfig {
            images_dir: "pics".into(),
            ..Default::default()
        };
        let paths = RecipePaths::new(temp.path().to_path_buf(), &config);
        let source = temp.path().join("cake.png");
        fs::write(&source, b"png").unwrap();

        let result = run(&paths, &config, &source).unwrap();

        let url = &result.image_urls[0];
        let name = url.trim_start_matches("/images/");
        assert!(temp.path().join("pics").join(name).exists());
    }
}

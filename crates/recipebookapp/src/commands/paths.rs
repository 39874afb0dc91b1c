use crate::commands::{CmdResult, RecipePaths};
use crate::error::Result;

pub fn run(paths: &RecipePaths) -> Result<CmdResult> {
    Ok(CmdResult {
        paths: vec![
            paths.data_dir.clone(),
            paths.data_file.clone(),
            paths.images_dir.clone(),
        ],
        ..Default::default()
    })
}

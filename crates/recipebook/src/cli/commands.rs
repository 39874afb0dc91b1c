use super::render;
use super::setup::{Cli, CommentCommands, Commands, ListArgs, OutputMode, RecipeArgs};
use anyhow::{bail, Context, Result};
use recipebookapp::api::{CmdMessage, ConfigAction, MessageLevel, RecipeFilter};
use recipebookapp::commands::CmdResult;
use recipebookapp::error::RecipeError;
use recipebookapp::init::{initialize, resolve_data_dir, RecipeContext};
use recipebookapp::model::{CommentDraft, RecipeDraft};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_DIFFICULTY: &str = "Medium";

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let data_dir = resolve_data_dir(cli.data.clone(), &cwd);
    tracing::debug!(data_dir = %data_dir.display(), "resolved data directory");

    let ctx = initialize(data_dir);
    let out = cli.output;

    match cli.command {
        None => handle_list(&ctx, out, ListArgs::default()),
        Some(Commands::List(args)) => handle_list(&ctx, out, args),
        Some(Commands::View { ids }) => handle_view(&ctx, out, &ids),
        Some(Commands::Create(args)) => handle_create(&ctx, out, args),
        Some(Commands::Update {
            id,
            fields,
            clear_image,
        }) => handle_update(&ctx, out, id, fields, clear_image),
        Some(Commands::Delete { ids }) => handle_delete(&ctx, out, &ids),
        Some(Commands::Comment { action }) => handle_comment(&ctx, out, action),
        Some(Commands::Categories) => handle_categories(&ctx, out),
        Some(Commands::Image { file }) => handle_image(&ctx, out, &file),
        Some(Commands::Path) => handle_paths(&ctx, out),
        Some(Commands::Config { key, value }) => handle_config(&ctx, out, key, value),
    }
}

fn handle_list(ctx: &RecipeContext, out: OutputMode, args: ListArgs) -> Result<()> {
    let filter = RecipeFilter {
        search: args.search,
        category: args.category,
        difficulty: args.difficulty,
    };
    let result = ctx.api.list_recipes(&filter)?;

    match out {
        OutputMode::Json => print_json(&result.recipes),
        OutputMode::Term => {
            print!("{}", render::render_recipe_list(&result.recipes));
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_view(ctx: &RecipeContext, out: OutputMode, ids: &[u32]) -> Result<()> {
    let result = ctx.api.view_recipes(ids)?;
    match out {
        OutputMode::Json => print_json(&result.recipes),
        OutputMode::Term => {
            print!("{}", render::render_full_recipes(&result.recipes));
            Ok(())
        }
    }
}

fn handle_create(ctx: &RecipeContext, out: OutputMode, args: RecipeArgs) -> Result<()> {
    let draft = match args.from_json.clone() {
        Some(path) => read_draft(&path)?,
        None => {
            let mut draft = RecipeDraft::new("").with_difficulty(DEFAULT_DIFFICULTY);
            merge_fields(&mut draft, args);
            draft
        }
    };
    if draft.title.trim().is_empty() {
        return Err(RecipeError::Api("Title cannot be empty".into()).into());
    }

    let result = ctx.api.create_recipe(draft)?;
    print_recipe_result(out, &result)
}

fn handle_update(
    ctx: &RecipeContext,
    out: OutputMode,
    id: u32,
    fields: RecipeArgs,
    clear_image: bool,
) -> Result<()> {
    let draft = match fields.from_json.clone() {
        Some(path) => read_draft(&path)?,
        None => {
            let current = ctx
                .api
                .view_recipes(&[id])?
                .recipes
                .into_iter()
                .next()
                .ok_or(RecipeError::RecipeNotFound(id))?;
            let mut draft = current.to_draft();
            merge_fields(&mut draft, fields);
            if clear_image {
                draft.image_url = None;
            }
            draft
        }
    };

    let result = ctx.api.update_recipe(id, draft)?;
    print_recipe_result(out, &result)
}

fn handle_delete(ctx: &RecipeContext, out: OutputMode, ids: &[u32]) -> Result<()> {
    let result = ctx.api.delete_recipes(ids)?;
    print_recipe_result(out, &result)
}

fn handle_comment(ctx: &RecipeContext, out: OutputMode, action: CommentCommands) -> Result<()> {
    let result = match action {
        CommentCommands::Add {
            recipe_id,
            author,
            text,
        } => ctx
            .api
            .add_comment(recipe_id, CommentDraft::new(author, text.join(" ")))?,
        CommentCommands::Delete {
            recipe_id,
            comment_id,
        } => ctx.api.delete_comment(recipe_id, comment_id)?,
    };

    match out {
        OutputMode::Json => print_json(&result.comments),
        OutputMode::Term => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_categories(ctx: &RecipeContext, out: OutputMode) -> Result<()> {
    let result = ctx.api.categories()?;
    match out {
        OutputMode::Json => print_json(&result.categories),
        OutputMode::Term => {
            print!(
                "{}",
                render::render_text_list(&result.categories, "No categories yet.")
            );
            Ok(())
        }
    }
}

fn handle_image(ctx: &RecipeContext, out: OutputMode, file: &Path) -> Result<()> {
    let result = ctx.api.upload_image(file)?;
    match out {
        OutputMode::Json => print_json(&result.image_urls),
        OutputMode::Term => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn handle_paths(ctx: &RecipeContext, out: OutputMode) -> Result<()> {
    let result = ctx.api.paths()?;
    match out {
        OutputMode::Json => print_json(&result.paths),
        OutputMode::Term => {
            print!("{}", render::render_paths(&result.paths));
            Ok(())
        }
    }
}

fn handle_config(
    ctx: &RecipeContext,
    out: OutputMode,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };
    let result = ctx.api.config(action)?;
    fail_on_error(&result)?;

    match out {
        OutputMode::Json => match &result.config {
            Some(config) => print_json(config),
            None => print_json(&result.messages),
        },
        OutputMode::Term => {
            print_messages(&result.messages);
            if result.messages.is_empty() {
                if let Some(config) = &result.config {
                    print!("{}", render::render_config(config));
                }
            }
            Ok(())
        }
    }
}

/// Overlay whichever fields were given on the command line.
fn merge_fields(draft: &mut RecipeDraft, args: RecipeArgs) {
    if let Some(title) = args.title {
        draft.title = title;
    }
    if let Some(description) = args.description {
        draft.description = description;
    }
    if !args.ingredients.is_empty() {
        draft.ingredients = args.ingredients;
    }
    if !args.steps.is_empty() {
        draft.steps = args.steps;
    }
    if let Some(difficulty) = args.difficulty {
        draft.difficulty = difficulty;
    }
    if let Some(estimated_time) = args.estimated_time {
        draft.estimated_time = estimated_time;
    }
    if let Some(image) = args.image {
        draft.image_url = Some(image);
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
}

fn read_draft(path: &Path) -> Result<RecipeDraft> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid recipe JSON in {}", path.display()))
}

fn print_recipe_result(out: OutputMode, result: &CmdResult) -> Result<()> {
    match out {
        OutputMode::Json => print_json(&result.recipes),
        OutputMode::Term => {
            print_messages(&result.messages);
            Ok(())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render::render_messages(messages));
}

fn fail_on_error(result: &CmdResult) -> Result<()> {
    if let Some(message) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        bail!("{}", message.content);
    }
    Ok(())
}

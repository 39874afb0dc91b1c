//! # Rendering
//!
//! Turns `CmdResult` data into terminal text. Every `render_*` function returns a
//! `String` so output can be tested without capturing stdout; `commands.rs` prints.
//!
//! Layout (width, truncation, padding) is Unicode-aware via `unicode-width`.
//! Colors come from `colored`, which turns itself off when stdout is not a terminal.

use chrono::{DateTime, Utc};
use colored::Colorize;
use recipebookapp::api::{CmdMessage, MessageLevel};
use recipebookapp::config::RecipeConfig;
use recipebookapp::model::{Comment, Recipe};
use std::fmt::Write as _;
use std::path::PathBuf;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const ID_WIDTH: usize = 6;
const META_WIDTH: usize = 34;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

/// One line per recipe: id, title, then category/difficulty/time right-aligned.
pub fn render_recipe_list(recipes: &[Recipe]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n".to_string();
    }

    let mut out = String::new();
    for recipe in recipes {
        let id = format!("{:>width$}. ", recipe.id, width = ID_WIDTH - 2);

        let mut meta = format!("[{}]", recipe.category);
        if !recipe.difficulty.is_empty() {
            meta.push(' ');
            meta.push_str(&recipe.difficulty);
        }
        if !recipe.estimated_time.is_empty() {
            meta.push_str(" · ");
            meta.push_str(&recipe.estimated_time);
        }
        let meta = pad_left_to_width(&truncate_to_width(&meta, META_WIDTH), META_WIDTH);

        let mut title = recipe.title.clone();
        if !recipe.comments.is_empty() {
            title.push_str(&format!(" ({})", recipe.comments.len()));
        }
        let available = LINE_WIDTH.saturating_sub(ID_WIDTH + META_WIDTH + 1);
        let title = truncate_to_width(&title, available);
        let padding = available.saturating_sub(title.width()) + 1;

        let _ = writeln!(
            out,
            "{}{}{}{}",
            id.yellow(),
            title.bold(),
            " ".repeat(padding),
            meta.dimmed()
        );
    }
    out
}

pub fn render_full_recipes(recipes: &[Recipe]) -> String {
    let mut out = String::new();
    for (i, recipe) in recipes.iter().enumerate() {
        if i > 0 {
            out.push_str("\n================================\n\n");
        }
        render_full_recipe(&mut out, recipe);
    }
    out
}

fn render_full_recipe(out: &mut String, recipe: &Recipe) {
    let _ = writeln!(
        out,
        "{} {}",
        format!("{}.", recipe.id).yellow(),
        recipe.title.bold()
    );
    out.push_str("--------------------------------\n");

    let mut meta = vec![format!("Category: {}", recipe.category)];
    if !recipe.difficulty.is_empty() {
        meta.push(format!("Difficulty: {}", recipe.difficulty));
    }
    if !recipe.estimated_time.is_empty() {
        meta.push(format!("Time: {}", recipe.estimated_time));
    }
    let _ = writeln!(out, "{}", meta.join("  |  ").dimmed());
    if let Some(url) = &recipe.image_url {
        let _ = writeln!(out, "{}", format!("Image: {}", url).dimmed());
    }

    if !recipe.description.is_empty() {
        let _ = writeln!(out, "\n{}", recipe.description);
    }

    if !recipe.ingredients.is_empty() {
        let _ = writeln!(out, "\n{}", "Ingredients".bold());
        for ingredient in &recipe.ingredients {
            let _ = writeln!(out, "  • {}", ingredient);
        }
    }

    if !recipe.steps.is_empty() {
        let _ = writeln!(out, "\n{}", "Steps".bold());
        for (n, step) in recipe.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", n + 1, step);
        }
    }

    if !recipe.comments.is_empty() {
        let _ = writeln!(out, "\n{}", "Comments".bold());
        out.push_str(&render_comments(&recipe.comments));
    }
}

pub fn render_comments(comments: &[Comment]) -> String {
    let mut out = String::new();
    for comment in comments {
        let _ = writeln!(
            out,
            "  {} {} {}",
            format!("#{}", comment.id).yellow(),
            comment.author.bold(),
            format_time_ago(comment.created_at).dimmed()
        );
        for line in comment.text.lines() {
            let _ = writeln!(out, "     {}", line);
        }
    }
    out
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|l| format!("{}\n", l)).collect()
}

pub fn render_paths(paths: &[PathBuf]) -> String {
    let labels = ["data", "document", "images"];
    paths
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let label = labels.get(i).copied().unwrap_or("path");
            let label = format!("{:<9}", format!("{}:", label));
            format!("{} {}\n", label.dimmed(), p.display())
        })
        .collect()
}

pub fn render_config(config: &RecipeConfig) -> String {
    recipebookapp::config::CONFIG_KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|v| format!("{} = {}\n", key, v)))
        .collect()
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

/// Right-align by display width, before any color is applied.
fn pad_left_to_width(s: &str, width: usize) -> String {
    format!("{}{}", " ".repeat(width.saturating_sub(s.width())), s)
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipebookapp::model::{CommentDraft, RecipeDraft};

    fn plain() {
        colored::control::set_override(false);
    }

    fn make_recipe(id: u32, title: &str) -> Recipe {
        Recipe::from_draft(
            id,
            RecipeDraft::new(title)
                .with_difficulty("Easy")
                .with_estimated_time("20 mins")
                .with_category("Bread")
                .with_ingredients(["Flour", "Water"])
                .with_steps(["Knead", "Bake"]),
        )
    }

    #[test]
    fn test_render_empty_list() {
        plain();
        assert_eq!(render_recipe_list(&[]).trim(), "No recipes found.");
    }

    #[test]
    fn test_render_list_line() {
        plain();
        let output = render_recipe_list(&[make_recipe(7, "Flatbread")]);
        assert!(output.contains("   7. Flatbread"));
        assert!(output.contains("[Bread] Easy · 20 mins"));
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_render_list_truncates_long_titles() {
        plain();
        let long = "Very ".repeat(40);
        let output = render_recipe_list(&[make_recipe(1, &long)]);
        assert!(output.contains('…'));
        assert!(output.lines().next().unwrap().width() <= LINE_WIDTH);
    }

    #[test]
    fn test_render_list_aligns_wide_characters() {
        plain();
        let mut wide = make_recipe(4, "寿司");
        wide.category = "日本料理".to_string();
        let output = render_recipe_list(&[make_recipe(3, "Loaf"), wide]);

        for line in output.lines() {
            assert_eq!(line.width(), LINE_WIDTH, "misaligned: {:?}", line);
        }
    }

    #[test]
    fn test_render_list_shows_comment_count() {
        plain();
        let mut recipe = make_recipe(2, "Rolls");
        recipe.comments.push(Comment::from_draft(
            1,
            CommentDraft::new("a", "b"),
            Utc::now(),
        ));
        assert!(render_recipe_list(&[recipe]).contains("Rolls (1)"));
    }

    #[test]
    fn test_render_full_recipe_sections() {
        plain();
        let mut recipe = make_recipe(3, "Loaf");
        recipe.comments.push(Comment::from_draft(
            1,
            CommentDraft::new("Alice", "Great!"),
            Utc::now(),
        ));

        let output = render_full_recipes(&[recipe]);
        assert!(output.contains("3. Loaf"));
        assert!(output.contains("Category: Bread  |  Difficulty: Easy  |  Time: 20 mins"));
        assert!(output.contains("  • Flour"));
        assert!(output.contains("  2. Bake"));
        assert!(output.contains("#1 Alice"));
        assert!(output.contains("     Great!"));
    }

    #[test]
    fn test_render_full_recipes_separated() {
        plain();
        let output = render_full_recipes(&[make_recipe(1, "A"), make_recipe(2, "B")]);
        assert_eq!(output.matches("================================").count(), 1);
    }

    #[test]
    fn test_render_messages_plain() {
        plain();
        let output = render_messages(&[
            CmdMessage::success("Recipe created (3): Tea Cake"),
            CmdMessage::warning("careful"),
        ]);
        assert_eq!(output, "Recipe created (3): Tea Cake\ncareful\n");
    }

    #[test]
    fn test_render_config_lists_all_keys() {
        let output = render_config(&RecipeConfig::default());
        assert!(output.contains("data-file = recipes.json"));
        assert!(output.contains("images-dir = images"));
        assert!(output.contains("max-image-bytes = 10485760"));
    }

    #[test]
    fn test_render_paths_labels_line_up() {
        plain();
        let output = render_paths(&[
            PathBuf::from("/d"),
            PathBuf::from("/d/recipes.json"),
            PathBuf::from("/d/images"),
        ]);
        assert_eq!(
            output,
            "data:     /d\ndocument: /d/recipes.json\nimages:   /d/images\n"
        );
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn test_pad_left_to_width() {
        assert_eq!(pad_left_to_width("ab", 4), "  ab");
        assert_eq!(pad_left_to_width("日本", 6), "  日本");
        assert_eq!(pad_left_to_width("toolong", 3), "toolong");
    }
}

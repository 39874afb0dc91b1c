//! # CLI Behavior
//!
//! This is **one possible UI client** for recipebook, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ### Naked Execution (`recipebook`)
//!
//! Running `recipebook` with no arguments defaults to `recipebook list`.
//!
//! ### Create and Update
//!
//! `create` builds a draft from flags (`--title` is required, difficulty defaults
//! to Medium) or reads a whole draft with `--from-json <file>`.
//!
//! `update <id>` starts from the recipe's current fields and replaces only those
//! given on the command line; the store itself always overwrites every editable
//! field. `--from-json` replaces them all, `--clear-image` drops the image.
//!
//! ### Output
//!
//! `--output term` (default) renders colored text. `--output json` prints the
//! natural payload of each command (recipes, comments, categories...) as
//! pretty JSON so scripts can consume it.
//!
//! Errors surface as `Error: ...` on stderr with exit status 1.

mod commands;
mod render;
pub mod setup;

pub use commands::run;

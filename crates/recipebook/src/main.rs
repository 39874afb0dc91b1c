//! # Recipebook CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! parses arguments, installs logging, invokes `cli::run()` and handles process
//! termination.
//!
//! ## Workspace Structure
//!
//! - `crates/recipebookapp/`: core library with UI-agnostic recipe logic
//! - `crates/recipebook/`: this CLI tool, depends on `recipebookapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/recipebook/src/cli/)                     │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs)                           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/recipebookapp/src/api.rs)                │
//! │  - Dispatches to command modules                            │
//! │  - Returns structured `CmdResult` values                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command + Storage Layers (recipebookapp commands/, store/) │
//! │  - Business logic, the recipe document, persistence         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Logging
//!
//! The library only emits `tracing` events. This binary decides where they go:
//! a `fmt` subscriber on stderr, filtered by `RECIPEBOOK_LOG` (e.g.
//! `RECIPEBOOK_LOG=recipebookapp=debug`). Without it, only warnings are shown,
//! or everything from our own crates at debug level when `-v` is passed.
//!
//! ## Testing Approach
//!
//! - **Library**: command, store and backend tests live in `recipebookapp`.
//! - **CLI**: `setup.rs` checks argument parsing, `render.rs` checks layout on
//!   canned recipes, and `tests/cli_e2e.rs` drives the real binary against a
//!   temporary data directory.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

const LOG_ENV: &str = "RECIPEBOOK_LOG";

fn main() {
    let args = cli::setup::Cli::parse();
    init_tracing(args.verbose);

    if let Err(e) = cli::run(args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directives = if verbose {
        "recipebookapp=debug,recipebook=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .init();
}

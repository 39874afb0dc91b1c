//! # Recipebook Architecture
//!
//! Recipebook is a **UI-agnostic recipe catalog library**. The command-line client is
//! one consumer; the same core could sit behind an HTTP layer or a desktop app.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (e.g. the `recipebook` CLI crate)                   │
//! │  - Parses input, renders output, owns exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore: ids, seeding, lock, persist-after-mutate    │
//! │  - StorageBackend: FsBackend (production), MemBackend (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns plain Rust
//! types, never writes to stdout/stderr and never exits the process. Diagnostics
//! go through `tracing`; installing a subscriber is the client's call.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Per-operation logic
//! - [`store`]: The recipe store and its backends
//! - [`model`]: `Recipe`, `Comment`, drafts, seed data
//! - [`images`]: Image intake into the images directory
//! - [`config`]: Configuration (`config.json`)
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod images;
pub mod init;
pub mod model;
pub mod store;

//! # Storage Layer
//!
//! The catalog is one JSON document holding every recipe and its comments.
//! It is read once, when the store opens or (for a deferred store) on first use,
//! and rewritten wholesale after every successful mutation.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::StorageBackend`]: the "how". Raw load/save of the document.
//! - [`recipe_store::RecipeStore`]: the "what". Id assignment, seeding,
//!   comment numbering, locking, and the persist-after-mutate rule.
//!
//! ## Loading
//!
//! 1. **Document present and non-empty**: adopt it as-is, storage order preserved.
//!    The next recipe id becomes `max(id) + 1`.
//! 2. **Missing, blank, `[]`, unreadable or unparsable**, or holding an id of
//!    `u32::MAX` (no next id exists): start empty and add the seed recipes as ids
//!    1 and 2, writing after each one.
//!
//! ## Writing
//!
//! Every create/update/delete (recipe or comment) serializes the full catalog.
//! A failed write is logged and swallowed: the caller still sees success, memory
//! stays authoritative, and the next successful write brings the document back in line.
//!
//! ## Concurrency
//!
//! `RecipeStore` holds the catalog behind a single `Mutex`; each operation keeps the
//! lock across the mutation and the write, so two callers can never interleave.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, writes via tmp file + rename.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── recipes.json        # The backing document (JSON array, indented)
//! ├── config.json         # Optional configuration
//! └── images/             # Uploaded images, referenced by imageUrl
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod recipe_store;

pub use recipe_store::RecipeStore;

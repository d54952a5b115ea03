//! # Craftz Architecture
//!
//! Craftz is a **UI-agnostic recipe-scripting library** with a CLI
//! client. Everything that matters (the recipe text model, the
//! round-trip serialization engine, the two-shelf collection, the
//! search ranking) lives behind a narrow API, and the CLI is just one
//! thin client of it.
//!
//! ## Layers
//!
//! ```text
//! CLI (main.rs + args.rs)      argument parsing, colored output
//!            │
//! API (api.rs)                 CraftzApi facade, owns the Session
//!            │
//! Commands (commands/*.rs)     per-operation business logic,
//!            │                 returns structured CmdResult
//! Core + Storage               model / render / parse / book / script /
//!                              filter / catalog / config, and the
//!                              ScriptStore trait (fs or in-memory)
//! ```
//!
//! From `api.rs` inward, code takes plain arguments, returns
//! `Result<CmdResult>`, and never touches stdout, stderr, or
//! `std::process::exit`. The same core could back a GUI again.
//!
//! ## The round-trip contract
//!
//! [`render`] produces canonical script text; [`parse`] recognizes
//! exactly that text (plus whatever indentation the file layout adds)
//! inside arbitrary surrounding content; [`script`] lays whole files
//! out. Serializing a book and re-parsing the result reproduces the
//! same ordered raw-text sequence; the tests in `script.rs` hold the
//! project to that.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`model`]: recipe kinds, the 3×3 grid, structured recipes
//! - [`render`]: recipe → canonical text (the serializer)
//! - [`parse`]: script text → recipe blocks (the parser)
//! - [`book`]: the two-shelf ordered collection of recipe texts
//! - [`script`]: whole-file layout and the new-script skeleton
//! - [`filter`]: exact-first fuzzy-fallback ranking
//! - [`catalog`]: the item source file model
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: path configuration
//! - [`error`]: error types

pub mod api;
pub mod book;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod parse;
pub mod render;
pub mod script;
pub mod store;

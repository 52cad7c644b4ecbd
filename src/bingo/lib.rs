//! # Bingo Architecture
//!
//! Bingo is a **UI-agnostic bingo sheet library**. It takes a pool of terms,
//! builds a randomized board, and turns that board into a batch of
//! independently shuffled, printable sheets wrapped in one standalone HTML
//! document. The CLI is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, cli/)                         │
//! │  - Parses arguments, reads term files, writes documents     │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves stored config + per-call overrides              │
//! │  - Owns the random source                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - preview, generate, export, config, init                  │
//! │  - Returns structured `CmdResult`s                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Pipeline                                                   │
//! │  sampler → grid → render → replicate → document             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Pipeline
//!
//! 1. [`sampler`] draws terms without repetition until the pool runs out,
//!    and with repetition for the whole call when it is too small.
//! 2. [`grid`] arranges them into a square board, reserving the free cell at
//!    [`grid::bonus_index`].
//! 3. [`render`] lays one or more boards out as a [`markup`] tree: the
//!    template.
//! 4. [`replicate`] deep-copies the template once per sheet and re-samples
//!    every grid in the copy, leaving the free cell alone.
//! 5. [`document`] copies the sheets and the active [`styles`] into a single
//!    self-contained HTML document.
//!
//! Every step takes its inputs as parameters, including the random number
//! generator. Nothing reads global state, so a seeded `StdRng` reproduces a
//! batch exactly.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per command
//! - [`config`]: Stored defaults (`config.json`)
//! - [`model`]: Scope and page layout types
//! - [`terms`]: Parsing term lists
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod grid;
pub mod markup;
pub mod model;
pub mod render;
pub mod replicate;
pub mod sampler;
pub mod styles;
pub mod terms;

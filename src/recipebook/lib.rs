//! # Recipe Book Architecture
//!
//! recipebook is a **UI-agnostic recipe collection library** with a small CLI on
//! top. The library owns the data and its rules; any presentation layer (the
//! bundled CLI, a mobile shell, a web view) calls into it and re-renders from
//! what it returns.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints                        │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, parses index strings                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Resolves display indexes, shapes results and messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  RecipeStore (recipe_store.rs)                              │
//! │  - Active and trashed collections, invariants, persistence  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Key-value StorageBackend: FsBackend, MemBackend          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments, returns regular
//! Rust types, never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; installing a subscriber is the binary's job.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`recipe_store`]: The in-memory collections and their rules
//! - [`store`]: Key-value persistence
//! - [`model`]: `Recipe`, `RecipeDraft`, `RecipeId`
//! - [`index`]: Display indexes (`1`, `t1`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod recipe_store;
pub mod store;

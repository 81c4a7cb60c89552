//! # Command Layer
//!
//! One module per user action. Each `run` function takes the [`RecipeStore`]
//! plus plain Rust arguments and returns a [`CmdResult`]: the recipes it touched
//! or listed and the messages a UI should show. Nothing here prints.
//!
//! Commands speak in display indexes and translate them to ids through
//! [`helpers::resolve_indexes`] before touching the store. All indexes of a call
//! are resolved up front, since moving a recipe shifts the indexes after it.
//!
//! [`RecipeStore`]: crate::recipe_store::RecipeStore

use crate::config::RecipeBookConfig;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::model::{RecipeDraft, RecipeId};
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod purge;
pub mod restore;
pub mod save;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// The recipe a form is currently editing, with its fields as a draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub index: DisplayIndex,
    pub id: RecipeId,
    pub draft: RecipeDraft,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_recipes: Vec<DisplayRecipe>,
    pub listed_recipes: Vec<DisplayRecipe>,
    pub edit: Option<EditSession>,
    pub config: Option<RecipeBookConfig>,
    pub data_dir: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_recipes(mut self, recipes: Vec<DisplayRecipe>) -> Self {
        self.listed_recipes = recipes;
        self
    }

    pub fn with_config(mut self, config: RecipeBookConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True if any message reports a failure, e.g. a write that did not reach storage.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}

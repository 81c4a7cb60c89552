//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for any UI.
//!
//! It:
//! - **Dispatches** to the matching command
//! - **Normalizes inputs** (index strings such as `2`, `t1` or `1-3` into [`DisplayIndex`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It never prints and holds no business logic. Generic over [`StorageBackend`]:
//! production uses `RecipeBookApi<FsBackend>`, tests `RecipeBookApi<MemBackend>`.

use crate::commands;
use crate::error::{RecipeError, Result};
use crate::index::{parse_indexes, DisplayIndex, DisplayRecipe};
use crate::model::RecipeDraft;
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// The main API facade for recipe book operations.
pub struct RecipeBookApi<B: StorageBackend> {
    store: RecipeStore<B>,
    data_dir: PathBuf,
}

impl<B: StorageBackend> RecipeBookApi<B> {
    /// Wraps an already loaded store.
    pub fn new(store: RecipeStore<B>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            data_dir: data_dir.into(),
        }
    }

    pub fn store(&self) -> &RecipeStore<B> {
        &self.store
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Re-reads both collections from storage.
    pub fn reload(&mut self) -> commands::CmdResult {
        let report = self.store.load().clone();
        let mut result = commands::CmdResult::default();
        for collection in report.unreadable {
            result.add_message(commands::CmdMessage::warning(format!(
                "Stored {} could not be read and was loaded as empty.",
                collection
            )));
        }
        for (collection, id) in report.dropped_duplicates {
            result.add_message(commands::CmdMessage::warning(format!(
                "Ignored a duplicate of recipe {} in {}.",
                id, collection
            )));
        }
        result
    }

    pub fn list_recipes(&self) -> commands::CmdResult {
        commands::list::run(&self.store, false)
    }

    pub fn list_trash(&self) -> commands::CmdResult {
        commands::list::run(&self.store, true)
    }

    pub fn view_recipes<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn create_recipe(&mut self, draft: &RecipeDraft) -> commands::CmdResult {
        commands::create::run(&mut self.store, draft)
    }

    pub fn begin_edit(&mut self, index: &str) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::edit::begin(&mut self.store, index)
    }

    /// Saves the form: updates the recipe opened with [`begin_edit`](Self::begin_edit),
    /// or adds a new one when no edit is open.
    pub fn save_draft(&mut self, draft: &RecipeDraft) -> commands::CmdResult {
        commands::save::run(&mut self.store, draft)
    }

    pub fn cancel_edit(&mut self) -> commands::CmdResult {
        commands::edit::cancel(&mut self.store)
    }

    pub fn edit_recipe(
        &mut self,
        index: &str,
        patch: &commands::edit::RecipePatch,
    ) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::edit::run(&mut self.store, index, patch)
    }

    pub fn delete_recipes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    pub fn restore_recipes<I: AsRef<str>>(
        &mut self,
        indexes: &[I],
    ) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::restore::run(&mut self.store, &indexes)
    }

    pub fn purge_preview<I: AsRef<str>>(&self, indexes: &[I]) -> Result<Vec<DisplayRecipe>> {
        let indexes = parse_index_args(indexes)?;
        commands::purge::preview(&self.store, &indexes)
    }

    /// Purges the given trash indexes, or the whole trash when `indexes` is empty.
    pub fn purge_recipes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::purge::run(&mut self.store, &indexes)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<commands::CmdResult> {
        commands::init::run(&self.data_dir)
    }
}

fn parse_index_args<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    parse_indexes(inputs).map_err(RecipeError::Api)
}

fn parse_single_index(input: &str) -> Result<DisplayIndex> {
    DisplayIndex::from_str(input).map_err(RecipeError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::edit::RecipePatch;
pub use crate::commands::{CmdMessage, CmdResult, EditSession, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemBackend;

    fn api() -> RecipeBookApi<MemBackend> {
        RecipeBookApi::new(RecipeStore::open(MemBackend::new()), "memory://book")
    }

    #[test]
    fn dispatches_create_and_list() {
        let mut api = api();
        api.create_recipe(&RecipeDraft::titled("Soup"));

        let listed = api.list_recipes().listed_recipes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].index, DisplayIndex::Active(1));
        assert!(api.list_trash().listed_recipes.is_empty());
    }

    #[test]
    fn parses_index_strings_and_ranges() {
        let mut api = api();
        for title in ["A", "B", "C"] {
            api.create_recipe(&RecipeDraft::titled(title));
        }

        api.delete_recipes(&["1-2"]).unwrap();
        assert_eq!(api.list_trash().listed_recipes.len(), 2);

        api.restore_recipes(&["t2"]).unwrap();
        let titles: Vec<_> = api
            .list_recipes()
            .listed_recipes
            .into_iter()
            .map(|dr| dr.recipe.title)
            .collect();
        assert_eq!(titles, vec!["C", "B"]);
    }

    #[test]
    fn rejects_malformed_indexes() {
        let mut api = api();
        assert!(matches!(
            api.delete_recipes(&["soup"]),
            Err(RecipeError::Api(_))
        ));
        assert!(matches!(api.begin_edit("t"), Err(RecipeError::Api(_))));
    }

    #[test]
    fn form_flow_edit_then_save() {
        let mut api = api();
        api.create_recipe(&RecipeDraft::titled("A"));

        let session = api.begin_edit("1").unwrap().edit.unwrap();
        let mut draft = session.draft;
        draft.preparation_steps = "stir".into();
        api.save_draft(&draft);

        let listed = api.list_recipes().listed_recipes;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].recipe.id, session.id);
        assert_eq!(listed[0].recipe.preparation_steps, "stir");
    }

    #[test]
    fn purge_preview_then_purge() {
        let mut api = api();
        api.create_recipe(&RecipeDraft::titled("A"));
        api.delete_recipes(&["1"]).unwrap();

        let empty: [&str; 0] = [];
        assert_eq!(api.purge_preview(&empty).unwrap().len(), 1);
        api.purge_recipes(&empty).unwrap();
        assert!(api.list_trash().listed_recipes.is_empty());
    }

    #[test]
    fn reload_reports_unreadable_data() {
        let backend = MemBackend::new();
        backend.set_raw("trash", "oops");
        let mut api = RecipeBookApi::new(RecipeStore::new(backend), "memory://book");

        let result = api.reload();
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("trash"));
    }
}

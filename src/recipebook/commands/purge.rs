use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{index_trashed, DisplayIndex, DisplayRecipe};
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

use super::helpers::{report_persistence, resolve_indexes};
use super::view;

/// Returns what a purge would remove, without removing anything.
///
/// The CLI shows this in its confirmation prompt before calling [`run`].
/// An empty `indexes` targets the whole trash.
pub fn preview<B: StorageBackend>(
    store: &RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayRecipe>> {
    if indexes.is_empty() {
        return Ok(index_trashed(store.trashed()));
    }
    let targets = view::run(store, indexes)?.listed_recipes;
    Ok(targets
        .into_iter()
        .filter(|dr| dr.index.is_trashed())
        .collect())
}

/// Permanently removes trashed recipes.
///
/// Does NOT prompt for confirmation; that is the caller's job.
/// - If `indexes` is empty, empties the whole trash
/// - Active recipes are never purged; they must be deleted first
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if indexes.is_empty() {
        let mutation = store.empty_trash();
        if mutation.applied() {
            result.add_message(CmdMessage::success(format!(
                "Purged {} recipe(s) from the trash.",
                mutation.recipes.len()
            )));
        } else {
            result.add_message(CmdMessage::info("Trash is already empty."));
        }
        report_persistence(&mut result, &mutation);
        return Ok(result);
    }

    let resolved = resolve_indexes(store, indexes)?;
    for (display_index, id) in resolved {
        let mutation = store.purge(&id);
        match mutation.recipes.first() {
            Some(recipe) => result.add_message(CmdMessage::success(format!(
                "Purged ({}): {}",
                display_index, recipe.title
            ))),
            None => result.add_message(CmdMessage::info(format!(
                "Recipe {} is not in the trash. Delete it first.",
                display_index
            ))),
        }
        report_persistence(&mut result, &mutation);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn purges_selected_recipe() {
        let mut store = StoreFixture::new()
            .with_trashed_recipe("X")
            .with_trashed_recipe("Y")
            .store;

        run(&mut store, &[DisplayIndex::Trashed(2)]).unwrap();

        assert_eq!(store.trashed().len(), 1);
        assert_eq!(store.trashed()[0].title, "X");
    }

    #[test]
    fn no_indexes_empties_trash() {
        let mut store = StoreFixture::new()
            .with_recipe("Keep")
            .with_trashed_recipe("X")
            .with_trashed_recipe("Y")
            .store;

        let result = run(&mut store, &[]).unwrap();

        assert!(store.trashed().is_empty());
        assert_eq!(store.active().len(), 1);
        assert!(result.messages[0].content.contains("Purged 2"));
        let again = run(&mut store, &[]).unwrap();
        assert!(again.messages[0].content.contains("already empty"));
    }

    #[test]
    fn never_purges_active_recipes() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        let result = run(&mut store, &[DisplayIndex::Active(1)]).unwrap();

        assert_eq!(store.active().len(), 1);
        assert!(result.messages[0].content.contains("Delete it first"));
    }

    #[test]
    fn preview_lists_trash_targets_only() {
        let store = StoreFixture::new()
            .with_recipe("A")
            .with_trashed_recipe("X")
            .store;

        assert_eq!(preview(&store, &[]).unwrap().len(), 1);
        let targets =
            preview(&store, &[DisplayIndex::Active(1), DisplayIndex::Trashed(1)]).unwrap();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].recipe.title, "X");
        // Nothing removed
        assert_eq!(store.trashed().len(), 1);
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::model::RecipeId;
use crate::recipe_store::{Mutation, RecipeStore};
use crate::store::{Collection, StorageBackend};

/// Maps display indexes to recipe ids against the store's current collections.
///
/// Fails on the first index that does not exist. Repeated indexes are resolved once.
pub fn resolve_indexes<B: StorageBackend>(
    store: &RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, RecipeId)>> {
    let mut resolved: Vec<(DisplayIndex, RecipeId)> = Vec::with_capacity(indexes.len());

    for idx in indexes {
        if resolved.iter().any(|(seen, _)| seen == idx) {
            continue;
        }
        let (recipes, n) = match *idx {
            DisplayIndex::Active(n) => (store.active(), n),
            DisplayIndex::Trashed(n) => (store.trashed(), n),
        };
        let recipe = n
            .checked_sub(1)
            .and_then(|i| recipes.get(i))
            .ok_or_else(|| RecipeError::Api(format!("Index {} not found", idx)))?;
        resolved.push((*idx, recipe.id.clone()));
    }

    Ok(resolved)
}

/// Current display index and record for `id`, wherever it lives now.
pub fn locate<B: StorageBackend>(store: &RecipeStore<B>, id: &RecipeId) -> Option<DisplayRecipe> {
    let (collection, recipe) = store.get(id)?;
    let recipes = match collection {
        Collection::Active => store.active(),
        Collection::Trashed => store.trashed(),
    };
    let pos = recipes.iter().position(|r| &r.id == id)?;
    let index = match collection {
        Collection::Active => DisplayIndex::Active(pos + 1),
        Collection::Trashed => DisplayIndex::Trashed(pos + 1),
    };
    Some(DisplayRecipe {
        recipe: recipe.clone(),
        index,
    })
}

/// Adds an error message for every write the mutation could not persist.
pub fn report_persistence(result: &mut CmdResult, mutation: &Mutation) {
    for failure in &mutation.persist_errors {
        result.add_message(CmdMessage::error(format!(
            "Failed to save {}: {}. Changes are kept for this session only.",
            failure.collection, failure.error
        )));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resolves_active_and_trashed() {
        let store = StoreFixture::new()
            .with_recipe("A")
            .with_recipe("B")
            .with_trashed_recipe("T")
            .store;

        let resolved = resolve_indexes(
            &store,
            &[DisplayIndex::Active(2), DisplayIndex::Trashed(1)],
        )
        .unwrap();
        assert_eq!(resolved[0].1, store.active()[1].id);
        assert_eq!(resolved[1].1, store.trashed()[0].id);
    }

    #[test]
    fn unknown_index_is_an_error() {
        let store = StoreFixture::new().with_recipe("A").store;
        let err = resolve_indexes(&store, &[DisplayIndex::Trashed(1)]).unwrap_err();
        assert!(err.to_string().contains("t1"));
        assert!(resolve_indexes(&store, &[DisplayIndex::Active(0)]).is_err());
    }

    #[test]
    fn repeated_indexes_resolve_once() {
        let store = StoreFixture::new().with_recipe("A").store;
        let resolved = resolve_indexes(
            &store,
            &[DisplayIndex::Active(1), DisplayIndex::Active(1)],
        )
        .unwrap();
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn locate_follows_the_recipe() {
        let mut store = StoreFixture::new().with_recipe("A").with_recipe("B").store;
        let a = store.active()[0].id.clone();
        assert_eq!(locate(&store, &a).unwrap().index, DisplayIndex::Active(1));

        store.delete(&a);
        assert_eq!(locate(&store, &a).unwrap().index, DisplayIndex::Trashed(1));
    }
}

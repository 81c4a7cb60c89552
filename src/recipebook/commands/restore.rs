use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

use super::helpers::{locate, report_persistence, resolve_indexes};

/// Moves trashed recipes back to the end of the recipe list.
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let mutation = store.restore(&id);
        if mutation.applied() {
            if let Some(dr) = locate(store, &id) {
                result.add_message(CmdMessage::success(format!(
                    "Recipe restored ({} -> {}): {}",
                    display_index, dr.index, dr.recipe.title
                )));
                result.affected_recipes.push(dr);
            }
        } else {
            result.add_message(CmdMessage::info(format!(
                "Recipe {} is not in the trash.",
                display_index
            )));
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
    fn restores_to_end_of_list() {
        let mut store = StoreFixture::new()
            .with_trashed_recipe("Old")
            .with_recipe("A")
            .with_recipe("B")
            .store;

        let result = run(&mut store, &[DisplayIndex::Trashed(1)]).unwrap();

        let titles: Vec<_> = store.active().iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B", "Old"]);
        assert!(store.trashed().is_empty());
        assert_eq!(result.affected_recipes[0].index, DisplayIndex::Active(3));
        assert!(result.messages[0].content.contains("t1 -> 3"));
    }

    #[test]
    fn active_index_is_a_noop() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        let result = run(&mut store, &[DisplayIndex::Active(1)]).unwrap();

        assert_eq!(store.active().len(), 1);
        assert!(result.messages[0].content.contains("not in the trash"));
    }
}

use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayRecipe};
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

use super::helpers::resolve_indexes;

pub fn run<B: StorageBackend>(
    store: &RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut listed = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        if let Some((_, recipe)) = store.get(&id) {
            listed.push(DisplayRecipe {
                recipe: recipe.clone(),
                index,
            });
        }
    }
    Ok(CmdResult::default().with_listed_recipes(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_from_both_collections() {
        let store = StoreFixture::new()
            .with_recipe("A")
            .with_trashed_recipe("T")
            .store;

        let result = run(&store, &[DisplayIndex::Trashed(1), DisplayIndex::Active(1)]).unwrap();
        let titles: Vec<_> = result
            .listed_recipes
            .iter()
            .map(|dr| dr.recipe.title.as_str())
            .collect();
        assert_eq!(titles, vec!["T", "A"]);
    }

    #[test]
    fn fails_on_missing_index() {
        let store = StoreFixture::new().store;
        assert!(run(&store, &[DisplayIndex::Active(1)]).is_err());
    }
}

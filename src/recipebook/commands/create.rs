use crate::commands::CmdResult;
use crate::model::RecipeDraft;
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

/// Adds a new recipe, discarding any edit in progress.
pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>, draft: &RecipeDraft) -> CmdResult {
    store.cancel_edit();
    super::save::run(store, draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn creates_even_while_editing() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        let id = store.active()[0].id.clone();
        store.begin_edit(&id);

        run(&mut store, &RecipeDraft::titled("B"));

        assert_eq!(store.active().len(), 2);
        assert_eq!(store.active()[0].title, "A");
        assert_eq!(store.active()[1].title, "B");
    }
}

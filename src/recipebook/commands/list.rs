use crate::commands::CmdResult;
use crate::index::{index_active, index_trashed};
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &RecipeStore<B>, show_trashed: bool) -> CmdResult {
    let listed = if show_trashed {
        index_trashed(store.trashed())
    } else {
        index_active(store.active())
    };
    CmdResult::default().with_listed_recipes(listed)
}

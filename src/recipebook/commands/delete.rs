use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

use super::helpers::{locate, report_persistence, resolve_indexes};

/// Moves active recipes to the trash.
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let mutation = store.delete(&id);
        if mutation.applied() {
            if let Some(dr) = locate(store, &id) {
                result.add_message(CmdMessage::success(format!(
                    "Recipe moved to trash ({}): {}",
                    display_index, dr.recipe.title
                )));
                result.affected_recipes.push(dr);
            }
        } else {
            result.add_message(CmdMessage::info(format!(
                "Recipe {} is not in the recipe list.",
                display_index
            )));
        }
        report_persistence(&mut result, &mutation);
    }

    Ok(result)
}

use crate::commands::{CmdMessage, CmdResult};
use crate::model::RecipeDraft;
use crate::recipe_store::{Outcome, RecipeStore};
use crate::store::StorageBackend;

use super::helpers::{locate, report_persistence};

/// Commits the form: updates the recipe being edited, or adds a new one when
/// no edit is in progress.
pub fn run<B: StorageBackend>(store: &mut RecipeStore<B>, draft: &RecipeDraft) -> CmdResult {
    let editing = store.edit_context().cloned();
    let mutation = store.save(draft, editing.as_ref());
    let mut result = CmdResult::default();

    match mutation.outcome {
        Outcome::Applied => {
            let verb = if editing.is_some() { "updated" } else { "added" };
            for recipe in &mutation.recipes {
                if let Some(dr) = locate(store, &recipe.id) {
                    result.add_message(CmdMessage::success(format!(
                        "Recipe {} ({}): {}",
                        verb, dr.index, dr.recipe.title
                    )));
                    result.affected_recipes.push(dr);
                }
            }
        }
        Outcome::EmptyTitle => {
            result.add_message(CmdMessage::info(
                "Recipe title cannot be empty. Nothing saved.",
            ));
        }
        Outcome::NotFound => {
            result.add_message(CmdMessage::warning(
                "The recipe being edited is no longer in the list. Nothing saved.",
            ));
        }
    }

    report_persistence(&mut result, &mutation);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::MemBackend;

    #[test]
    fn adds_when_not_editing() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        let result = run(&mut store, &RecipeDraft::titled("B"));

        assert_eq!(store.active().len(), 2);
        assert_eq!(result.affected_recipes[0].index, DisplayIndex::Active(2));
        assert!(result.messages[0].content.contains("Recipe added (2): B"));
    }

    #[test]
    fn updates_the_edit_target() {
        let mut store = StoreFixture::new().with_recipe("A").with_recipe("B").store;
        let id = store.active()[0].id.clone();
        store.begin_edit(&id);

        let result = run(&mut store, &RecipeDraft::new("A2", "salt", ""));

        assert_eq!(store.active().len(), 2);
        assert_eq!(store.active()[0].title, "A2");
        assert!(result.messages[0].content.contains("Recipe updated (1): A2"));
        assert_eq!(store.edit_context(), None);
    }

    #[test]
    fn empty_title_is_reported_not_saved() {
        let mut store = StoreFixture::new().store;
        let result = run(&mut store, &RecipeDraft::titled(""));

        assert!(store.active().is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(!result.has_errors());
    }

    #[test]
    fn persistence_failure_is_an_error_message() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let mut store = RecipeStore::open(&backend);

        let result = run(&mut store, &RecipeDraft::titled("Soup"));

        assert_eq!(store.active().len(), 1);
        assert!(result.has_errors());
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Failed to save recipes")));
    }
}

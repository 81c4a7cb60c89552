use crate::commands::{CmdMessage, CmdResult, EditSession};
use crate::error::{RecipeError, Result};
use crate::index::DisplayIndex;
use crate::model::RecipeDraft;
use crate::recipe_store::RecipeStore;
use crate::store::StorageBackend;

use super::helpers::resolve_indexes;

/// Field overrides applied on top of a recipe's current values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub preparation_steps: Option<String>,
}

impl RecipePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none() && self.preparation_steps.is_none()
    }

    pub fn apply_to(&self, mut draft: RecipeDraft) -> RecipeDraft {
        if let Some(title) = &self.title {
            draft.title = title.clone();
        }
        if let Some(ingredients) = &self.ingredients {
            draft.ingredients = ingredients.clone();
        }
        if let Some(steps) = &self.preparation_steps {
            draft.preparation_steps = steps.clone();
        }
        draft
    }
}

/// Opens an active recipe for editing and returns its fields.
pub fn begin<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    index: DisplayIndex,
) -> Result<CmdResult> {
    if index.is_trashed() {
        return Err(RecipeError::Api(format!(
            "Recipe {} is in the trash. Restore it before editing.",
            index
        )));
    }
    let resolved = resolve_indexes(store, &[index])?;
    let mut result = CmdResult::default();

    for (index, id) in resolved {
        if let Some(draft) = store.begin_edit(&id) {
            result.edit = Some(EditSession { index, id, draft });
        }
    }

    Ok(result)
}

pub fn cancel<B: StorageBackend>(store: &mut RecipeStore<B>) -> CmdResult {
    let mut result = CmdResult::default();
    if store.edit_context().is_some() {
        store.cancel_edit();
        result.add_message(CmdMessage::info("Edit cancelled."));
    }
    result
}

/// Edits one recipe in a single step: open it, apply the patch, save.
pub fn run<B: StorageBackend>(
    store: &mut RecipeStore<B>,
    index: DisplayIndex,
    patch: &RecipePatch,
) -> Result<CmdResult> {
    let opened = begin(store, index)?;
    let Some(session) = opened.edit else {
        return Ok(opened);
    };
    if patch.is_empty() {
        store.cancel_edit();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to change for recipe ({}): {}",
            session.index, session.draft.title
        )));
        return Ok(result);
    }
    let draft = patch.apply_to(session.draft);
    let result = super::save::run(store, &draft);
    // A refused save keeps the edit open; a one-step edit must not.
    store.cancel_edit();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn begin_returns_current_fields() {
        let mut store = StoreFixture::new().with_recipes(2).store;

        let result = begin(&mut store, DisplayIndex::Active(2)).unwrap();
        let session = result.edit.unwrap();

        assert_eq!(session.draft.title, "Recipe 2");
        assert_eq!(session.draft.ingredients, "Ingredients for recipe 2");
        assert_eq!(store.edit_context(), Some(&session.id));
        assert_eq!(store.active().len(), 2);
    }

    #[test]
    fn trashed_recipes_cannot_be_edited() {
        let mut store = StoreFixture::new().with_trashed_recipe("T").store;
        assert!(begin(&mut store, DisplayIndex::Trashed(1)).is_err());
        assert_eq!(store.edit_context(), None);
    }

    #[test]
    fn patch_changes_only_given_fields() {
        let mut store = StoreFixture::new().with_recipe("A").with_recipe("B").store;
        let before_id = store.active()[0].id.clone();
        let patch = RecipePatch {
            ingredients: Some("new".into()),
            ..Default::default()
        };

        run(&mut store, DisplayIndex::Active(1), &patch).unwrap();

        let a = &store.active()[0];
        assert_eq!(a.id, before_id);
        assert_eq!(a.title, "A");
        assert_eq!(a.ingredients, "new");
        assert_eq!(store.active()[1].title, "B");
    }

    #[test]
    fn blanking_the_title_is_refused() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        let patch = RecipePatch {
            title: Some(String::new()),
            ..Default::default()
        };

        let result = run(&mut store, DisplayIndex::Active(1), &patch).unwrap();

        assert_eq!(store.active()[0].title, "A");
        assert!(result.messages[0].content.contains("cannot be empty"));
    }

    #[test]
    fn empty_patch_leaves_no_edit_open() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        run(&mut store, DisplayIndex::Active(1), &RecipePatch::default()).unwrap();
        assert_eq!(store.edit_context(), None);
    }

    #[test]
    fn cancel_clears_context() {
        let mut store = StoreFixture::new().with_recipe("A").store;
        begin(&mut store, DisplayIndex::Active(1)).unwrap();
        let result = cancel(&mut store);
        assert_eq!(store.edit_context(), None);
        assert_eq!(result.messages.len(), 1);
        assert!(cancel(&mut store).messages.is_empty());
    }
}

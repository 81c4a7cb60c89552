use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a recipe.
///
/// New ids are creation timestamps in milliseconds, but any string read back
/// from storage is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value of timestamp-style ids, if this is one.
    pub fn as_millis(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Form values that have not been committed to a [`Recipe`] yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: String,
    pub preparation_steps: String,
}

impl RecipeDraft {
    pub fn new(
        title: impl Into<String>,
        ingredients: impl Into<String>,
        preparation_steps: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            ingredients: ingredients.into(),
            preparation_steps: preparation_steps.into(),
        }
    }

    /// A draft with only a title, the other fields empty.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Title is the only required field.
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    // Older saves predate these fields
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub preparation_steps: String,
}

impl Recipe {
    /// Builds a recipe from a draft. Returns `None` when the draft has no title.
    pub fn new(id: RecipeId, draft: &RecipeDraft) -> Option<Self> {
        if !draft.has_title() {
            return None;
        }
        Some(Self {
            id,
            title: draft.title.clone(),
            ingredients: draft.ingredients.clone(),
            preparation_steps: draft.preparation_steps.clone(),
        })
    }

    /// Replaces every field except `id` with the draft's values.
    pub fn apply(&mut self, draft: &RecipeDraft) {
        self.title = draft.title.clone();
        self.ingredients = draft.ingredients.clone();
        self.preparation_steps = draft.preparation_steps.clone();
    }

    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.clone(),
            ingredients: self.ingredients.clone(),
            preparation_steps: self.preparation_steps.clone(),
        }
    }
}

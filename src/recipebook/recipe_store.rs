//! # Recipe Store
//!
//! [`RecipeStore`] owns the two recipe collections and is the single source of
//! truth for them. The presentation layer only ever holds copies.
//!
//! ## Membership
//!
//! A recipe lives in exactly one of `active` or `trashed`:
//!
//! ```text
//!            save (new)                 delete
//!   draft ─────────────────► active ─────────────► trashed ──► purge (gone)
//!                              ▲                      │
//!                              └──────── restore ─────┘
//! ```
//!
//! Restoring appends to the end of `active`; the original position is not kept.
//!
//! ## Persistence
//!
//! Every mutating operation updates memory first, then writes the collections it
//! touched to the [`StorageBackend`]. A failed write is logged and reported in
//! the returned [`Mutation`], but memory is never rolled back: for the rest of
//! the session the in-memory state is authoritative.
//!
//! ## Silent skips
//!
//! An empty title or an unknown id never produces an error. The operation is a
//! no-op and the returned [`Mutation`] says why ([`Outcome::EmptyTitle`],
//! [`Outcome::NotFound`]).
//!
//! All operations take `&mut self`. Callers on several threads must put the
//! store behind a mutex.

use crate::error::RecipeError;
use crate::model::{Recipe, RecipeDraft, RecipeId};
use crate::store::{Collection, StorageBackend};
use chrono::Utc;
use std::collections::HashSet;
use tracing::{debug, error, warn};
use uuid::Uuid;

/// What a mutating operation did to the collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    /// The draft had no title; nothing changed.
    EmptyTitle,
    /// The id was not in the collection the operation works on; nothing changed.
    NotFound,
}

/// A write to the backing store that failed after memory was updated.
#[derive(Debug)]
pub struct PersistError {
    pub collection: Collection,
    pub error: RecipeError,
}

/// Result of a mutating [`RecipeStore`] operation.
#[derive(Debug)]
pub struct Mutation {
    pub outcome: Outcome,
    /// Records created, updated, moved or destroyed, as they are after the operation.
    pub recipes: Vec<Recipe>,
    pub persist_errors: Vec<PersistError>,
}

impl Mutation {
    fn skipped(outcome: Outcome) -> Self {
        Self {
            outcome,
            recipes: Vec::new(),
            persist_errors: Vec::new(),
        }
    }

    pub fn applied(&self) -> bool {
        self.outcome == Outcome::Applied
    }

    /// True when every write this operation attempted succeeded.
    pub fn persisted(&self) -> bool {
        self.persist_errors.is_empty()
    }
}

/// Problems found while loading. None of them fail the load.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    /// Collections whose stored value could not be read or decoded.
    pub unreadable: Vec<Collection>,
    /// Records dropped because their id was already taken.
    pub dropped_duplicates: Vec<(Collection, RecipeId)>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.unreadable.is_empty() && self.dropped_duplicates.is_empty()
    }
}

pub struct RecipeStore<B: StorageBackend> {
    backend: B,
    active: Vec<Recipe>,
    trashed: Vec<Recipe>,
    editing: Option<RecipeId>,
    pretty_json: bool,
    load_report: LoadReport,
}

impl<B: StorageBackend> RecipeStore<B> {
    /// An empty store over `backend`. Call [`load`](Self::load) to read persisted state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            active: Vec::new(),
            trashed: Vec::new(),
            editing: None,
            pretty_json: true,
            load_report: LoadReport::default(),
        }
    }

    /// Creates the store and loads both collections.
    pub fn open(backend: B) -> Self {
        let mut store = Self::new(backend);
        store.load();
        store
    }

    pub fn with_pretty_json(mut self, pretty: bool) -> Self {
        self.pretty_json = pretty;
        self
    }

    /// Reads both collections from the backing store, replacing memory.
    ///
    /// Missing keys load as empty. Unreadable ones also load as empty and are
    /// recorded in the returned report.
    pub fn load(&mut self) -> &LoadReport {
        let mut report = LoadReport::default();
        let active = self.read_collection(Collection::Active, &mut report);
        let trashed = self.read_collection(Collection::Trashed, &mut report);

        let mut seen = HashSet::new();
        self.active = dedupe(Collection::Active, active, &mut seen, &mut report);
        self.trashed = dedupe(Collection::Trashed, trashed, &mut seen, &mut report);
        self.editing = None;

        debug!(
            active = self.active.len(),
            trashed = self.trashed.len(),
            "loaded recipe book"
        );
        self.load_report = report;
        &self.load_report
    }

    pub fn load_report(&self) -> &LoadReport {
        &self.load_report
    }

    pub fn active(&self) -> &[Recipe] {
        &self.active
    }

    pub fn trashed(&self) -> &[Recipe] {
        &self.trashed
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Finds a recipe in either collection.
    pub fn get(&self, id: &RecipeId) -> Option<(Collection, &Recipe)> {
        find(&self.active, id)
            .map(|i| (Collection::Active, &self.active[i]))
            .or_else(|| find(&self.trashed, id).map(|i| (Collection::Trashed, &self.trashed[i])))
    }

    /// Id of the recipe currently being edited, if any.
    pub fn edit_context(&self) -> Option<&RecipeId> {
        self.editing.as_ref()
    }

    /// Returns the fields of an active recipe as a draft and remembers it as
    /// the edit target. Collections are not touched.
    pub fn begin_edit(&mut self, id: &RecipeId) -> Option<RecipeDraft> {
        let draft = find(&self.active, id).map(|i| self.active[i].to_draft())?;
        self.editing = Some(id.clone());
        Some(draft)
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Creates a recipe, or updates the one identified by `editing`.
    ///
    /// - empty title: no-op, the edit context is kept so the form can be fixed
    /// - `editing` unknown: no-op, nothing is created
    /// - otherwise `active` is persisted and the edit context cleared
    pub fn save(&mut self, draft: &RecipeDraft, editing: Option<&RecipeId>) -> Mutation {
        if !draft.has_title() {
            debug!("save skipped: empty title");
            return Mutation::skipped(Outcome::EmptyTitle);
        }

        let recipe = match editing {
            Some(id) => {
                let Some(pos) = find(&self.active, id) else {
                    debug!(%id, "save skipped: recipe is not active");
                    self.editing = None;
                    return Mutation::skipped(Outcome::NotFound);
                };
                self.active[pos].apply(draft);
                debug!(%id, "recipe updated");
                self.active[pos].clone()
            }
            None => {
                let id = self.next_id();
                let Some(recipe) = Recipe::new(id, draft) else {
                    return Mutation::skipped(Outcome::EmptyTitle);
                };
                debug!(id = %recipe.id, "recipe created");
                self.active.push(recipe.clone());
                recipe
            }
        };

        self.editing = None;
        self.applied(vec![recipe], &[Collection::Active])
    }

    /// Moves an active recipe to the end of the trash.
    pub fn delete(&mut self, id: &RecipeId) -> Mutation {
        let Some(pos) = find(&self.active, id) else {
            return Mutation::skipped(Outcome::NotFound);
        };
        let recipe = self.active.remove(pos);
        self.trashed.push(recipe.clone());
        if self.editing.as_ref() == Some(id) {
            self.editing = None;
        }
        debug!(%id, "recipe moved to trash");
        self.applied(vec![recipe], &Collection::ALL)
    }

    /// Moves a trashed recipe to the end of `active`.
    pub fn restore(&mut self, id: &RecipeId) -> Mutation {
        let Some(pos) = find(&self.trashed, id) else {
            return Mutation::skipped(Outcome::NotFound);
        };
        let recipe = self.trashed.remove(pos);
        self.active.push(recipe.clone());
        debug!(%id, "recipe restored");
        self.applied(vec![recipe], &Collection::ALL)
    }

    /// Permanently removes a trashed recipe.
    pub fn purge(&mut self, id: &RecipeId) -> Mutation {
        let Some(pos) = find(&self.trashed, id) else {
            return Mutation::skipped(Outcome::NotFound);
        };
        let recipe = self.trashed.remove(pos);
        debug!(%id, "recipe purged");
        self.applied(vec![recipe], &[Collection::Trashed])
    }

    /// Permanently removes every trashed recipe with a single write.
    pub fn empty_trash(&mut self) -> Mutation {
        if self.trashed.is_empty() {
            return Mutation::skipped(Outcome::NotFound);
        }
        let purged = std::mem::take(&mut self.trashed);
        debug!(count = purged.len(), "trash emptied");
        self.applied(purged, &[Collection::Trashed])
    }

    fn applied(&self, recipes: Vec<Recipe>, touched: &[Collection]) -> Mutation {
        Mutation {
            outcome: Outcome::Applied,
            recipes,
            persist_errors: self.persist(touched),
        }
    }

    fn persist(&self, collections: &[Collection]) -> Vec<PersistError> {
        let mut errors = Vec::new();
        for &collection in collections {
            if let Err(error) = self.write_collection(collection) {
                error!(%collection, %error, "failed to persist recipes");
                errors.push(PersistError { collection, error });
            }
        }
        errors
    }

    fn write_collection(&self, collection: Collection) -> crate::error::Result<()> {
        let recipes = match collection {
            Collection::Active => &self.active,
            Collection::Trashed => &self.trashed,
        };
        let json = if self.pretty_json {
            serde_json::to_string_pretty(recipes)?
        } else {
            serde_json::to_string(recipes)?
        };
        self.backend.write(collection.key(), &json)
    }

    fn read_collection(&self, collection: Collection, report: &mut LoadReport) -> Vec<Recipe> {
        let raw = match self.backend.read(collection.key()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!(%collection, %error, "could not read recipes, starting empty");
                report.unreadable.push(collection);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(recipes) => recipes,
            Err(error) => {
                warn!(%collection, %error, "stored recipes are not valid JSON, starting empty");
                report.unreadable.push(collection);
                Vec::new()
            }
        }
    }

    /// Timestamp in milliseconds, bumped past every numeric id already in use.
    ///
    /// When no number is left above the newest id, falls back to a random uuid.
    fn next_id(&self) -> RecipeId {
        let now = Utc::now().timestamp_millis();
        let newest = self
            .active
            .iter()
            .chain(&self.trashed)
            .filter_map(|r| r.id.as_millis())
            .max();
        match newest {
            Some(n) if n >= now => match n.checked_add(1) {
                Some(next) => RecipeId::new(next.to_string()),
                None => {
                    warn!(newest = n, "numeric ids exhausted, using a uuid id");
                    RecipeId::new(Uuid::new_v4().to_string())
                }
            },
            _ => RecipeId::new(now.to_string()),
        }
    }
}

fn find(recipes: &[Recipe], id: &RecipeId) -> Option<usize> {
    recipes.iter().position(|r| &r.id == id)
}

fn dedupe(
    collection: Collection,
    recipes: Vec<Recipe>,
    seen: &mut HashSet<RecipeId>,
    report: &mut LoadReport,
) -> Vec<Recipe> {
    let mut kept = Vec::with_capacity(recipes.len());
    for recipe in recipes {
        if seen.insert(recipe.id.clone()) {
            kept.push(recipe);
        } else {
            warn!(%collection, id = %recipe.id, "dropping recipe with duplicate id");
            report.dropped_duplicates.push((collection, recipe.id));
        }
    }
    kept
}

//! # Display Indexes
//!
//! Recipe ids are timestamps, which nobody wants to type. Lists show short,
//! 1-based positional indexes instead, and commands accept them back:
//!
//! - `1`, `2`, ...: recipes in the active list, in insertion order
//! - `t1`, `t2`, ...: recipes in the trash, in the order they were trashed
//!
//! Indexes are only valid against the collections they were computed from. They
//! are recomputed on every call and never stored.

use crate::model::Recipe;
use std::fmt;
use std::str::FromStr;

/// A user-facing index for a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Active(usize),
    Trashed(usize),
}

impl DisplayIndex {
    pub fn is_trashed(&self) -> bool {
        matches!(self, DisplayIndex::Trashed(_))
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DisplayIndex::Active(i) => i.to_string(),
            DisplayIndex::Trashed(i) => format!("t{}", i),
        };
        f.pad(&s)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = match s.strip_prefix('t') {
            Some(rest) => rest.parse().map(DisplayIndex::Trashed),
            None => s.parse().map(DisplayIndex::Active),
        };
        match parsed {
            Ok(DisplayIndex::Active(0)) | Ok(DisplayIndex::Trashed(0)) | Err(_) => {
                Err(format!("Invalid index format: {}", s))
            }
            Ok(idx) => Ok(idx),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecipe {
    pub recipe: Recipe,
    pub index: DisplayIndex,
}

/// Assigns display indexes to the active recipes, in order.
pub fn index_active(recipes: &[Recipe]) -> Vec<DisplayRecipe> {
    index_with(recipes, DisplayIndex::Active)
}

/// Assigns display indexes to the trashed recipes, in order.
pub fn index_trashed(recipes: &[Recipe]) -> Vec<DisplayRecipe> {
    index_with(recipes, DisplayIndex::Trashed)
}

fn index_with(recipes: &[Recipe], make: fn(usize) -> DisplayIndex) -> Vec<DisplayRecipe> {
    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            recipe: recipe.clone(),
            index: make(i + 1),
        })
        .collect()
}

/// Widest range a single argument may expand to.
pub const MAX_RANGE_SPAN: usize = 1000;

/// Parses a single index or an inclusive range such as `2-4` or `t1-t3`.
///
/// Both endpoints must be the same kind, start must be <= end, and the range
/// may cover at most [`MAX_RANGE_SPAN`] indexes. Whether the indexes exist is
/// checked later, during resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start_str, end_str)) = s.split_once('-') {
        if !start_str.is_empty() {
            let start = DisplayIndex::from_str(start_str)?;
            let end = DisplayIndex::from_str(end_str)?;
            return expand_range(start, end);
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

fn expand_range(start: DisplayIndex, end: DisplayIndex) -> Result<Vec<DisplayIndex>, String> {
    let (s, e, make): (usize, usize, fn(usize) -> DisplayIndex) = match (start, end) {
        (DisplayIndex::Active(s), DisplayIndex::Active(e)) => (s, e, DisplayIndex::Active),
        (DisplayIndex::Trashed(s), DisplayIndex::Trashed(e)) => (s, e, DisplayIndex::Trashed),
        _ => {
            return Err(format!(
                "Invalid range: cannot mix index types ({} and {})",
                start, end
            ))
        }
    };
    if s > e {
        return Err(format!(
            "Invalid range: start ({}) must be <= end ({})",
            start, end
        ));
    }
    if e - s >= MAX_RANGE_SPAN {
        return Err(format!(
            "Invalid range: {}-{} covers more than {} recipes",
            start, end, MAX_RANGE_SPAN
        ));
    }
    Ok((s..=e).map(make).collect())
}

/// Parses every input, expanding ranges, keeping the given order.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>, String> {
    let mut indexes = Vec::new();
    for input in inputs {
        indexes.extend(parse_index_or_range(input.as_ref())?);
    }
    Ok(indexes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeDraft;

    fn recipe(id: &str, title: &str) -> Recipe {
        Recipe::new(id.into(), &RecipeDraft::titled(title)).unwrap()
    }

    #[test]
    fn test_indexing_keeps_insertion_order() {
        let active = vec![recipe("1", "A"), recipe("2", "B")];
        let trashed = vec![recipe("3", "C")];

        let listed = index_active(&active);
        assert_eq!(listed[0].index, DisplayIndex::Active(1));
        assert_eq!(listed[0].recipe.title, "A");
        assert_eq!(listed[1].index, DisplayIndex::Active(2));

        let trash = index_trashed(&trashed);
        assert_eq!(trash[0].index, DisplayIndex::Trashed(1));
        assert_eq!(trash[0].recipe.title, "C");
    }

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex::Active(1)));
        assert_eq!(DisplayIndex::from_str("42"), Ok(DisplayIndex::Active(42)));
        assert_eq!(DisplayIndex::from_str("t1"), Ok(DisplayIndex::Trashed(1)));
        assert_eq!(DisplayIndex::from_str("t9"), Ok(DisplayIndex::Trashed(9)));

        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("t0").is_err());
        assert!(DisplayIndex::from_str("t").is_err());
        assert!(DisplayIndex::from_str("soup").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for idx in [DisplayIndex::Active(3), DisplayIndex::Trashed(2)] {
            assert_eq!(DisplayIndex::from_str(&idx.to_string()), Ok(idx));
        }
    }

    #[test]
    fn test_ranges() {
        assert_eq!(
            parse_index_or_range("2-4"),
            Ok(vec![
                DisplayIndex::Active(2),
                DisplayIndex::Active(3),
                DisplayIndex::Active(4)
            ])
        );
        assert_eq!(
            parse_index_or_range("t1-t2"),
            Ok(vec![DisplayIndex::Trashed(1), DisplayIndex::Trashed(2)])
        );
        assert_eq!(
            parse_index_or_range("3-3"),
            Ok(vec![DisplayIndex::Active(3)])
        );
        assert!(parse_index_or_range("4-2").is_err());
        assert!(parse_index_or_range("1-t2").is_err());
        assert!(parse_index_or_range("-1").is_err());
    }

    #[test]
    fn test_oversized_ranges_are_rejected() {
        assert_eq!(parse_index_or_range("1-1000").map(|v| v.len()), Ok(1000));
        assert!(parse_index_or_range("1-1001").is_err());
        assert!(parse_index_or_range("t1-t99999999999999").is_err());
        let err = parse_index_or_range("1-99999999999999").unwrap_err();
        assert!(err.contains("covers more than"));
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>4}.", DisplayIndex::Trashed(1)), "  t1.");
        assert_eq!(format!("{:>4}.", DisplayIndex::Active(12)), "  12.");
    }

    #[test]
    fn test_parse_indexes_flattens() {
        let parsed = parse_indexes(&["1", "t2-t3"]).unwrap();
        assert_eq!(
            parsed,
            vec![
                DisplayIndex::Active(1),
                DisplayIndex::Trashed(2),
                DisplayIndex::Trashed(3)
            ]
        );
    }
}

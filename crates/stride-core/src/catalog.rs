//! Read-only workout catalog.
//!
//! The catalog is owned outside the planner: plans refer to workouts by id
//! only, and every display attribute is looked up here when needed. A
//! missing id is not an error; lookups simply return `None`.

use std::path::Path;

use serde::Deserialize;

use crate::{
    error::{Result, StrideError},
    models::{Program, Workout, WorkoutFilter},
};

/// Source of workout and program records.
pub trait WorkoutCatalog {
    /// All workouts, in catalog order.
    fn workouts(&self) -> &[Workout];

    /// All programs, in catalog order.
    fn programs(&self) -> &[Program];

    /// Workouts passing `filter`, catalog order preserved.
    fn list_workouts(&self, filter: &WorkoutFilter) -> Vec<&Workout> {
        self.workouts().iter().filter(|w| filter.matches(w)).collect()
    }

    /// Looks up a workout by id.
    fn find_workout(&self, id: &str) -> Option<&Workout> {
        self.workouts().iter().find(|w| w.id == id)
    }
}

/// In-memory catalog loaded from a JSON document.
///
/// # Examples
///
/// ```rust
/// use stride_core::{StaticCatalog, WorkoutCatalog, models::{Level, WorkoutFilter}};
///
/// let catalog = StaticCatalog::builtin().unwrap();
/// let advanced = catalog.list_workouts(&WorkoutFilter::for_level(Some(Level::Advanced)));
/// assert!(advanced.iter().all(|w| w.level == Level::Advanced));
/// assert!(catalog.find_workout("no-such-workout").is_none());
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticCatalog {
    #[serde(default)]
    workouts: Vec<Workout>,
    #[serde(default)]
    programs: Vec<Program>,
}

impl StaticCatalog {
    /// Creates a catalog from explicit records.
    pub fn new(workouts: Vec<Workout>, programs: Vec<Program>) -> Self {
        Self { workouts, programs }
    }

    /// The catalog bundled with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_json(include_str!("../assets/catalog.json"))
    }

    /// Parses a catalog document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a catalog document from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| StrideError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }
}

impl WorkoutCatalog for StaticCatalog {
    fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    fn programs(&self) -> &[Program] {
        &self.programs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = StaticCatalog::builtin().expect("builtin catalog should parse");
        assert!(!catalog.workouts().is_empty());
        assert!(!catalog.programs().is_empty());
    }

    #[test]
    fn test_builtin_catalog_ids_are_unique() {
        let catalog = StaticCatalog::builtin().unwrap();
        let mut ids: Vec<&str> = catalog.workouts().iter().map(|w| w.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_list_workouts_filters_by_muscle_and_search() {
        let catalog = StaticCatalog::builtin().unwrap();

        let back = catalog.list_workouts(&WorkoutFilter {
            muscle: Some("BACK".to_string()),
            ..Default::default()
        });
        assert!(!back.is_empty());
        assert!(back.iter().all(|w| w.muscles.iter().any(|m| m == "back")));

        let found = catalog.list_workouts(&WorkoutFilter {
            search: Some("lever".to_string()),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "front-lever-lab");
    }

    #[test]
    fn test_empty_filter_keeps_catalog_order() {
        let catalog = StaticCatalog::builtin().unwrap();
        let all = catalog.list_workouts(&WorkoutFilter::default());
        let expected: Vec<&str> = catalog.workouts().iter().map(|w| w.id.as_str()).collect();
        let actual: Vec<&str> = all.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_from_json_with_missing_optional_fields() {
        let catalog = StaticCatalog::from_json(
            r#"{"workouts": [{"id": "w1", "title": "One", "level": "Expert", "duration": "10 min"}]}"#,
        )
        .unwrap();
        let workout = catalog.find_workout("w1").unwrap();
        assert_eq!(workout.level, Level::Expert);
        assert!(workout.muscles.is_empty());
        assert!(catalog.programs().is_empty());
    }

    #[test]
    fn test_from_json_rejects_unknown_level() {
        let result = StaticCatalog::from_json(
            r#"{"workouts": [{"id": "w1", "title": "One", "level": "Godlike", "duration": "10 min"}]}"#,
        );
        assert!(matches!(result, Err(StrideError::Serialization { .. })));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = StaticCatalog::from_path("/definitely/not/here/catalog.json");
        assert!(matches!(result, Err(StrideError::FileSystem { .. })));
    }
}

//! Catalog records: workouts and pre-built programs.

use serde::{Deserialize, Serialize};

use super::Level;

/// A workout as published by the catalog.
///
/// Plans only ever store the `id`; every other field is looked up in the
/// catalog when it is displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workout {
    /// Stable catalog identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Difficulty tag, matched against the wizard's level selection
    pub level: Level,

    /// Duration label, e.g. `"25 min"`
    pub duration: String,

    /// Number of exercises in the workout
    #[serde(default)]
    pub exercise_count: u32,

    /// Image reference for front ends
    #[serde(default)]
    pub image_url: String,

    /// Muscle group identifiers trained by the workout
    #[serde(default)]
    pub muscles: Vec<String>,
}

/// A multi-week program from the catalog's programs tab.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Program {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub weeks: u32,
    pub days_per_week: u32,
    pub level: Level,
}

/// Filter options for catalog workout queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutFilter {
    /// Only workouts tagged with this level
    pub level: Option<Level>,

    /// Only workouts training this muscle group (case-insensitive)
    pub muscle: Option<String>,

    /// Case-insensitive substring of the title
    pub search: Option<String>,
}

impl WorkoutFilter {
    /// Filter used by the wizard's workout picker.
    ///
    /// ```rust
    /// use stride_core::models::{Level, WorkoutFilter};
    ///
    /// let filter = WorkoutFilter::for_level(Some(Level::Advanced));
    /// assert_eq!(filter.level, Some(Level::Advanced));
    /// assert!(filter.search.is_none());
    /// ```
    pub fn for_level(level: Option<Level>) -> Self {
        Self {
            level,
            ..Default::default()
        }
    }

    /// Whether a workout passes every criterion that is set.
    pub fn matches(&self, workout: &Workout) -> bool {
        if self.level.is_some_and(|level| level != workout.level) {
            return false;
        }
        if let Some(muscle) = &self.muscle {
            if !workout
                .muscles
                .iter()
                .any(|m| m.eq_ignore_ascii_case(muscle))
            {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !workout
                .title
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

impl From<&crate::params::ListWorkouts> for WorkoutFilter {
    fn from(params: &crate::params::ListWorkouts) -> Self {
        Self {
            level: params.level,
            muscle: params.muscle.clone(),
            search: params.search.clone(),
        }
    }
}

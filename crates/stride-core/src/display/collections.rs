//! Collection wrapper types for displaying groups of records.
//!
//! Each wrapper prints its items in order and a fixed message when empty.

use std::fmt;

use crate::models::{PlanSummary, Program, Workout};

/// Newtype wrapper for displaying catalog workouts.
///
/// # Examples
///
/// ```rust
/// use stride_core::{display::WorkoutList, StaticCatalog, WorkoutCatalog};
/// use stride_core::models::WorkoutFilter;
///
/// let catalog = StaticCatalog::builtin().unwrap();
/// let list = WorkoutList(catalog.list_workouts(&WorkoutFilter::default()));
/// assert!(format!("{list}").contains("Push Foundations"));
///
/// let empty = WorkoutList(Vec::new());
/// assert_eq!(format!("{empty}"), "No workouts found.\n");
/// ```
pub struct WorkoutList<'a>(pub Vec<&'a Workout>);

impl WorkoutList<'_> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for WorkoutList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No workouts found.");
        }
        for workout in &self.0 {
            write!(f, "{workout}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying catalog programs.
pub struct ProgramList<'a>(pub &'a [Program]);

impl fmt::Display for ProgramList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No programs found.");
        }
        for program in self.0 {
            write!(f, "{program}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying saved plan summaries.
pub struct PlanSummaries(pub Vec<PlanSummary>);

impl PlanSummaries {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of plan summaries in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the plan summaries.
    pub fn iter(&self) -> std::slice::Iter<'_, PlanSummary> {
        self.0.iter()
    }
}

impl IntoIterator for PlanSummaries {
    type Item = PlanSummary;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for PlanSummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plans found.")
        } else {
            for plan in &self.0 {
                write!(f, "{plan}")?;
            }
            Ok(())
        }
    }
}

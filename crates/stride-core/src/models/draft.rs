//! The in-progress plan built by the wizard and its hand-off snapshot.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{Goal, Level, SessionDuration, Weekday};
use crate::error::{Result, StrideError};

/// Workouts assigned to one training day, in the order they were added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanDay {
    pub day: Weekday,
    pub workout_ids: Vec<String>,
}

impl PlanDay {
    /// An unpopulated day.
    pub fn empty(day: Weekday) -> Self {
        Self {
            day,
            workout_ids: Vec::new(),
        }
    }

    /// Whether `workout_id` is already assigned to this day.
    pub fn contains(&self, workout_id: &str) -> bool {
        self.workout_ids.iter().any(|id| id == workout_id)
    }
}

/// Draft plan accumulated across the wizard's steps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftPlan {
    /// Free-text name, entered on the review step (kept untrimmed)
    pub name: String,

    pub goal: Option<Goal>,

    pub level: Option<Level>,

    /// Selected training days; iteration order is week order
    pub training_days: BTreeSet<Weekday>,

    pub session_duration: SessionDuration,

    /// One entry per training day as of the last reconciliation
    pub day_schedule: Vec<PlanDay>,
}

impl Default for DraftPlan {
    fn default() -> Self {
        Self {
            name: String::new(),
            goal: None,
            level: None,
            training_days: [Weekday::Mon, Weekday::Wed, Weekday::Fri].into_iter().collect(),
            session_duration: SessionDuration::default(),
            day_schedule: Vec::new(),
        }
    }
}

impl DraftPlan {
    /// Schedule entry for `day`, if the day is scheduled.
    pub fn day(&self, day: Weekday) -> Option<&PlanDay> {
        self.day_schedule.iter().find(|d| d.day == day)
    }

    pub(crate) fn day_mut(&mut self, day: Weekday) -> Option<&mut PlanDay> {
        self.day_schedule.iter_mut().find(|d| d.day == day)
    }

    /// Whether any scheduled day has at least one workout.
    pub fn has_assignments(&self) -> bool {
        self.day_schedule.iter().any(|d| !d.workout_ids.is_empty())
    }

    /// Total number of workout assignments across all days.
    pub fn workout_count(&self) -> usize {
        self.day_schedule.iter().map(|d| d.workout_ids.len()).sum()
    }

    /// Freeze the draft into the form handed to a plan sink.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::InvalidInput` if no goal or no level has been
    /// selected.
    pub fn snapshot(&self) -> Result<PlanSnapshot> {
        let goal = self
            .goal
            .ok_or_else(|| StrideError::invalid_input("goal").with_reason("no goal selected"))?;
        let level = self
            .level
            .ok_or_else(|| StrideError::invalid_input("level").with_reason("no level selected"))?;

        Ok(PlanSnapshot {
            name: self.name.clone(),
            goal,
            level,
            training_days: self.training_days.iter().copied().collect(),
            session_duration: self.session_duration,
            day_schedule: self.day_schedule.clone(),
        })
    }
}

/// Immutable copy of a finished draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSnapshot {
    pub name: String,
    pub goal: Goal,
    pub level: Level,
    /// Training days in week order
    pub training_days: Vec<Weekday>,
    pub session_duration: SessionDuration,
    pub day_schedule: Vec<PlanDay>,
}

impl PlanSnapshot {
    /// Total number of workout assignments across all days.
    pub fn workout_count(&self) -> usize {
        self.day_schedule.iter().map(|d| d.workout_ids.len()).sum()
    }
}

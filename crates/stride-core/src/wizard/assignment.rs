//! Workout assignment: the per-day picker and add/remove actions.

use log::debug;

use super::{PlanWizard, WizardStep};
use crate::{
    catalog::WorkoutCatalog,
    error::{Result, StrideError},
    models::{Weekday, Workout, WorkoutFilter},
};

/// One entry in the workout picker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerOption<'c> {
    pub workout: &'c Workout,
    /// Already in the picker day's list; picking it again does nothing
    pub already_added: bool,
}

/// A scheduled day with its workouts resolved against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct DayAssignment<'c> {
    pub day: Weekday,
    /// Resolved workouts in assignment order; ids missing from the catalog
    /// are left out
    pub workouts: Vec<&'c Workout>,
}

impl PlanWizard {
    /// Opens the workout picker for a scheduled day.
    pub fn open_picker(&mut self, day: Weekday) -> Result<()> {
        self.ensure_step("pick", WizardStep::WorkoutAssignment)?;
        if self.draft.day(day).is_none() {
            return Err(StrideError::DayNotScheduled { day });
        }
        self.picker = Some(day);
        Ok(())
    }

    /// Closes the picker without adding anything.
    pub fn dismiss_picker(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.picker = None;
        Ok(())
    }

    /// Workouts offered by the open picker.
    ///
    /// When a level was chosen only workouts of that level are offered.
    /// Empty when no picker is open.
    pub fn picker_options<'c, C>(&self, catalog: &'c C) -> Vec<PickerOption<'c>>
    where
        C: WorkoutCatalog + ?Sized,
    {
        let Some(day) = self.picker.and_then(|day| self.draft.day(day)) else {
            return Vec::new();
        };

        catalog
            .list_workouts(&WorkoutFilter::for_level(self.draft.level))
            .into_iter()
            .map(|workout| PickerOption {
                workout,
                already_added: day.contains(&workout.id),
            })
            .collect()
    }

    /// Adds a workout offered by the open picker to the picker's day.
    ///
    /// Returns `true` and closes the picker when the workout was appended.
    /// Picking a workout the day already has is a no-op that returns `false`
    /// and leaves the picker open.
    ///
    /// # Errors
    ///
    /// - `StrideError::InvalidInput` if no picker is open, or the workout
    ///   exists but is not offered for the selected level
    /// - `StrideError::WorkoutNotFound` if the id is not in the catalog
    pub fn pick_workout<C>(&mut self, catalog: &C, workout_id: &str) -> Result<bool>
    where
        C: WorkoutCatalog + ?Sized,
    {
        self.ensure_step("pick", WizardStep::WorkoutAssignment)?;
        let day = self.picker.ok_or_else(|| {
            StrideError::invalid_input("picker").with_reason("no workout picker is open")
        })?;

        let workout = catalog
            .find_workout(workout_id)
            .ok_or_else(|| StrideError::WorkoutNotFound {
                id: workout_id.to_string(),
            })?;
        if !WorkoutFilter::for_level(self.draft.level).matches(workout) {
            return Err(StrideError::invalid_input("workout").with_reason(format!(
                "'{}' is a {} workout and is not offered for this plan's level",
                workout.id,
                workout.level.as_str()
            )));
        }

        let added = self.add_workout(day, workout_id)?;
        if added {
            self.picker = None;
        }
        Ok(added)
    }

    /// Appends `workout_id` to `day` unless it is already there.
    ///
    /// Returns whether the day's list changed.
    pub fn add_workout(&mut self, day: Weekday, workout_id: &str) -> Result<bool> {
        self.ensure_step("add", WizardStep::WorkoutAssignment)?;
        let entry = self
            .draft
            .day_mut(day)
            .ok_or(StrideError::DayNotScheduled { day })?;

        if entry.contains(workout_id) {
            return Ok(false);
        }
        entry.workout_ids.push(workout_id.to_string());
        debug!("Assigned workout {workout_id} to {day:?}");
        Ok(true)
    }

    /// Removes `workout_id` from `day` if present.
    ///
    /// Returns whether the day's list changed.
    pub fn remove_workout(&mut self, day: Weekday, workout_id: &str) -> Result<bool> {
        self.ensure_step("remove", WizardStep::WorkoutAssignment)?;
        let entry = self
            .draft
            .day_mut(day)
            .ok_or(StrideError::DayNotScheduled { day })?;

        let before = entry.workout_ids.len();
        entry.workout_ids.retain(|id| id != workout_id);
        Ok(entry.workout_ids.len() != before)
    }

    /// Every scheduled day with its workouts resolved against `catalog`.
    pub fn assignments<'c, C>(&self, catalog: &'c C) -> Vec<DayAssignment<'c>>
    where
        C: WorkoutCatalog + ?Sized,
    {
        self.draft
            .day_schedule
            .iter()
            .map(|entry| DayAssignment {
                day: entry.day,
                workouts: entry
                    .workout_ids
                    .iter()
                    .filter_map(|id| catalog.find_workout(id))
                    .collect(),
            })
            .collect()
    }
}

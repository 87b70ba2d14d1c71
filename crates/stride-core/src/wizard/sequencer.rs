//! Step gates, navigation, and day-schedule reconciliation.

use std::collections::BTreeMap;

use log::debug;

use super::{Navigation, PlanWizard, WizardStatus, WizardStep};
use crate::{
    error::Result,
    models::{PlanDay, Weekday},
};

impl PlanWizard {
    /// Why the active step's gate is closed, or `None` if it is open.
    ///
    /// `Review` is always open; confirmation is a separate action.
    pub fn blocked_reason(&self) -> Option<&'static str> {
        let draft = &self.draft;
        match self.step {
            WizardStep::Goal if draft.goal.is_none() => Some("select a goal"),
            WizardStep::Level if draft.level.is_none() => Some("select a level"),
            WizardStep::Schedule if draft.training_days.is_empty() => {
                Some("select at least one training day")
            }
            WizardStep::WorkoutAssignment if !draft.has_assignments() => {
                Some("assign at least one workout to a day")
            }
            _ => None,
        }
    }

    /// Whether the active step's completion predicate holds.
    pub fn can_advance(&self) -> bool {
        self.blocked_reason().is_none()
    }

    /// Moves to the next step if the active step's gate is open.
    ///
    /// A closed gate, or the forward edge of `Review`, leaves every piece of
    /// state untouched and reports [`Navigation::Blocked`]. Entering
    /// `WorkoutAssignment` reconciles the day schedule with the selected
    /// training days.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::WizardClosed` if the wizard is no longer active.
    pub fn advance(&mut self) -> Result<Navigation> {
        self.ensure_active()?;

        let next = match self.step.next() {
            Some(next) if self.can_advance() => next,
            _ => {
                debug!("Advance blocked on {:?}", self.step);
                return Ok(Navigation::Blocked(self.step));
            }
        };

        if next == WizardStep::WorkoutAssignment {
            self.reconcile_schedule();
        }

        self.picker = None;
        self.step = next;
        debug!("Wizard advanced to {next:?}");
        Ok(Navigation::Moved(next))
    }

    /// Moves to the previous step; on `Goal` the wizard is abandoned instead.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::WizardClosed` if the wizard is no longer active.
    pub fn retreat(&mut self) -> Result<Navigation> {
        self.ensure_active()?;
        self.picker = None;

        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                debug!("Wizard moved back to {previous:?}");
                Ok(Navigation::Moved(previous))
            }
            None => {
                self.status = WizardStatus::Abandoned;
                debug!("Wizard abandoned; draft discarded");
                Ok(Navigation::Exited)
            }
        }
    }

    /// Completion of the wizard as a percentage, based on the active step.
    pub fn progress_percent(&self) -> f64 {
        self.step.position() as f64 / WizardStep::ALL.len() as f64 * 100.0
    }

    /// Rebuilds the day schedule to hold exactly the selected training days.
    ///
    /// Days are laid out in week order. A retained day keeps its workouts; a
    /// deselected day's entry is dropped; a newly selected day starts empty.
    fn reconcile_schedule(&mut self) {
        let schedule = std::mem::take(&mut self.draft.day_schedule);
        let mut previous: BTreeMap<Weekday, Vec<String>> = schedule
            .into_iter()
            .map(|entry| (entry.day, entry.workout_ids))
            .collect();

        self.draft.day_schedule = self
            .draft
            .training_days
            .iter()
            .map(|&day| PlanDay {
                day,
                workout_ids: previous.remove(&day).unwrap_or_default(),
            })
            .collect();

        debug!(
            "Reconciled day schedule: {} day(s), {} dropped",
            self.draft.day_schedule.len(),
            previous.len()
        );
    }
}

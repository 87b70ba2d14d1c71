//! Goal, level, schedule, and name inputs.
//!
//! Single-select inputs replace any earlier choice. None of these actions
//! validate beyond "is this the right step"; minimums are enforced by the
//! advance gate.

use super::{PlanWizard, WizardStep};
use crate::{
    error::Result,
    models::{Goal, Level, SessionDuration, Weekday},
};

impl PlanWizard {
    pub fn select_goal(&mut self, goal: Goal) -> Result<()> {
        self.ensure_step("goal", WizardStep::Goal)?;
        self.draft.goal = Some(goal);
        Ok(())
    }

    pub fn select_level(&mut self, level: Level) -> Result<()> {
        self.ensure_step("level", WizardStep::Level)?;
        self.draft.level = Some(level);
        Ok(())
    }

    /// Flips membership of `day` in the training days.
    ///
    /// Returns whether the day is selected afterwards. The day schedule is
    /// not touched here; it is reconciled when entering the assignment step.
    pub fn toggle_day(&mut self, day: Weekday) -> Result<bool> {
        self.ensure_step("toggle", WizardStep::Schedule)?;
        let days = &mut self.draft.training_days;
        if days.remove(&day) {
            Ok(false)
        } else {
            days.insert(day);
            Ok(true)
        }
    }

    pub fn select_duration(&mut self, duration: SessionDuration) -> Result<()> {
        self.ensure_step("duration", WizardStep::Schedule)?;
        self.draft.session_duration = duration;
        Ok(())
    }

    /// Sets the plan name. Stored as given, without trimming.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.ensure_step("name", WizardStep::Review)?;
        self.draft.name = name.into();
        Ok(())
    }
}

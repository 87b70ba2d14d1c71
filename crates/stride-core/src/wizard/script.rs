//! Running the wizard from a declarative parameter set.

use std::collections::BTreeSet;

use super::{Navigation, PlanWizard};
use crate::{
    catalog::WorkoutCatalog,
    error::{Result, StrideError},
    models::Weekday,
    params::CreatePlan,
};

impl PlanWizard {
    /// Drives a fresh wizard through every step using `params`, going through
    /// the same actions and gates a user would, and stops on `Review`.
    ///
    /// # Errors
    ///
    /// - `StrideError::StepBlocked` when a step's gate refuses to advance
    /// - any error from the step actions (unknown workout, level mismatch)
    pub fn from_script<C>(params: &CreatePlan, catalog: &C) -> Result<Self>
    where
        C: WorkoutCatalog + ?Sized,
    {
        let mut wizard = PlanWizard::new();

        if let Some(goal) = params.goal {
            wizard.select_goal(goal)?;
        }
        wizard.advance_or_block()?;

        if let Some(level) = params.level {
            wizard.select_level(level)?;
        }
        wizard.advance_or_block()?;

        if let Some(days) = &params.days {
            let wanted: BTreeSet<Weekday> = days.iter().copied().collect();
            for day in Weekday::ALL {
                if wanted.contains(&day) != wizard.draft.training_days.contains(&day) {
                    wizard.toggle_day(day)?;
                }
            }
        }
        if let Some(duration) = params.duration {
            wizard.select_duration(duration)?;
        }
        wizard.advance_or_block()?;

        for assignment in &params.assignments {
            wizard.open_picker(assignment.day)?;
            wizard.pick_workout(catalog, &assignment.workout_id)?;
            wizard.dismiss_picker()?;
        }
        wizard.advance_or_block()?;

        if let Some(name) = &params.name {
            wizard.set_name(name.as_str())?;
        }
        Ok(wizard)
    }

    fn advance_or_block(&mut self) -> Result<()> {
        match self.advance()? {
            Navigation::Moved(_) => Ok(()),
            Navigation::Blocked(step) => Err(StrideError::StepBlocked {
                step,
                reason: self.blocked_reason().unwrap_or("nothing follows").to_string(),
            }),
            Navigation::Exited => Err(StrideError::WizardClosed),
        }
    }
}

//! Review aggregate and confirmation.

use log::{info, warn};

use super::{PlanWizard, WizardStatus, WizardStep};
use crate::{
    catalog::WorkoutCatalog,
    error::Result,
    models::{Goal, Level, SessionDuration, Weekday},
    store::{PlanSink, Submission},
};

/// A workout line on the review screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewWorkout {
    pub id: String,
    pub title: String,
    pub duration: String,
}

/// A populated day on the review screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDay {
    pub day: Weekday,
    pub workouts: Vec<ReviewWorkout>,
}

/// Read-only summary of everything the draft holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReview {
    pub name: String,
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    pub training_days: Vec<Weekday>,
    pub session_duration: SessionDuration,
    /// Only days with at least one assigned workout
    pub days: Vec<ReviewDay>,
}

impl PlanWizard {
    /// Builds the review summary, resolving workout titles in `catalog`.
    ///
    /// Workout ids that are no longer in the catalog are skipped.
    pub fn review<C>(&self, catalog: &C) -> PlanReview
    where
        C: WorkoutCatalog + ?Sized,
    {
        let draft = &self.draft;
        let days = draft
            .day_schedule
            .iter()
            .filter(|entry| !entry.workout_ids.is_empty())
            .map(|entry| ReviewDay {
                day: entry.day,
                workouts: entry
                    .workout_ids
                    .iter()
                    .filter_map(|id| catalog.find_workout(id))
                    .map(|w| ReviewWorkout {
                        id: w.id.clone(),
                        title: w.title.clone(),
                        duration: w.duration.clone(),
                    })
                    .collect(),
            })
            .collect();

        PlanReview {
            name: draft.name.clone(),
            goal: draft.goal,
            level: draft.level,
            training_days: draft.training_days.iter().copied().collect(),
            session_duration: draft.session_duration,
            days,
        }
    }

    /// Hands a snapshot of the draft to `sink`, exactly once per call.
    ///
    /// On [`Submission::Accepted`] the wizard completes and accepts no further
    /// actions. On [`Submission::Rejected`] it stays active on `Review` with
    /// the draft untouched so the user can try again.
    ///
    /// # Errors
    ///
    /// - `StrideError::WizardClosed` if the wizard is no longer active
    /// - `StrideError::WrongStep` if the wizard is not on `Review`
    pub fn confirm<S>(&mut self, sink: &mut S) -> Result<Submission>
    where
        S: PlanSink + ?Sized,
    {
        self.ensure_step("confirm", WizardStep::Review)?;
        let snapshot = self.draft.snapshot()?;

        let submission = sink.submit_plan(&snapshot);
        match &submission {
            Submission::Accepted { id } => {
                info!("Plan {id} accepted ({} workouts)", snapshot.workout_count());
                self.status = WizardStatus::Completed;
            }
            Submission::Rejected { reason } => {
                warn!("Plan submission rejected: {reason}");
            }
        }
        Ok(submission)
    }
}

//! Plan builder wizard.
//!
//! The wizard walks a user through five fixed steps and accumulates their
//! choices in a single [`DraftPlan`]. Each step owns a slice of the draft and
//! only accepts the actions that belong to it; a per-step gate decides whether
//! the user may continue.
//!
//! ```text
//! Goal ──▶ Level ──▶ Schedule ──▶ WorkoutAssignment ──▶ Review ──▶ confirm
//!   │                     (reconcile days on entry)                   │
//!   ▼                                                                 ▼
//! exit (abandon)                                            PlanSink::submit_plan
//! ```
//!
//! ## Submodules
//!
//! - [`sequencer`]: step gates, `advance`/`retreat`, progress, day reconciliation
//! - [`selection`]: goal, level, schedule, and name inputs
//! - [`assignment`]: the per-day workout picker and add/remove actions
//! - [`review`]: the read-only review aggregate and confirmation
//! - [`script`]: running the whole wizard from a [`CreatePlan`] parameter set
//!
//! # Examples
//!
//! ```rust
//! use stride_core::{
//!     models::{Goal, Level, Weekday},
//!     MemoryPlanStore, Navigation, PlanWizard, StaticCatalog, Submission, WizardStep,
//! };
//!
//! # fn main() -> stride_core::Result<()> {
//! let catalog = StaticCatalog::builtin()?;
//! let mut wizard = PlanWizard::new();
//!
//! wizard.select_goal(Goal::Strength)?;
//! wizard.advance()?;
//! wizard.select_level(Level::Beginner)?;
//! wizard.advance()?;
//! wizard.advance()?; // Mon, Wed, Fri are preselected
//! assert_eq!(wizard.step(), WizardStep::WorkoutAssignment);
//!
//! wizard.open_picker(Weekday::Mon)?;
//! wizard.pick_workout(&catalog, "push-foundations")?;
//! assert_eq!(wizard.advance()?, Navigation::Moved(WizardStep::Review));
//!
//! let mut store = MemoryPlanStore::new();
//! let submission = wizard.confirm(&mut store)?;
//! assert!(matches!(submission, Submission::Accepted { .. }));
//! # Ok(())
//! # }
//! ```
//!
//! [`CreatePlan`]: crate::params::CreatePlan

use log::debug;

use crate::{
    error::{Result, StrideError},
    models::{DraftPlan, Weekday},
};

pub mod assignment;
pub mod review;
pub mod script;
pub mod selection;
pub mod sequencer;


pub use assignment::{DayAssignment, PickerOption};
pub use review::{PlanReview, ReviewDay, ReviewWorkout};

/// The wizard's steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Goal,
    Level,
    Schedule,
    WorkoutAssignment,
    Review,
}

impl WizardStep {
    /// Every step in sequence order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Goal,
        WizardStep::Level,
        WizardStep::Schedule,
        WizardStep::WorkoutAssignment,
        WizardStep::Review,
    ];

    /// 1-based position within [`WizardStep::ALL`].
    pub fn position(self) -> usize {
        match self {
            WizardStep::Goal => 1,
            WizardStep::Level => 2,
            WizardStep::Schedule => 3,
            WizardStep::WorkoutAssignment => 4,
            WizardStep::Review => 5,
        }
    }

    /// The following step, or `None` at `Review`.
    pub fn next(self) -> Option<WizardStep> {
        Self::ALL.get(self.position()).copied()
    }

    /// The preceding step, or `None` at `Goal`.
    pub fn previous(self) -> Option<WizardStep> {
        self.position()
            .checked_sub(2)
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Heading shown for the step.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Goal => "What's your goal?",
            WizardStep::Level => "Your fitness level?",
            WizardStep::Schedule => "Set your schedule",
            WizardStep::WorkoutAssignment => "Add workouts",
            WizardStep::Review => "Review your plan",
        }
    }

    /// Short lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Goal => "goal",
            WizardStep::Level => "level",
            WizardStep::Schedule => "schedule",
            WizardStep::WorkoutAssignment => "workouts",
            WizardStep::Review => "review",
        }
    }
}

/// Lifecycle of a wizard instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStatus {
    /// Accepting actions
    #[default]
    Active,

    /// The user backed out of the first step; the draft was discarded
    Abandoned,

    /// The draft was accepted by a plan sink
    Completed,
}

/// Outcome of [`PlanWizard::advance`] and [`PlanWizard::retreat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The wizard is now on this step
    Moved(WizardStep),

    /// The gate refused; the wizard is still on this step, unchanged
    Blocked(WizardStep),

    /// The wizard was left from its first step
    Exited,
}

/// A single plan-building session.
///
/// Owns the draft exclusively for its whole lifetime; the draft is only ever
/// exposed read-only or as a [`PlanSnapshot`](crate::models::PlanSnapshot).
#[derive(Debug, Clone, Default)]
pub struct PlanWizard {
    step: WizardStep,
    status: WizardStatus,
    draft: DraftPlan,
    picker: Option<Weekday>,
}

impl PlanWizard {
    /// Starts a wizard on the `Goal` step with an empty draft.
    pub fn new() -> Self {
        debug!("Starting plan wizard");
        Self::default()
    }

    /// The active step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    /// Read-only view of the draft.
    pub fn draft(&self) -> &DraftPlan {
        &self.draft
    }

    /// Day the workout picker is open for, if any.
    pub fn picker_day(&self) -> Option<Weekday> {
        self.picker
    }

    fn ensure_active(&self) -> Result<()> {
        if self.status == WizardStatus::Active {
            Ok(())
        } else {
            Err(StrideError::WizardClosed)
        }
    }

    /// Fails unless the wizard is active and on `expected`.
    fn ensure_step(&self, action: &'static str, expected: WizardStep) -> Result<()> {
        self.ensure_active()?;
        if self.step != expected {
            return Err(StrideError::WrongStep {
                action,
                expected,
                current: self.step,
            });
        }
        Ok(())
    }
}

//! Data models for the catalog, the draft plan, and stored plans.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping data structures separate from their
//! markdown presentation.
//!
//! # Examples
//!
//! ```rust
//! use stride_core::models::{DraftPlan, Goal, Level, Weekday};
//!
//! let mut draft = DraftPlan::default();
//! assert_eq!(
//!     draft.training_days.iter().copied().collect::<Vec<_>>(),
//!     vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]
//! );
//!
//! draft.goal = Some(Goal::Strength);
//! draft.level = Some(Level::Beginner);
//! let snapshot = draft.snapshot().unwrap();
//! assert_eq!(snapshot.goal, Goal::Strength);
//! ```

pub mod draft;
pub mod options;
pub mod plan;
pub mod weekday;
pub mod workout;

#[cfg(test)]
mod tests;

pub use draft::{DraftPlan, PlanDay, PlanSnapshot};
pub use options::{Goal, Level, SessionDuration};
pub use plan::{PlanSummary, SavedPlan};
pub use weekday::Weekday;
pub use workout::{Program, Workout, WorkoutFilter};

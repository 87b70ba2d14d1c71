//! Core library for the stride plan builder.
//!
//! stride builds weekly calisthenics plans. A [`PlanWizard`] walks the user
//! through goal, level, schedule, and workout choices against a read-only
//! [`WorkoutCatalog`], and on confirmation hands the finished plan to a
//! [`PlanSink`], typically the SQLite-backed [`Database`] behind a
//! [`PlanLibrary`].
//!
//! - [`models`]: option enums, catalog records, the draft plan and snapshots
//! - [`catalog`]: the catalog trait and the JSON-backed [`StaticCatalog`]
//! - [`wizard`]: the step sequencer and its step-local actions
//! - [`store`] / [`db`] / [`library`]: where confirmed plans go
//! - [`display`]: markdown formatting for the terminal
//!
//! # Quick Start
//!
//! ```rust
//! use stride_core::{
//!     models::{Goal, Level, Weekday},
//!     params::{Assignment, CreatePlan},
//!     MemoryPlanStore, PlanWizard, StaticCatalog, Submission,
//! };
//!
//! # fn main() -> stride_core::Result<()> {
//! let catalog = StaticCatalog::builtin()?;
//! let params = CreatePlan {
//!     name: Some("Morning strength".to_string()),
//!     goal: Some(Goal::Strength),
//!     level: Some(Level::Beginner),
//!     days: Some(vec![Weekday::Tue, Weekday::Thu]),
//!     assignments: vec![Assignment {
//!         day: Weekday::Tue,
//!         workout_id: "pull-up-starter".to_string(),
//!     }],
//!     ..Default::default()
//! };
//!
//! let mut wizard = PlanWizard::from_script(&params, &catalog)?;
//! println!("{}", wizard.review(&catalog));
//!
//! let mut store = MemoryPlanStore::new();
//! assert_eq!(wizard.confirm(&mut store)?, Submission::Accepted { id: 1 });
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod library;
pub mod models;
pub mod params;
pub mod store;
pub mod wizard;

// Re-export commonly used types
pub use catalog::{StaticCatalog, WorkoutCatalog};
pub use db::Database;
pub use error::{Result, StrideError};
pub use library::{PlanLibrary, PlanLibraryBuilder};
pub use models::{
    DraftPlan, Goal, Level, PlanDay, PlanSnapshot, PlanSummary, Program, SavedPlan,
    SessionDuration, Weekday, Workout, WorkoutFilter,
};
pub use store::{MemoryPlanStore, PlanSink, Submission};
pub use wizard::{Navigation, PlanReview, PlanWizard, WizardStatus, WizardStep};

//! Display formatting wrappers.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! the wrappers here add context that a bare model does not carry, such as
//! the catalog needed to turn workout ids into titles, or an empty-list
//! message.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers        │    │   Markdown      │
//! │  + Catalog      │───▶│ (views, lists,  │───▶│   (terminal)    │
//! │                 │    │  results)       │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers (WorkoutList, ProgramList, PlanSummaries)
//! - [`review`]: PlanReview formatting, PlanDetails, WizardView
//! - [`results`]: operation results (CreateResult, DeleteResult)
//! - [`status`]: one-line outcomes (OperationStatus)
//! - [`datetime`]: timestamp formatting
//! - [`models`]: Display implementations for domain models
//!
//! ## Example
//!
//! ```rust
//! use stride_core::{display::WizardView, PlanWizard, StaticCatalog};
//!
//! let catalog = StaticCatalog::builtin().unwrap();
//! let wizard = PlanWizard::new();
//! let screen = WizardView::new(&wizard, &catalog).to_string();
//! assert!(screen.starts_with("# Create Plan (1/5) 20%"));
//! assert!(screen.contains("To continue: select a goal."));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod review;
pub mod status;

pub use collections::{PlanSummaries, ProgramList, WorkoutList};
pub use datetime::LocalDateTime;
pub use results::{CreateResult, DeleteResult};
pub use review::{PlanDetails, WizardView};
pub use status::OperationStatus;

/// Title shown for a plan; an empty name reads as "Untitled plan".
pub(crate) fn plan_title(name: &str) -> &str {
    if name.is_empty() {
        "Untitled plan"
    } else {
        name
    }
}

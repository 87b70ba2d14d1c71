//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::review::PlanDetails;
use crate::{catalog::WorkoutCatalog, models::SavedPlan};

/// Wrapper type for displaying a newly stored plan.
///
/// Prints a confirmation line followed by the full plan details.
pub struct CreateResult<'a, C: ?Sized> {
    pub details: PlanDetails<'a, C>,
}

impl<'a, C: WorkoutCatalog + ?Sized> CreateResult<'a, C> {
    /// Create a new CreateResult wrapper.
    pub fn new(plan: &'a SavedPlan, catalog: &'a C) -> Self {
        Self {
            details: PlanDetails::new(plan, catalog),
        }
    }
}

impl<C: WorkoutCatalog + ?Sized> fmt::Display for CreateResult<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created plan with ID: {}", self.details.plan.id)?;
        writeln!(f)?;
        write!(f, "{}", self.details)
    }
}

/// Wrapper type for displaying the result of a plan deletion.
pub struct DeleteResult<'a> {
    pub plan: &'a SavedPlan,
}

impl<'a> DeleteResult<'a> {
    /// Create a new DeleteResult wrapper.
    pub fn new(plan: &'a SavedPlan) -> Self {
        Self { plan }
    }
}

impl fmt::Display for DeleteResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = &self.plan.plan.name;
        if name.is_empty() {
            writeln!(f, "Deleted untitled plan (ID: {})", self.plan.id)
        } else {
            writeln!(f, "Deleted plan '{name}' (ID: {})", self.plan.id)
        }
    }
}

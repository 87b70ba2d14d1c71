//! Stored plans and their list summaries.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Goal, Level, PlanSnapshot};

/// A plan accepted by a plan store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedPlan {
    /// Identifier assigned by the store
    pub id: u64,

    /// The snapshot exactly as submitted
    #[serde(flatten)]
    pub plan: PlanSnapshot,

    /// Timestamp when the plan was stored (UTC)
    pub created_at: Timestamp,
}

/// Summary information about a stored plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanSummary {
    pub id: u64,
    pub name: String,
    pub goal: Goal,
    pub level: Level,
    /// Number of training days per week
    pub days_per_week: u32,
    /// Workout assignments across the week
    pub total_workouts: u32,
    pub created_at: Timestamp,
}

impl From<&SavedPlan> for PlanSummary {
    fn from(saved: &SavedPlan) -> Self {
        Self {
            id: saved.id,
            name: saved.plan.name.clone(),
            goal: saved.plan.goal,
            level: saved.plan.level,
            days_per_week: saved.plan.training_days.len() as u32,
            total_workouts: saved.plan.workout_count() as u32,
            created_at: saved.created_at,
        }
    }
}

//! Plan persistence seam.
//!
//! The wizard never stores anything itself; on confirmation it hands a
//! [`PlanSnapshot`] to a [`PlanSink`]. The SQLite [`Database`](crate::Database)
//! is the durable sink; [`MemoryPlanStore`] keeps plans in process.

use jiff::Timestamp;

use crate::models::{PlanSnapshot, SavedPlan};

/// Outcome of handing a plan to a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Stored under `id`
    Accepted { id: u64 },

    /// Declined; the caller keeps its draft
    Rejected { reason: String },
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

/// Receiver of finished plans.
pub trait PlanSink {
    /// Accepts or rejects a finished plan.
    fn submit_plan(&mut self, plan: &PlanSnapshot) -> Submission;
}

/// In-process plan store.
#[derive(Debug, Default)]
pub struct MemoryPlanStore {
    plans: Vec<SavedPlan>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored plans in submission order.
    pub fn plans(&self) -> &[SavedPlan] {
        &self.plans
    }

    pub fn get(&self, id: u64) -> Option<&SavedPlan> {
        self.plans.iter().find(|p| p.id == id)
    }
}

impl PlanSink for MemoryPlanStore {
    fn submit_plan(&mut self, plan: &PlanSnapshot) -> Submission {
        let id = self.plans.last().map_or(1, |p| p.id + 1);
        self.plans.push(SavedPlan {
            id,
            plan: plan.clone(),
            created_at: Timestamp::now(),
        });
        Submission::Accepted { id }
    }
}

//! Parameter structures for stride operations.
//!
//! These are interface-agnostic: the CLI defines its own clap argument
//! structs and converts them into these types with `From` impls, so the core
//! stays free of CLI framework concerns.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │
//! │  (clap derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::{Goal, Level, SessionDuration, Weekday};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for deleting a saved plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeletePlan {
    pub id: u64,
    /// Must be true for the deletion to go ahead
    pub confirmed: bool,
}

/// Parameters for browsing catalog workouts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListWorkouts {
    pub level: Option<Level>,
    pub muscle: Option<String>,
    pub search: Option<String>,
}

/// A single workout-to-day assignment, written `Day=workout-id`.
///
/// ```rust
/// use stride_core::{models::Weekday, params::Assignment};
///
/// let a: Assignment = "Mon=push-foundations".parse().unwrap();
/// assert_eq!(a.day, Weekday::Mon);
/// assert_eq!(a.workout_id, "push-foundations");
/// assert!("push-foundations".parse::<Assignment>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub day: Weekday,
    pub workout_id: String,
}

impl FromStr for Assignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (day, workout_id) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid assignment '{s}': expected DAY=WORKOUT_ID"))?;
        let workout_id = workout_id.trim();
        if workout_id.is_empty() {
            return Err(format!("Invalid assignment '{s}': missing workout id"));
        }
        Ok(Assignment {
            day: day.parse()?,
            workout_id: workout_id.to_string(),
        })
    }
}

/// Everything needed to run the plan wizard without interaction.
///
/// Unset fields keep the wizard's defaults; a missing goal or level makes
/// the corresponding step refuse to advance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlan {
    pub name: Option<String>,
    pub goal: Option<Goal>,
    pub level: Option<Level>,
    /// Exact set of training days; `None` keeps Mon, Wed, Fri
    pub days: Option<Vec<Weekday>>,
    pub duration: Option<SessionDuration>,
    /// Applied in order through the workout picker
    #[serde(default)]
    pub assignments: Vec<Assignment>,
}

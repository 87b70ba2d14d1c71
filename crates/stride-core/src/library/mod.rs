//! Async access to saved plans.
//!
//! [`PlanLibrary`] opens the SQLite database on a blocking task for every
//! call, so it can be used from async front ends without holding a
//! connection across awaits. Plans enter the library by confirming a
//! [`PlanWizard`] through [`PlanLibrary::submit_wizard`].
//!
//! ```rust,no_run
//! use stride_core::{params::CreatePlan, PlanLibraryBuilder, PlanWizard, StaticCatalog};
//! use stride_core::models::{Goal, Level};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = PlanLibraryBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()
//!     .await?;
//!
//! let catalog = StaticCatalog::builtin()?;
//! let params = CreatePlan {
//!     goal: Some(Goal::Skill),
//!     level: Some(Level::Advanced),
//!     assignments: vec!["Mon=handstand-balance".parse()?],
//!     ..Default::default()
//! };
//! let wizard = PlanWizard::from_script(&params, &catalog)?;
//! let (_wizard, submission) = library.submit_wizard(wizard).await?;
//! assert!(submission.is_accepted());
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use log::warn;
use tokio::task;

use crate::{
    db::Database,
    display::PlanSummaries,
    error::{Result, StrideError},
    models::{PlanSnapshot, PlanSummary, SavedPlan},
    params::{DeletePlan, Id},
    store::{PlanSink, Submission},
    wizard::PlanWizard,
};

pub mod builder;

pub use builder::PlanLibraryBuilder;

/// Sink standing in for a database that could not be opened.
struct Unavailable(String);

impl PlanSink for Unavailable {
    fn submit_plan(&mut self, _plan: &PlanSnapshot) -> Submission {
        Submission::Rejected {
            reason: self.0.clone(),
        }
    }
}

/// Handle to the saved-plan database.
#[derive(Debug, Clone)]
pub struct PlanLibrary {
    pub(crate) db_path: PathBuf,
}

impl PlanLibrary {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Confirms `wizard` against the database.
    ///
    /// The wizard is handed back together with the submission: completed on
    /// acceptance, still on `Review` with its draft intact on rejection. A
    /// database that cannot be opened, or a storage task that dies, counts
    /// as a rejection.
    ///
    /// # Errors
    ///
    /// - `StrideError::WrongStep` if the wizard is not on the review step
    /// - `StrideError::WizardClosed` if the wizard was abandoned or completed
    pub async fn submit_wizard(&self, wizard: PlanWizard) -> Result<(PlanWizard, Submission)> {
        let db_path = self.db_path.clone();
        let fallback = wizard.clone();

        let joined = task::spawn_blocking(move || -> Result<(PlanWizard, Submission)> {
            let mut wizard = wizard;
            let submission = match Database::new(&db_path) {
                Ok(mut db) => wizard.confirm(&mut db)?,
                Err(e) => {
                    warn!("Failed to open plan database: {e}");
                    wizard.confirm(&mut Unavailable(e.to_string()))?
                }
            };
            Ok((wizard, submission))
        })
        .await;

        match joined {
            Ok(result) => result,
            Err(e) => {
                let e = StrideError::join(e);
                warn!("Plan submission did not finish: {e}");
                Ok((
                    fallback,
                    Submission::Rejected {
                        reason: e.to_string(),
                    },
                ))
            }
        }
    }

    /// Retrieves a saved plan by its ID.
    pub async fn get_plan(&self, params: &Id) -> Result<Option<SavedPlan>> {
        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_plan(plan_id)
        })
        .await
        .map_err(StrideError::join)?
    }

    /// Lists saved plans, newest first.
    pub async fn list_plans(&self) -> Result<Vec<SavedPlan>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_plans()
        })
        .await
        .map_err(StrideError::join)?
    }

    /// Lists saved plans as summaries for display.
    pub async fn list_plans_summary(&self) -> Result<PlanSummaries> {
        let plans = self.list_plans().await?;
        Ok(PlanSummaries(plans.iter().map(PlanSummary::from).collect()))
    }

    /// Permanently deletes a saved plan, returning what was deleted.
    ///
    /// # Errors
    ///
    /// - `StrideError::InvalidInput` if the deletion was not confirmed
    /// - `StrideError::PlanNotFound` if no plan has this ID
    pub async fn delete_plan(&self, params: &DeletePlan) -> Result<SavedPlan> {
        if !params.confirmed {
            return Err(StrideError::invalid_input("confirm")
                .with_reason("deleting a plan cannot be undone; pass --confirm to proceed"));
        }

        let db_path = self.db_path.clone();
        let plan_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let plan = db
                .get_plan(plan_id)?
                .ok_or(StrideError::PlanNotFound { id: plan_id })?;
            db.delete_plan(plan_id)?;
            Ok(plan)
        })
        .await
        .map_err(StrideError::join)?
    }
}

//! Command-line argument wrappers and command handlers.
//!
//! The argument structs carry the clap derives and convert into the
//! framework-free parameter types of `stride_core::params`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Wizard / PlanLibrary
//! ```
//!
//! [`Cli`] then runs each command against the plan library and the workout
//! catalog and hands the markdown result to the terminal renderer.

use std::io;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use stride_core::{
    display::{CreateResult, DeleteResult, PlanDetails, ProgramList, WorkoutList},
    models::{Goal, Level, SessionDuration, Weekday, WorkoutFilter},
    params::*,
    PlanLibrary, PlanWizard, StaticCatalog, Submission, WorkoutCatalog,
};

use crate::{renderer::TerminalRenderer, session::WizardSession};

// ============================================================================
// Workout commands
// ============================================================================

/// List catalog workouts
///
/// Without filters every workout is listed in catalog order.
#[derive(Args)]
pub struct ListWorkoutsArgs {
    #[arg(short, long, help = "Only workouts of this level (beginner, intermediate, advanced, expert)")]
    pub level: Option<Level>,
    #[arg(short, long, help = "Only workouts training this muscle group")]
    pub muscle: Option<String>,
    #[arg(short, long, help = "Only workouts whose title contains this text")]
    pub search: Option<String>,
}

impl From<ListWorkoutsArgs> for ListWorkouts {
    fn from(val: ListWorkoutsArgs) -> Self {
        ListWorkouts {
            level: val.level,
            muscle: val.muscle,
            search: val.search,
        }
    }
}

/// Show a single catalog workout
#[derive(Args)]
pub struct ShowWorkoutArgs {
    #[arg(help = "Catalog identifier of the workout, e.g. push-foundations")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum WorkoutCommands {
    /// List catalog workouts
    #[command(alias = "l")]
    List(ListWorkoutsArgs),
    /// Show a single workout
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// List pre-built programs
    #[command(alias = "l")]
    List,
}

// ============================================================================
// Plan commands
// ============================================================================

/// Create a plan in one go
///
/// Runs the plan wizard with the given choices, exactly as if they had been
/// entered step by step, and saves the result. Every workout must match the
/// chosen level and be assigned to one of the training days.
#[derive(Args)]
pub struct CreatePlanArgs {
    #[arg(short, long, help = "Training goal (strength, skill, endurance, mobility)")]
    pub goal: Goal,
    #[arg(short, long, help = "Fitness level (beginner, intermediate, advanced, expert)")]
    pub level: Level,
    #[arg(
        long,
        value_delimiter = ',',
        help = "Training days as comma-separated list, e.g. Mon,Wed,Fri (default)"
    )]
    pub days: Option<Vec<Weekday>>,
    #[arg(long, help = "Session duration: 20, 30 (default), 45 or 60 minutes")]
    pub duration: Option<SessionDuration>,
    #[arg(
        short,
        long = "assign",
        help = "Assign a workout to a day as Day=workout-id; repeatable"
    )]
    pub assignments: Vec<Assignment>,
    #[arg(short, long, help = "Optional plan name")]
    pub name: Option<String>,
}

impl From<CreatePlanArgs> for CreatePlan {
    fn from(val: CreatePlanArgs) -> Self {
        CreatePlan {
            name: val.name,
            goal: Some(val.goal),
            level: Some(val.level),
            days: val.days,
            duration: val.duration,
            assignments: val.assignments,
        }
    }
}

/// Show details of a saved plan
#[derive(Args)]
pub struct ShowPlanArgs {
    #[arg(help = "Unique identifier of the plan to show")]
    pub id: u64,
}

impl From<ShowPlanArgs> for Id {
    fn from(val: ShowPlanArgs) -> Self {
        Id { id: val.id }
    }
}

/// Permanently delete a saved plan
///
/// Deletion cannot be undone, so it has to be confirmed with --confirm.
#[derive(Args)]
pub struct DeletePlanArgs {
    #[arg(help = "Unique identifier of the plan to delete")]
    pub id: u64,
    #[arg(long, help = "Confirm the permanent deletion")]
    pub confirm: bool,
}

impl From<DeletePlanArgs> for DeletePlan {
    fn from(val: DeletePlanArgs) -> Self {
        DeletePlan {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Create a plan from command-line choices
    #[command(alias = "c")]
    Create(CreatePlanArgs),
    /// Build a plan interactively, one step at a time
    #[command(alias = "w")]
    Wizard,
    /// List saved plans, newest first
    #[command(alias = "l")]
    List,
    /// Show details of a saved plan
    #[command(alias = "s")]
    Show(ShowPlanArgs),
    /// Permanently delete a saved plan
    #[command(alias = "d")]
    Delete(DeletePlanArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs parsed commands against the plan library and the workout catalog.
pub struct Cli {
    library: PlanLibrary,
    catalog: StaticCatalog,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(library: PlanLibrary, catalog: StaticCatalog, renderer: TerminalRenderer) -> Self {
        Self {
            library,
            catalog,
            renderer,
        }
    }

    pub fn handle_workout_command(&self, command: WorkoutCommands) -> Result<()> {
        match command {
            WorkoutCommands::List(args) => self.list_workouts(&args.into()),
            WorkoutCommands::Show(args) => self.show_workout(&args.id),
        }
    }

    pub fn handle_program_command(&self, command: ProgramCommands) -> Result<()> {
        match command {
            ProgramCommands::List => self
                .renderer
                .render(&ProgramList(self.catalog.programs()).to_string()),
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Create(args) => self.create_plan(&args.into()).await,
            PlanCommands::Wizard => self.run_wizard().await,
            PlanCommands::List => self.list_plans().await,
            PlanCommands::Show(args) => self.show_plan(&args.into()).await,
            PlanCommands::Delete(args) => self.delete_plan(&args.into()).await,
        }
    }

    fn list_workouts(&self, params: &ListWorkouts) -> Result<()> {
        debug!("list_workouts: {params:?}");
        let workouts = self.catalog.list_workouts(&WorkoutFilter::from(params));
        self.renderer.render(&WorkoutList(workouts).to_string())
    }

    fn show_workout(&self, id: &str) -> Result<()> {
        let workout = self
            .catalog
            .find_workout(id)
            .ok_or_else(|| anyhow!("Workout '{id}' not found"))?;
        self.renderer.render(&workout.to_string())
    }

    async fn create_plan(&self, params: &CreatePlan) -> Result<()> {
        debug!("create_plan: {params:?}");
        let wizard =
            PlanWizard::from_script(params, &self.catalog).context("Failed to build plan")?;

        let (_, submission) = self
            .library
            .submit_wizard(wizard)
            .await
            .context("Failed to save plan")?;

        match submission {
            Submission::Accepted { id } => {
                let plan = self
                    .library
                    .get_plan(&Id { id })
                    .await
                    .context("Failed to load saved plan")?
                    .ok_or_else(|| anyhow!("Plan with ID {id} not found after saving"))?;
                self.renderer
                    .render(&CreateResult::new(&plan, &self.catalog).to_string())
            }
            Submission::Rejected { reason } => bail!("Plan was not saved: {reason}"),
        }
    }

    async fn run_wizard(&self) -> Result<()> {
        let stdin = io::stdin();
        WizardSession::new(&self.library, &self.catalog, &self.renderer)
            .run(stdin.lock())
            .await?;
        Ok(())
    }

    pub async fn list_plans(&self) -> Result<()> {
        let summaries = self
            .library
            .list_plans_summary()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&summaries.to_string())
    }

    async fn show_plan(&self, params: &Id) -> Result<()> {
        let plan = self
            .library
            .get_plan(params)
            .await
            .context("Failed to get plan")?
            .ok_or_else(|| anyhow!("Plan with ID {} not found", params.id))?;
        self.renderer
            .render(&PlanDetails::new(&plan, &self.catalog).to_string())
    }

    async fn delete_plan(&self, params: &DeletePlan) -> Result<()> {
        let plan = self
            .library
            .delete_plan(params)
            .await
            .context("Failed to delete plan")?;
        self.renderer.render(&DeleteResult::new(&plan).to_string())
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{PlanCommands, ProgramCommands, WorkoutCommands};

/// Build weekly calisthenics plans
///
/// Stride walks you through choosing a goal, a fitness level, training days
/// and workouts from its catalog, then keeps the finished plans in a local
/// SQLite database. Plans can be built interactively with `plan wizard` or in
/// one go with `plan create`.
#[derive(Parser)]
#[command(version, about, name = "stride")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/stride/stride.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a workout catalog JSON file. Defaults to the built-in catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Stride CLI
///
/// - `workout`: browse the workout catalog
/// - `program`: browse the pre-built programs
/// - `plan`: build, list, show and delete plans
#[derive(Subcommand)]
pub enum Commands {
    /// Browse catalog workouts
    #[command(alias = "w")]
    Workout {
        #[command(subcommand)]
        command: WorkoutCommands,
    },
    /// Browse pre-built programs
    Program {
        #[command(subcommand)]
        command: ProgramCommands,
    },
    /// Build and manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
}

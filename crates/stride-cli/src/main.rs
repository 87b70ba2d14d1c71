//! Stride CLI application
//!
//! Command-line front end for the stride plan builder.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use stride_core::{PlanLibraryBuilder, StaticCatalog};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let catalog = match catalog_file {
        Some(path) => StaticCatalog::from_path(&path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => StaticCatalog::builtin().context("Failed to load built-in catalog")?,
    };

    let library = PlanLibraryBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize plan library")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Stride started");

    let cli = Cli::new(library, catalog, renderer);
    match command {
        Some(Workout { command }) => cli.handle_workout_command(command),
        Some(Program { command }) => cli.handle_program_command(command),
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        None => cli.list_plans().await,
    }
}

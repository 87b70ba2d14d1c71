//! Line-oriented interactive plan wizard.
//!
//! Reads one command per line, applies it to a [`PlanWizard`] and prints the
//! outcome. Navigation commands reprint the wizard screen. Confirmation goes
//! through the plan library, so a rejected plan leaves the session on the
//! review step with everything still in place.

use std::{io::BufRead, str::FromStr};

use anyhow::{Context, Result};
use log::debug;
use stride_core::{
    display::{CreateResult, OperationStatus, WizardView},
    models::{Goal, Level, SessionDuration, Weekday},
    params::Id,
    Navigation, PlanLibrary, PlanWizard, StaticCatalog, Submission, WizardStep,
};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
## Commands

- `goal <strength|skill|endurance|mobility>`
- `level <beginner|intermediate|advanced|expert>`
- `toggle <day>`: add or remove a training day
- `duration <20|30|45|60>`
- `pick <day>`: open the workout picker for a day
- `add <workout-id>`: add a workout from the open picker
- `add <day> <workout-id>`: add a workout to a day directly
- `remove <day> <workout-id>`
- `dismiss`: close the workout picker
- `name <text>`: name the plan (review step)
- `next`, `back`, `show`, `confirm`, `quit`
";

/// One parsed line of input.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Goal(Goal),
    Level(Level),
    Toggle(Weekday),
    Duration(SessionDuration),
    Pick(Weekday),
    Add {
        day: Option<Weekday>,
        workout_id: String,
    },
    Remove {
        day: Weekday,
        workout_id: String,
    },
    Dismiss,
    Name(String),
    Next,
    Back,
    Show,
    Confirm,
    Help,
    Quit,
}

fn argument<T>(rest: &str, usage: &str) -> Result<T, String>
where
    T: FromStr<Err = String>,
{
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(format!("Usage: {usage}"));
    }
    rest.parse()
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line.trim_end(), ""),
        };

        let command = match word.to_lowercase().as_str() {
            "goal" => Command::Goal(argument(rest, "goal <goal>")?),
            "level" => Command::Level(argument(rest, "level <level>")?),
            "toggle" => Command::Toggle(argument(rest, "toggle <day>")?),
            "duration" => Command::Duration(argument(rest, "duration <minutes>")?),
            "pick" => Command::Pick(argument(rest, "pick <day>")?),
            "add" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
                [workout_id] => Command::Add {
                    day: None,
                    workout_id: workout_id.to_string(),
                },
                [day, workout_id] => Command::Add {
                    day: Some(day.parse()?),
                    workout_id: workout_id.to_string(),
                },
                _ => return Err("Usage: add [day] <workout-id>".to_string()),
            },
            "remove" => match rest.split_whitespace().collect::<Vec<_>>()[..] {
                [day, workout_id] => Command::Remove {
                    day: day.parse()?,
                    workout_id: workout_id.to_string(),
                },
                _ => return Err("Usage: remove <day> <workout-id>".to_string()),
            },
            "dismiss" => Command::Dismiss,
            "name" => Command::Name(rest.trim_end_matches(['\r', '\n']).to_string()),
            "next" => Command::Next,
            "back" => Command::Back,
            "show" => Command::Show,
            "confirm" => Command::Confirm,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            "" => return Err("Type `help` for the list of commands".to_string()),
            other => return Err(format!("Unknown command '{other}'; type `help`")),
        };
        Ok(command)
    }
}

/// What to print after a command was applied.
enum Outcome {
    /// Reprint the wizard screen
    Screen,
    Blocked,
    Exited,
    Notice(String),
}

impl Outcome {
    fn added(added: bool, workout_id: &str) -> Self {
        if added {
            Outcome::Screen
        } else {
            Outcome::Notice(format!("'{workout_id}' is already on this day"))
        }
    }
}

impl From<Navigation> for Outcome {
    fn from(navigation: Navigation) -> Self {
        match navigation {
            Navigation::Moved(_) => Outcome::Screen,
            Navigation::Blocked(_) => Outcome::Blocked,
            Navigation::Exited => Outcome::Exited,
        }
    }
}

/// An interactive wizard run bound to a library, a catalog and a renderer.
pub struct WizardSession<'a> {
    library: &'a PlanLibrary,
    catalog: &'a StaticCatalog,
    renderer: &'a TerminalRenderer,
}

impl<'a> WizardSession<'a> {
    pub fn new(
        library: &'a PlanLibrary,
        catalog: &'a StaticCatalog,
        renderer: &'a TerminalRenderer,
    ) -> Self {
        Self {
            library,
            catalog,
            renderer,
        }
    }

    /// Runs the session until the plan is saved, the user leaves, or the
    /// input ends. Returns the saved plan's ID, if any.
    pub async fn run<R: BufRead>(&self, input: R) -> Result<Option<u64>> {
        let mut wizard = PlanWizard::new();
        self.show(&wizard)?;
        self.renderer.render("Type `help` for the list of commands.\n")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(message) => {
                    self.failure(message)?;
                    continue;
                }
            };
            debug!("wizard command: {command:?}");

            match command {
                Command::Quit => break,
                Command::Confirm => {
                    if wizard.step() != WizardStep::Review {
                        self.failure("Finish the remaining steps before confirming")?;
                        continue;
                    }
                    let (returned, submission) =
                        match self.library.submit_wizard(wizard.clone()).await {
                            Ok(submitted) => submitted,
                            Err(e) => {
                                self.failure(format!("Plan was not saved: {e}"))?;
                                continue;
                            }
                        };
                    wizard = returned;

                    match submission {
                        Submission::Accepted { id } => {
                            self.show_saved(id).await?;
                            return Ok(Some(id));
                        }
                        Submission::Rejected { reason } => {
                            self.failure(format!("Plan was not saved: {reason}"))?;
                        }
                    }
                }
                command => {
                    if !self.apply(&mut wizard, command)? {
                        break;
                    }
                }
            }
        }

        self.renderer
            .render(&OperationStatus::failure("Plan wizard closed without saving").to_string())?;
        Ok(None)
    }

    /// Applies a step command. Returns `false` once the wizard has been left.
    fn apply(&self, wizard: &mut PlanWizard, command: Command) -> Result<bool> {
        let outcome = match command {
            Command::Goal(goal) => wizard.select_goal(goal).map(|_| Outcome::Screen),
            Command::Level(level) => wizard.select_level(level).map(|_| Outcome::Screen),
            Command::Toggle(day) => wizard.toggle_day(day).map(|_| Outcome::Screen),
            Command::Duration(duration) => {
                wizard.select_duration(duration).map(|_| Outcome::Screen)
            }
            Command::Pick(day) => wizard.open_picker(day).map(|_| Outcome::Screen),
            Command::Add {
                day: None,
                workout_id,
            } => wizard
                .pick_workout(self.catalog, &workout_id)
                .map(|added| Outcome::added(added, &workout_id)),
            Command::Add {
                day: Some(day),
                workout_id,
            } => {
                let added = wizard
                    .open_picker(day)
                    .and_then(|_| wizard.pick_workout(self.catalog, &workout_id));
                wizard
                    .dismiss_picker()
                    .and(added)
                    .map(|added| Outcome::added(added, &workout_id))
            }
            Command::Remove { day, workout_id } => {
                wizard.remove_workout(day, &workout_id).map(|removed| {
                    if removed {
                        Outcome::Screen
                    } else {
                        Outcome::Notice(format!("'{workout_id}' is not assigned to {day}"))
                    }
                })
            }
            Command::Dismiss => wizard.dismiss_picker().map(|_| Outcome::Screen),
            Command::Name(name) => wizard.set_name(name).map(|_| Outcome::Screen),
            Command::Next => wizard.advance().map(Outcome::from),
            Command::Back => wizard.retreat().map(Outcome::from),
            Command::Show => Ok(Outcome::Screen),
            Command::Help => Ok(Outcome::Notice(HELP.to_string())),
            // handled by the session loop
            Command::Confirm | Command::Quit => return Ok(true),
        };

        match outcome {
            Ok(Outcome::Screen) => self.show(wizard)?,
            Ok(Outcome::Blocked) => {
                let reason = wizard.blocked_reason().unwrap_or("this is the last step");
                self.failure(format!("Cannot continue: {reason}"))?;
            }
            Ok(Outcome::Exited) => return Ok(false),
            Ok(Outcome::Notice(message)) => self.renderer.render(&format!("{message}\n"))?,
            Err(e) => self.failure(e.to_string())?,
        }
        Ok(true)
    }

    fn show(&self, wizard: &PlanWizard) -> Result<()> {
        self.renderer
            .render(&WizardView::new(wizard, self.catalog).to_string())
    }

    async fn show_saved(&self, id: u64) -> Result<()> {
        let plan = self
            .library
            .get_plan(&Id { id })
            .await
            .context("Failed to load saved plan")?;
        match plan {
            Some(plan) => self
                .renderer
                .render(&CreateResult::new(&plan, self.catalog).to_string()),
            None => self
                .renderer
                .render(&OperationStatus::success(format!("Created plan with ID: {id}")).to_string()),
        }
    }

    fn failure(&self, message: impl Into<String>) -> Result<()> {
        self.renderer
            .render(&OperationStatus::failure(message).to_string())
    }
}

//! Display implementations for domain models.
//!
//! Option enums print their plain label; records print as markdown blocks
//! suitable for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Goal, Level, PlanSummary, Program, SessionDuration, Weekday, Workout},
    wizard::WizardStep,
};

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- Level: {}", self.level)?;
        writeln!(f, "- Duration: {}", self.duration)?;
        writeln!(f, "- Exercises: {}", self.exercise_count)?;
        if !self.muscles.is_empty() {
            writeln!(f, "- Muscles: {}", self.muscles.join(", "))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- {} weeks · {}x/week · {}",
            self.weeks, self.days_per_week, self.level
        )?;
        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = super::plan_title(&self.name);

        writeln!(f, "## {name} (ID: {})", self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Goal**: {} · **Level**: {}", self.goal, self.level)?;
        writeln!(
            f,
            "- **Schedule**: {}x/week, {} workout(s)",
            self.days_per_week, self.total_workouts
        )?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)
    }
}

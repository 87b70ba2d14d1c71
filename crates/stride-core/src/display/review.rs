//! Markdown views of the wizard and of stored plans.
//!
//! Everything that shows workouts resolves ids through a catalog at format
//! time; ids the catalog no longer knows are skipped.

use std::fmt;

use super::{datetime::LocalDateTime, plan_title};
use crate::{
    catalog::WorkoutCatalog,
    models::{Goal, Level, PlanDay, SavedPlan, SessionDuration, Weekday},
    wizard::{PlanReview, PlanWizard, WizardStep},
};

fn write_days_line(f: &mut fmt::Formatter<'_>, days: &[Weekday]) -> fmt::Result {
    let labels: Vec<&str> = days.iter().map(Weekday::as_str).collect();
    writeln!(f, "- Days/week: {}x ({})", days.len(), labels.join(", "))
}


impl fmt::Display for PlanReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Name: {}", plan_title(&self.name))?;
        match self.goal {
            Some(goal) => writeln!(f, "- Goal: {goal}")?,
            None => writeln!(f, "- Goal: (none)")?,
        }
        match self.level {
            Some(level) => writeln!(f, "- Level: {level}")?,
            None => writeln!(f, "- Level: (none)")?,
        }
        write_days_line(f, &self.training_days)?;
        writeln!(f, "- Session: {}", self.session_duration)?;

        if self.days.is_empty() {
            writeln!(f)?;
            writeln!(f, "No workouts assigned.")?;
        }
        for day in &self.days {
            writeln!(f)?;
            writeln!(f, "## {}", day.day)?;
            writeln!(f)?;
            for workout in &day.workouts {
                writeln!(f, "- {} ({})", workout.title, workout.duration)?;
            }
        }
        Ok(())
    }
}

/// A stored plan with workout titles resolved against a catalog.
pub struct PlanDetails<'a, C: ?Sized> {
    pub plan: &'a SavedPlan,
    pub catalog: &'a C,
}

impl<'a, C: WorkoutCatalog + ?Sized> PlanDetails<'a, C> {
    pub fn new(plan: &'a SavedPlan, catalog: &'a C) -> Self {
        Self { plan, catalog }
    }

    fn write_day(&self, f: &mut fmt::Formatter<'_>, entry: &PlanDay) -> fmt::Result {
        writeln!(f, "## {}", entry.day)?;
        writeln!(f)?;
        let workouts: Vec<_> = entry
            .workout_ids
            .iter()
            .filter_map(|id| self.catalog.find_workout(id))
            .collect();
        if workouts.is_empty() {
            writeln!(f, "No workouts.")?;
        }
        for workout in workouts {
            writeln!(f, "- {} ({}, {})", workout.title, workout.duration, workout.level)?;
        }
        writeln!(f)
    }
}

impl<C: WorkoutCatalog + ?Sized> fmt::Display for PlanDetails<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let saved = self.plan;
        let plan = &saved.plan;
        let title = plan_title(&plan.name);

        writeln!(f, "# {}. {title}", saved.id)?;
        writeln!(f)?;
        writeln!(f, "- Goal: {}", plan.goal)?;
        writeln!(f, "- Level: {}", plan.level)?;
        write_days_line(f, &plan.training_days)?;
        writeln!(f, "- Session: {}", plan.session_duration)?;
        writeln!(f, "- Created: {}", LocalDateTime(&saved.created_at))?;
        writeln!(f)?;

        for entry in &plan.day_schedule {
            self.write_day(f, entry)?;
        }
        Ok(())
    }
}

/// The wizard's active step rendered as a screen: progress header, the
/// step's choices with the current selection marked, and the gate state.
pub struct WizardView<'a, C: ?Sized> {
    pub wizard: &'a PlanWizard,
    pub catalog: &'a C,
}

impl<'a, C: WorkoutCatalog + ?Sized> WizardView<'a, C> {
    pub fn new(wizard: &'a PlanWizard, catalog: &'a C) -> Self {
        Self { wizard, catalog }
    }

    fn mark(selected: bool) -> &'static str {
        if selected {
            "[x]"
        } else {
            "[ ]"
        }
    }

    fn write_goals(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for goal in Goal::ALL {
            let selected = self.wizard.draft().goal == Some(goal);
            writeln!(
                f,
                "- {} **{}** ({}): {}",
                Self::mark(selected),
                goal.label(),
                goal.as_str(),
                goal.description()
            )?;
        }
        Ok(())
    }

    fn write_levels(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in Level::ALL {
            let selected = self.wizard.draft().level == Some(level);
            writeln!(
                f,
                "- {} **{}**: {}",
                Self::mark(selected),
                level,
                level.description()
            )?;
        }
        Ok(())
    }

    fn write_schedule(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let draft = self.wizard.draft();
        let days: Vec<String> = Weekday::ALL
            .iter()
            .map(|day| {
                if draft.training_days.contains(day) {
                    format!("[{day}]")
                } else {
                    day.to_string()
                }
            })
            .collect();
        writeln!(f, "Training days: {}", days.join(" "))?;

        let durations: Vec<String> = SessionDuration::ALL
            .iter()
            .map(|d| {
                if *d == draft.session_duration {
                    format!("[{d}]")
                } else {
                    d.to_string()
                }
            })
            .collect();
        writeln!(f, "Session duration: {}", durations.join(" "))
    }

    fn write_assignments(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for assignment in self.wizard.assignments(self.catalog) {
            writeln!(f, "## {}", assignment.day)?;
            writeln!(f)?;
            if assignment.workouts.is_empty() {
                writeln!(f, "No workouts yet.")?;
            }
            for workout in assignment.workouts {
                writeln!(
                    f,
                    "- {} `{}` ({} · {})",
                    workout.title, workout.id, workout.duration, workout.level
                )?;
            }
            writeln!(f)?;
        }

        if let Some(day) = self.wizard.picker_day() {
            writeln!(f, "### Add to {day}")?;
            writeln!(f)?;
            let options = self.wizard.picker_options(self.catalog);
            if options.is_empty() {
                writeln!(f, "No workouts match this plan's level.")?;
            }
            for option in options {
                let w = option.workout;
                writeln!(
                    f,
                    "- {} {} `{}` ({} · {} · {} exercises)",
                    if option.already_added { "✓" } else { "+" },
                    w.title,
                    w.id,
                    w.duration,
                    w.level,
                    w.exercise_count
                )?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<C: WorkoutCatalog + ?Sized> fmt::Display for WizardView<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = self.wizard.step();
        writeln!(
            f,
            "# Create Plan ({}/{}) {:.0}%",
            step.position(),
            WizardStep::ALL.len(),
            self.wizard.progress_percent()
        )?;
        writeln!(f)?;
        writeln!(f, "## {}", step.title())?;
        writeln!(f)?;

        match step {
            WizardStep::Goal => self.write_goals(f)?,
            WizardStep::Level => self.write_levels(f)?,
            WizardStep::Schedule => self.write_schedule(f)?,
            WizardStep::WorkoutAssignment => self.write_assignments(f)?,
            WizardStep::Review => write!(f, "{}", self.wizard.review(self.catalog))?,
        }

        writeln!(f)?;
        match (step, self.wizard.blocked_reason()) {
            (WizardStep::Review, _) => writeln!(f, "Ready to create plan."),
            (_, Some(reason)) => writeln!(f, "To continue: {reason}."),
            (_, None) => writeln!(f, "Ready to continue."),
        }
    }
}

//! Fixed option sets offered by the plan wizard.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Training goal chosen on the first wizard step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Build raw pushing and pulling power
    Strength,

    /// Master advanced calisthenics moves
    Skill,

    /// Improve stamina and work capacity
    Endurance,

    /// Increase flexibility and joint health
    Mobility,
}

impl Goal {
    /// Every goal, in the order the wizard lists them.
    pub const ALL: [Goal; 4] = [Goal::Strength, Goal::Skill, Goal::Endurance, Goal::Mobility];

    /// Stable lowercase identifier (used in storage and on the command line).
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Skill => "skill",
            Goal::Endurance => "endurance",
            Goal::Mobility => "mobility",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Skill => "Skill",
            Goal::Endurance => "Endurance",
            Goal::Mobility => "Mobility",
        }
    }

    /// One-line description shown next to the option.
    pub fn description(&self) -> &'static str {
        match self {
            Goal::Strength => "Build raw pushing & pulling power",
            Goal::Skill => "Master advanced calisthenics moves",
            Goal::Endurance => "Improve stamina and work capacity",
            Goal::Mobility => "Increase flexibility and joint health",
        }
    }
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Goal::Strength),
            "skill" => Ok(Goal::Skill),
            "endurance" => Ok(Goal::Endurance),
            "mobility" => Ok(Goal::Mobility),
            _ => Err(format!("Invalid goal: {s}")),
        }
    }
}

/// Experience level; also tags every catalog workout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    /// New to calisthenics or returning after a break
    Beginner,

    /// Comfortable with basics, ready for progressions
    Intermediate,

    /// Strong foundation, chasing harder skills
    Advanced,

    /// Ready for levers, muscle-ups, and beyond
    Expert,
}

impl Level {
    /// Every level, easiest first.
    pub const ALL: [Level; 4] = [
        Level::Beginner,
        Level::Intermediate,
        Level::Advanced,
        Level::Expert,
    ];

    /// Storage representation, identical to the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
            Level::Expert => "Expert",
        }
    }

    /// One-line description shown next to the option.
    pub fn description(&self) -> &'static str {
        match self {
            Level::Beginner => "New to calisthenics or returning after a break",
            Level::Intermediate => "Comfortable with basics, ready for progressions",
            Level::Advanced => "Strong foundation, chasing harder skills",
            Level::Expert => "Ready for levers, muscle-ups, and beyond",
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            "expert" => Ok(Level::Expert),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

/// Length of a single training session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum SessionDuration {
    #[serde(rename = "20 min")]
    Minutes20,

    #[default]
    #[serde(rename = "30 min")]
    Minutes30,

    #[serde(rename = "45 min")]
    Minutes45,

    #[serde(rename = "60 min")]
    Minutes60,
}

impl SessionDuration {
    /// Every duration, shortest first.
    pub const ALL: [SessionDuration; 4] = [
        SessionDuration::Minutes20,
        SessionDuration::Minutes30,
        SessionDuration::Minutes45,
        SessionDuration::Minutes60,
    ];

    /// Display label such as `"30 min"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionDuration::Minutes20 => "20 min",
            SessionDuration::Minutes30 => "30 min",
            SessionDuration::Minutes45 => "45 min",
            SessionDuration::Minutes60 => "60 min",
        }
    }

    /// Session length in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            SessionDuration::Minutes20 => 20,
            SessionDuration::Minutes30 => 30,
            SessionDuration::Minutes45 => 45,
            SessionDuration::Minutes60 => 60,
        }
    }
}

impl FromStr for SessionDuration {
    type Err = String;

    /// Accepts `"45 min"`, `"45min"`, and `"45"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().to_lowercase();
        let digits = digits.trim_end_matches("min").trim();
        SessionDuration::ALL
            .into_iter()
            .find(|d| digits.parse::<u32>().is_ok_and(|m| m == d.minutes()))
            .ok_or_else(|| format!("Invalid session duration: {s}"))
    }
}

//! Error types for the stride library.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::Weekday;
use crate::wizard::WizardStep;

/// Error type for catalog, wizard, and plan store operations.
#[derive(Error, Debug)]
pub enum StrideError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Saved plan not found for the given ID
    #[error("Plan with ID {id} not found")]
    PlanNotFound { id: u64 },
    /// Workout id not present in the catalog (or not offered by the picker)
    #[error("Workout '{id}' not found")]
    WorkoutNotFound { id: String },
    /// Day is not part of the current day schedule
    #[error("{day} is not a scheduled training day")]
    DayNotScheduled { day: Weekday },
    /// A step-local action was invoked while another step is active
    #[error("'{action}' is only available on the {expected} step (current step: {current})")]
    WrongStep {
        action: &'static str,
        expected: WizardStep,
        current: WizardStep,
    },
    /// The wizard gate refused to advance while running a scripted plan
    #[error("Cannot continue past the {step} step: {reason}")]
    StepBlocked { step: WizardStep, reason: String },
    /// The wizard was abandoned or has already handed off its plan
    #[error("The plan wizard is no longer active")]
    WizardClosed,
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// A blocking database task panicked or was cancelled
    #[error("Background task failed: {source}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> StrideError {
        StrideError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> StrideError {
        StrideError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl StrideError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a failed blocking task join.
    pub(crate) fn join(source: tokio::task::JoinError) -> Self {
        StrideError::Task { source }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| StrideError::database(message).with_source(e))
    }
}

/// Result type alias for stride operations
pub type Result<T> = std::result::Result<T, StrideError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_join_error_is_a_task_error() {
        let joined = tokio::task::spawn_blocking(|| panic!("worker died")).await;
        let err = StrideError::join(joined.expect_err("task should panic"));

        assert!(matches!(err, StrideError::Task { .. }));
        assert!(err.to_string().starts_with("Background task failed"));
    }

    #[test]
    fn test_db_context_keeps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to query plan").unwrap_err();

        assert_eq!(err.to_string(), "Database error: Failed to query plan");
        assert!(std::error::Error::source(&err).is_some());
    }
}

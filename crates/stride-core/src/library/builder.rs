//! Builder for creating and configuring PlanLibrary instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::PlanLibrary;
use crate::{
    db::Database,
    error::{Result, StrideError},
};

/// Builder for creating and configuring PlanLibrary instances.
#[derive(Debug, Clone, Default)]
pub struct PlanLibraryBuilder {
    database_path: Option<PathBuf>,
}

impl PlanLibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, follows the XDG Base Directory layout:
    /// `$XDG_DATA_HOME/stride/stride.db` or `~/.local/share/stride/stride.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured library, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `StrideError::FileSystem` if the database directory cannot be
    /// created, or `StrideError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<PlanLibrary> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StrideError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(drop))
            .await
            .map_err(StrideError::join)??;

        Ok(PlanLibrary::new(db_path))
    }

    /// Returns the default database path under the XDG data directory.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("stride")
            .place_data_file("stride.db")
            .map_err(|e| StrideError::XdgDirectory(e.to_string()))
    }
}

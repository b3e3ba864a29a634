//! Config validation logic.
//! Resolves the source directory to an absolute path and verifies that it exists,
//! is a directory and can be listed. Every failure here is fatal for the run.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::errors::OrganizerError;

use super::types::Config;

impl Config {
    /// Validate the source directory and replace it with its absolute form.
    pub fn validate_and_normalize(&mut self) -> Result<(), OrganizerError> {
        let abs = absolute_source(&self.source_dir)?;
        ensure_dir_exists_and_is_dir(&abs)?;
        ensure_readable(&abs)?;
        self.source_dir = abs;
        if self.workers == 0 {
            self.workers = 1;
        }
        if self.queue_capacity == 0 {
            self.queue_capacity = 1;
        }

        info!(
            source = %self.source_dir.display(),
            dry_run = self.dry_run,
            workers = self.workers,
            "Config validated"
        );
        Ok(())
    }
}

fn absolute_source(path: &Path) -> Result<PathBuf, OrganizerError> {
    std::path::absolute(path).map_err(|source| OrganizerError::ResolvePath {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure path exists and is a directory; emit clear errors with path context.
fn ensure_dir_exists_and_is_dir(path: &Path) -> Result<(), OrganizerError> {
    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(_) => {
            error!("source directory does not exist: {}", path.display());
            return Err(OrganizerError::SourceNotFound(path.to_path_buf()));
        }
    };
    if !meta.is_dir() {
        error!("source path is not a directory: {}", path.display());
        return Err(OrganizerError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Ensure directory is readable by attempting to open its entries.
fn ensure_readable(path: &Path) -> Result<(), OrganizerError> {
    fs::read_dir(path).map_err(|source| OrganizerError::ReadDir {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("source readable: {}", path.display());
    Ok(())
}

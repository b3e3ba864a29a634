//! Typed error definitions for file_organizer.
//! Provides a small set of well-known failure modes for better logs and tests.
//!
//! Two tiers:
//! - fatal: the run cannot start (bad source directory, listing failed, pool broke).
//! - per-file: one task failed; the pool keeps going and the failure is counted.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrganizerError {
    #[error("Source directory not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Source path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to resolve path {path}: {source}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read directory contents of {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to move {src} -> {dest}: {source}")]
    Move {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Source file missing a file name: {0}")]
    MissingFileName(PathBuf),

    #[error("Operation interrupted by user")]
    Interrupted,

    #[error("A worker thread panicked")]
    WorkerPanicked,

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[source] io::Error),
}

impl OrganizerError {
    /// Stable numeric code, emitted as a structured log field.
    pub fn code(&self) -> u16 {
        match self {
            OrganizerError::SourceNotFound(_) => 10,
            OrganizerError::NotADirectory(_) => 11,
            OrganizerError::ResolvePath { .. } => 12,
            OrganizerError::ReadDir { .. } => 13,
            OrganizerError::CreateDir { .. } => 20,
            OrganizerError::Move { .. } => 21,
            OrganizerError::MissingFileName(_) => 22,
            OrganizerError::Interrupted => 30,
            OrganizerError::WorkerPanicked => 40,
            OrganizerError::Spawn(_) => 41,
        }
    }

    /// Short snake_case label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            OrganizerError::SourceNotFound(_) => "source_not_found",
            OrganizerError::NotADirectory(_) => "not_a_directory",
            OrganizerError::ResolvePath { .. } => "resolve_path",
            OrganizerError::ReadDir { .. } => "read_dir",
            OrganizerError::CreateDir { .. } => "create_dir",
            OrganizerError::Move { .. } => "move",
            OrganizerError::MissingFileName(_) => "missing_file_name",
            OrganizerError::Interrupted => "interrupted",
            OrganizerError::WorkerPanicked => "worker_panicked",
            OrganizerError::Spawn(_) => "spawn",
        }
    }

    /// True when the whole run must abort; false for failures scoped to a single file.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            OrganizerError::CreateDir { .. }
                | OrganizerError::Move { .. }
                | OrganizerError::MissingFileName(_)
                | OrganizerError::Interrupted
        )
    }

    /// The underlying I/O error, when there is one.
    pub fn io_source(&self) -> Option<&io::Error> {
        match self {
            OrganizerError::ResolvePath { source, .. }
            | OrganizerError::ReadDir { source, .. }
            | OrganizerError::CreateDir { source, .. }
            | OrganizerError::Move { source, .. } => Some(source),
            OrganizerError::Spawn(source) => Some(source),
            _ => None,
        }
    }
}

//! Core library for `file_organizer`.
//!
//! Sorts the direct children of one directory into category sub-folders
//! (`Images/`, `Documents/`, ...) chosen by file extension. The pieces, leaf first:
//! - [`classify`]: extension -> [`Category`] lookup
//! - [`fs_ops`]: the mover (mkdir, collision naming, atomic rename, dry-run)
//! - [`organizer`]: directory scan + bounded queue + fixed worker pool + counters
pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod organizer;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use classify::{Category, Classifier, ExtensionTable};
pub use config::{Config, LogLevel, path_has_symlink_ancestor};
pub use errors::OrganizerError;
pub use fs_ops::move_file;
pub use organizer::{RunSummary, Stats, organize, organize_validated, organize_with};

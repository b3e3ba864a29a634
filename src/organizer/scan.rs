//! Directory scan: turns the direct children of the source directory into tasks.
//!
//! Skipped, never enqueued:
//! - directories (category folders from earlier runs included)
//! - hidden entries (name starts with '.')
//! - the running executable's own file name

use std::ffi::{OsStr, OsString};
use std::fs::{self, DirEntry};
use std::path::PathBuf;

/// One file awaiting classification and relocation. Consumed by exactly one worker.
#[derive(Debug)]
pub struct Task {
    pub path: PathBuf,
    entry: DirEntry,
}

impl Task {
    pub fn file_name(&self) -> OsString {
        self.entry.file_name()
    }

    /// Size from the entry's own metadata. Must be read before the move: the
    /// entry path no longer exists afterwards.
    pub fn size(&self) -> Option<u64> {
        self.entry.metadata().ok().map(|m| m.len())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    Hidden,
    SelfExecutable,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::Directory => "directory",
            SkipReason::Hidden => "hidden",
            SkipReason::SelfExecutable => "self",
        }
    }
}

#[derive(Debug)]
pub enum Candidate {
    Task(Task),
    Skip { name: OsString, reason: SkipReason },
}

/// Decide whether a directory entry becomes a task.
pub fn inspect_entry(entry: DirEntry, self_exe: Option<&OsStr>) -> Candidate {
    let name = entry.file_name();

    let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
    if is_dir {
        return Candidate::Skip {
            name,
            reason: SkipReason::Directory,
        };
    }
    if is_hidden(&name) {
        return Candidate::Skip {
            name,
            reason: SkipReason::Hidden,
        };
    }
    if self_exe.is_some_and(|exe| exe == name.as_os_str()) {
        return Candidate::Skip {
            name,
            reason: SkipReason::SelfExecutable,
        };
    }

    Candidate::Task(Task {
        path: entry.path(),
        entry,
    })
}

pub fn is_hidden(name: &OsStr) -> bool {
    name.to_string_lossy().starts_with('.')
}

/// File name of the running executable, if it can be determined.
pub fn current_exe_name() -> Option<OsString> {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()))
}

/// Convenience for callers that want every candidate at once (tests, dry listings).
pub fn collect_candidates(
    dir: &std::path::Path,
    self_exe: Option<&OsStr>,
) -> std::io::Result<Vec<Candidate>> {
    fs::read_dir(dir)?
        .map(|e| e.map(|entry| inspect_entry(entry, self_exe)))
        .collect()
}

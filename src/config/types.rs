//! Core configuration types.
//! - Config holds the run parameters; it is not mutated once a run starts.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use super::{QUEUE_CAPACITY_DEFAULT, SOURCE_DIR_DEFAULT, default_workers};

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Only errors
    Quiet,
    /// Informational output (default)
    #[default]
    Normal,
    /// Per-file traces (what --verbose enables)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration used by the organizer.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose direct children get sorted
    pub source_dir: PathBuf,
    /// If true, report actions but do not modify the filesystem
    pub dry_run: bool,
    /// If true, emit per-file traces
    pub verbose: bool,
    /// Console verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Number of worker threads
    pub workers: usize,
    /// Bounded queue capacity between scanner and workers
    pub queue_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR_DEFAULT),
            dry_run: false,
            verbose: false,
            log_level: LogLevel::Normal,
            log_file: None,
            workers: default_workers(),
            queue_capacity: QUEUE_CAPACITY_DEFAULT,
        }
    }
}

impl Config {
    /// Construct a Config for `source_dir`; other fields use defaults.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Default::default()
        }
    }

    /// Builder-style dry-run toggle.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Level actually used for logging: --verbose lifts Normal/Quiet to Info.
    pub fn effective_log_level(&self) -> LogLevel {
        if self.verbose {
            self.log_level.max(LogLevel::Info)
        } else {
            self.log_level
        }
    }
}

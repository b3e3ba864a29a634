//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - --dir takes precedence over the positional DIR.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};
use crate::config::SOURCE_DIR_DEFAULT;

/// Sort the files of a directory into category sub-folders by extension.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Organize a directory's files into category folders (Images, Documents, ...)"
)]
pub struct Args {
    /// Directory to organize (defaults to the current directory).
    #[arg(value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub dir_pos: Option<PathBuf>,

    /// Directory to organize; overrides the positional DIR.
    #[arg(
        long = "dir",
        short = 'D',
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        help = "Directory to organize (overrides positional)"
    )]
    pub dir: Option<PathBuf>,

    /// Dry-run: report actions but do not modify the filesystem.
    #[arg(
        short = 'n',
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Per-file traces (moves, renames on collision, failures).
    #[arg(short = 'v', long, help = "Enable verbose per-file logging")]
    pub verbose: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Worker threads (default: twice the available parallelism).
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub workers: Option<u16>,
}

impl Args {
    /// Effective directory.
    ///
    /// Precedence:
    /// 1) `--dir` if provided
    /// 2) positional `DIR` if provided
    /// 3) the current directory
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir
            .as_ref()
            .or(self.dir_pos.as_ref())
            .cloned()
            .unwrap_or_else(|| PathBuf::from(SOURCE_DIR_DEFAULT))
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI values to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        cfg.source_dir = self.resolved_dir();
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.verbose {
            cfg.verbose = true;
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(n) = self.workers {
            cfg.workers = usize::from(n);
        }
    }

    /// Config built from defaults plus these flags.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        self.apply_overrides(&mut cfg);
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}

//! Duplicate-name resolution.
//!
//! Policy: keep the requested name when it is free; otherwise insert `_<unix-nanos>`
//! between the stem and the extension.
//!
//! Examples:
//! - "report.pdf"      -> "report_1700000000123456789.pdf"
//! - "README"          -> "README_1700000000123456789"
//! - "archive.tar.gz"  -> "archive.tar_1700000000123456789.gz"
//!
//! Notes:
//! - Uniqueness is best-effort: two moves landing in the same clock tick can still
//!   produce the same name. A few fresh timestamps are tried before giving up with
//!   a "_final" name.
//! - Only current filesystem state is consulted; nothing is reserved. A name that
//!   appears between this check and the rename, or a `_final` name that is already
//!   taken, gets overwritten by the rename on Unix.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use tracing::trace;

use super::util::unix_nanos;

const MAX_TIMESTAMP_TRIES: u32 = 5;

/// Destination for `name` inside `dst_dir`: the plain join if free, else a
/// timestamp-suffixed sibling.
pub fn resolve_destination(dst_dir: &Path, name: &OsStr) -> PathBuf {
    let candidate = dst_dir.join(name);
    if candidate.exists() {
        timestamped_destination(&candidate)
    } else {
        candidate
    }
}

/// Timestamp-suffixed sibling of `candidate` that does not currently exist.
/// The `_final` fallback is returned without an existence check.
pub fn timestamped_destination(candidate: &Path) -> PathBuf {
    let stem: OsString = candidate
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("file"));
    let ext: Option<OsString> = candidate.extension().map(|e| e.to_os_string());

    let mut last = unix_nanos();
    for attempt in 0..MAX_TIMESTAMP_TRIES {
        let mut nanos = unix_nanos();
        if attempt > 0 && nanos <= last {
            // Coarse clocks can return the same tick twice.
            nanos = last + 1;
        }
        last = nanos;

        let name = build_name(&stem, ext.as_deref(), &format!("_{nanos}"));
        let dest = candidate.with_file_name(name);
        if !dest.exists() {
            return dest;
        }
        trace!(dest = %dest.display(), attempt, "timestamped name also taken");
    }

    candidate.with_file_name(build_name(
        &stem,
        ext.as_deref(),
        &format!("_{last}_final"),
    ))
}

fn build_name(stem: &OsStr, ext: Option<&OsStr>, suffix: &str) -> OsString {
    let mut name = OsString::from(stem);
    name.push(suffix);
    if let Some(e) = ext {
        name.push(".");
        name.push(e);
    }
    name
}

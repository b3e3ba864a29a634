//! I/O error hints.
//!
//! Maps raw OS codes (or, failing that, `ErrorKind`) to a short actionable hint.
//! Workers attach the hint to per-file failure logs so users can tell a permission
//! problem from a cross-filesystem rename at a glance.
//!
//! Usage:
//!   warn!(error = %e, hint = io_hint(ioe).unwrap_or(""), "move failed");

use std::io;
use std::path::Path;

/// Hint for an I/O error, if one is known.
pub fn io_hint(e: &io::Error) -> Option<&'static str> {
    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            let hint = match code {
                libc::EACCES | libc::EPERM => {
                    Some("permission denied; check ownership and write permissions")
                }
                libc::EXDEV => {
                    Some("cross-filesystem; rename across devices is not supported")
                }
                libc::EBUSY => Some("resource busy; ensure no other process is writing"),
                libc::ENOENT => Some("path not found; it may have been removed during the run"),
                libc::EEXIST => Some("already exists"),
                libc::ENOSPC => Some("insufficient space on device"),
                libc::EROFS => Some("read-only filesystem; cannot write here"),
                libc::ENAMETOOLONG => Some("filename or path too long"),
                libc::EMFILE => Some("process file descriptor limit reached"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
        #[cfg(windows)]
        {
            let hint = match code {
                5 => Some("access denied; check permissions"),
                17 => Some("cross-filesystem; rename across devices is not supported"),
                32 => Some("sharing violation; file is in use"),
                2 | 3 => Some("path not found; it may have been removed during the run"),
                80 => Some("already exists"),
                112 => Some("insufficient disk space"),
                19 => Some("write protected / read-only media"),
                206 => Some("filename or path too long"),
                _ => None,
            };
            if hint.is_some() {
                return hint;
            }
        }
    }

    match e.kind() {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; it may have been removed during the run"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        _ => None,
    }
}

/// Human-friendly "op 'path': error (hint) [os code: n]" line.
pub fn describe_io_error(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);
    if let Some(hint) = io_hint(e) {
        msg.push_str(" (");
        msg.push_str(hint);
        msg.push(')');
    }
    if let Some(code) = e.raw_os_error() {
        msg.push_str(&format!(" [os code: {}]", code));
    }
    msg
}

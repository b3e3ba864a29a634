//! File move implementation.
//! Creates the category directory, resolves name collisions and renames the file
//! into place. Dry-run computes the same destination without touching the filesystem.
//!
//! The collision check and the rename are not atomic together: on Unix a name
//! taken in between (or a taken `_final` name) is replaced by the rename.
//!
//! A rename across filesystems fails with the OS error (EXDEV); there is no
//! copy+delete fallback.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::OrganizerError;

use super::atomic::try_atomic_move;
use super::duplicate::resolve_destination;

/// Move `src` into `dest_dir`, returning the final (or, in dry-run, the would-be) path.
pub fn move_file(
    config: &Config,
    src: &Path,
    dest_dir: &Path,
) -> Result<PathBuf, OrganizerError> {
    let file_name = src
        .file_name()
        .ok_or_else(|| OrganizerError::MissingFileName(src.to_path_buf()))?;

    if config.dry_run {
        let dest = resolve_destination(dest_dir, file_name);
        info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
        return Ok(dest);
    }

    fs::create_dir_all(dest_dir).map_err(|source| OrganizerError::CreateDir {
        path: dest_dir.to_path_buf(),
        source,
    })?;

    let dest = resolve_destination(dest_dir, file_name);
    if dest.file_name() != Some(file_name) {
        debug!(
            name = %Path::new(file_name).display(),
            dest = %dest.display(),
            "Duplicate found; renaming"
        );
    }

    try_atomic_move(src, &dest).map_err(|source| OrganizerError::Move {
        src: src.to_path_buf(),
        dest: dest.clone(),
        source,
    })?;

    debug!(src = %src.display(), dest = %dest.display(), "Moved file");
    Ok(dest)
}

//! Atomic file writes.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. On any failure the temporary file is removed and
//! the target is left as it was. `rename` replaces an existing target on both
//! POSIX and Windows as long as both paths are on the same volume, which the
//! sibling temp file guarantees. An existing target's permissions are copied
//! onto the temp file before the rename.
//!
//! Only a missing target or a regular file is replaced this way. Symlinks,
//! devices and FIFOs are opened and truncated in place, so a symlink keeps
//! pointing at its target and `/dev/stdout` works as an output path.
//!
//! Missing parent directories are not created; writing into a directory that
//! does not exist is reported as a write error.

use crate::error::{ConvertError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to `path`.
///
/// # Returns
///
/// * `Ok(())` - The target now holds exactly `content`
/// * `Err(ConvertError::Write)` - Create, write, sync or rename failed
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    let existing = match fs::symlink_metadata(path) {
        Ok(meta) if !meta.file_type().is_file() => {
            return write_in_place(path, content.as_bytes())
                .map_err(|e| ConvertError::write(path, e));
        }
        Ok(meta) => Some(meta),
        Err(_) => None,
    };

    let temp_path = temp_path_for(path);

    write_and_sync(&temp_path, content.as_bytes())
        .and_then(|()| match &existing {
            Some(meta) => fs::set_permissions(&temp_path, meta.permissions()),
            None => Ok(()),
        })
        .map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            ConvertError::write(path, e)
        })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ConvertError::write(path, e)
    })?;

    Ok(())
}

/// Truncate and write a non-regular target through its own path.
fn write_in_place(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.flush()
}

/// Temporary sibling path used while writing `target`.
fn temp_path_for(target: &Path) -> PathBuf {
    let filename = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());

    target.with_file_name(format!(".{}.tmp", filename))
}

/// Write content to a fresh file and sync it to disk. The handle closes on return.
fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}

//! Scoped fixture writes
//!
//! Bytes go to a temporary file in the destination directory, are flushed and
//! synced, then renamed over the final name. The temporary file is owned by a
//! guard that deletes it on drop, so any failure before the rename leaves
//! nothing behind and the final name only ever holds complete content.

use crate::error::FixtureError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name prefix of in-flight staging files
pub const STAGING_PREFIX: &str = ".encfix-";

/// File name suffix of in-flight staging files
pub const STAGING_SUFFIX: &str = ".tmp";

/// Mode requested for new fixtures, before the umask
#[cfg(unix)]
const CREATE_MODE: u32 = 0o666;

/// Write `bytes` to `dir/file_name`, replacing any existing content
///
/// New files get the same mode a plain create would (0o666 minus the umask);
/// an existing regular file keeps its mode. A symlink at the final name is
/// followed and its target is replaced, not the link itself.
///
/// # Errors
/// Returns [`FixtureError::Io`] naming the final path if the directory is
/// missing or unwritable, or if any write, sync or rename fails
pub fn write_fixture(
    dir: impl AsRef<Path>,
    file_name: &str,
    bytes: &[u8],
) -> Result<PathBuf, FixtureError> {
    let dir = dir.as_ref();
    let path = dir.join(file_name);
    let target = resolve_target(&path);
    let staging_dir = target.parent().unwrap_or(dir);

    let mut builder = tempfile::Builder::new();
    builder.prefix(STAGING_PREFIX).suffix(STAGING_SUFFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(CREATE_MODE));
    }

    let mut staged = builder
        .tempfile_in(staging_dir)
        .map_err(|e| FixtureError::io_error(&path, e))?;

    if let Ok(existing) = fs::metadata(&target) {
        if existing.is_file() {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| FixtureError::io_error(&path, e))?;
        }
    }

    write_and_sync(&mut staged, bytes).map_err(|e| FixtureError::io_error(&path, e))?;

    staged
        .persist(&target)
        .map_err(|e| FixtureError::io_error(&path, e.error))?;

    tracing::debug!("Persisted {} ({} bytes)", target.display(), bytes.len());
    Ok(path)
}

/// Final name to rename onto: the link target if `path` is a live symlink
fn resolve_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path).is_ok_and(|m| m.file_type().is_symlink());
    if is_link {
        if let Ok(resolved) = fs::canonicalize(path) {
            return resolved;
        }
    }
    path.to_path_buf()
}

fn write_and_sync(staged: &mut NamedTempFile, bytes: &[u8]) -> std::io::Result<()> {
    staged.write_all(bytes)?;
    staged.flush()?;
    staged.as_file().sync_all()
}

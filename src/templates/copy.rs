//! Recursive directory copy used to materialize templates.
//!
//! Symbolic links are recreated as links (their targets are not followed).
//! Copying into an existing directory merges: files that only exist in the
//! destination are left alone, and files or links that exist in both are
//! replaced by the source version.

use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::errors::{ObsidianCliError, Result};

/// Counts of what `copy_tree` wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
    pub dirs: usize,
    pub files: usize,
    pub symlinks: usize,
}

/// Copy the contents of `src` into `dst`, creating `dst` if needed.
///
/// Not transactional: a failure partway leaves `dst` partially populated.
pub fn copy_tree(src: &Path, dst: &Path) -> Result<CopyStats> {
    let mut stats = CopyStats::default();
    fs::create_dir_all(dst)?;

    for entry in WalkDir::new(src).min_depth(1).follow_links(false) {
        let entry = entry.map_err(io::Error::from)?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| ObsidianCliError::CommandFailed(format!("template walk: {e}")))?;
        let target = dst.join(relative);
        let file_type = entry.file_type();

        if file_type.is_symlink() {
            remove_if_not_dir(&target)?;
            copy_symlink(entry.path(), &target)?;
            stats.symlinks += 1;
        } else if file_type.is_dir() {
            fs::create_dir_all(&target)?;
            stats.dirs += 1;
        } else {
            // Never write through a link sitting at the destination.
            if target.is_symlink() {
                fs::remove_file(&target)?;
            }
            fs::copy(entry.path(), &target)?;
            stats.files += 1;
        }

        tracing::trace!(path = %relative.display(), "copied template entry");
    }

    Ok(stats)
}

/// Remove a file or link at `path` so it can be replaced.
///
/// An existing directory is left for the caller's operation to fail on.
fn remove_if_not_dir(path: &Path) -> io::Result<()> {
    match fs::symlink_metadata(path) {
        Ok(meta) if !meta.is_dir() => fs::remove_file(path),
        Ok(_) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = fs::read_link(link)?;
    std::os::unix::fs::symlink(points_to, target)
}

#[cfg(windows)]
fn copy_symlink(link: &Path, target: &Path) -> io::Result<()> {
    let points_to = fs::read_link(link)?;
    if fs::metadata(link).map(|m| m.is_dir()).unwrap_or(false) {
        std::os::windows::fs::symlink_dir(points_to, target)
    } else {
        std::os::windows::fs::symlink_file(points_to, target)
    }
}

#[cfg(not(any(unix, windows)))]
fn copy_symlink(link: &Path, _target: &Path) -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("cannot copy symbolic link {}", link.display()),
    ))
}

// validation.rs - File argument resolution and existence checks

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use log::debug;

use crate::core::CommandList;
use crate::error::{DropError, Result};

/// Make `path` absolute against `cwd` and clean it lexically.
///
/// `.` components are dropped and `..` removes the preceding component
/// (never climbing above the root). Symlinks are left untouched.
pub fn absolute_path(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve a command line argument against the process working directory
pub fn resolve_path(arg: &OsStr) -> Result<PathBuf> {
    let path = Path::new(arg);
    if path.is_absolute() {
        return Ok(absolute_path(path, Path::new("")));
    }

    let cwd = working_dir().map_err(|e| {
        debug!("cannot read working directory: {}", e);
        DropError::InvalidPath(String::new())
    })?;
    Ok(absolute_path(path, &cwd))
}

/// Working directory as the shell spelled it.
///
/// `$PWD` is used when it is absolute and names the same directory as `.`,
/// so a symlinked directory keeps its link path. Otherwise `getcwd`.
pub fn working_dir() -> io::Result<PathBuf> {
    if let Some(pwd) = std::env::var_os("PWD").map(PathBuf::from) {
        if pwd.is_absolute() && same_dir(&pwd, Path::new(".")) {
            return Ok(pwd);
        }
    }
    std::env::current_dir()
}

#[cfg(unix)]
fn same_dir(a: &Path, b: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(a), fs::metadata(b)) {
        (Ok(a), Ok(b)) => a.dev() == b.dev() && a.ino() == b.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn same_dir(_a: &Path, _b: &Path) -> bool {
    false
}

/// Resolve one argument and make sure something exists there
pub fn validate_file(arg: &OsStr) -> Result<PathBuf> {
    let path = resolve_path(arg)?;

    if let Err(e) = fs::metadata(&path) {
        debug!("stat {} failed: {}", path.display(), e);
        return Err(DropError::NotFound(arg.to_string_lossy().into_owned()));
    }

    debug!("resolved {} -> {}", arg.to_string_lossy(), path.display());
    Ok(path)
}

/// Validate every argument in order, stopping at the first failure
pub fn validate_files(args: &[OsString]) -> Result<CommandList> {
    let mut commands = CommandList::with_capacity(args.len());
    for arg in args {
        let path = validate_file(arg)?;
        commands.push_drop(&path);
    }
    Ok(commands)
}

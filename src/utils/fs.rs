use crate::error::ModpackError;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub fn get_cwd() -> Result<PathBuf, ModpackError> {
    std::env::current_dir()
        .map_err(|e| ModpackError::io("Failed to get current working directory", e))
}

/// Collects every regular file under `root`, sorted by path.
///
/// Symbolic links are skipped rather than followed, so link cycles cannot
/// trap the walk and nothing outside `root` is pulled in.
pub fn walk_files(root: &Path) -> Result<Vec<PathBuf>, ModpackError> {
    let mut stack: Vec<PathBuf> = vec![root.to_path_buf()];
    let mut files: Vec<PathBuf> = Vec::new();
    while let Some(dir) = stack.pop() {
        let rd = fs::read_dir(&dir).map_err(|e| {
            ModpackError::io(format!("Failed to read directory {}", dir.display()), e)
        })?;
        for entry in rd {
            let entry = entry.map_err(|e| {
                ModpackError::io(format!("Failed to read entry in {}", dir.display()), e)
            })?;
            let file_type = entry.file_type().map_err(|e| {
                ModpackError::io(format!("Failed to stat {}", entry.path().display()), e)
            })?;
            if file_type.is_dir() {
                stack.push(entry.path());
            } else if file_type.is_file() {
                files.push(entry.path());
            }
        }
    }
    files.sort();
    Ok(files)
}

pub fn path_relative_to(path: &Path, base: &Path) -> Option<PathBuf> {
    let rel = path.strip_prefix(base).ok()?;
    Some(rel.to_path_buf())
}

/// Renders a path with `/` separators. Fails on names that are not valid
/// UTF-8 instead of replacing bytes, so distinct files never share a name.
pub fn to_unix_string<P: AsRef<Path>>(p: P) -> Result<String, ModpackError> {
    let p = p.as_ref();
    let s = p.to_str().ok_or_else(|| {
        ModpackError::Format(format!(
            "Path is not valid UTF-8: {}",
            p.to_string_lossy()
        ))
    })?;
    Ok(s.replace('\\', "/"))
}

/// Creates the parent directory of `path` when it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<PathBuf, ModpackError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent).map_err(|e| {
        ModpackError::io(
            format!("Failed to create directory {}", parent.display()),
            e,
        )
    })?;
    Ok(parent)
}

/// Opens a temporary file next to `target` so it can later be renamed over it.
pub fn sibling_temp_file(target: &Path) -> Result<NamedTempFile, ModpackError> {
    let parent = ensure_parent_dir(target)?;
    NamedTempFile::new_in(&parent).map_err(|e| {
        ModpackError::io(
            format!("Failed to create temporary file in {}", parent.display()),
            e,
        )
    })
}

/// Moves a finished temporary file onto `target`, replacing any previous file.
pub fn persist_temp_file(tmp: NamedTempFile, target: &Path) -> Result<(), ModpackError> {
    tmp.persist(target).map_err(|e| {
        ModpackError::io(format!("Failed to write {}", target.display()), e.error)
    })?;
    Ok(())
}

/// Writes `contents` to `path` through a temporary sibling and a rename.
pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ModpackError> {
    let mut tmp = sibling_temp_file(path)?;
    tmp.write_all(contents)
        .and_then(|_| tmp.flush())
        .map_err(|e| ModpackError::io(format!("Failed to write {}", path.display()), e))?;
    persist_temp_file(tmp, path)
}

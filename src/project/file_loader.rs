use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::base::BufferId;
use crate::base::constants::{IR_EXTENSION, SOURCE_EXTENSION};
use crate::frontend::Session;

/// Failure to bring a file into a session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("directory not found: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Whether `path` has a Weft source or IR extension.
pub fn is_source_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext == SOURCE_EXTENSION || ext == IR_EXTENSION)
}

/// Read a file and add it to the session's buffer store under its path.
pub fn load_buffer(session: &mut Session, path: &Path) -> Result<BufferId, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let id = session
        .sources_mut()
        .add_buffer(path.to_string_lossy().into_owned(), text);
    tracing::debug!(path = %path.display(), buffer = %id, "loaded buffer");
    Ok(id)
}

/// Recursively collect source files under `dir`, sorted by path.
pub fn collect_source_paths(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|source| LoadError::Walk {
            root: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_file() && is_source_path(entry.path()) {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every source file under `dir`, in path order.
pub fn load_directory(session: &mut Session, dir: &Path) -> Result<Vec<BufferId>, LoadError> {
    let paths = collect_source_paths(dir)?;
    let mut buffers = Vec::with_capacity(paths.len());
    for path in &paths {
        buffers.push(load_buffer(session, path)?);
    }
    tracing::debug!(dir = %dir.display(), files = buffers.len(), "loaded directory");
    Ok(buffers)
}

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("destination has no parent directory: {0}")]
    NoParentDir(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Atomically write `content` to `target`: temp file in the destination
/// directory, flush and sync, then rename over the target. A failed write
/// leaves no partial target file.
pub fn write_atomic(target: &Path, content: &str) -> Result<(), PersistError> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        Some(_) => PathBuf::from("."),
        None => return Err(PersistError::NoParentDir(target.display().to_string())),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }

    let mut tmp = NamedTempFile::new_in(&dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;

    // Replace an existing file if present.
    if target.exists() {
        fs::remove_file(target)?;
    }
    tmp.persist(target).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}

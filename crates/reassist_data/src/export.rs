use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use reassist_core::Profile;
use reassist_logging::ra_info;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::fixture::{self, FixtureFormat};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("fixture path has no file name: {0:?}")]
    NoFileName(PathBuf),
    #[error("failed to serialize RON fixture: {0}")]
    Ron(#[from] ron::Error),
    #[error("failed to serialize JSON fixture: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(ExportError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| ExportError::OutputDir(e.to_string()))?;
    }
    Ok(())
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, ExportError> {
        ensure_output_dir(&self.dir)?;

        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;
        tmp.persist(&target).map_err(|e| ExportError::Io(e.error))?;
        Ok(target)
    }
}

/// Writes `profile` as a fixture file; the extension picks RON or JSON.
pub fn export_fixture(profile: &Profile, path: &Path) -> Result<PathBuf, ExportError> {
    let format = FixtureFormat::for_path(path);
    let content = fixture::to_string(profile, format)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ExportError::NoFileName(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let written = AtomicFileWriter::new(dir).write(file_name, &content)?;
    ra_info!("Exported {:?} fixture to {:?}", format, written);
    Ok(written)
}

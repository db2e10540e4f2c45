use std::fs;
use std::io;
use std::path::PathBuf;

use reassist_core::Profile;
use reassist_logging::ra_info;
use thiserror::Error;

use crate::fixture::{FixtureFormat, ProfileFixture};

/// Where the profile page gets its data from.
pub trait ProfileSource {
    /// Human-readable origin, used in logs and error context.
    fn describe(&self) -> String;
    fn load(&self) -> Result<Profile, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read fixture {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid RON fixture {path:?}: {source}")]
    Ron {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid JSON fixture {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Profile fixture stored as RON or JSON.
#[derive(Debug, Clone)]
pub struct FileProfileSource {
    path: PathBuf,
    format: FixtureFormat,
}

impl FileProfileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = FixtureFormat::for_path(&path);
        Self { path, format }
    }

    pub fn with_format(mut self, format: FixtureFormat) -> Self {
        self.format = format;
        self
    }
}

impl ProfileSource for FileProfileSource {
    fn describe(&self) -> String {
        format!("{:?} fixture {}", self.format, self.path.display())
    }

    fn load(&self) -> Result<Profile, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;

        let fixture: ProfileFixture = match self.format {
            FixtureFormat::Ron => ron::from_str(&content).map_err(|source| SourceError::Ron {
                path: self.path.clone(),
                source,
            })?,
            FixtureFormat::Json => {
                serde_json::from_str(&content).map_err(|source| SourceError::Json {
                    path: self.path.clone(),
                    source,
                })?
            }
        };

        let profile = Profile::from(fixture);
        ra_info!(
            "Loaded profile {:?} with {} publications from {:?}",
            profile.summary.name,
            profile.publications.len(),
            self.path
        );
        Ok(profile)
    }
}

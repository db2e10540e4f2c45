use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use reassist_core::PROFILE_PATH;

use super::logging::LogDestination;

/// Re-Assist researcher profile, rendered in the terminal.
#[derive(Debug, Parser)]
#[command(name = "reassist", version, about)]
pub struct AppConfig {
    /// Profile fixture to display (RON, or JSON with a .json extension).
    /// Defaults to the built-in demo profile.
    #[arg(long, value_name = "PATH")]
    pub fixture: Option<PathBuf>,

    /// Write the built-in profile as a fixture file and exit.
    #[arg(long, value_name = "PATH", conflicts_with = "fixture")]
    pub export_fixture: Option<PathBuf>,

    /// Location to open first.
    #[arg(long, value_name = "PATH", default_value = PROFILE_PATH)]
    pub start: String,

    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogDestination::File)]
    pub log: LogDestination,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

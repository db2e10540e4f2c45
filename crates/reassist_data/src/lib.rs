//! Re-Assist data access: profile sources and fixture export.
mod builtin;
mod export;
mod fixture;
mod source;

pub use builtin::{builtin_profile, BuiltinProfile};
pub use export::{ensure_output_dir, export_fixture, AtomicFileWriter, ExportError};
pub use fixture::FixtureFormat;
pub use source::{FileProfileSource, ProfileSource, SourceError};

pub mod check;
pub mod validate;

use helios_core::{Dataset, DatasetSource};
use helios_parser::DatasetFile;
use std::process::ExitCode;

use crate::output;

/// Exit status when the snapshot does not exist.
pub const EXIT_SNAPSHOT_MISSING: u8 = 2;

/// Exit status when the snapshot exists but cannot be loaded.
pub const EXIT_SNAPSHOT_UNREADABLE: u8 = 3;

/// Loads the snapshot, or reports why it could not be acquired and returns
/// the exit status to stop with.
pub fn acquire(source: &DatasetFile) -> Result<Dataset, ExitCode> {
    match source.load() {
        Ok(dataset) => Ok(dataset),
        Err(err) if err.is_missing() => {
            output::print_fatal(&err.to_string());
            Err(ExitCode::from(EXIT_SNAPSHOT_MISSING))
        }
        Err(err) => {
            output::print_fatal(&format!("{}: {}", source.describe(), err));
            Err(ExitCode::from(EXIT_SNAPSHOT_UNREADABLE))
        }
    }
}

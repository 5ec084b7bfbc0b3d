//! Repository reset: restore the default configuration and delete the
//! run-local artifacts a catalog run (or its consumer) leaves behind.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{info, warn};

use crate::config::{self, Settings};
use crate::fixtures;

/// Archive the out-of-scope sync consumer drops in the working directory.
const DIFF_ARCHIVE: &str = "diff.zip";

/// Reset the repository to its distributable state. Every deletion treats
/// an absent target as a reported no-op, so running this twice in a row
/// succeeds both times.
pub fn reset(settings: &Settings) -> io::Result<()> {
    match config::resolve_config_path() {
        Some(path) => {
            config::write_default_config(&path)?;
            info!("configuration reset to defaults at {}", path.display());
        }
        None => warn!("no config path could be resolved, configuration left untouched"),
    }

    remove_artifact(&settings.catalog.output)?;
    remove_artifact(Path::new(DIFF_ARCHIVE))?;

    fixtures::remove_tree(Path::new(fixtures::DEFAULT_LIBRARY_DIR))?;
    fixtures::remove_tree(Path::new(fixtures::DEFAULT_MIRROR_DIR))?;

    Ok(())
}

/// Delete a run-local file; an absent file is a reported no-op.
fn remove_artifact(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Ok(()) => {
            info!("removed {}", path.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            info!("{} does not exist, nothing to remove", path.display());
            Ok(())
        }
        Err(err) => Err(err),
    }
}

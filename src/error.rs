use std::io;
use std::path::PathBuf;

/// Fatal failures of a catalog run.
///
/// Per-file read errors are deliberately not represented here: the
/// generator logs and skips them so one unreadable track cannot abort a
/// whole library scan.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Invalid or absent library root. Raised before any library I/O.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// The catalog document could not be written.
    #[error("failed to write catalog to {}: {source}", .path.display())]
    Serialization {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

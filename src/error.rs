//! Error types for equipment loading.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal conditions raised while loading an equipment file.
///
/// Malformed *content* never errors (missing fields degrade to zero); only
/// the file itself being inaccessible aborts the run.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The equipment file does not exist or cannot be opened.
    #[error("Could not open file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file opened but reading its contents failed.
    #[error("Could not read file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Book build errors.

use std::path::PathBuf;

use super::config::ConfigError;

/// Error raised while building or scaffolding a book.
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    /// `book.yaml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A file system operation failed.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The `book/` source directory does not exist.
    #[error("Chapter directory not found: {}", .0.display())]
    MissingSourceDir(PathBuf),

    /// `init` target already exists.
    #[error("Directory {} already exists", .0.display())]
    AlreadyExists(PathBuf),
}

impl BookError {
    /// Wrap an I/O error with the path it concerns.
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

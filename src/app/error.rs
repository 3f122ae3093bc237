use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced while resolving the target path or rewriting a file.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("'{}' does not exist", .0.display())]
    PathNotFound(PathBuf),

    #[error("'{}' is not a regular file", .0.display())]
    NotAFile(PathBuf),

    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no rights for write on '{}'", .0.display())]
    Permission(PathBuf),

    #[error("failed to {op} '{}'", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

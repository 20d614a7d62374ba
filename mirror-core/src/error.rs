use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MirrorError {
    LockfileNotFound(PathBuf),
    RegistryConflict { found: String, expected: String },
    Filesystem { path: PathBuf, source: std::io::Error },
    Io(#[from] std::io::Error),
    Internal(String),
}

impl Display for MirrorError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MirrorError::LockfileNotFound(dir) => write!(
                f,
                "No package-lock.json or bun.lock found in {} or any parent directory",
                dir.display()
            ),
            MirrorError::RegistryConflict { found, expected } => write!(
                f,
                ".npmrc registry URL \"{}\" does not match the expected URL \"{}\"",
                found, expected
            ),
            MirrorError::Filesystem { path, source } => {
                write!(f, "Failed to modify {}: {}", path.display(), source)
            }
            MirrorError::Io(e) => write!(f, "I/O error: {}", e),
            MirrorError::Internal(s) => write!(f, "Internal error: {}", s),
        }
    }
}

impl MirrorError {
    /// Suggestion shown under the error message, if one applies
    pub fn hint(&self) -> Option<String> {
        match self {
            MirrorError::LockfileNotFound(_) => {
                Some("Run `npm install` or `bun install` to generate a lockfile first".to_string())
            }
            MirrorError::RegistryConflict { found, .. } => Some(format!(
                "Remove the line `registry={}` from .npmrc, or pass that URL as the mirror",
                found
            )),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MirrorError>;

//! Lockfile discovery and the per-format registry rewrite policies.

use std::fmt;
use std::path::{Path, PathBuf};

use mirror_core::error::{MirrorError, Result};
use mirror_core::file_system::find_in_ancestors;
use regex::Regex;

use crate::registry::{RegistryUrl, PUBLIC_REGISTRY};

/// Project configuration file that sits next to the lockfile
pub const NPMRC_FILE: &str = ".npmrc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockfileKind {
    /// npm's `package-lock.json`
    PackageLock,
    /// bun's text lockfile, `bun.lock`
    Bun,
}

impl fmt::Display for LockfileKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Result of applying a rewrite policy to lockfile text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    pub notices: Vec<String>,
}

impl Rewrite {
    fn plain(text: String) -> Self {
        Self {
            text,
            notices: Vec::new(),
        }
    }
}

impl LockfileKind {
    /// Lookup order within a single directory
    pub const SEARCH_ORDER: [LockfileKind; 2] = [LockfileKind::PackageLock, LockfileKind::Bun];

    pub fn file_name(&self) -> &'static str {
        match self {
            LockfileKind::PackageLock => "package-lock.json",
            LockfileKind::Bun => "bun.lock",
        }
    }

    fn from_file_name(name: &str) -> Option<Self> {
        Self::SEARCH_ORDER
            .into_iter()
            .find(|kind| kind.file_name() == name)
    }

    /// Point public registry URLs at the mirror
    pub fn activate(&self, text: &str, mirror: &RegistryUrl) -> Rewrite {
        match self {
            LockfileKind::PackageLock => {
                Rewrite::plain(text.replace(PUBLIC_REGISTRY, mirror.lockfile()))
            }
            LockfileKind::Bun => Rewrite {
                text: text.to_string(),
                notices: vec![
                    "Updating bun.lock is not supported yet.".to_string(),
                    format!(
                        "You can enable the mirror by setting NPM_CONFIG_REGISTRY={} in your environment.",
                        mirror.configured()
                    ),
                ],
            },
        }
    }

    /// Point mirror URLs back at the public registry.
    ///
    /// For bun.lock every quoted value starting with the mirror URL is
    /// cleared to `""`. The original values are not recoverable, so bun has to
    /// re-resolve those entries on the next install.
    pub fn deactivate(&self, text: &str, mirror: &RegistryUrl) -> Result<Rewrite> {
        match self {
            LockfileKind::PackageLock => Ok(Rewrite::plain(
                text.replace(mirror.lockfile(), PUBLIC_REGISTRY),
            )),
            LockfileKind::Bun => {
                let pattern = format!("\"{}[^\"]+\"", regex::escape(mirror.lockfile()));
                let quoted = Regex::new(&pattern).map_err(|e| {
                    MirrorError::Internal(format!("Invalid bun.lock reset pattern: {}", e))
                })?;
                Ok(Rewrite::plain(
                    quoted.replace_all(text, "\"\"").into_owned(),
                ))
            }
        }
    }
}

/// A lockfile located by upward directory search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub path: PathBuf,
    pub kind: LockfileKind,
}

impl Lockfile {
    /// Find the nearest lockfile in `start` or any of its ancestors.
    ///
    /// Within one directory `package-lock.json` takes precedence over `bun.lock`.
    pub fn find(start: &Path) -> Result<Self> {
        let names = LockfileKind::SEARCH_ORDER.map(|kind| kind.file_name());
        Self::from_search(start, find_in_ancestors(start, &names))
    }

    fn from_search(start: &Path, found: Option<PathBuf>) -> Result<Self> {
        let path = found.ok_or_else(|| MirrorError::LockfileNotFound(start.to_path_buf()))?;

        let kind = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(LockfileKind::from_file_name)
            .ok_or_else(|| {
                MirrorError::Internal(format!("Unrecognized lockfile: {}", path.display()))
            })?;

        tracing::debug!(path = %path.display(), %kind, "found lockfile");
        Ok(Self { path, kind })
    }

    /// The `.npmrc` in the lockfile's directory
    pub fn npmrc_path(&self) -> PathBuf {
        self.path.with_file_name(NPMRC_FILE)
    }
}

//! The registry toggle: switch a project to the mirror, or back.

// Standard library
use std::fs;
use std::path::{Path, PathBuf};

// External crates
use mirror_core::error::{MirrorError, Result};
use mirror_core::file_system::read_or_empty;
use tracing::{debug, info, info_span};

// Internal imports
use crate::lockfile::Lockfile;
use crate::npmrc;
use crate::registry::{RegistryUrl, MIRROR_ENV_VAR};

/// Inputs of a toggle run, decoupled from process globals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleConfig {
    /// Mirror URL given on the command line
    pub mirror_arg: Option<String>,
    /// Value of `NPM_MIRROR_REGISTRY`
    pub env_mirror: Option<String>,
    /// Directory the lockfile search starts from
    pub working_dir: PathBuf,
}

impl ToggleConfig {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            mirror_arg: None,
            env_mirror: None,
            working_dir: working_dir.into(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_mirror_arg(mut self, url: impl Into<String>) -> Self {
        self.mirror_arg = Some(url.into());
        self
    }

    #[cfg(test)]
    pub(crate) fn with_env_mirror(mut self, url: impl Into<String>) -> Self {
        self.env_mirror = Some(url.into());
        self
    }

    /// Build the configuration from the process environment and current directory.
    ///
    /// A relative `directory` is resolved against the current directory.
    pub fn from_env(mirror_arg: Option<String>, directory: Option<PathBuf>) -> Result<Self> {
        let cwd = std::env::current_dir()?;
        let working_dir = match directory {
            Some(dir) => cwd.join(dir),
            None => cwd,
        };
        let working_dir = fs::canonicalize(&working_dir).unwrap_or(working_dir);

        Ok(Self {
            mirror_arg,
            env_mirror: std::env::var(MIRROR_ENV_VAR).ok(),
            working_dir,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleDirection {
    /// The mirror was switched on
    Activated,
    /// The public registry was restored
    Deactivated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChange {
    Created(PathBuf),
    Updated(PathBuf),
    Deleted(PathBuf),
}

impl FileChange {
    pub fn path(&self) -> &Path {
        match self {
            FileChange::Created(path) | FileChange::Updated(path) | FileChange::Deleted(path) => {
                path
            }
        }
    }

    pub fn verb(&self) -> &'static str {
        match self {
            FileChange::Created(_) => "Created",
            FileChange::Updated(_) => "Updated",
            FileChange::Deleted(_) => "Deleted",
        }
    }
}

/// What a toggle run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleReport {
    pub direction: ToggleDirection,
    pub mirror: RegistryUrl,
    pub lockfile: Lockfile,
    pub changes: Vec<FileChange>,
    pub notices: Vec<String>,
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|source| MirrorError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

fn remove_file(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|source| MirrorError::Filesystem {
        path: path.to_path_buf(),
        source,
    })
}

/// Switch the project containing `config.working_dir` between the public
/// registry and the mirror.
///
/// The mirror counts as active when `.npmrc` carries a matching `registry=`
/// directive or the lockfile already references the mirror. A directive
/// naming any other registry aborts the run before any file is touched.
pub fn toggle(config: &ToggleConfig) -> Result<ToggleReport> {
    let span = info_span!("toggle", dir = %config.working_dir.display());
    let _enter = span.enter();

    let mirror = RegistryUrl::resolve(config.mirror_arg.as_deref(), config.env_mirror.as_deref());
    debug!(configured = mirror.configured(), lockfile = mirror.lockfile(), "resolved mirror");

    let lockfile = Lockfile::find(&config.working_dir)?;
    let npmrc_path = lockfile.npmrc_path();

    let npmrc_text = read_or_empty(&npmrc_path);
    let directive = npmrc::find_directive(&npmrc_text);
    if let Some(directive) = &directive {
        if !mirror.matches_configured(&directive.value) {
            return Err(MirrorError::RegistryConflict {
                found: directive.value.clone(),
                expected: mirror.configured().to_string(),
            });
        }
    }

    let lock_text = read_or_empty(&lockfile.path);
    let active = directive.is_some() || lock_text.contains(mirror.lockfile());
    info!(active, kind = %lockfile.kind, "detected registry state");

    let mut changes = Vec::new();
    let (direction, rewrite) = if active {
        if let Some(directive) = &directive {
            let updated = npmrc::delete_line(&npmrc_text, directive.offset);
            if updated.is_empty() {
                remove_file(&npmrc_path)?;
                changes.push(FileChange::Deleted(npmrc_path));
            } else {
                write_file(&npmrc_path, &updated)?;
                changes.push(FileChange::Updated(npmrc_path));
            }
        }
        (
            ToggleDirection::Deactivated,
            lockfile.kind.deactivate(&lock_text, &mirror)?,
        )
    } else {
        let existed = npmrc_path.exists();
        let updated = npmrc::append_directive(&npmrc_text, mirror.configured());
        write_file(&npmrc_path, &updated)?;
        changes.push(if existed {
            FileChange::Updated(npmrc_path)
        } else {
            FileChange::Created(npmrc_path)
        });
        (
            ToggleDirection::Activated,
            lockfile.kind.activate(&lock_text, &mirror),
        )
    };

    if rewrite.text != lock_text {
        write_file(&lockfile.path, &rewrite.text)?;
        changes.push(FileChange::Updated(lockfile.path.clone()));
    } else {
        debug!(path = %lockfile.path.display(), "lockfile unchanged");
    }

    Ok(ToggleReport {
        direction,
        mirror,
        lockfile,
        changes,
        notices: rewrite.notices,
    })
}

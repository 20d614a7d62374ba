//! Toggle an npm project between the public registry and a mirror.
//!
//! The toggle edits two files in place: the project's `.npmrc` (one
//! `registry=` directive is appended or removed) and the lockfile found by
//! walking up from the working directory (registry URLs are rewritten).

pub mod lockfile;
pub mod npmrc;
pub mod registry;
pub mod toggle;

pub use lockfile::{Lockfile, LockfileKind, Rewrite};
pub use registry::{RegistryUrl, DEFAULT_MIRROR, MIRROR_ENV_VAR, PUBLIC_REGISTRY};
pub use toggle::{toggle, FileChange, ToggleConfig, ToggleDirection, ToggleReport};

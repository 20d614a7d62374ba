//! Shared foundation for the npm-mirror workspace.
//!
//! Provides the workspace error type, themed output macros, tracing setup and
//! the small set of file-system helpers the registry toggle is built on.

pub mod error;
pub mod file_system;
pub mod output_macros;
pub mod tracing_init;

pub use error::{MirrorError, Result};

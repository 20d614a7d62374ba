// Standard library
use std::path::{Path, PathBuf};

// External crates
use anyhow::{Context, Result};
use clap::Parser;
use mirror_core::{mirror_info, mirror_println, mirror_success, MirrorError};

// Internal imports
use npm_mirror::{toggle, ToggleConfig, ToggleDirection, ToggleReport};

#[derive(Parser)]
#[command(name = "npm-mirror")]
#[command(about = "Toggle an npm project between the public registry and a mirror")]
#[command(version)]
pub struct Args {
    /// Mirror registry URL (defaults to $NPM_MIRROR_REGISTRY, then http://registry.npmmirror.com)
    pub mirror_url: Option<String>,

    /// Directory to start the lockfile search from (defaults to the current directory)
    pub directory: Option<PathBuf>,
}

pub fn execute(args: Args) -> Result<()> {
    let config = ToggleConfig::from_env(args.mirror_url, args.directory)
        .context("Failed to determine the working directory")?;
    let report = toggle(&config)?;
    print_report(&report, &config.working_dir);
    Ok(())
}

/// Error text with its full context chain, plus the hint for domain errors
pub fn describe_error(e: &anyhow::Error) -> (String, Option<String>) {
    let hint = e.downcast_ref::<MirrorError>().and_then(MirrorError::hint);
    (format!("{:#}", e), hint)
}

/// Path relative to the working directory, for status lines
fn display_path(path: &Path, base: &Path) -> PathBuf {
    pathdiff::diff_paths(path, base).unwrap_or_else(|| path.to_path_buf())
}

fn print_report(report: &ToggleReport, working_dir: &Path) {
    match report.direction {
        ToggleDirection::Activated => {
            mirror_println!("Enabling custom registry: {}", report.mirror);
        }
        ToggleDirection::Deactivated => {
            mirror_println!("Resetting default registry...");
        }
    }
    for change in &report.changes {
        mirror_success!(
            "{} {}",
            change.verb(),
            display_path(change.path(), working_dir).display()
        );
    }
    for notice in &report.notices {
        mirror_info!("{}", notice);
    }
    mirror_println!("Done.");
}

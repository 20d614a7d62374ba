mod cli;

use std::process;

use clap::Parser;
use mirror_core::{mirror_error, mirror_error_hint};

fn main() {
    if let Err(e) = mirror_core::tracing_init::init() {
        mirror_error!("{}", e);
    }

    let args = cli::Args::parse();
    if let Err(e) = cli::execute(args) {
        let (message, hint) = cli::describe_error(&e);
        mirror_error!("Error: {}", message);
        if let Some(hint) = hint {
            mirror_error_hint!("{}", hint);
        }
        process::exit(1);
    }
}

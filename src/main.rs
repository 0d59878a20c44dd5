//! requp - requirements manifest updater
//!
//! Appends dependency specifiers to a requirements manifest, skipping
//! entries already present, and installs each new entry via
//! `<python> -m pip install`.

use clap::Parser;

mod cli;
mod error;
mod installer;
mod manifest;
mod updater;

use cli::Cli;
use error::{Result, usage};
use installer::PipInstaller;
use manifest::Manifest;

fn run(cli: Cli) -> Result<()> {
    let (dependencies, manifest_path) = cli.split_args();

    if cli.args.is_empty() {
        return Err(usage(
            "Usage: requp <dependency1> [dependency2 ...] [path/to/requirements.txt]",
        ));
    }
    if dependencies.is_empty() {
        return Err(usage("At least one dependency must be specified."));
    }

    let manifest = Manifest::resolve(manifest_path);
    let installer = PipInstaller::new(cli.python.clone());
    updater::add_to_manifest(&dependencies, &manifest, &installer, cli.quiet)
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

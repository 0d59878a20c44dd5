//! CLI definitions using clap derive API
//!
//! requp takes a flat argument list rather than subcommands: every
//! positional is a dependency specifier, except that a final argument
//! ending in `.txt` is taken as the manifest path.

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// requp - requirements manifest updater
///
/// Add dependencies to a requirements manifest and install them via pip.
#[derive(Parser, Debug)]
#[command(
    name = "requp",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Add dependencies to a requirements manifest and install them via pip",
    long_about = "requp appends dependency specifiers to a requirements manifest \
                  (requirements.txt by default), skipping entries already present, and \
                  attempts to install each new entry with `<python> -m pip install`. \
                  Install failures are reported but never abort the run.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  requp requests                        \x1b[90m# Install and record one dependency\x1b[0m\n   \
                  requp flask requests                  \x1b[90m# Several at once\x1b[0m\n   \
                  requp foo bar ./deps/requirements.txt \x1b[90m# Explicit manifest path (last arg ends in .txt)\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Dependency specifiers; a trailing argument ending in .txt is the manifest path
    #[arg(value_name = "DEPENDENCY|MANIFEST")]
    pub args: Vec<String>,

    /// Python interpreter used to invoke pip
    #[arg(long, value_name = "PATH", env = "REQUP_PYTHON", default_value = "python3")]
    pub python: String,

    /// Suppress per-entry status output (errors are still printed)
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Split positional arguments into dependencies and an optional manifest path.
    ///
    /// A final argument ending in `.txt` is the manifest path; everything
    /// else is a dependency specifier.
    pub fn split_args(&self) -> (Vec<String>, Option<PathBuf>) {
        match self.args.split_last() {
            Some((last, rest)) if last.ends_with(".txt") => {
                (rest.to_vec(), Some(PathBuf::from(last)))
            }
            _ => (self.args.clone(), None),
        }
    }
}

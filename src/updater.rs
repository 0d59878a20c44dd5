//! The update operation
//!
//! Given requested dependency specifiers and a manifest, installs the
//! specifiers not already recorded and appends them to the manifest.
//! Install failures are reported per entry and never abort the run:
//! every new specifier is appended regardless of its install outcome.

use std::collections::HashSet;

use console::Style;

use crate::error::Result;
use crate::installer::{InstallOutcome, PipInstaller};
use crate::manifest::Manifest;

/// Add dependencies to the manifest, installing the new ones first.
///
/// New entries are processed in `HashSet` iteration order, which is
/// deliberately unspecified; neither the install sequence nor the
/// appended line order follows the requested order.
pub fn add_to_manifest(
    dependencies: &[String],
    manifest: &Manifest,
    installer: &PipInstaller,
    quiet: bool,
) -> Result<()> {
    manifest.ensure_parent_dir()?;

    let existing = manifest.existing_entries()?;
    let requested: HashSet<String> = dependencies.iter().cloned().collect();
    let new_entries: HashSet<String> = requested.difference(&existing).cloned().collect();

    if new_entries.is_empty() {
        if !quiet {
            println!(
                "All specified dependencies are already in {}.",
                manifest.path().display()
            );
        }
        return Ok(());
    }

    for entry in &new_entries {
        match installer.install(entry) {
            InstallOutcome::Installed => {
                if !quiet {
                    println!(
                        "{} {}",
                        Style::new().green().bold().apply_to("Installed"),
                        entry
                    );
                }
            }
            InstallOutcome::Failed(reason) => {
                eprintln!(
                    "{} {} ({reason})",
                    Style::new().red().bold().apply_to("Failed to install"),
                    entry
                );
            }
        }
    }

    manifest.append_entries(new_entries.iter().map(String::as_str))?;
    if !quiet {
        for entry in &new_entries {
            println!("Added {} to {}", entry, manifest.path().display());
        }
    }

    Ok(())
}

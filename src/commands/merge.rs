//! Snapshot exchange commands: merge a partial into the current config,
//! import a snapshot wholesale, export the current config.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::partial::PartialProfile;
use crate::profile::ProfileConfig;
use crate::store::{apply, Command};

/// Execute the merge command: deep-merge a partial JSON document into the
/// current config. Unknown keys in the input are discarded.
pub fn execute_merge(config_path: &Path, input: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)?;
    let partial = PartialProfile::from_json(&text)?;

    let config = ProfileConfig::load_or_default(config_path)?;
    let merged = apply(&config, Command::Merge(Box::new(partial)));
    merged.save(config_path)?;

    println!(
        "{} Merged {} into {}",
        style("✓").green(),
        input.display(),
        config_path.display()
    );
    Ok(())
}

/// Execute the import command: replace the config with the snapshot, layered
/// over full defaults so missing fields are never left undefined.
pub fn execute_import(config_path: &Path, input: &Path) -> Result<()> {
    let text = std::fs::read_to_string(input)?;
    let partial = PartialProfile::from_json(&text)?;

    let config = partial.into_config();
    config.save(config_path)?;

    println!(
        "{} Imported {} as {}",
        style("✓").green(),
        input.display(),
        config_path.display()
    );
    Ok(())
}

/// Execute the export command: serialize the current config verbatim,
/// pretty-printed.
pub fn execute_export(config_path: &Path, output: &Path) -> Result<()> {
    let config = ProfileConfig::load(config_path)?;
    config.save(output)?;

    println!("{} Exported config to {}", style("✓").green(), output.display());
    Ok(())
}

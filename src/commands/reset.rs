//! Implements `readme-forge reset`: back to defaults, with confirmation.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::profile::ProfileConfig;

/// Execute the reset command
pub fn execute_reset(config_path: &Path, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt("Reset the config to defaults? All edits will be lost.")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    ProfileConfig::default().save(config_path)?;
    println!("{} Reset {} to defaults", style("✓").green(), config_path.display());
    Ok(())
}

//! Implements `readme-forge init` for starting a new profile config.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::profile::ProfileConfig;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite existing config
    pub force: bool,
    /// Display name for the profile
    pub name: Option<String>,
    /// GitHub username
    pub github_user: Option<String>,
    /// Skip interactive prompts
    pub yes: bool,
}

/// Execute the init command
pub fn execute_init(config_path: &Path, options: InitOptions) -> Result<()> {
    if config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = ProfileConfig::default();

    let interactive = !options.yes && options.name.is_none() && options.github_user.is_none();
    if interactive {
        run_interactive_init(&mut config)?;
    } else {
        if let Some(name) = options.name {
            config.name = name;
        }
        if let Some(github_user) = options.github_user {
            config.github_user = github_user;
        }
    }

    config.save(config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());
    println!(
        "  Edit it directly or run {} to see the document.",
        style("readme-forge render").cyan()
    );
    Ok(())
}

fn run_interactive_init(config: &mut ProfileConfig) -> Result<()> {
    println!("{}", style("Let's set up your profile config.").bold());

    config.name = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Your name")
        .default(config.name.clone())
        .interact_text()?;

    config.github_user = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("GitHub username")
        .default(config.github_user.clone())
        .interact_text()?;

    Ok(())
}

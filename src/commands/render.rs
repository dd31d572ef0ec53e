//! Implements `readme-forge render`: config snapshot in, Markdown out.

use std::path::{Path, PathBuf};

use anyhow::Result;
use console::style;

use crate::profile::ProfileConfig;
use crate::render::render;

/// Options for the render command
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Output file path
    pub output: PathBuf,
    /// Print to stdout instead of writing a file
    pub stdout: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { output: PathBuf::from("README.md"), stdout: false }
    }
}

/// Execute the render command
pub fn execute_render(config_path: &Path, options: RenderOptions) -> Result<()> {
    let config = ProfileConfig::load_or_default(config_path)?;
    let document = render(&config);

    if options.stdout {
        println!("{document}");
        return Ok(());
    }

    std::fs::write(&options.output, &document)?;
    println!(
        "{} Rendered {} section(s) to {}",
        style("✓").green(),
        config.section_order.len(),
        options.output.display()
    );
    Ok(())
}

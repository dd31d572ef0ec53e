//! Implements `readme-forge generate`: the AI-assisted operations. Each
//! subcommand loads the config, runs one model operation, applies the
//! resulting store commands, and saves. One request per invocation.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::ai::{ops, GeminiClient};
use crate::profile::ProfileConfig;
use crate::store::{Command, ProfileStore};

#[derive(Debug, Clone, Subcommand)]
pub enum GenerateSubcommand {
    /// Analyze a GitHub profile URL to fill the bio and skill selection
    Profile {
        /// Public GitHub profile URL
        #[arg(long)]
        url: String,
    },

    /// Write the bio from free-form keywords
    Bio {
        /// Keywords describing you (comma separated or prose)
        #[arg(long)]
        keywords: String,
    },

    /// Generate the banner background image from the configured prompt
    HeaderImage,

    /// Write achievement bullets for one work experience entry
    WorkDescription {
        /// Zero-based entry index
        #[arg(long)]
        index: usize,
    },

    /// Write contribution bullets for one volunteering entry
    VolunteeringDescription {
        /// Zero-based entry index
        #[arg(long)]
        index: usize,
    },

    /// Write a summary for one project entry
    ProjectDescription {
        /// Zero-based entry index
        #[arg(long)]
        index: usize,
    },

    /// Suggest the tech list for one project from its repository
    ProjectTech {
        /// Zero-based entry index
        #[arg(long)]
        index: usize,
    },

    /// Add a new project entry analyzed from a URL
    ProjectFromUrl {
        /// Live site or repository URL
        #[arg(long)]
        url: String,
    },

    /// Extract name, bio, history, and skills from resume text
    Resume {
        /// Resume text file; falls back to the config's stored resume text
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Draft the whole profile from the GitHub username plus keywords
    Quick {
        /// Keywords steering the draft
        #[arg(long)]
        keywords: String,
    },

    /// Draft the whole profile from a custom prompt
    Custom {
        /// Free-form prompt describing you
        #[arg(long)]
        prompt: String,
    },

    /// Extract profile fields from an arbitrary file plus a prompt
    File {
        /// File to analyze (resume PDF, screenshot, notes)
        #[arg(long)]
        path: PathBuf,

        /// What to extract from the file
        #[arg(long)]
        prompt: String,
    },
}

fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("pdf") => "application/pdf",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("txt") | Some("md") => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Execute one generate subcommand against the config at `config_path`.
pub async fn execute_generate(config_path: &Path, subcommand: GenerateSubcommand) -> Result<()> {
    let config = ProfileConfig::load_or_default(config_path)?;
    let client = GeminiClient::from_env()?;

    // Advisory busy indicator; nothing serializes overlapping invocations
    // beyond one operation per process.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message("Talking to the model...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let result = run(&client, &config, subcommand).await;
    let commands = match result {
        Ok(commands) => commands,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    let mut store = ProfileStore::with_state(config);
    let applied = commands.len();
    for command in commands {
        store.dispatch(command);
    }
    store.state().save(config_path)?;

    spinner.finish_and_clear();
    println!(
        "{} Applied {applied} update(s) to {}",
        style("✓").green(),
        config_path.display()
    );
    Ok(())
}

async fn run(
    client: &GeminiClient,
    config: &ProfileConfig,
    subcommand: GenerateSubcommand,
) -> crate::Result<Vec<Command>> {
    match subcommand {
        GenerateSubcommand::Profile { url } => ops::analyze_profile(client, &url).await,
        GenerateSubcommand::Bio { keywords } => ops::generate_bio(client, &keywords).await,
        GenerateSubcommand::HeaderImage => {
            ops::generate_header_image(client, &config.main_header).await
        }
        GenerateSubcommand::WorkDescription { index } => {
            let entry = bounds_checked(&config.work_experience, index, "work experience")?;
            ops::generate_work_description(client, entry, index).await
        }
        GenerateSubcommand::VolunteeringDescription { index } => {
            let entry = bounds_checked(&config.volunteering, index, "volunteering")?;
            ops::generate_volunteering_description(client, entry, index).await
        }
        GenerateSubcommand::ProjectDescription { index } => {
            let entry = bounds_checked(&config.projects, index, "project")?;
            ops::generate_project_description(client, entry, index).await
        }
        GenerateSubcommand::ProjectTech { index } => {
            let entry = bounds_checked(&config.projects, index, "project")?;
            ops::suggest_project_tech(client, entry, index).await
        }
        GenerateSubcommand::ProjectFromUrl { url } => {
            ops::analyze_project_url(client, &url).await
        }
        GenerateSubcommand::Resume { file } => {
            let text = match file {
                Some(path) => std::fs::read_to_string(path)?,
                None => config.resume_text.clone(),
            };
            ops::analyze_resume(client, &text).await
        }
        GenerateSubcommand::Quick { keywords } => {
            ops::quick_generate(client, &config.github_user, &keywords).await
        }
        GenerateSubcommand::Custom { prompt } => {
            ops::custom_prompt_generate(client, &prompt).await
        }
        GenerateSubcommand::File { path, prompt } => {
            let bytes = std::fs::read(&path)?;
            ops::analyze_file(client, &bytes, mime_for(&path), &prompt).await
        }
    }
}

fn bounds_checked<'a, T>(
    list: &'a [T],
    index: usize,
    what: &str,
) -> crate::Result<&'a T> {
    list.get(index).ok_or_else(|| {
        crate::ForgeError::InvalidInput(format!(
            "no {what} entry at index {index} ({} present)",
            list.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_guess() {
        assert_eq!(mime_for(Path::new("resume.pdf")), "application/pdf");
        assert_eq!(mime_for(Path::new("notes.md")), "text/plain");
        assert_eq!(mime_for(Path::new("blob")), "application/octet-stream");
    }

    #[tokio::test]
    async fn test_out_of_range_index_fails_before_any_request() {
        let client = GeminiClient::new("test-key").unwrap();
        let config = ProfileConfig::default();
        let result = run(
            &client,
            &config,
            GenerateSubcommand::WorkDescription { index: 3 },
        )
        .await;
        assert!(matches!(result, Err(crate::ForgeError::InvalidInput(_))));
    }
}

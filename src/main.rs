#![forbid(unsafe_code)]
//! README Forge command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use readme_forge::commands::{
    execute_export, execute_generate, execute_import, execute_init, execute_merge,
    execute_render, execute_reset, GenerateSubcommand, InitOptions, RenderOptions,
};

#[derive(Parser)]
#[command(name = "readme-forge")]
#[command(about = "GitHub profile README generator")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = "readme-forge.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new profile config
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Display name for the profile
        #[arg(long)]
        name: Option<String>,

        /// GitHub username
        #[arg(long)]
        github_user: Option<String>,

        /// Skip interactive prompts (use defaults + CLI args)
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Render the profile config to Markdown
    Render {
        /// Output file path
        #[arg(short, long, default_value = "README.md")]
        output: PathBuf,

        /// Print to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,
    },

    /// Deep-merge a partial JSON document into the config
    Merge {
        /// Partial JSON file to merge
        input: PathBuf,
    },

    /// Replace the config with an imported snapshot
    Import {
        /// Snapshot JSON file
        input: PathBuf,
    },

    /// Export the config as a pretty-printed snapshot
    Export {
        /// Output file path
        #[arg(default_value = "readme-forge-export.json")]
        output: PathBuf,
    },

    /// Reset the config to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// AI-assisted field generation (requires GEMINI_API_KEY)
    Generate {
        #[command(subcommand)]
        subcommand: GenerateSubcommand,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "readme_forge=debug" } else { "readme_forge=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Init { force, name, github_user, yes } => {
            execute_init(&cli.config, InitOptions { force, name, github_user, yes })
        }
        Commands::Render { output, stdout } => {
            execute_render(&cli.config, RenderOptions { output, stdout })
        }
        Commands::Merge { input } => execute_merge(&cli.config, &input),
        Commands::Import { input } => execute_import(&cli.config, &input),
        Commands::Export { output } => execute_export(&cli.config, &output),
        Commands::Reset { yes } => execute_reset(&cli.config, yes),
        Commands::Generate { subcommand } => execute_generate(&cli.config, subcommand).await,
    }
}

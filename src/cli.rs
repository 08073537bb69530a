//! Command-line interface for archlint

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::Artifact;
use crate::report::render_text;
use crate::validator::validate_artifact;

#[derive(Parser)]
#[command(
    name = "archlint",
    version,
    about = "Score architecture diagrams against C4, ArchiMate, TOGAF, and BPMN structural rules"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate an artifact file and report score, grade, and suggestions
    Validate(ValidateArgs),
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the artifact JSON file
    pub artifact: PathBuf,

    /// Override the framework declared in the artifact (c4, archimate, togaf, bpmn)
    #[arg(long)]
    pub framework: Option<String>,

    /// Override the artifact type declared in the artifact (e.g. c4_context)
    #[arg(long)]
    pub artifact_type: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with an error if the score falls below this threshold
    #[arg(long, env = "ARCHLINT_FAIL_UNDER")]
    pub fail_under: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Validate(args) => run_validate(args),
    }
}

fn run_validate(args: ValidateArgs) -> Result<()> {
    let mut artifact = Artifact::load(&args.artifact)
        .with_context(|| format!("failed to load artifact {}", args.artifact.display()))?;

    if let Some(framework) = args.framework {
        artifact.framework = framework;
    }
    if let Some(artifact_type) = args.artifact_type {
        artifact.artifact_type = artifact_type;
    }

    let result = validate_artifact(&artifact);

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&result)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if let Some(threshold) = args.fail_under {
        if result.score < threshold {
            bail!("score {} is below threshold {}", result.score, threshold);
        }
    }

    Ok(())
}

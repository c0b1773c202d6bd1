//! changelogup - changelog generation from GitHub commit history
//!
//! CLI binary wrapping the library pipeline.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "changelogup")]
#[command(about = "Render a GitHub repository's commit history into a changelog")]
#[command(version)]
struct Cli {
    /// GitHub personal access token
    #[arg(long)]
    token: Option<String>,

    /// Repository in owner/repo form
    #[arg(long)]
    repo: Option<String>,

    /// Output path for the changelog (defaults to CHANGELOG.md)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Group entries by conventional commit type
    #[arg(long)]
    group: bool,

    /// GitHub Enterprise hostname (defaults to github.com)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    cli::run_generate(cli.token, cli.repo.as_deref(), cli.output, cli.group, cli.host).await?;

    Ok(())
}

//! Generate command - fetch commits and write the changelog

use crate::cli::style::{check, spinner_style, Stylize};
use anstream::println;
use changelogup::changelog;
use changelogup::config::RunConfig;
use changelogup::error::Result;
use changelogup::github::GitHubClient;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;

/// Run one changelog generation pass.
pub async fn run_generate(
    token: Option<String>,
    repo: Option<&str>,
    output: Option<PathBuf>,
    group: bool,
    host: Option<String>,
) -> Result<()> {
    let config = RunConfig::resolve(token, repo, output, group, host)?;
    let client = GitHubClient::new(&config.token, config.host.clone())?;

    let spinner = ProgressBar::new_spinner().with_style(spinner_style());
    spinner.set_message(format!("Fetching commits from {}...", config.repo));
    spinner.enable_steady_tick(Duration::from_millis(80));

    let outcome = changelog::generate(&client, &config).await;
    spinner.finish_and_clear();
    let summary = outcome?;

    println!(
        "{} Wrote {} entr{} to {}",
        check(),
        summary.entries.to_string().accent(),
        if summary.entries == 1 { "y" } else { "ies" },
        config.output.display().to_string().emphasis()
    );

    Ok(())
}

//! gitlab-tool - Main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info};

use gitlab_tool::{
    run_commit_list_command, run_download_command, Cli, Command, GitlabClient, TokenResolver,
    UrlResolver,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cli.effective_log_filter()),
    )
    .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting gitlab-tool v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: project_id={:?}, refspec={}, verbose={}, quiet={}",
        cli.project_id, cli.refspec, cli.verbose, cli.quiet
    );

    // Resolve instance URL and token with fallback logic
    let gitlab_url = UrlResolver::resolve(cli.gitlab_url.as_deref());
    let token = TokenResolver::new(&gitlab_url).resolve(cli.token.as_deref())?;

    let client = GitlabClient::new(token, &gitlab_url)?;
    debug!("Using GitLab API at {}", client.base_url());

    match &cli.command {
        Command::Download(_) => run_download_command(&client, cli).await,
        Command::Commit { .. } => run_commit_list_command(&client, cli).await,
    }
}

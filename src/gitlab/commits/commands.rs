//! Commit command handlers

use log::debug;

use super::api::CommitQuery;
use crate::cli::{Cli, Command, CommitCommand};
use crate::gitlab::GitlabClient;
use crate::output::output_commits;
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message};

/// Run the 'commit list' command
pub async fn run_commit_list_command(
    client: &GitlabClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Commit {
        command: CommitCommand::List(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let project_id = cli.require_project_id()?;
    let query = CommitQuery::from_args(&cli.refspec, args);
    debug!("Commit query for project {}: {:?}", project_id, query);

    let sp = create_spinner(
        &format!("Fetching commits of project {}...", project_id),
        cli.spinners_disabled(),
    );
    let commits = client
        .list_commits(project_id, &query)
        .await
        .inspect_err(|_e| {
            finish_spinner_with_message(sp.clone(), "Failed to fetch commits");
        })?;
    finish_spinner(sp);

    debug!("Fetched {} commits", commits.len());
    output_commits(&commits, &args.format, args.long, args.with_stats);

    Ok(())
}

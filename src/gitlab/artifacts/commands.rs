//! Download command handler

use log::debug;

use super::download::{run_download, DownloadOptions, DownloadOutcome};
use crate::cli::{Cli, Command};
use crate::gitlab::GitlabClient;
use crate::ui::{create_spinner, finish_spinner, finish_spinner_with_message};

/// Run the download command
pub async fn run_download_command(
    client: &GitlabClient,
    cli: &Cli,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let Command::Download(args) = &cli.command else {
        unreachable!()
    };

    let options = DownloadOptions::from_cli(cli, args)?;
    debug!("Download options: {:?}", options);

    let what = match &options.file_name {
        Some(file_name) => format!("'{}'", file_name),
        None => "artifacts archive".to_string(),
    };
    let sp = create_spinner(
        &format!(
            "Downloading {} of job '{}' on '{}'...",
            what, options.job_name, options.ref_name
        ),
        cli.spinners_disabled(),
    );

    let outcome = run_download(client, &options).await.inspect_err(|_e| {
        finish_spinner_with_message(sp.clone(), "Download failed");
    })?;
    finish_spinner(sp);

    println!("{}", format_summary(&options, &outcome));
    Ok(())
}

/// Summary printed after a successful download
///
/// In archive mode the server serves the latest successful job on the ref,
/// so the resolved IDs are only reported for single-file downloads.
fn format_summary(options: &DownloadOptions, outcome: &DownloadOutcome) -> String {
    let mut lines = vec!["Artifacts downloaded successfully:".to_string()];
    if options.file_name.is_some() {
        lines.push(format!("  Pipeline: {}", outcome.pipeline_id));
        lines.push(format!("  Job: {} ({})", options.job_name, outcome.job_id));
    } else {
        lines.push(format!(
            "  Source: latest successful '{}' job on '{}'",
            options.job_name, options.ref_name
        ));
    }
    lines.push(format!("  Output: {}", outcome.saved_path.display()));
    if options.extract && options.file_name.is_none() {
        lines.push(format!(
            "  Extracted: {} entries into {}",
            outcome.extracted.len(),
            options.dest_dir.display()
        ));
        if !options.keep_source {
            lines.push("  Archive removed".to_string());
        }
    }
    lines.join("\n")
}

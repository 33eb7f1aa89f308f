//! Commit output formatter

use std::fmt::Write;

use comfy_table::{presets::NOTHING, Table};

use crate::cli::OutputFormat;
use crate::gitlab::Commit;

/// Output commits in the specified format
///
/// `long` prints every field the API returned, one pretty JSON document
/// per commit, and only affects the text format.
pub fn output_commits(commits: &[Commit], format: &OutputFormat, long: bool, with_stats: bool) {
    match format {
        OutputFormat::Text if long => output_long(commits),
        OutputFormat::Text => output_text(commits, with_stats),
        OutputFormat::Table => output_table(commits, with_stats),
        OutputFormat::Json => super::common::print_json(commits),
        OutputFormat::Yaml => super::common::print_yaml(commits),
    }
}

/// Text block for one commit
pub fn format_commit_text(commit: &Commit, with_stats: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Commit: {}", commit.id);
    let _ = writeln!(
        out,
        "Author: {} <{}>",
        commit.author_name(),
        commit.author_email()
    );
    let _ = writeln!(out, "Date: {}", commit.committed_date());
    let _ = writeln!(out, "Message: {}", commit.message().trim_end());
    let _ = writeln!(out, "WebURL: {}", commit.web_url());
    if with_stats {
        if let Some(stats) = &commit.stats {
            let _ = writeln!(out, "Stats:");
            let _ = writeln!(out, "\tAdditions: {}", stats.additions);
            let _ = writeln!(out, "\tDeletions: {}", stats.deletions);
            let _ = writeln!(out, "\tTotal: {}", stats.total);
        }
    }
    out
}

fn output_text(commits: &[Commit], with_stats: bool) {
    for commit in commits {
        println!("{}", format_commit_text(commit, with_stats));
    }
}

fn output_long(commits: &[Commit]) {
    for commit in commits {
        super::common::print_json(commit);
    }
}

fn build_table(commits: &[Commit], with_stats: bool) -> Table {
    let mut table = Table::new();
    table.load_preset(NOTHING);

    let mut header = vec!["Commit", "Author", "Date", "Title"];
    if with_stats {
        header.extend(["Additions", "Deletions", "Total"]);
    }
    table.set_header(header);

    for commit in commits {
        let mut row = vec![
            commit.short_id().to_string(),
            commit.author_name().to_string(),
            commit.committed_date().to_string(),
            commit.title().to_string(),
        ];
        if with_stats {
            let stats = commit.stats.unwrap_or_default();
            row.extend([
                stats.additions.to_string(),
                stats.deletions.to_string(),
                stats.total.to_string(),
            ]);
        }
        table.add_row(row);
    }
    table
}

fn output_table(commits: &[Commit], with_stats: bool) {
    let table = build_table(commits, with_stats);
    println!();
    println!("{table}");
    println!("\nTotal: {} commits", commits.len());
}

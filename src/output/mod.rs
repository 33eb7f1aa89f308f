//! Output formatting module
//!
//! Handles the text, table, JSON and YAML formats of `commit list`.

mod commits;
mod common;

pub use commits::{format_commit_text, output_commits};
pub use common::{print_json, print_yaml};

//! Repository commits

mod api;
mod commands;
mod models;

pub use api::CommitQuery;
pub use commands::run_commit_list_command;
pub use models::{Commit, CommitStats};

//! Pipelines module - list project pipelines by ref and status

mod api;
mod models;

pub use api::PipelineQuery;
pub use models::{Pipeline, PipelineStatus};

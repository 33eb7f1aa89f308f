//! Jobs module - list the jobs of a pipeline

mod api;
mod models;

pub use models::{Job, JobPipeline};

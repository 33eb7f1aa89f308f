//! UI utilities for terminal output
//!
//! Progress spinners shown on stderr while requests run.

mod spinner;

pub use spinner::{create_spinner, finish_spinner, finish_spinner_with_message};

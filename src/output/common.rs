//! Common utilities for output formatters

use serde::Serialize;

/// Print data as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Print data as YAML
pub fn print_yaml<T: Serialize + ?Sized>(data: &T) {
    match serde_yml::to_string(data) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error serializing to YAML: {}", e),
    }
}

//! Example: Structured Logging with Serde
//!
//! An `ErrorStack` serializes as a single string field, which keeps log lines
//! flat for logging infrastructure (e.g., ELK stack, Splunk, CloudWatch).

use errstack::{ErrorStack, Wrapped};
use serde::Serialize;

#[derive(Serialize)]
struct LogLine<'a> {
    level: &'static str,
    request_id: u64,
    error: &'a ErrorStack,
}

fn main() {
    // 1. Build the stack root-first
    let error = ErrorStack::new()
        .with(Wrapped::new("database connection timeout", "no route to host"))
        .with("loading user profile")
        .with("GET /users/42 failed");

    // 2. Embed it in a structured log line
    let line = LogLine { level: "error", request_id: 42, error: &error };

    match serde_json::to_string_pretty(&line) {
        Ok(json) => {
            println!("Structured Error Log:\n{}", json);
        }
        Err(e) => {
            eprintln!("Failed to serialize error: {}", e);
        }
    }
}

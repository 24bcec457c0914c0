//! # Farmdesk CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/farmdesk/cli/)                              │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring, logging, dispatch (commands.rs)          │
//! │  - Interactive session (shell.rs)                           │
//! │  - Terminal rendering via minijinja templates (render.rs)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Library (farmdesk::api and inward)                         │
//! │  - Validation, id allocation, view queries, events          │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Commands and queries**: unit tests next to the code, property tests for the
//!   view queries.
//! - **CLI layer**: parser tests build argument strings; rendering tests feed canned
//!   results into the templates with color off.
//! - **End to end**: `tests/cli.rs` drives the binary with `assert_cmd`.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

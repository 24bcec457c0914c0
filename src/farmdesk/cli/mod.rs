//! # CLI Behavior
//!
//! This is **one possible UI client** for farmdesk, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output formatting.
//!
//! ## Naked Execution (`farmdesk`)
//!
//! Running `farmdesk` with no arguments shows the dashboard: totals by status and the
//! most recently active farmers.
//!
//! ## Forms
//!
//! `add` and `edit` take one flag per field. `edit` starts from the stored record, so
//! only the flags you pass change anything. Missing required fields are reported
//! together and nothing is saved; inside `shell` you simply try again.
//!
//! ## Output
//!
//! `--json` prints the underlying records instead of the templates. `--no-color`
//! turns styling off; it is also off when stdout is not a color terminal.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging and per-command handlers
//! - `shell`: The interactive session
//! - `render`: Output formatting (templates, JSON, messages)
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styling
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;

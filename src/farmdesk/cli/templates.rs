//! # CLI Templates
//!
//! Terminal output goes through minijinja templates kept as stand-alone files under
//! `templates/` and embedded at compile time. Keeping them out of the Rust code makes
//! layout changes easy to edit and diff.
//!
//! Templates are rendered with `trim_blocks` and `lstrip_blocks` on, so a line holding
//! only a block tag produces no output. Width math (padding, truncation) is done in
//! `render.rs` and handed in as plain strings; templates only pick styles by name
//! through the `style` filter.

pub const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.tmp");
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const FARMER_TEMPLATE: &str = include_str!("templates/farmer.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");

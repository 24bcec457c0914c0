//! # Farmdesk Architecture
//!
//! Farmdesk keeps a list of farmer contact records: a dashboard summary, a searchable
//! and filterable list, and add/edit flows. It is a **UI-agnostic library** first; the
//! `farmdesk` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders output, runs the shell         │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the only way to mutate records           │
//! │  - Publishes snapshot-changed events to subscribers         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + View Queries (query.rs)    │
//! │  - Validation, id allocation, date stamping                 │
//! │  - Pure projections: filtering, recent activity, avatars    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, InMemoryStore                           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifetime of the Data
//!
//! Records live exactly as long as the process. Each fresh start builds a store from
//! [`seed::mock_farmers`] (or an empty one) and hands it to a [`api::FarmdeskApi`].
//! Execution is single-threaded: each operation runs to completion before the next.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and event subscriptions
//! - [`commands`]: Business logic for each operation
//! - [`query`]: Read-only projections for views
//! - [`store`]: Storage abstraction and the in-memory backend
//! - [`model`]: Core data types (`Farmer`, `FarmerDraft`, `FarmerStatus`)
//! - [`events`]: Snapshot-changed notifications
//! - [`seed`]: Demo records
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod model;
pub mod query;
pub mod seed;
pub mod store;

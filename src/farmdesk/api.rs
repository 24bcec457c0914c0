//! # API Facade
//!
//! [`FarmdeskApi`] is the record store as the rest of the world sees it: it owns the
//! [`DataStore`] exclusively, dispatches to the command layer, and tells subscribers
//! whenever the snapshot changes.
//!
//! ## Ownership
//!
//! Construct one at startup and pass it by reference to whatever needs it. Nothing
//! else holds the store, so every mutation goes through [`FarmdeskApi::create_farmer`],
//! [`FarmdeskApi::update_farmer`] or [`FarmdeskApi::delete_farmer`]. Reads hand out
//! owned snapshots.
//!
//! ## Notifications
//!
//! After each successful mutation the facade bumps its snapshot version and publishes
//! a [`StoreEvent`] to every subscriber, synchronously, before returning. A failed
//! operation publishes nothing and leaves the snapshot untouched.
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: validation, id allocation and filtering live in `commands/`
//!   and `query`
//! - **I/O**: no stdout or stderr; results come back as [`CmdResult`] values

use crate::commands;
use crate::error::Result;
use crate::events::{Change, StoreEvent, Subscribers, SubscriptionId};
use crate::model::{Farmer, FarmerDraft, FarmerId};
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The main API facade for farmdesk operations.
///
/// Generic over `DataStore` so tests can hand in fixtures.
pub struct FarmdeskApi<S: DataStore> {
    store: S,
    subscribers: Subscribers,
    version: u64,
    config_dir: PathBuf,
    recent_count: usize,
}

impl<S: DataStore> FarmdeskApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            store,
            subscribers: Subscribers::new(),
            version: 0,
            config_dir,
            recent_count: crate::query::DEFAULT_RECENT_COUNT,
        }
    }

    pub fn with_recent_count(mut self, recent_count: usize) -> Self {
        self.recent_count = recent_count.max(1);
        self
    }

    /// The current snapshot, in insertion order.
    pub fn list_all(&self) -> Result<Vec<Farmer>> {
        self.store.list_farmers()
    }

    pub fn get_farmer(&self, id: &FarmerId) -> Result<CmdResult> {
        commands::get::run(&self.store, id)
    }

    /// Validates and appends a new record stamped with today's local date.
    pub fn create_farmer(&mut self, draft: FarmerDraft) -> Result<CmdResult> {
        self.create_farmer_on(draft, Local::now().date_naive())
    }

    /// Same as [`Self::create_farmer`] with an explicit creation date.
    pub fn create_farmer_on(&mut self, draft: FarmerDraft, today: NaiveDate) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, draft, today)?;
        self.notify_affected(&result, Change::Created)?;
        Ok(result)
    }

    pub fn update_farmer(&mut self, id: &FarmerId, draft: FarmerDraft) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, id, draft)?;
        self.notify_affected(&result, Change::Updated)?;
        Ok(result)
    }

    pub fn delete_farmer(&mut self, id: &FarmerId) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, id)?;
        self.notify_affected(&result, Change::Deleted)?;
        Ok(result)
    }

    pub fn list_farmers(&self, filter: &FarmerFilter) -> Result<CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn dashboard(&self) -> Result<CmdResult> {
        commands::dashboard::run(&self.store, self.recent_count)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    /// Registers a listener called after every successful mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<'_>) + 'static,
    {
        self.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of successful mutations so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn notify_affected(
        &mut self,
        result: &CmdResult,
        change: impl Fn(FarmerId) -> Change,
    ) -> Result<()> {
        self.version += 1;
        if self.subscribers.is_empty() {
            return Ok(());
        }

        let snapshot = self.store.list_farmers()?;
        for farmer in &result.affected_farmers {
            let event = StoreEvent {
                change: change(farmer.id.clone()),
                version: self.version,
                snapshot: &snapshot,
            };
            debug!(
                id = %farmer.id,
                version = self.version,
                listeners = self.subscribers.len(),
                "publishing store event"
            );
            self.subscribers.publish(&event);
        }
        Ok(())
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::list::FarmerFilter;
pub use crate::commands::{CmdMessage, CmdResult, DashboardSummary, MessageLevel};

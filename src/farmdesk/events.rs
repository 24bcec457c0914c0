//! Snapshot-changed notifications.
//!
//! Every successful mutation produces one [`StoreEvent`], delivered synchronously to
//! each subscriber in registration order before the mutating call returns. Views
//! subscribe and re-derive whatever projection they show.

use crate::model::{Farmer, FarmerId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Created(FarmerId),
    Updated(FarmerId),
    Deleted(FarmerId),
}

impl Change {
    pub fn id(&self) -> &FarmerId {
        match self {
            Change::Created(id) | Change::Updated(id) | Change::Deleted(id) => id,
        }
    }
}

/// What a subscriber sees: the change that happened and the snapshot it produced.
#[derive(Debug)]
pub struct StoreEvent<'a> {
    pub change: Change,
    /// Monotonic snapshot counter, starting at 0 for the initial state.
    pub version: u64,
    pub snapshot: &'a [Farmer],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent<'_>)>;

#[derive(Default)]
pub struct Subscribers {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&StoreEvent<'_>) + 'static,
    {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    pub fn publish(&mut self, event: &StoreEvent<'_>) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

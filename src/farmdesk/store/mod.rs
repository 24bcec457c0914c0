//! # Storage Layer
//!
//! The [`DataStore`] trait is the raw, ordered record collection that the command
//! layer works on. It knows nothing about validation or dates: commands decide what
//! a valid record is, the store only keeps them.
//!
//! ## Ordering
//!
//! Implementations keep records in insertion order. Replacing a record keeps its
//! position; removing one keeps the relative order of the rest. Nothing ever sorts.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryStore`]: the only backend. Records live as long as the
//!   process, which is all farmdesk promises.
//!
//! The trait exists so the command layer can be exercised against fixtures and so
//! a different backend would not touch business logic.

use crate::error::Result;
use crate::model::{Farmer, FarmerId};

pub mod memory;

/// Abstract interface for farmer storage.
pub trait DataStore {
    /// All records, in insertion order.
    fn list_farmers(&self) -> Result<Vec<Farmer>>;

    /// Get a record by id
    fn get_farmer(&self, id: &FarmerId) -> Result<Farmer>;

    /// Append a record. Fails if the id is already taken.
    fn insert_farmer(&mut self, farmer: Farmer) -> Result<()>;

    /// Replace the record with the same id, in place.
    fn replace_farmer(&mut self, farmer: Farmer) -> Result<()>;

    /// Remove a record, returning it.
    fn remove_farmer(&mut self, id: &FarmerId) -> Result<Farmer>;

    /// Hand out an id that no live or previously issued record has used.
    /// Fails once the id sequence is exhausted.
    fn allocate_id(&mut self) -> Result<FarmerId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

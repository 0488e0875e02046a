//! In-memory record stores.
//!
//! One `MemStore` per entity holds the working set for a page. There is no
//! persistence; stores are seeded at startup and mutated through the
//! operations here. Ids come from a per-store monotonic counter, so a
//! deleted record's id is never reissued.

use thiserror::Error;
use tracing::info;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: u32 },
}

/// Implemented by every stored entity.
pub trait Record: Clone {
    fn id(&self) -> u32;
    fn set_id(&mut self, id: u32);
    fn entity() -> &'static str;
}

/// Confirmation gate in front of destructive operations. The desktop shell
/// shows a dialog; tests plug in a canned answer.
pub trait ConfirmPort {
    fn confirm(&self, message: &str) -> bool;
}

/// Port that approves everything, for the demo binary.
pub struct AutoConfirm;

impl ConfirmPort for AutoConfirm {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

pub struct MemStore<T: Record> {
    items: Vec<T>,
    next_id: u32,
}

impl<T: Record> MemStore<T> {
    pub fn new() -> Self {
        MemStore {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Seeded store; the id counter starts above the largest seeded id.
    pub fn seeded(items: Vec<T>) -> Self {
        let next_id = items.iter().map(Record::id).max().unwrap_or(0) + 1;
        MemStore { items, next_id }
    }

    pub fn list(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Insert a draft record, assigning the next id. Returns the id.
    pub fn create(&mut self, mut record: T) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        record.set_id(id);
        self.items.push(record);
        info!(entity = T::entity(), id, "record created");
        id
    }

    /// Full overwrite of the record with the same id.
    pub fn update(&mut self, record: T) -> Result<(), StoreError> {
        let id = record.id();
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(slot) => {
                *slot = record;
                info!(entity = T::entity(), id, "record updated");
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: T::entity(),
                id,
            }),
        }
    }

    pub fn remove(&mut self, id: u32) -> Result<T, StoreError> {
        match self.items.iter().position(|item| item.id() == id) {
            Some(index) => {
                let removed = self.items.remove(index);
                info!(entity = T::entity(), id, "record removed");
                Ok(removed)
            }
            None => Err(StoreError::NotFound {
                entity: T::entity(),
                id,
            }),
        }
    }

    /// Remove behind the confirmation gate. `Ok(false)` means the port
    /// declined and nothing changed.
    pub fn remove_confirmed(
        &mut self,
        id: u32,
        port: &dyn ConfirmPort,
    ) -> Result<bool, StoreError> {
        // Check existence first so a declined prompt never masks a bad id.
        if self.get(id).is_none() {
            return Err(StoreError::NotFound {
                entity: T::entity(),
                id,
            });
        }
        let message = format!("Are you sure you want to delete this {}?", T::entity());
        if !port.confirm(&message) {
            return Ok(false);
        }
        self.remove(id).map(|_| true)
    }
}

impl<T: Record> Default for MemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

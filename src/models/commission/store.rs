//! Process-local cache of the remote commission list.
//!
//! The store is never the source of truth: a refresh replaces it wholesale,
//! mutations patch it optimistically before the matching network call runs,
//! and every mutation hands back what the caller needs to compensate if that
//! call fails (previous status, removed record + position, placeholder id).
//!
//! Records carry a local revision stamp. Status and delete mutations name the
//! revision they saw; a mismatch means somebody else touched the record since
//! it was rendered, and the caller is expected to force a refresh instead of
//! writing blind.

use std::sync::Mutex;

use rand::Rng;

use super::types::{Commission, Status};

/// Placeholder identifier for a record awaiting server acknowledgment.
/// Deliberately shaped so it can never collide with a server id.
pub fn temp_id() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 6] = rng.random();
    format!("tmp-{}", hex::encode(bytes))
}

pub fn is_temp_id(id: &str) -> bool {
    id.starts_with("tmp-")
}

#[derive(Debug, Clone, PartialEq)]
pub struct CachedCommission {
    pub commission: Commission,
    pub revision: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    UnknownId,
    RevisionMismatch,
}

/// Aggregates for the dashboard overview cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub queued: usize,
    pub in_progress: usize,
    pub completed: usize,
}

/// What `set_status` changed, for reverting a failed update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub previous: Status,
    pub revision: u64,
}

/// What `remove` took out, for reinserting after a failed delete.
#[derive(Debug, Clone)]
pub struct RemovedRecord {
    pub commission: Commission,
    pub position: usize,
}

#[derive(Debug, Default)]
pub struct CommissionStore {
    records: Vec<CachedCommission>,
    next_revision: u64,
    loaded: bool,
}

impl CommissionStore {
    pub fn new() -> CommissionStore {
        CommissionStore::default()
    }

    fn stamp(&mut self) -> u64 {
        self.next_revision += 1;
        self.next_revision
    }

    /// Whether a refresh has ever populated this store.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CachedCommission] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&CachedCommission> {
        self.records.iter().find(|c| c.commission.id == id)
    }

    pub fn counts(&self) -> StatusCounts {
        let mut counts = StatusCounts {
            total: self.records.len(),
            ..StatusCounts::default()
        };
        for cached in &self.records {
            match cached.commission.status {
                Status::Queued => counts.queued += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Completed => counts.completed += 1,
            }
        }
        counts
    }

    /// Wholesale replacement from a server fetch. Every record gets a fresh
    /// revision stamp.
    pub fn replace_all(&mut self, list: Vec<Commission>) {
        let mut records = Vec::with_capacity(list.len());
        for commission in list {
            let revision = self.stamp();
            records.push(CachedCommission { commission, revision });
        }
        self.records = records;
        self.loaded = true;
    }

    /// Optimistically rewrite a record's status. Returns what it replaced so
    /// the caller can revert if the PATCH fails.
    pub fn set_status(
        &mut self,
        id: &str,
        expected_revision: u64,
        status: Status,
    ) -> Result<StatusChange, StoreError> {
        let position = self
            .records
            .iter()
            .position(|c| c.commission.id == id)
            .ok_or(StoreError::UnknownId)?;
        if self.records[position].revision != expected_revision {
            return Err(StoreError::RevisionMismatch);
        }
        let revision = self.stamp();
        let cached = &mut self.records[position];
        let previous = cached.commission.status;
        cached.commission.status = status;
        cached.revision = revision;
        Ok(StatusChange { previous, revision })
    }

    /// Optimistically remove a record. Returns it with its position so a
    /// failed DELETE can reinsert it where it was.
    pub fn remove(&mut self, id: &str, expected_revision: u64) -> Result<RemovedRecord, StoreError> {
        let position = self
            .records
            .iter()
            .position(|c| c.commission.id == id)
            .ok_or(StoreError::UnknownId)?;
        if self.records[position].revision != expected_revision {
            return Err(StoreError::RevisionMismatch);
        }
        let cached = self.records.remove(position);
        Ok(RemovedRecord {
            commission: cached.commission,
            position,
        })
    }

    /// Compensation for a failed delete.
    pub fn reinsert(&mut self, removed: RemovedRecord) {
        let revision = self.stamp();
        let position = removed.position.min(self.records.len());
        self.records.insert(
            position,
            CachedCommission {
                commission: removed.commission,
                revision,
            },
        );
    }

    /// Optimistic create: push a placeholder record to the head of the list.
    pub fn insert_head(&mut self, commission: Commission) -> u64 {
        let revision = self.stamp();
        self.records.insert(0, CachedCommission { commission, revision });
        revision
    }

    /// Swap a placeholder for the server-confirmed record.
    pub fn confirm(&mut self, placeholder_id: &str, confirmed: Commission) -> Result<(), StoreError> {
        let position = self
            .records
            .iter()
            .position(|c| c.commission.id == placeholder_id)
            .ok_or(StoreError::UnknownId)?;
        let revision = self.stamp();
        let cached = &mut self.records[position];
        cached.commission = confirmed;
        cached.revision = revision;
        Ok(())
    }

    /// Compensation for a failed create: drop the placeholder entirely.
    pub fn discard(&mut self, id: &str) -> Option<Commission> {
        let position = self.records.iter().position(|c| c.commission.id == id)?;
        Some(self.records.remove(position).commission)
    }
}

/// Shared handle to the store. Locked only for short synchronous sections,
/// never across an await.
#[derive(Debug, Default)]
pub struct CommissionCache {
    inner: Mutex<CommissionStore>,
}

impl CommissionCache {
    pub fn new() -> CommissionCache {
        CommissionCache::default()
    }

    pub fn with<R>(&self, f: impl FnOnce(&mut CommissionStore) -> R) -> R {
        let mut store = self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut store)
    }
}

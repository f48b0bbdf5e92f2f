//! # Directory Service
//!
//! Process-wide registry mapping a service-type tag (e.g. `"Visitor"`) to
//! the set of agent identities currently advertising that capability.
//!
//! Registration is applied atomically: a concurrent search observes either
//! the before- or after-state of any single registration, never a partial
//! one. The backing structure is a map keyed by service type, so removal
//! is supported without redesign and is exercised when an agent is
//! terminated.

use crate::error::DirectoryError;
use crate::identity::AgentId;
use std::collections::HashMap;
use std::sync::RwLock;

/// Concurrent-safe service registry.
///
/// Many writers and readers may call concurrently; each operation takes
/// the lock once and applies its whole mutation under it.
#[derive(Default)]
pub struct Directory {
    entries: RwLock<HashMap<String, Vec<AgentId>>>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advertises `id` under `service_type`. Idempotent: re-registering
    /// the same pair has no additional effect.
    pub fn register(&self, id: &AgentId, service_type: &str) -> Result<(), DirectoryError> {
        let mut entries = self.entries.write().map_err(|_| DirectoryError::Poisoned)?;
        let owners = entries.entry(service_type.to_string()).or_default();
        if !owners.contains(id) {
            owners.push(id.clone());
        }
        Ok(())
    }

    /// Snapshot of the identities registered under `service_type`, in
    /// discovery order. Empty when the type is unknown.
    pub fn search(&self, service_type: &str) -> Result<Vec<AgentId>, DirectoryError> {
        let entries = self.entries.read().map_err(|_| DirectoryError::Poisoned)?;
        Ok(entries.get(service_type).cloned().unwrap_or_default())
    }

    /// Withdraws one advertisement. Unknown pairs are ignored.
    pub fn deregister(&self, id: &AgentId, service_type: &str) -> Result<(), DirectoryError> {
        let mut entries = self.entries.write().map_err(|_| DirectoryError::Poisoned)?;
        if let Some(owners) = entries.get_mut(service_type) {
            owners.retain(|owner| owner != id);
        }
        Ok(())
    }

    /// Withdraws every advertisement of `id`, across all service types.
    /// Called by the runtime when the agent is terminated.
    pub fn deregister_all(&self, id: &AgentId) -> Result<(), DirectoryError> {
        let mut entries = self.entries.write().map_err(|_| DirectoryError::Poisoned)?;
        for owners in entries.values_mut() {
            owners.retain(|owner| owner != id);
        }
        Ok(())
    }
}

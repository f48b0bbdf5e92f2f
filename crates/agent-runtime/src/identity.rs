//! # Agent Identity
//!
//! Every agent is addressed by an [`AgentId`]: a human-readable local name
//! qualified by the namespace of the system that spawned it. The id is the
//! key for every message send and every directory entry, so it must be
//! cheap to clone, hashable, and ordered.

use std::fmt;

/// Globally unique, immutable address of an agent.
///
/// Two agents spawned in the same [`AgentSystem`](crate::AgentSystem) can
/// never share a local name, so the pair `(local_name, namespace)` is unique
/// for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AgentId {
    local_name: String,
    namespace: String,
}

impl AgentId {
    pub fn new(local_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            local_name: local_name.into(),
            namespace: namespace.into(),
        }
    }

    /// The human-readable name the agent was spawned under, e.g. `"visitor 0"`.
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The namespace of the owning agent system.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_name, self.namespace)
    }
}

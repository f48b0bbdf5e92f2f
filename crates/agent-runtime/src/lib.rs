//! # Agent Runtime
//!
//! Foundational building blocks for a small population of autonomous,
//! message-driven agents on top of Tokio: mailbox-based delivery,
//! cooperative per-agent behavior scheduling, directory-based service
//! discovery, and a spawn/terminate lifecycle.
//!
//! ## Architecture Overview
//!
//! The runtime separates concerns into four layers:
//!
//! 1. **Addressing** ([`identity`], [`message`]) - who agents are and what
//!    they exchange. Message content is generic, so domain crates define
//!    their own payload enum.
//! 2. **Delivery** ([`mailbox`]) - one unbounded FIFO queue per agent with
//!    non-blocking filtered receive and an edge-triggered wake signal.
//! 3. **Scheduling** ([`behavior`], [`agent`]) - each agent runs one Tokio
//!    task that drives its behaviors round-robin. RunOnce behaviors fire
//!    exactly once; RunForever behaviors park when their filter finds no
//!    message, yielding the executor thread to other agents.
//! 4. **Coordination** ([`system`], [`directory`]) - the [`AgentSystem`]
//!    owns every agent record and routes messages; the [`Directory`] maps
//!    service-type tags to the agents advertising them.
//!
//! ## Concurrency Model
//!
//! - Each agent runs in its own Tokio task.
//! - Behaviors within one agent execute **sequentially** (no locks needed
//!   for behavior state!)
//! - Distinct agents run in **parallel** on the runtime's thread pool.
//! - "Waiting" for mail is scheduler-level parking, not call-level
//!   blocking: `try_receive` never blocks, and a parked agent frees its
//!   worker thread entirely.
//!
//! ## Error Handling
//!
//! Behavior failures are boxed into [`BehaviorError`], logged at the
//! scheduler boundary, and never escape; one failing iteration cannot
//! starve sibling behaviors or crash the agent. Infrastructure failures
//! get their own enums ([`SpawnError`], [`DirectoryError`]).
//!
//! ## Testing
//!
//! The [`probe`] module provides a behavior-less registered mailbox with
//! awaitable receive, so integration tests can stand in for a peer agent
//! without spawning one.

pub mod agent;
pub mod behavior;
pub mod directory;
pub mod error;
pub mod identity;
pub mod mailbox;
pub mod message;
pub mod probe;
pub mod system;
pub mod tracing;

// Re-export core types for convenience
pub use agent::AgentContext;
pub use behavior::{Behavior, BehaviorKind, Control, RegisterService};
pub use directory::Directory;
pub use error::{BehaviorError, DirectoryError, SpawnError};
pub use identity::AgentId;
pub use mailbox::Mailbox;
pub use message::{Message, MessageContent, MessageFilter, Performative};
pub use probe::Probe;
pub use system::{AgentState, AgentSystem};
pub use self::tracing::setup_tracing;

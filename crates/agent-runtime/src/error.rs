//! # Runtime Errors
//!
//! Error types for the coordination core, one enum per concern. Recoverable
//! failures inside a behavior are boxed into [`BehaviorError`] and caught at
//! the scheduler boundary; they are logged, never retried, and never crash
//! the agent's task.

use std::error::Error;

/// Failures of the directory service backend.
///
/// The in-process backend can only fail when its lock was poisoned by a
/// panicking writer; remote backends would add their own variants here.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("directory lock poisoned")]
    Poisoned,
}

/// Failures when spawning a new agent.
#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    /// The requested type name is not in the allow-list of instantiable
    /// agent types. No agent is created.
    #[error("agent type not found: {0}")]
    TypeNotFound(String),
    /// An agent with this local name already exists in the system.
    #[error("agent name already taken: {0}")]
    DuplicateName(String),
}

/// A failure raised by a behavior and caught at the scheduler boundary.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BehaviorError(Box<dyn Error + Send + Sync>);

impl BehaviorError {
    pub fn new<E: Error + Send + Sync + 'static>(source: E) -> Self {
        Self(Box::new(source))
    }
}

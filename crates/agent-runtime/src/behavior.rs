//! # Behaviors
//!
//! A [`Behavior`] is one unit of an agent's scheduled logic. Behaviors come
//! in two kinds:
//!
//! - **RunOnce**: invoked exactly one time, then retired — success or
//!   failure. Used for setup steps such as directory registration.
//! - **RunForever**: re-invoked on every scheduler pass. Each invocation
//!   typically starts with a filtered mailbox receive; when nothing
//!   matches it returns [`Control::Park`] to yield the scheduler slot
//!   instead of spinning.
//!
//! Behaviors of one agent never run concurrently with each other; the
//! scheduler calls them round-robin inside the agent's single task.
//! Failures are logged at the scheduler boundary and never escape, so one
//! bad iteration cannot starve sibling behaviors.

use crate::agent::AgentContext;
use crate::error::BehaviorError;
use crate::message::MessageContent;
use async_trait::async_trait;
use tracing::info;

/// Scheduling class of a behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BehaviorKind {
    /// Fires exactly once, then is removed from the agent's active set.
    RunOnce,
    /// Re-invoked every pass; parks when it has no work.
    RunForever,
}

/// Outcome of one behavior invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The behavior did work this pass.
    Ran,
    /// No matching message; yield until the mailbox signals new traffic.
    Park,
}

/// A unit of agent logic, scheduled cooperatively by the agent's task.
#[async_trait]
pub trait Behavior<C: MessageContent>: Send {
    /// Scheduling class; defaults to [`BehaviorKind::RunForever`].
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::RunForever
    }

    /// Short name used in scheduler logs.
    fn name(&self) -> &'static str;

    /// Executes one step. Errors are logged by the scheduler and do not
    /// terminate the agent.
    async fn action(&mut self, ctx: &AgentContext<C>) -> Result<Control, BehaviorError>;
}

/// RunOnce behavior that advertises the owning agent in the directory
/// service under a given service type.
///
/// Shared by every agent kind that needs discovery (the supervisor under
/// its own tag, visitors under theirs).
pub struct RegisterService {
    service_type: String,
}

impl RegisterService {
    pub fn new(service_type: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
        }
    }
}

#[async_trait]
impl<C: MessageContent> Behavior<C> for RegisterService {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::RunOnce
    }

    fn name(&self) -> &'static str {
        "register_service"
    }

    async fn action(&mut self, ctx: &AgentContext<C>) -> Result<Control, BehaviorError> {
        ctx.directory()
            .register(ctx.id(), &self.service_type)
            .map_err(BehaviorError::new)?;
        info!(agent = %ctx.id(), service_type = %self.service_type, "registered in directory");
        Ok(Control::Ran)
    }
}

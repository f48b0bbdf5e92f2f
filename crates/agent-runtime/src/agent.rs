//! # Agent Task & Behavior Scheduler
//!
//! Each spawned agent runs as exactly one Tokio task executing the loop in
//! [`Agent::run`]. The loop drives the agent's behaviors cooperatively,
//! round-robin, so behaviors of one agent never overlap; concurrency
//! exists only across distinct agents' tasks.
//!
//! ## Scheduling rules
//!
//! - A RunOnce behavior is retired after its first invocation, whether it
//!   succeeded or failed. Failures are logged, not retried.
//! - A RunForever behavior that returns [`Control::Park`] gives up its
//!   slot. When a full pass over all behaviors makes no progress, the task
//!   suspends on the mailbox's wake signal instead of busy-polling; any
//!   later send (or close) re-wakes it.
//! - Behavior errors are caught here and logged with the behavior's name;
//!   they never escape the loop, so one failing behavior cannot take its
//!   siblings down with it.
//!
//! The loop ends when the behavior list is empty or the agent has been
//! terminated.

use crate::behavior::{Behavior, BehaviorKind, Control};
use crate::directory::Directory;
use crate::identity::AgentId;
use crate::mailbox::Mailbox;
use crate::message::{Message, MessageContent, MessageFilter};
use crate::system::AgentSystem;
use std::sync::Arc;
use tracing::{info, warn};

/// The runtime surface handed to every behavior invocation.
///
/// Behaviors use the context to read their own mailbox, send messages
/// through the system's route table, query the directory, and spawn
/// further agents. The context never exposes another agent's internals.
pub struct AgentContext<C: MessageContent> {
    id: AgentId,
    mailbox: Arc<Mailbox<C>>,
    system: AgentSystem<C>,
}

impl<C: MessageContent> AgentContext<C> {
    pub(crate) fn new(id: AgentId, mailbox: Arc<Mailbox<C>>, system: AgentSystem<C>) -> Self {
        Self {
            id,
            mailbox,
            system,
        }
    }

    /// Identity of the agent this behavior belongs to.
    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Non-blocking filtered receive from the agent's own mailbox.
    pub fn receive(&self, filter: &MessageFilter) -> Option<Message<C>> {
        self.mailbox.try_receive(filter)
    }

    /// Delivers a message to each of its receivers' mailboxes.
    pub fn send(&self, message: Message<C>) {
        self.system.send(message);
    }

    pub fn directory(&self) -> &Directory {
        self.system.directory()
    }

    /// Handle to the owning system, for spawning further agents.
    pub fn system(&self) -> &AgentSystem<C> {
        &self.system
    }
}

/// One live agent: identity, mailbox, and its ordered behavior list.
pub(crate) struct Agent<C: MessageContent> {
    id: AgentId,
    mailbox: Arc<Mailbox<C>>,
    behaviors: Vec<Box<dyn Behavior<C>>>,
    system: AgentSystem<C>,
}

impl<C: MessageContent> Agent<C> {
    pub(crate) fn new(
        id: AgentId,
        mailbox: Arc<Mailbox<C>>,
        behaviors: Vec<Box<dyn Behavior<C>>>,
        system: AgentSystem<C>,
    ) -> Self {
        Self {
            id,
            mailbox,
            behaviors,
            system,
        }
    }

    pub(crate) async fn run(mut self) {
        info!(agent = %self.id, behaviors = self.behaviors.len(), "agent started");
        let ctx = AgentContext::new(self.id.clone(), self.mailbox.clone(), self.system.clone());

        loop {
            if self.mailbox.is_closed() {
                break;
            }

            let mut progressed = false;
            let mut index = 0;
            while index < self.behaviors.len() {
                let behavior = &mut self.behaviors[index];
                let kind = behavior.kind();
                match behavior.action(&ctx).await {
                    Ok(Control::Ran) => progressed = true,
                    Ok(Control::Park) => {}
                    Err(error) => {
                        warn!(
                            agent = %ctx.id(),
                            behavior = behavior.name(),
                            %error,
                            "behavior failed"
                        );
                    }
                }
                if kind == BehaviorKind::RunOnce {
                    self.behaviors.remove(index);
                } else {
                    index += 1;
                }
            }

            if self.behaviors.is_empty() {
                break;
            }
            if !progressed {
                // Edge-triggered park: send() stores a wake permit, so a
                // message that raced the pass above is not lost.
                self.mailbox.wait().await;
            }
        }

        info!(agent = %self.id, "agent stopped");
    }
}

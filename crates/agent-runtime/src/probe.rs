//! # Test Probe
//!
//! A [`Probe`] is a registered mailbox without behaviors or a scheduler
//! task. Tests (and demos) use it to play the part of a peer agent: it can
//! be addressed like any other agent, and its owner awaits replies with a
//! timeout instead of wiring up a full behavior set.

use crate::identity::AgentId;
use crate::mailbox::Mailbox;
use crate::message::{Message, MessageContent, MessageFilter};
use std::sync::Arc;
use std::time::Duration;

/// Receiving end of a behavior-less agent registration.
pub struct Probe<C: MessageContent> {
    id: AgentId,
    mailbox: Arc<Mailbox<C>>,
}

impl<C: MessageContent> Probe<C> {
    pub(crate) fn new(id: AgentId, mailbox: Arc<Mailbox<C>>) -> Self {
        Self { id, mailbox }
    }

    pub fn id(&self) -> &AgentId {
        &self.id
    }

    /// Non-blocking filtered receive, same semantics as an agent's own.
    pub fn try_receive(&self, filter: &MessageFilter) -> Option<Message<C>> {
        self.mailbox.try_receive(filter)
    }

    /// Awaits the next matching message, up to `timeout`. Returns `None`
    /// on timeout or when the probe's mailbox has been closed.
    pub async fn receive(&self, filter: &MessageFilter, timeout: Duration) -> Option<Message<C>> {
        tokio::time::timeout(timeout, async {
            loop {
                if let Some(message) = self.mailbox.try_receive(filter) {
                    return Some(message);
                }
                if self.mailbox.is_closed() {
                    return None;
                }
                self.mailbox.wait().await;
            }
        })
        .await
        .ok()
        .flatten()
    }
}

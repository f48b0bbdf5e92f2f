//! # Messages & Filters
//!
//! Agents communicate exclusively through [`Message`]s. A message carries a
//! performative (the speech-act kind), the sender's identity, the set of
//! receivers, and a content value. The content type is generic so domain
//! crates can define their own payload enum (text, structured snapshots,
//! agent references) while the runtime stays agnostic.
//!
//! [`MessageFilter`] is the receive-side selector: a mailbox receive only
//! consumes the oldest message the filter matches, leaving everything else
//! queued for a later receive with a different filter.

use crate::identity::AgentId;
use std::fmt::Debug;

/// Marker for types usable as message content.
///
/// Blanket-implemented, so any cloneable, thread-safe, debuggable type
/// qualifies. Broadcast delivery clones the message once per receiver.
pub trait MessageContent: Clone + Send + Sync + Debug + 'static {}

impl<T: Clone + Send + Sync + Debug + 'static> MessageContent for T {}

/// The kind of a message: ask-and-reply vs. notify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Performative {
    /// Asks the receiver to perform an action and reply.
    Request,
    /// Notifies the receiver; no reply is expected.
    Inform,
}

/// An immutable message exchanged between agents.
///
/// Construct once, then send; the runtime never mutates a message in
/// flight. A single logical broadcast is expressed by listing several
/// receivers, and delivery copies the message into each mailbox.
#[derive(Debug, Clone)]
pub struct Message<C: MessageContent> {
    pub performative: Performative,
    pub sender: AgentId,
    pub receivers: Vec<AgentId>,
    pub content: C,
}

impl<C: MessageContent> Message<C> {
    pub fn new(
        performative: Performative,
        sender: AgentId,
        receivers: Vec<AgentId>,
        content: C,
    ) -> Self {
        Self {
            performative,
            sender,
            receivers,
            content,
        }
    }

    /// Shorthand for a single-receiver REQUEST.
    pub fn request(sender: AgentId, receiver: AgentId, content: C) -> Self {
        Self::new(Performative::Request, sender, vec![receiver], content)
    }

    /// Shorthand for a single-receiver INFORM.
    pub fn inform(sender: AgentId, receiver: AgentId, content: C) -> Self {
        Self::new(Performative::Inform, sender, vec![receiver], content)
    }
}

/// Receive-side selector over queued messages.
///
/// Currently matches on the performative only, mirroring the way agents
/// split their inbound traffic into per-kind handler behaviors. Additional
/// criteria (sender, conversation id) can be added without touching the
/// mailbox, which only ever calls [`MessageFilter::matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageFilter {
    performative: Performative,
}

impl MessageFilter {
    /// A filter that matches any message with the given performative.
    pub fn match_performative(performative: Performative) -> Self {
        Self { performative }
    }

    pub fn matches<C: MessageContent>(&self, message: &Message<C>) -> bool {
        message.performative == self.performative
    }
}

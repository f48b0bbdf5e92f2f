//! # Message Content
//!
//! The restaurant's wire contract: every message body is one of these
//! variants. REQUEST messages carry a text verb; INFORM replies carry the
//! computed payload (the menu snapshot or a freshly spawned agent's
//! identity) or nothing at all when no recognized action produced one.

use crate::menu::Menu;
use agent_runtime::{AgentId, Message};
use std::sync::Arc;

/// Body of every message exchanged in the restaurant system.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// No payload set. Replies to unrecognized verbs and failed spawns
    /// carry this.
    Empty,
    /// Plain text: request verbs and broadcast notifications.
    Text(String),
    /// The menu snapshot, shared read-only (write-once at startup).
    Menu(Arc<Menu>),
    /// Identity of an agent, e.g. a freshly created order agent.
    Agent(AgentId),
}

impl Content {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A message whose body is restaurant [`Content`].
pub type RestaurantMessage = Message<Content>;

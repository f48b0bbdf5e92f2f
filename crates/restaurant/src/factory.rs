//! # Agent Factory
//!
//! Creates new agents dynamically by type name. The allow-list of
//! instantiable types is a closed enum rather than runtime reflection:
//! each [`AgentKind`] maps to the default behavior set wired at spawn
//! time. Unknown type names are rejected with
//! [`SpawnError::TypeNotFound`] and create nothing.

use crate::content::Content;
use crate::order_agent;
use crate::visitor_agent;
use agent_runtime::{AgentId, AgentSystem, Behavior, SpawnError};
use tracing::debug;

/// The finite set of agent types the factory can instantiate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Visitor,
    Order,
}

impl AgentKind {
    /// Resolves the external type-name surface (`"VisitorAgent"`,
    /// `"OrderAgent"`) to a kind. Anything else is unknown.
    pub fn from_type_name(type_name: &str) -> Option<Self> {
        match type_name {
            "VisitorAgent" => Some(Self::Visitor),
            "OrderAgent" => Some(Self::Order),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Visitor => "VisitorAgent",
            Self::Order => "OrderAgent",
        }
    }

    /// Default behaviors attached at creation; never added or removed
    /// afterward.
    fn behaviors(&self) -> Vec<Box<dyn Behavior<Content>>> {
        match self {
            Self::Visitor => visitor_agent::behaviors(),
            Self::Order => order_agent::behaviors(),
        }
    }
}

/// Spawns an agent of the named type and returns its identity.
pub fn create_agent(
    system: &AgentSystem<Content>,
    type_name: &str,
    local_name: &str,
) -> Result<AgentId, SpawnError> {
    let kind = AgentKind::from_type_name(type_name)
        .ok_or_else(|| SpawnError::TypeNotFound(type_name.to_string()))?;
    debug!(type_name = kind.type_name(), local_name, "creating agent");
    system.spawn_agent(local_name, kind.behaviors())
}

//! # Agent System
//!
//! [`AgentSystem`] is the runtime that owns every agent record: its
//! mailbox, its lifecycle state, and the task handle of its scheduler
//! loop. It is the single seam through which agents are spawned, messages
//! are routed, and the process is shut down.
//!
//! The handle is cheap to clone (an `Arc` around the shared state) and is
//! injected into every behavior via its [`AgentContext`](crate::AgentContext),
//! the same way the rest of an actor's dependencies are wired in at spawn
//! time rather than reached through globals.

use crate::agent::Agent;
use crate::behavior::Behavior;
use crate::directory::Directory;
use crate::error::SpawnError;
use crate::identity::AgentId;
use crate::mailbox::Mailbox;
use crate::message::{Message, MessageContent};
use crate::probe::Probe;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Lifecycle state of an agent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    /// Record allocated, behaviors being wired.
    Spawning,
    /// Scheduler task running; mailbox accepts traffic.
    Active,
    /// Retired. Sends are dropped, receives return nothing, forever.
    Terminated,
}

struct AgentRecord<C: MessageContent> {
    mailbox: Arc<Mailbox<C>>,
    state: AgentState,
}

struct SystemInner<C: MessageContent> {
    namespace: String,
    routes: RwLock<HashMap<AgentId, AgentRecord<C>>>,
    directory: Directory,
    handles: Mutex<Vec<JoinHandle<()>>>,
}

/// Cloneable handle to the shared agent runtime.
pub struct AgentSystem<C: MessageContent> {
    inner: Arc<SystemInner<C>>,
}

impl<C: MessageContent> Clone for AgentSystem<C> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<C: MessageContent> AgentSystem<C> {
    /// Creates an empty system. `namespace` qualifies every identity
    /// spawned here, e.g. `"visitor 0@restaurant"`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(SystemInner {
                namespace: namespace.into(),
                routes: RwLock::new(HashMap::new()),
                directory: Directory::new(),
                handles: Mutex::new(Vec::new()),
            }),
        }
    }

    // Route-table sections never panic while holding the lock; recover the
    // guard rather than propagate poisoning into every send.
    fn routes_read(&self) -> RwLockReadGuard<'_, HashMap<AgentId, AgentRecord<C>>> {
        self.inner.routes.read().unwrap_or_else(|e| e.into_inner())
    }

    fn routes_write(&self) -> RwLockWriteGuard<'_, HashMap<AgentId, AgentRecord<C>>> {
        self.inner.routes.write().unwrap_or_else(|e| e.into_inner())
    }

    pub fn namespace(&self) -> &str {
        &self.inner.namespace
    }

    pub fn directory(&self) -> &Directory {
        &self.inner.directory
    }

    /// Spawns a new agent with the given behaviors and starts its
    /// scheduler task. Must be called from within a Tokio runtime.
    ///
    /// Local names are unique per system; a second spawn under the same
    /// name is rejected with [`SpawnError::DuplicateName`] and has no
    /// side effect.
    pub fn spawn_agent(
        &self,
        local_name: &str,
        behaviors: Vec<Box<dyn Behavior<C>>>,
    ) -> Result<AgentId, SpawnError> {
        let id = AgentId::new(local_name, &self.inner.namespace);
        let mailbox = Arc::new(Mailbox::new());
        {
            let mut routes = self.routes_write();
            if routes.contains_key(&id) {
                return Err(SpawnError::DuplicateName(local_name.to_string()));
            }
            routes.insert(
                id.clone(),
                AgentRecord {
                    mailbox: mailbox.clone(),
                    state: AgentState::Spawning,
                },
            );
        }

        let agent = Agent::new(id.clone(), mailbox, behaviors, self.clone());
        self.set_state(&id, AgentState::Active);
        let handle = tokio::spawn(agent.run());
        self.inner
            .handles
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(handle);

        info!(agent = %id, "agent spawned");
        Ok(id)
    }

    /// Registers a mailbox under `local_name` without attaching behaviors
    /// or a scheduler task. Test support: the returned [`Probe`] receives
    /// anything sent to that identity.
    pub fn spawn_probe(&self, local_name: &str) -> Result<(AgentId, Probe<C>), SpawnError> {
        let id = AgentId::new(local_name, &self.inner.namespace);
        let mailbox = Arc::new(Mailbox::new());
        {
            let mut routes = self.routes_write();
            if routes.contains_key(&id) {
                return Err(SpawnError::DuplicateName(local_name.to_string()));
            }
            routes.insert(
                id.clone(),
                AgentRecord {
                    mailbox: mailbox.clone(),
                    state: AgentState::Active,
                },
            );
        }
        let probe = Probe::new(id.clone(), mailbox);
        Ok((id, probe))
    }

    /// Delivers `message` to each receiver's mailbox, cloning per
    /// receiver. Unknown or terminated receivers are skipped silently;
    /// broadcast to a mixed set still reaches every live receiver.
    pub fn send(&self, message: Message<C>) {
        let routes = self.routes_read();
        for receiver in &message.receivers {
            match routes.get(receiver) {
                Some(record) if record.state == AgentState::Active => {
                    record.mailbox.send(message.clone());
                }
                _ => {
                    debug!(receiver = %receiver, "message dropped, receiver unknown or terminated");
                }
            }
        }
    }

    /// Retires an agent: state becomes [`AgentState::Terminated`], its
    /// mailbox is closed (queued messages discarded), and every directory
    /// advertisement is withdrawn. Idempotent; unknown ids are ignored.
    pub fn terminate(&self, id: &AgentId) {
        {
            let mut routes = self.routes_write();
            let Some(record) = routes.get_mut(id) else {
                return;
            };
            if record.state == AgentState::Terminated {
                return;
            }
            record.state = AgentState::Terminated;
            record.mailbox.close();
        }
        if self.inner.directory.deregister_all(id).is_err() {
            error!(agent = %id, "directory cleanup failed on terminate");
        }
        info!(agent = %id, "agent terminated");
    }

    /// Current lifecycle state of an agent, if it exists.
    pub fn state(&self, id: &AgentId) -> Option<AgentState> {
        self.routes_read().get(id).map(|record| record.state)
    }

    /// Identities of all agents ever spawned, in no particular order.
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.routes_read().keys().cloned().collect()
    }

    /// Terminates every agent and waits for all scheduler tasks to finish.
    pub async fn shutdown(&self) {
        for id in self.agent_ids() {
            self.terminate(&id);
        }
        let handles = std::mem::take(
            &mut *self
                .inner
                .handles
                .lock()
                .unwrap_or_else(|e| e.into_inner()),
        );
        for handle in handles {
            if let Err(join_error) = handle.await {
                error!(%join_error, "agent task failed");
            }
        }
        info!("agent system shut down");
    }

    fn set_state(&self, id: &AgentId, state: AgentState) {
        if let Some(record) = self.routes_write().get_mut(id) {
            record.state = state;
        }
    }
}

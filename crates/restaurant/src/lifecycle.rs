//! # Restaurant Lifecycle & Orchestration
//!
//! [`RestaurantSystem`] is the conductor that owns the agent runtime and
//! performs the one-shot startup sequence: load the menu, spawn the
//! supervisor with its behaviors, spawn the configured number of visitor
//! agents.
//!
//! Startup is guarded by a `OnceCell`, so the supervisor is an idempotent
//! singleton: concurrent [`RestaurantSystem::start`] calls serialize and
//! every caller observes the same supervisor identity, one menu load, and
//! one batch of visitors. A failed startup leaves the cell empty, so a
//! later call may retry.

use crate::content::Content;
use crate::factory;
use crate::menu::{load_menu, MenuLoadError};
use crate::supervisor_agent;
use agent_runtime::{AgentId, AgentSystem, DirectoryError, SpawnError};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

/// Namespace qualifying every identity spawned by the restaurant.
pub const NAMESPACE: &str = "restaurant";

/// Process configuration, assembled in `main` (or defaulted in tests).
#[derive(Debug, Clone)]
pub struct RestaurantConfig {
    /// Number of visitor agents spawned at startup.
    pub visitors: usize,
    /// Path of the JSON dish list.
    pub menu_path: PathBuf,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            visitors: 3,
            menu_path: PathBuf::from("input_data/menu_dishes.json"),
        }
    }
}

/// Failures of the one-shot startup sequence. All fatal: the supervisor
/// does not come up partially.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("menu load failed: {0}")]
    Menu(#[from] MenuLoadError),
    #[error("agent spawn failed: {0}")]
    Spawn(#[from] SpawnError),
    #[error("directory failure: {0}")]
    Directory(#[from] DirectoryError),
}

/// Owns the agent runtime and the supervisor singleton.
pub struct RestaurantSystem {
    system: AgentSystem<Content>,
    config: RestaurantConfig,
    supervisor: OnceCell<AgentId>,
}

impl RestaurantSystem {
    pub fn new(config: RestaurantConfig) -> Self {
        Self {
            system: AgentSystem::new(NAMESPACE),
            config,
            supervisor: OnceCell::new(),
        }
    }

    /// Handle to the underlying agent runtime (sending, probes, the
    /// directory).
    pub fn agents(&self) -> &AgentSystem<Content> {
        &self.system
    }

    /// Identity of the supervisor, once startup has completed.
    pub fn supervisor_id(&self) -> Option<&AgentId> {
        self.supervisor.get()
    }

    /// Runs the startup sequence exactly once and returns the supervisor
    /// identity. Safe to call concurrently and repeatedly.
    pub async fn start(&self) -> Result<AgentId, StartupError> {
        self.supervisor
            .get_or_try_init(|| async {
                let menu = Arc::new(load_menu(&self.config.menu_path)?);
                info!(dishes = menu.dishes.len(), "menu loaded");

                let supervisor = self.system.spawn_agent(
                    supervisor_agent::LOCAL_NAME,
                    supervisor_agent::behaviors(menu),
                )?;

                for i in 0..self.config.visitors {
                    factory::create_agent(
                        &self.system,
                        "VisitorAgent",
                        &format!("visitor {i}"),
                    )?;
                }

                info!(
                    supervisor = %supervisor,
                    visitors = self.config.visitors,
                    "restaurant started"
                );
                Ok(supervisor)
            })
            .await
            .cloned()
    }

    /// Terminates every agent and waits for their tasks to finish.
    pub async fn shutdown(&self) {
        self.system.shutdown().await;
    }
}

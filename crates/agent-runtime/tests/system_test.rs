use agent_runtime::{
    AgentContext, AgentState, AgentSystem, Behavior, BehaviorError, BehaviorKind, Control, Message,
    MessageFilter, Performative, SpawnError,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

fn requests() -> MessageFilter {
    MessageFilter::match_performative(Performative::Request)
}

async fn wait_until(mut condition: impl FnMut() -> bool, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    condition()
}

/// RunOnce behavior that counts its invocations.
struct CountingSetup {
    invocations: Arc<AtomicUsize>,
}

#[async_trait]
impl Behavior<String> for CountingSetup {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::RunOnce
    }

    fn name(&self) -> &'static str {
        "counting_setup"
    }

    async fn action(&mut self, _ctx: &AgentContext<String>) -> Result<Control, BehaviorError> {
        self.invocations.fetch_add(1, Ordering::SeqCst);
        Ok(Control::Ran)
    }
}

/// RunOnce behavior that always fails.
struct FailingSetup;

#[async_trait]
impl Behavior<String> for FailingSetup {
    fn kind(&self) -> BehaviorKind {
        BehaviorKind::RunOnce
    }

    fn name(&self) -> &'static str {
        "failing_setup"
    }

    async fn action(&mut self, _ctx: &AgentContext<String>) -> Result<Control, BehaviorError> {
        Err(BehaviorError::new(std::io::Error::other("setup exploded")))
    }
}

/// RunForever behavior that echoes each REQUEST back as an INFORM and
/// counts how many it served.
struct Echo {
    served: Arc<AtomicUsize>,
}

#[async_trait]
impl Behavior<String> for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    async fn action(&mut self, ctx: &AgentContext<String>) -> Result<Control, BehaviorError> {
        let Some(message) = ctx.receive(&requests()) else {
            return Ok(Control::Park);
        };
        self.served.fetch_add(1, Ordering::SeqCst);
        ctx.send(Message::inform(
            ctx.id().clone(),
            message.sender.clone(),
            message.content,
        ));
        Ok(Control::Ran)
    }
}

/// A RunOnce behavior is scheduled at most once, then retired.
#[tokio::test]
async fn test_run_once_fires_exactly_once() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let invocations = Arc::new(AtomicUsize::new(0));
    let served = Arc::new(AtomicUsize::new(0));

    let agent = system
        .spawn_agent(
            "worker",
            vec![
                Box::new(CountingSetup {
                    invocations: invocations.clone(),
                }),
                Box::new(Echo {
                    served: served.clone(),
                }),
            ],
        )
        .unwrap();

    // Drive several scheduler passes by sending traffic.
    let (probe_id, probe) = system.spawn_probe("probe").unwrap();
    for text in ["a", "b", "c"] {
        system.send(Message::request(
            probe_id.clone(),
            agent.clone(),
            text.to_string(),
        ));
    }
    for _ in 0..3 {
        probe
            .receive(
                &MessageFilter::match_performative(Performative::Inform),
                Duration::from_secs(1),
            )
            .await
            .expect("echo reply");
    }

    assert_eq!(invocations.load(Ordering::SeqCst), 1);
    assert_eq!(served.load(Ordering::SeqCst), 3);
}

/// A failing RunOnce behavior is logged and retired; its sibling
/// RunForever behavior keeps serving.
#[tokio::test]
async fn test_behavior_failure_does_not_starve_siblings() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let served = Arc::new(AtomicUsize::new(0));

    let agent = system
        .spawn_agent(
            "worker",
            vec![
                Box::new(FailingSetup),
                Box::new(Echo {
                    served: served.clone(),
                }),
            ],
        )
        .unwrap();

    let (probe_id, probe) = system.spawn_probe("probe").unwrap();
    system.send(Message::request(
        probe_id.clone(),
        agent.clone(),
        "still alive?".to_string(),
    ));

    let reply = probe
        .receive(
            &MessageFilter::match_performative(Performative::Inform),
            Duration::from_secs(1),
        )
        .await
        .expect("agent should survive the failed setup behavior");
    assert_eq!(reply.content, "still alive?");
}

/// A parked agent wakes when a message arrives, even after idling.
#[tokio::test]
async fn test_parked_agent_wakes_on_send() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let served = Arc::new(AtomicUsize::new(0));
    let agent = system
        .spawn_agent(
            "worker",
            vec![Box::new(Echo {
                served: served.clone(),
            })],
        )
        .unwrap();

    // Let the agent reach its parked state, then poke it.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let (probe_id, _probe) = system.spawn_probe("probe").unwrap();
    system.send(Message::request(
        probe_id,
        agent,
        "wake up".to_string(),
    ));

    let served_view = served.clone();
    assert!(wait_until(move || served_view.load(Ordering::SeqCst) == 1, Duration::from_secs(1)).await);
}

/// Sending to a terminated agent never errors and is never delivered.
#[tokio::test]
async fn test_drop_on_terminate() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let served = Arc::new(AtomicUsize::new(0));
    let agent = system
        .spawn_agent(
            "worker",
            vec![Box::new(Echo {
                served: served.clone(),
            })],
        )
        .unwrap();

    system.terminate(&agent);
    assert_eq!(system.state(&agent), Some(AgentState::Terminated));

    let (probe_id, probe) = system.spawn_probe("probe").unwrap();
    system.send(Message::request(
        probe_id,
        agent.clone(),
        "anyone home?".to_string(),
    ));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(served.load(Ordering::SeqCst), 0);
    assert!(probe
        .try_receive(&MessageFilter::match_performative(Performative::Inform))
        .is_none());

    // Terminating again is a no-op.
    system.terminate(&agent);
}

/// Terminating an agent withdraws its directory advertisements.
#[tokio::test]
async fn test_terminate_deregisters() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let (probe_id, _probe) = system.spawn_probe("visitor 0").unwrap();
    system.directory().register(&probe_id, "Visitor").unwrap();

    system.terminate(&probe_id);
    assert!(system.directory().search("Visitor").unwrap().is_empty());
}

/// Local names are unique per system.
#[tokio::test]
async fn test_duplicate_name_rejected() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    let served = Arc::new(AtomicUsize::new(0));
    system
        .spawn_agent(
            "worker",
            vec![Box::new(Echo {
                served: served.clone(),
            })],
        )
        .unwrap();

    let duplicate = system.spawn_agent("worker", vec![Box::new(Echo { served })]);
    assert!(matches!(duplicate, Err(SpawnError::DuplicateName(_))));
}

/// Shutdown terminates everything and all tasks join.
#[tokio::test]
async fn test_shutdown_joins_all_agents() {
    let system: AgentSystem<String> = AgentSystem::new("test");
    for i in 0..4 {
        let served = Arc::new(AtomicUsize::new(0));
        system
            .spawn_agent(&format!("worker {i}"), vec![Box::new(Echo { served })])
            .unwrap();
    }

    system.shutdown().await;
    for id in system.agent_ids() {
        assert_eq!(system.state(&id), Some(AgentState::Terminated));
    }
}

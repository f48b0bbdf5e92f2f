use agent_runtime::{AgentId, Mailbox, Message, MessageFilter, Performative};

fn id(name: &str) -> AgentId {
    AgentId::new(name, "test")
}

fn request(text: &str) -> Message<String> {
    Message::request(id("sender"), id("receiver"), text.to_string())
}

fn inform(text: &str) -> Message<String> {
    Message::inform(id("sender"), id("receiver"), text.to_string())
}

/// Messages of one performative come out FIFO even when messages of the
/// other kind are interleaved between them.
#[test]
fn test_fifo_per_filter_class() {
    let mailbox: Mailbox<String> = Mailbox::new();
    mailbox.send(request("r1"));
    mailbox.send(inform("i1"));
    mailbox.send(request("r2"));
    mailbox.send(inform("i2"));

    let requests = MessageFilter::match_performative(Performative::Request);
    let informs = MessageFilter::match_performative(Performative::Inform);

    assert_eq!(mailbox.try_receive(&requests).unwrap().content, "r1");
    assert_eq!(mailbox.try_receive(&requests).unwrap().content, "r2");
    assert!(mailbox.try_receive(&requests).is_none());

    assert_eq!(mailbox.try_receive(&informs).unwrap().content, "i1");
    assert_eq!(mailbox.try_receive(&informs).unwrap().content, "i2");
}

/// A filtered receive must not consume non-matching messages: an INFORM
/// skipped over by a REQUEST filter stays queued for a later receive.
#[test]
fn test_filter_does_not_consume_non_matching() {
    let mailbox: Mailbox<String> = Mailbox::new();
    mailbox.send(inform("broadcast"));

    let requests = MessageFilter::match_performative(Performative::Request);
    assert!(mailbox.try_receive(&requests).is_none());
    assert_eq!(mailbox.len(), 1);

    let informs = MessageFilter::match_performative(Performative::Inform);
    assert_eq!(mailbox.try_receive(&informs).unwrap().content, "broadcast");
    assert!(mailbox.is_empty());
}

/// Closing a mailbox discards queued messages and makes it absorb all
/// later traffic without error.
#[test]
fn test_close_drops_queued_and_future_messages() {
    let mailbox: Mailbox<String> = Mailbox::new();
    mailbox.send(request("queued"));
    mailbox.close();

    let requests = MessageFilter::match_performative(Performative::Request);
    assert!(mailbox.try_receive(&requests).is_none());

    // Send after close is a no-op, not an error.
    mailbox.send(request("late"));
    assert!(mailbox.try_receive(&requests).is_none());
    assert!(mailbox.is_closed());
}

/// A send that lands before the owner parks leaves a stored wake permit,
/// so `wait` returns instead of sleeping forever.
#[tokio::test]
async fn test_send_before_wait_is_not_lost() {
    let mailbox: Mailbox<String> = Mailbox::new();
    mailbox.send(inform("early"));

    tokio::time::timeout(std::time::Duration::from_millis(100), mailbox.wait())
        .await
        .expect("wake permit from earlier send should complete wait");
}

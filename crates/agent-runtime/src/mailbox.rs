//! # Mailbox
//!
//! Each agent owns exactly one [`Mailbox`]: an unbounded FIFO queue of
//! inbound messages plus an edge-triggered wake signal for the agent's
//! scheduler task.
//!
//! The receive primitive is deliberately non-blocking. "Waiting" for a
//! message is expressed one level up, in the behavior scheduler, which
//! parks on [`Mailbox::wait`] when a full pass over its behaviors made no
//! progress. Every [`Mailbox::send`] (and [`Mailbox::close`]) signals the
//! `Notify`, so a parked agent is re-woken the moment traffic arrives.
//! `Notify::notify_one` stores a permit when nobody is parked, which closes
//! the race between a behavior observing an empty queue and the scheduler
//! going to sleep.

use crate::message::{Message, MessageContent, MessageFilter};
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::Notify;
use tracing::debug;

/// Ordered inbound message queue for one agent.
pub struct Mailbox<C: MessageContent> {
    inner: Mutex<Inner<C>>,
    notify: Notify,
}

struct Inner<C: MessageContent> {
    queue: VecDeque<Message<C>>,
    closed: bool,
}

impl<C: MessageContent> Mailbox<C> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                queue: VecDeque::new(),
                closed: false,
            }),
            notify: Notify::new(),
        }
    }

    // The critical sections are tiny and never panic, so a poisoned lock
    // only means some unrelated thread died mid-push; the queue itself is
    // still coherent and we keep serving it.
    fn lock(&self) -> MutexGuard<'_, Inner<C>> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Appends a message to the tail of the queue and wakes the owner.
    ///
    /// Never fails: delivering to a closed mailbox drops the message.
    pub fn send(&self, message: Message<C>) {
        {
            let mut inner = self.lock();
            if inner.closed {
                debug!(?message, "message dropped, mailbox closed");
                return;
            }
            inner.queue.push_back(message);
        }
        self.notify.notify_one();
    }

    /// Removes and returns the oldest message matching `filter`.
    ///
    /// Returns `None` immediately when nothing matches; never blocks.
    /// Non-matching messages are left in place, so messages of one
    /// performative are delivered FIFO regardless of interleaved traffic
    /// of other kinds. A closed mailbox yields `None` forever.
    pub fn try_receive(&self, filter: &MessageFilter) -> Option<Message<C>> {
        let mut inner = self.lock();
        if inner.closed {
            return None;
        }
        let position = inner.queue.iter().position(|m| filter.matches(m))?;
        inner.queue.remove(position)
    }

    /// Parks the caller until the next send or close.
    pub async fn wait(&self) {
        self.notify.notified().await;
    }

    /// Closes the mailbox: queued messages are discarded, later sends are
    /// dropped, later receives return `None`. Wakes a parked owner so its
    /// scheduler loop can observe the closure and exit.
    pub fn close(&self) {
        {
            let mut inner = self.lock();
            inner.closed = true;
            inner.queue.clear();
        }
        self.notify.notify_one();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Number of queued messages, regardless of kind.
    pub fn len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C: MessageContent> Default for Mailbox<C> {
    fn default() -> Self {
        Self::new()
    }
}

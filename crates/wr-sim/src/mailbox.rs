//! `MessageService`: colour-addressed, one-round-delayed message delivery.
//!
//! # Lifecycle
//!
//! ```text
//!   send(round N)  ──►  pending  ──dispatch_round(M > N)──►  inboxes
//! ```
//!
//! A message is delivered by the first dispatch of a round strictly later
//! than the one it was sent in, to every robot whose colour matches the
//! recipient colour at that moment.  Delivery is a copy per recipient; there
//! is no retry and no deduplication.
//!
//! The service is plain state owned by the environment, not a global, so a
//! test can `reset` or `drain` it between scenarios.

use tracing::debug;

use wr_agent::{Message, RobotStore};
use wr_core::Round;

struct Pending {
    sent:    Round,
    message: Message,
}

/// Outbound messages waiting for the next round's dispatch.
#[derive(Default)]
pub struct MessageService {
    pending:         Vec<Pending>,
    delivered_total: u64,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `message`, stamped with the round it was sent in.
    pub fn send(&mut self, sent: Round, message: Message) {
        self.pending.push(Pending { sent, message });
    }

    /// Deliver every message sent before `round` and return the number of
    /// inbox copies made.  Messages sent during `round` itself stay pending.
    pub fn dispatch_round(&mut self, round: Round, robots: &mut RobotStore) -> usize {
        let mut delivered = 0;
        let mut kept = Vec::new();
        for p in self.pending.drain(..) {
            if p.sent >= round {
                kept.push(p);
                continue;
            }
            for robot in robots.iter_mut().filter(|r| r.color() == p.message.recipient) {
                robot.inbox.push(p.message);
                delivered += 1;
            }
        }
        self.pending = kept;
        self.delivered_total += delivered as u64;
        if delivered > 0 {
            debug!(round = round.0, delivered, "dispatched hand-off messages");
        }
        delivered
    }

    /// Messages not yet delivered.
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> impl Iterator<Item = &Message> + '_ {
        self.pending.iter().map(|p| &p.message)
    }

    /// Inbox copies made since creation (or the last [`reset`](Self::reset)).
    pub fn delivered_total(&self) -> u64 {
        self.delivered_total
    }

    /// Drop everything pending and zero the counters.
    pub fn reset(&mut self) {
        self.pending.clear();
        self.delivered_total = 0;
    }

    /// Take all pending messages without delivering them.
    pub fn drain(&mut self) -> Vec<Message> {
        self.pending.drain(..).map(|p| p.message).collect()
    }
}

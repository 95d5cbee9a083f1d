// File: src/exchange.rs
//! The simulated "thinking" pause between a question and its reply.
//!
//! One exchange is in flight at a time: Idle -> AwaitingReply -> Delivered.
//! The caller drives it with explicit instants, which keeps it free of
//! timers and easy to test.

use crate::error::{EcoPalError, Result};
use rand::Rng;
use std::time::{Duration, Instant};

/// How long to wait before showing the typing indicator and the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub typing: Duration,
    /// Measured from when the typing indicator appears.
    pub reply: Duration,
}

impl ReplyDelay {
    pub fn fixed(typing: Duration, reply: Duration) -> Self {
        Self { typing, reply }
    }

    /// Reply delay drawn uniformly from `min..=max`.
    pub fn jittered(typing: Duration, min: Duration, max: Duration) -> Self {
        let reply = if max > min {
            rand::thread_rng().gen_range(min..=max)
        } else {
            min
        };
        Self { typing, reply }
    }

    pub fn none() -> Self {
        Self::fixed(Duration::ZERO, Duration::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    reply: String,
    typing_at: Instant,
    deliver_at: Instant,
    typing_shown: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ExchangePhase {
    #[default]
    Idle,
    AwaitingReply(PendingReply),
    Delivered,
}

/// What the UI should do after a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExchangeEvent {
    ShowTyping,
    Deliver(String),
}

#[derive(Debug, Default)]
pub struct Exchange {
    phase: ExchangePhase,
}

impl Exchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ExchangePhase {
        &self.phase
    }

    pub fn is_awaiting(&self) -> bool {
        matches!(self.phase, ExchangePhase::AwaitingReply(_))
    }

    /// Schedules `reply`. Fails while another reply is still pending.
    pub fn begin(&mut self, reply: String, now: Instant, delay: ReplyDelay) -> Result<()> {
        if self.is_awaiting() {
            return Err(EcoPalError::ReplyPending);
        }
        let typing_at = now + delay.typing;
        self.phase = ExchangePhase::AwaitingReply(PendingReply {
            reply,
            typing_at,
            deliver_at: typing_at + delay.reply,
            typing_shown: false,
        });
        Ok(())
    }

    /// Advances the exchange to `now`, returning at most one event.
    /// Call again until it returns `None` to drain everything that is due.
    pub fn poll(&mut self, now: Instant) -> Option<ExchangeEvent> {
        let ExchangePhase::AwaitingReply(pending) = &mut self.phase else {
            return None;
        };
        if !pending.typing_shown && now >= pending.typing_at {
            pending.typing_shown = true;
            return Some(ExchangeEvent::ShowTyping);
        }
        if pending.typing_shown && now >= pending.deliver_at {
            let reply = std::mem::take(&mut pending.reply);
            self.phase = ExchangePhase::Delivered;
            return Some(ExchangeEvent::Deliver(reply));
        }
        None
    }

    /// When the next event becomes due, if anything is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        match &self.phase {
            ExchangePhase::AwaitingReply(p) if !p.typing_shown => Some(p.typing_at),
            ExchangePhase::AwaitingReply(p) => Some(p.deliver_at),
            _ => None,
        }
    }

    /// Drops a pending reply. Returns whether anything was cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_awaiting() {
            self.phase = ExchangePhase::Idle;
            true
        } else {
            false
        }
    }
}

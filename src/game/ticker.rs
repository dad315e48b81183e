//! Fixed-interval tick source.
//!
//! [`FixedTicker`] decides *when* the host should advance the simulation; it never
//! touches game state itself. The host polls it with the current [`Instant`] and
//! runs one [`GameState::tick`](crate::game::GameState::tick) per `true` answer.
//!
//! A late poll fires a single tick and reschedules from the poll time. Missed ticks
//! are dropped rather than replayed, so a stalled frame never turns into a burst of
//! movement.

use std::time::{Duration, Instant};

/// Schedules ticks at a fixed cadence.
#[derive(Debug, Clone)]
pub struct FixedTicker {
    interval: Duration,
    next_tick: Instant,
    ticks: u64,
}

impl FixedTicker {
    /// Creates a ticker whose first tick is due one `interval` after `start`.
    pub fn new(interval: Duration, start: Instant) -> Self {
        Self {
            interval,
            next_tick: start + interval,
            ticks: 0,
        }
    }

    /// The fixed interval between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the next tick is due. Hosts sleep until this instant.
    pub fn next_deadline(&self) -> Instant {
        self.next_tick
    }

    /// Number of ticks fired so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Returns `true` when a tick is due at `now` and schedules the next one.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now < self.next_tick {
            return false;
        }

        self.next_tick += self.interval;
        if self.next_tick <= now {
            self.next_tick = now + self.interval;
        }
        self.ticks += 1;
        true
    }

    /// Restarts the schedule from `now`, e.g. when a new level begins.
    pub fn reset(&mut self, now: Instant) {
        self.next_tick = now + self.interval;
    }
}

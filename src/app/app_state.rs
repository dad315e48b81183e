//! Application state for Tomb Runner.

use crate::benchmarks::{self, TickRateCounter};
use crate::config::GameConfig;
use crate::game::GameState;
use crate::game::ticker::FixedTicker;
use std::time::Instant;

/// Everything the host keeps between events.
pub struct AppState {
    /// The level session.
    pub game_state: GameState,
    /// Decides when the next tick is due.
    pub ticker: FixedTicker,
    /// Observed tick frequency, reported when a level ends.
    pub tick_rate: TickRateCounter,
    /// Last title written to the window, to skip redundant updates.
    pub last_title: String,
}

impl AppState {
    /// Creates the state for a fresh session.
    pub fn new(config: GameConfig) -> Self {
        let ticker = FixedTicker::new(config.tick_interval, Instant::now());
        Self {
            game_state: GameState::with_config(config),
            ticker,
            tick_rate: TickRateCounter::new(600),
            last_title: String::new(),
        }
    }

    /// Starts a new level and restarts the tick schedule.
    ///
    /// Returns `false` when the maze could not be generated.
    pub fn start_level(&mut self, now: Instant) -> bool {
        match self.game_state.start_level(None) {
            Ok(()) => {
                self.ticker.reset(now);
                self.tick_rate.reset();
                true
            }
            Err(err) => {
                log::error!("Cannot start level: {err}");
                false
            }
        }
    }

    /// Leaves the current level and reports its timings.
    ///
    /// The level's measurements are dropped afterwards so the next report covers
    /// only the next level.
    pub fn quit_level(&mut self) {
        self.game_state.quit_level();
        benchmarks::log_summary(Some(self.tick_rate.ticks_per_second()));
        benchmarks::clear_measurements(&benchmarks::LEVEL_OPERATIONS);
    }
}

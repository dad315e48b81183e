//! Application module for Tomb Runner.
//!
//! This module hosts the game inside a winit event loop. It owns no game rules;
//! it forwards keyboard events to the level session and drives its ticks.
//!
//! # Module Structure
//!
//! - [`app_state`]: Contains the [`AppState`] struct which holds the session and its ticker
//! - [`event_handler`]: Contains the [`App`] struct and event handling logic
//! - [`update`]: Contains the tick loop and window title refresh
//!
//! # Event Flow
//!
//! 1. **Input Events**: Keyboard events are mapped to [`GameKey`](crate::game::keys::GameKey)s
//! 2. **Ticks**: `about_to_wait` polls the fixed ticker and advances the level
//! 3. **Presentation**: The player position is written to the window title
//!
//! # Threading Model
//!
//! Everything runs on the event loop thread. Key events only flip held-key flags,
//! and a tick always runs to completion before the next event is handled.

pub mod app_state;
pub mod event_handler;
pub mod update;

pub use app_state::AppState;
pub use event_handler::App;

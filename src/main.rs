//! Entry point for Tomb Runner: sets up logging and runs the winit host.

use anyhow::Context;
use log::error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tomb_runner::app;
use tomb_runner::config::GameConfig;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}

/// Runs the game until the window closes.
///
/// # Errors
/// - If the Ctrl-C handler cannot be installed
/// - If the event loop cannot be created or fails while running
/// - If the window or the first level cannot be created
fn run() -> anyhow::Result<()> {
    let shutdown = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&shutdown);
    ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
        .context("failed to install Ctrl-C handler")?;

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::App::new(GameConfig::default(), shutdown);
    event_loop
        .run_app(&mut app)
        .context("event loop terminated abnormally")?;

    match app.take_fatal() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

//! Browser session: wires the round controller to the DOM, audio and timers.
//!
//! The live controller sits in a thread-local cell; timer and click closures
//! reach it through the free functions below.
use std::cell::RefCell;

use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::round::{RandomDraws, RoundController, RoundView};

mod announcer;
mod presentation;
mod timer;

pub use announcer::WebAnnouncer;
pub use presentation::DomPresentation;
pub use timer::WebTimer;

type Session = RoundController<RandomDraws<StdRng>>;

thread_local! {
    static SESSION: RefCell<Option<Session>> = const { RefCell::new(None) };
}

/// Mounts the page and starts a new session, ending any live one first.
pub fn start_session(config: GameConfig) -> Result<(), GameError> {
    stop_session();
    config.validate()?;

    let presentation = DomPresentation::mount(&config)?;
    let announcer = WebAnnouncer::new(&config.cue_url);
    let controller = RoundController::new(
        config,
        RandomDraws::from_entropy(),
        Box::new(announcer),
        Box::new(presentation),
        Box::new(WebTimer::default()),
    )?;

    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let controller = slot.insert(controller);
        controller.start();
    });
    info!("door session started");
    Ok(())
}

/// Tears the live session down. No-op without one.
pub fn stop_session() {
    // Drop outside the borrow: teardown touches the DOM and timers.
    let previous = SESSION.with(|cell| cell.borrow_mut().take());
    if let Some(mut controller) = previous {
        controller.teardown();
        info!(score = controller.score(), "door session stopped");
    }
}

/// Click intake shared by the door buttons and the JS export.
pub fn click_door(door: u32) {
    SESSION.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(controller) = slot.as_mut() else { return };
        let Some(door) = controller.config().door_from_js(door) else {
            debug!(door, "click on unknown door dropped");
            return;
        };
        controller.handle_door_click(door);
    });
}

/// Snapshot of the live session, or the idle view when none is running.
pub fn current_view() -> RoundView {
    SESSION.with(|cell| {
        cell.borrow()
            .as_ref()
            .map(RoundController::view)
            .unwrap_or_default()
    })
}

/// Timer callback body; also lets browser tests arm a round without waiting.
pub fn fire_pending_round() {
    SESSION.with(|cell| {
        if let Some(controller) = cell.borrow_mut().as_mut() {
            controller.on_timer_fired();
        }
    });
}

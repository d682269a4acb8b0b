//! Door Clicker core crate.
//!
//! A reaction game for the browser: after a random pause a cue plays and a
//! voice names one of thirty doors; clicking that door before the next round
//! scores a point, clicking any other door resets the score.
//!
//! The round state machine ([`round::RoundController`]) is plain Rust and is
//! tested natively. The `web` module binds it to the DOM, `<audio>`,
//! `speechSynthesis` and `setTimeout`.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod logging;
pub mod round;
pub mod web;

pub use config::GameConfig;
pub use error::GameError;
pub use round::{
    Announcer, ClickOutcome, DrawSource, FireOutcome, Notification, Presentation, RandomDraws,
    Round, RoundController, RoundView, Scheduler, prompt_text,
};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// JS surface
// -----------------------------------------------------------------------------

/// Mounts the doors and schedules the first round.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::start_session(GameConfig::default()).map_err(JsValue::from)
}

#[wasm_bindgen]
pub fn stop_game() {
    web::stop_session();
}

#[wasm_bindgen]
pub fn click_door(door: u32) {
    web::click_door(door);
}

#[wasm_bindgen]
pub fn current_score() -> u32 {
    web::current_view().score
}

/// `{"score":N,"active":bool,"target":N|null}` for the live session.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_state_json() -> Result<String, JsValue> {
    serde_json::to_string(&web::current_view()).map_err(|e| JsValue::from_str(&e.to_string()))
}

// setTimeout-backed round scheduler.
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::round::Scheduler;

/// Holds the handle of the single pending round timer. One callback closure
/// is reused for every `setTimeout`; it is dropped with the timer, after
/// `cancel` has cleared any pending handle.
pub struct WebTimer {
    handle: Option<i32>,
    callback: Closure<dyn FnMut()>,
}

impl Default for WebTimer {
    fn default() -> Self {
        Self {
            handle: None,
            callback: Closure::wrap(Box::new(super::fire_pending_round) as Box<dyn FnMut()>),
        }
    }
}

impl Scheduler for WebTimer {
    fn schedule(&mut self, delay_ms: u32) {
        let Some(win) = window() else {
            warn!("no window; round timer not armed");
            return;
        };
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => self.handle = Some(handle),
            Err(err) => warn!(?err, "failed to arm round timer"),
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if let Some(win) = window() {
                win.clear_timeout_with_handle(handle);
            }
        }
    }
}

impl Drop for WebTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

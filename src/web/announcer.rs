//! Browser audio output: an `<audio>` cue plus `speechSynthesis`.
//!
//! Both are best effort. Autoplay rejection, a missing speech engine or a
//! missing asset never reach the round logic; they only show up in the debug log.
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, SpeechSynthesis, SpeechSynthesisUtterance, window};

use crate::round::Announcer;

// Rejection handler for `play()` promises. A pending play rejects with
// AbortError when teardown pauses the cue, after the announcer is gone, so the
// handler is leaked once and outlives every session.
thread_local! {
    static SWALLOW_REJECTION: &'static Closure<dyn FnMut(JsValue)> =
        Box::leak(Box::new(Closure::wrap(Box::new(|err: JsValue| {
            debug!(?err, "cue playback rejected");
        }) as Box<dyn FnMut(JsValue)>)));
}

pub struct WebAnnouncer {
    cue: Option<HtmlAudioElement>,
    speech: Option<SpeechSynthesis>,
}

impl WebAnnouncer {
    pub fn new(cue_url: &str) -> Self {
        let cue = HtmlAudioElement::new_with_src(cue_url)
            .map_err(|err| debug!(?err, cue_url, "cue audio unavailable"))
            .ok();
        let speech = window().and_then(|w| w.speech_synthesis().ok());
        if speech.is_none() {
            debug!("speech synthesis unavailable");
        }
        Self { cue, speech }
    }
}

impl Announcer for WebAnnouncer {
    fn play_cue(&mut self) {
        let Some(cue) = &self.cue else { return };
        match cue.play() {
            Ok(promise) => {
                SWALLOW_REJECTION.with(|handler| {
                    let _ = promise.catch(handler);
                });
            }
            Err(err) => debug!(?err, "cue playback failed"),
        }
    }

    fn speak(&mut self, text: &str) {
        let Some(speech) = &self.speech else { return };
        match SpeechSynthesisUtterance::new_with_text(text) {
            Ok(utterance) => speech.speak(&utterance),
            Err(err) => debug!(?err, "utterance not created"),
        }
    }

    fn stop_cue(&mut self) {
        let Some(cue) = &self.cue else { return };
        let _ = cue.pause();
        cue.set_current_time(0.0);
    }
}

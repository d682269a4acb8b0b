// Recording collaborators shared by the integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use door_clicker::{
    Announcer, DrawSource, GameConfig, Notification, Presentation, RoundController, RoundView,
    Scheduler,
};

/// Deterministic draws replayed in order. Values outside the requested range
/// are clamped into it; an exhausted script yields `low`.
#[derive(Debug, Default)]
pub struct ScriptedDraws {
    queue: VecDeque<u32>,
}

impl ScriptedDraws {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DrawSource for ScriptedDraws {
    fn draw_inclusive(&mut self, low: u32, high: u32) -> u32 {
        self.queue
            .pop_front()
            .map(|v| v.clamp(low, high))
            .unwrap_or(low)
    }
}

#[derive(Default)]
pub struct Recorder {
    pub cues: u32,
    pub cue_stops: u32,
    pub spoken: Vec<String>,
    pub notes: Vec<Notification>,
    pub views: Vec<RoundView>,
    pub scheduled: Vec<u32>,
    pub cancels: u32,
    pub pending: Option<u32>,
}

impl Recorder {
    /// Timers armed and not cancelled since (at most one in a healthy session).
    pub fn pending_timers(&self) -> usize {
        usize::from(self.pending.is_some())
    }
}

#[derive(Clone, Default)]
pub struct Shared(pub Rc<RefCell<Recorder>>);

impl Announcer for Shared {
    fn play_cue(&mut self) {
        self.0.borrow_mut().cues += 1;
    }
    fn speak(&mut self, text: &str) {
        self.0.borrow_mut().spoken.push(text.to_string());
    }
    fn stop_cue(&mut self) {
        self.0.borrow_mut().cue_stops += 1;
    }
}

impl Presentation for Shared {
    fn render(&mut self, view: &RoundView) {
        self.0.borrow_mut().views.push(*view);
    }
    fn notify(&mut self, note: &Notification) {
        self.0.borrow_mut().notes.push(note.clone());
    }
}

impl Scheduler for Shared {
    fn schedule(&mut self, delay_ms: u32) {
        let mut r = self.0.borrow_mut();
        assert!(r.pending.is_none(), "second timer armed without cancelling the first");
        r.scheduled.push(delay_ms);
        r.pending = Some(delay_ms);
    }
    fn cancel(&mut self) {
        let mut r = self.0.borrow_mut();
        r.cancels += 1;
        r.pending = None;
    }
}

pub fn controller_with<D: DrawSource>(draws: D) -> (RoundController<D>, Shared) {
    let rec = Shared::default();
    let controller = RoundController::new(
        GameConfig::default(),
        draws,
        Box::new(rec.clone()),
        Box::new(rec.clone()),
        Box::new(rec.clone()),
    )
    .expect("default config is valid");
    (controller, rec)
}

pub fn scripted(draws: &[u32]) -> (RoundController<ScriptedDraws>, Shared) {
    controller_with(ScriptedDraws::new(draws.iter().copied()))
}

/// Started session with one round armed on `target`.
pub fn armed_on(target: u8) -> (RoundController<ScriptedDraws>, Shared) {
    let (mut c, rec) = scripted(&[5_000, u32::from(target), 5_000]);
    c.start();
    c.on_timer_fired();
    (c, rec)
}

//! Round scheduling state machine.
//!
//! A round moves idle -> armed -> resolved. The controller owns the current
//! [`Round`] and the score; it talks to the page only through three seams:
//!
//! - [`Announcer`]: cue sound + spoken prompt (output only, failures swallowed)
//! - [`Presentation`]: renders a [`RoundView`] and shows [`Notification`]s
//! - [`Scheduler`]: one-shot deferred callback that later calls
//!   [`RoundController::on_timer_fired`]
//!
//! Everything runs on the page's event loop, so a click and a timer fire never
//! interleave; each sees the fully settled state left by the other.
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::error::GameError;

pub mod draw;

pub use draw::{DrawSource, RandomDraws};

// --- Seams ------------------------------------------------------------------

/// Fire-and-forget audio output. Implementations swallow playback failures.
pub trait Announcer {
    fn play_cue(&mut self);
    fn speak(&mut self, text: &str);
    /// Pause and rewind the cue.
    fn stop_cue(&mut self);
}

pub trait Presentation {
    fn render(&mut self, view: &RoundView);
    fn notify(&mut self, note: &Notification);
}

/// Holds at most one pending deferred callback.
pub trait Scheduler {
    /// Arm a one-shot callback after `delay_ms`. Replaces nothing by itself;
    /// the controller cancels first.
    fn schedule(&mut self, delay_ms: u32);
    fn cancel(&mut self);
}

// --- Data -------------------------------------------------------------------

/// The round in progress. `target` present means armed and judgable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Round {
    target: Option<u8>,
}

impl Round {
    pub fn is_active(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<u8> {
        self.target
    }
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundView {
    pub score: u32,
    pub active: bool,
    pub target: Option<u8>,
}

impl RoundView {
    /// Banner text shown while a round is armed.
    pub fn prompt(&self) -> Option<String> {
        match (self.active, self.target) {
            (true, Some(t)) => Some(format!("Find door number {t}!")),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notification {
    Correct,
    WrongDoor { target: u8 },
}

impl Notification {
    pub fn title(&self) -> &'static str {
        match self {
            Notification::Correct => "Correct!",
            Notification::WrongDoor { .. } => "Wrong door!",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::Correct => "You found the right door!".to_string(),
            Notification::WrongDoor { target } => format!("The correct door was {target}"),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Notification::Correct)
    }
}

/// What a timer fire did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FireOutcome {
    Armed { target: u8 },
    /// A round was already armed (stale or overlapping timer).
    AlreadyArmed,
    /// The session was torn down.
    Stopped,
}

/// What a door click did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// No armed round; the click is dropped.
    Ignored,
    Correct { score: u32 },
    Wrong { target: u8 },
}

pub fn prompt_text(target: u8) -> String {
    format!("Click the {target} door")
}

// --- Controller -------------------------------------------------------------

pub struct RoundController<D: DrawSource> {
    config: GameConfig,
    draws: D,
    round: Round,
    score: u32,
    announcer: Box<dyn Announcer>,
    presentation: Box<dyn Presentation>,
    scheduler: Box<dyn Scheduler>,
    stopped: bool,
}

impl<D: DrawSource> RoundController<D> {
    pub fn new(
        config: GameConfig,
        draws: D,
        announcer: Box<dyn Announcer>,
        presentation: Box<dyn Presentation>,
        scheduler: Box<dyn Scheduler>,
    ) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            draws,
            round: Round::default(),
            score: 0,
            announcer,
            presentation,
            scheduler,
            stopped: false,
        })
    }

    /// Session start: first render and first scheduled round.
    pub fn start(&mut self) {
        self.stopped = false;
        self.render();
        self.schedule_next_round();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> Round {
        self.round
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn view(&self) -> RoundView {
        RoundView {
            score: self.score,
            active: self.round.is_active(),
            target: self.round.target,
        }
    }

    /// Draws a delay in `[min_delay_ms, max_delay_ms]` and arms the single
    /// pending timer, cancelling any earlier one. Returns the delay.
    pub fn schedule_next_round(&mut self) -> u32 {
        let delay_ms = self
            .draws
            .draw_inclusive(self.config.min_delay_ms, self.config.max_delay_ms);
        debug!(delay_ms, "scheduling next round");
        self.scheduler.cancel();
        self.scheduler.schedule(delay_ms);
        delay_ms
    }

    /// Deferred callback body. Only code path that arms a round.
    pub fn on_timer_fired(&mut self) -> FireOutcome {
        if self.stopped {
            return FireOutcome::Stopped;
        }
        if let Some(target) = self.round.target {
            debug!(target, "timer fired while a round is armed; ignoring");
            return FireOutcome::AlreadyArmed;
        }

        self.announcer.play_cue();
        let target = self.draws.draw_inclusive(1, u32::from(self.config.door_count)) as u8;
        self.announcer.speak(&prompt_text(target));
        self.round.target = Some(target);
        info!(target, "target door set");
        self.render();

        // Arming re-runs scheduling; that timer is guarded if the round is still live.
        self.schedule_next_round();
        FireOutcome::Armed { target }
    }

    /// Judge a click. Ignored entirely unless a round is armed.
    pub fn handle_door_click(&mut self, door: u8) -> ClickOutcome {
        if self.stopped {
            return ClickOutcome::Ignored;
        }
        let Some(target) = self.round.target else {
            return ClickOutcome::Ignored;
        };
        debug!(door, target, "door clicked");

        let (note, outcome) = if door == target {
            self.score = self.score.saturating_add(1);
            info!(score = self.score, "correct door");
            (Notification::Correct, ClickOutcome::Correct { score: self.score })
        } else {
            self.score = 0;
            info!(door, target, "wrong door; score reset");
            (Notification::WrongDoor { target }, ClickOutcome::Wrong { target })
        };

        self.round = Round::default();
        self.presentation.notify(&note);
        self.render();
        self.schedule_next_round();
        outcome
    }

    /// Session end: no timer left pending, cue silenced. Later fires and clicks are dropped.
    pub fn teardown(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        self.scheduler.cancel();
        self.announcer.stop_cue();
        debug!("round controller torn down");
    }

    fn render(&mut self) {
        let view = self.view();
        self.presentation.render(&view);
    }
}

impl<D: DrawSource> Drop for RoundController<D> {
    fn drop(&mut self) {
        self.teardown();
    }
}

//! Fixed game constants grouped in one place.
//!
//! The browser session always runs with `GameConfig::default()`; narrower
//! configs exist so tests can pin the draw ranges.

use crate::error::GameError;

pub const DOOR_COUNT: u8 = 30;
pub const MIN_DELAY_MS: u32 = 5_000;
pub const MAX_DELAY_MS: u32 = 30_000;
pub const CUE_URL: &str = "/mingle.mp3";

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Doors are numbered `1..=door_count`.
    pub door_count: u8,
    /// Inclusive bounds of the delay before a round is armed.
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
    /// Audio asset played as the round cue.
    pub cue_url: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            door_count: DOOR_COUNT,
            min_delay_ms: MIN_DELAY_MS,
            max_delay_ms: MAX_DELAY_MS,
            cue_url: CUE_URL.to_string(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.door_count == 0 {
            return Err(GameError::Config("door_count must be at least 1".into()));
        }
        if self.min_delay_ms > self.max_delay_ms {
            return Err(GameError::Config(format!(
                "min_delay_ms ({}) exceeds max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        Ok(())
    }

    pub fn doors(&self) -> impl Iterator<Item = u8> {
        1..=self.door_count
    }

    pub fn is_door(&self, door: u8) -> bool {
        (1..=self.door_count).contains(&door)
    }

    /// Narrows a door number coming from JS; anything off the board is `None`.
    pub fn door_from_js(&self, door: u32) -> Option<u8> {
        u8::try_from(door).ok().filter(|d| self.is_door(*d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_page_constants() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.door_count, 30);
        assert_eq!((cfg.min_delay_ms, cfg.max_delay_ms), (5_000, 30_000));
        assert_eq!(cfg.cue_url, "/mingle.mp3");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.doors().count(), 30);
    }

    #[test]
    fn validate_rejects_empty_board_and_inverted_delays() {
        let no_doors = GameConfig {
            door_count: 0,
            ..GameConfig::default()
        };
        assert!(matches!(no_doors.validate(), Err(GameError::Config(_))));

        let inverted = GameConfig {
            min_delay_ms: 10,
            max_delay_ms: 9,
            ..GameConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(GameError::Config(_))));
    }

    #[test]
    fn door_bounds_are_inclusive() {
        let cfg = GameConfig::default();
        assert!(!cfg.is_door(0));
        assert!(cfg.is_door(1));
        assert!(cfg.is_door(30));
        assert!(!cfg.is_door(31));
    }

    #[test]
    fn js_door_numbers_are_range_checked_before_narrowing() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.door_from_js(30), Some(30));
        assert_eq!(cfg.door_from_js(1), Some(1));
        assert_eq!(cfg.door_from_js(0), None);
        assert_eq!(cfg.door_from_js(31), None);
        // 286 truncates to 30 as a u8
        assert_eq!(cfg.door_from_js(286), None);
        assert_eq!(cfg.door_from_js(u32::MAX), None);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn partial_json_fills_from_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{"door_count": 12}"#).unwrap();
        assert_eq!(cfg.door_count, 12);
        assert_eq!(cfg.max_delay_ms, MAX_DELAY_MS);
    }
}

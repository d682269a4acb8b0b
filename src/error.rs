use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while wiring the game into the page. Round logic itself never fails.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("dom: {0}")]
    Dom(String),
    #[error("invalid config: {0}")]
    Config(String),
}

impl From<JsValue> for GameError {
    fn from(value: JsValue) -> Self {
        GameError::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<GameError> for JsValue {
    fn from(value: GameError) -> Self {
        JsValue::from_str(&value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_readable() {
        assert_eq!(GameError::NoWindow.to_string(), "no window");
        assert_eq!(
            GameError::Config("door_count must be at least 1".into()).to_string(),
            "invalid config: door_count must be at least 1"
        );
    }
}

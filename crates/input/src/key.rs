use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A physical key the demo reacts to, named by its layout-independent code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
}

/// A key code string that does not name a recognized key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized key code: {0:?}")]
pub struct UnknownKey(pub String);

impl Key {
    pub const ALL: [Key; 9] = [
        Key::ArrowUp,
        Key::ArrowDown,
        Key::ArrowLeft,
        Key::ArrowRight,
        Key::KeyW,
        Key::KeyA,
        Key::KeyS,
        Key::KeyD,
        Key::Space,
    ];

    /// The code string, e.g. `"KeyW"`.
    pub fn code(&self) -> &'static str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::KeyW => "KeyW",
            Key::KeyA => "KeyA",
            Key::KeyS => "KeyS",
            Key::KeyD => "KeyD",
            Key::Space => "Space",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Key::ALL
            .into_iter()
            .find(|k| k.code() == s)
            .ok_or_else(|| UnknownKey(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for key in Key::ALL {
            assert_eq!(key.code().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "KeyQ".parse::<Key>().unwrap_err();
        assert_eq!(err, UnknownKey("KeyQ".into()));
        assert!(err.to_string().contains("KeyQ"));
    }

    #[test]
    fn codes_are_case_sensitive() {
        assert!("space".parse::<Key>().is_err());
        assert!("keyw".parse::<Key>().is_err());
    }
}

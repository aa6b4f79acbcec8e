use serde::{Deserialize, Serialize};

use crate::key::Key;

/// What a key asks the player to do.
///
/// The kernel consumes actions and intent, never raw key codes, so the
/// arrow keys and WASD drive identical behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveForward,
    MoveBackward,
    MoveLeft,
    MoveRight,
    /// Edge-triggered: one request per key-down.
    Jump,
}

impl Action {
    pub fn for_key(key: Key) -> Action {
        match key {
            Key::ArrowUp | Key::KeyW => Action::MoveForward,
            Key::ArrowDown | Key::KeyS => Action::MoveBackward,
            Key::ArrowLeft | Key::KeyA => Action::MoveLeft,
            Key::ArrowRight | Key::KeyD => Action::MoveRight,
            Key::Space => Action::Jump,
        }
    }

    pub fn is_movement(&self) -> bool {
        !matches!(self, Action::Jump)
    }
}

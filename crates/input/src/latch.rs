use glade_common::InputIntent;

use crate::action::Action;
use crate::key::Key;

/// Latches key transitions into an [`InputIntent`].
///
/// Held directions persist until the matching key-up. Jump key-downs are
/// handed back to the caller instead of being stored, so each key-down is
/// a single request.
#[derive(Debug, Clone, Default)]
pub struct InputLatch {
    intent: InputIntent,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current held directions.
    pub fn intent(&self) -> InputIntent {
        self.intent
    }

    /// Record a key-down. Returns the action it triggers.
    pub fn key_down(&mut self, key: Key) -> Action {
        let action = Action::for_key(key);
        self.set(action, true);
        action
    }

    /// Record a key-up. Releasing either alias clears the shared flag.
    pub fn key_up(&mut self, key: Key) {
        self.set(Action::for_key(key), false);
    }

    /// Drop every held direction, e.g. when the window loses focus and
    /// key-ups would go missing.
    pub fn release_all(&mut self) {
        if !self.intent.is_idle() {
            tracing::debug!("releasing held keys");
        }
        self.intent = InputIntent::default();
    }

    fn set(&mut self, action: Action, down: bool) {
        match action {
            Action::MoveForward => self.intent.forward = down,
            Action::MoveBackward => self.intent.backward = down,
            Action::MoveLeft => self.intent.left = down,
            Action::MoveRight => self.intent.right = down,
            Action::Jump => {}
        }
    }
}

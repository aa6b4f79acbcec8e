use glade_common::InputIntent;
use serde::{Deserialize, Serialize};

use crate::movement::{self, MovementConfig, MovementState};
use crate::viewpoint::Viewpoint;

/// Something noteworthy that happened to the player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A jump key-down left the ground, adding `impulse` to vertical velocity.
    Jumped { tick: u64, impulse: f32 },
    /// The player touched the ground after being airborne.
    Landed { tick: u64 },
}

/// The walking player: movement state, tuning and an event log.
///
/// All mutations go through [`Player::tick`] and [`Player::jump`]. The
/// viewpoint is borrowed per call; the player never owns the camera.
#[derive(Debug, Clone, Default)]
pub struct Player {
    state: MovementState,
    config: MovementConfig,
    tick: u64,
    events: Vec<PlayerEvent>,
}

impl Player {
    /// Grounded, at rest, with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MovementConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn state(&self) -> &MovementState {
        &self.state
    }

    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Number of ticks integrated so far.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    pub fn is_grounded(&self) -> bool {
        self.state.is_grounded()
    }

    /// Handle a jump key-down. Auto-repeat key-downs are harmless: once the
    /// first one lifts off, the rest find the player airborne.
    pub fn jump(&mut self) -> bool {
        let jumped = self.state.jump(&self.config);
        if jumped {
            tracing::debug!(tick = self.tick, "jump");
            self.events.push(PlayerEvent::Jumped {
                tick: self.tick,
                impulse: self.config.jump_impulse,
            });
        }
        jumped
    }

    /// Integrate one frame of `delta` seconds against `viewpoint`.
    pub fn tick<V: Viewpoint + ?Sized>(
        &mut self,
        intent: InputIntent,
        delta: f32,
        viewpoint: &mut V,
    ) -> movement::StepOutcome {
        self.tick += 1;
        let outcome = movement::integrate(&mut self.state, &self.config, intent, delta, viewpoint);
        if outcome.landed {
            tracing::debug!(tick = self.tick, "landed");
            self.events.push(PlayerEvent::Landed { tick: self.tick });
        }
        outcome
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[PlayerEvent] {
        &self.events
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.events)
    }
}

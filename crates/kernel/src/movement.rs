use glam::Vec3;
use glade_common::InputIntent;
use serde::{Deserialize, Serialize};

use crate::viewpoint::Viewpoint;

/// Tuning constants for the walk integrator.
///
/// The defaults are the tuned values of the demo and are kept literally:
/// damping is a linear approximation of exponential decay, and gravity is
/// ten times real gravity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Horizontal drag coefficient, per second.
    pub damping: f32,
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
    /// Horizontal acceleration while a direction is held.
    pub acceleration: f32,
    /// Upward velocity added by a jump.
    pub jump_impulse: f32,
    /// Lowest height the viewpoint may reach.
    pub ground_height: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            gravity: 9.8 * 10.0,
            acceleration: 400.0,
            jump_impulse: 10.0,
            ground_height: 2.0,
        }
    }
}

/// Whether the walker rests on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Grounding {
    #[default]
    Grounded,
    Airborne,
}

/// Velocity and grounding of the walker. Mutated once per tick by
/// [`integrate`] and at input time by [`MovementState::jump`].
///
/// Velocity is expressed in the controls frame: `x` is right, `z` is
/// backward relative to the current look direction, `y` is world up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MovementState {
    pub velocity: Vec3,
    pub grounding: Grounding,
}

/// What a single tick did besides moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// The tick ended an airborne period.
    pub landed: bool,
}

impl MovementState {
    /// At rest on the ground.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounding == Grounding::Grounded
    }

    /// Apply a jump key-down. Adds the impulse and leaves the ground only
    /// when grounded; returns whether the impulse was applied.
    pub fn jump(&mut self, config: &MovementConfig) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity.y += config.jump_impulse;
        self.grounding = Grounding::Airborne;
        true
    }
}

/// Desired horizontal direction from the held keys, normalized.
///
/// Opposite keys cancel out, and a zero vector stays zero.
pub fn wish_direction(intent: InputIntent) -> Vec3 {
    let axis = |positive: bool, negative: bool| positive as i8 as f32 - negative as i8 as f32;
    Vec3::new(
        axis(intent.right, intent.left),
        0.0,
        axis(intent.forward, intent.backward),
    )
    .normalize_or_zero()
}

/// Advance the walker by `delta` seconds.
///
/// `delta` must be non-negative. A non-finite `delta` is not detected: NaN
/// spreads into velocity and position and stays there.
pub fn integrate<V: Viewpoint + ?Sized>(
    state: &mut MovementState,
    config: &MovementConfig,
    intent: InputIntent,
    delta: f32,
    viewpoint: &mut V,
) -> StepOutcome {
    debug_assert!(!(delta < 0.0), "negative frame delta {delta}");

    let velocity = &mut state.velocity;
    velocity.x -= velocity.x * config.damping * delta;
    velocity.z -= velocity.z * config.damping * delta;
    velocity.y -= config.gravity * delta;

    let direction = wish_direction(intent);
    if intent.forward_axis_held() {
        velocity.z -= direction.z * config.acceleration * delta;
    }
    if intent.strafe_axis_held() {
        velocity.x -= direction.x * config.acceleration * delta;
    }

    viewpoint.move_right(-velocity.x * delta);
    viewpoint.move_forward(-velocity.z * delta);

    let height = viewpoint.height() + velocity.y * delta;
    viewpoint.set_height(height);

    let mut outcome = StepOutcome::default();
    if viewpoint.height() < config.ground_height {
        velocity.y = 0.0;
        viewpoint.set_height(config.ground_height);
        outcome.landed = state.grounding == Grounding::Airborne;
        state.grounding = Grounding::Grounded;
    }

    tracing::trace!(
        delta,
        vx = state.velocity.x,
        vy = state.velocity.y,
        vz = state.velocity.z,
        grounded = state.is_grounded(),
        "movement step"
    );

    outcome
}

//! Walk kernel: per-frame movement integration for a first-person viewpoint.
//!
//! # Invariants
//! - After every tick the viewpoint height is at or above the ground height.
//! - A jump impulse is applied at most once per grounded period.
//! - Integration is a plain function of state, input and delta; scheduling
//!   belongs to the caller.

pub mod clock;
pub mod movement;
pub mod player;
pub mod viewpoint;

pub use clock::FrameClock;
pub use movement::{
    Grounding, MovementConfig, MovementState, StepOutcome, integrate, wish_direction,
};
pub use player::{Player, PlayerEvent};
pub use viewpoint::Viewpoint;

//! Input host: latches physical key transitions into movement intent and
//! tracks pointer lock for mouse-look.
//!
//! # Invariants
//! - Aliased keys share one intent flag.
//! - Jump is an edge event, never a held flag.
//! - Look deltas pass through only while the pointer is locked.

pub mod action;
pub mod key;
pub mod latch;
pub mod pointer;

pub use action::Action;
pub use key::{Key, UnknownKey};
pub use latch::InputLatch;
pub use pointer::PointerLock;

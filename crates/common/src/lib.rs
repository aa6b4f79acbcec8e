//! Shared value types passed between the input, kernel and render crates.

mod types;

pub use types::{Color, InputIntent, ObjectId};

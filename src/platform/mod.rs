//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key bindings to logical actions)
//! - Time (variable frame deltas to fixed simulation ticks)

pub mod input;
pub mod time;

pub use input::{Action, InputState};
pub use time::FrameClock;

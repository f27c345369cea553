//! Collect it! - catch the food before it falls off the conveyor belt
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, difficulty, collisions)
//! - `renderer`: WebGPU rendering pipeline
//! - `platform`: Input bindings and fixed-step frame clock
//! - `tuning`: Data-driven game balance
//! - `hud`: Score text shown over the game

pub mod audio;
pub mod camera;
pub mod error;
pub mod hud;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{Error, Result};
pub use hud::Hud;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Simulation ticks per second
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Half extents shared by every food item and the plate
    pub const HALF_EXTENTS: Vec3 = Vec3::new(0.10, 0.10, 0.01);

    /// Where collected food is parked until the next compaction pass
    pub const SENTINEL_Y: f32 = -10.0;

    /// Conveyor belt quad (half width, half height, depth)
    pub const BELT_HALF_WIDTH: f32 = 0.60;
    pub const BELT_HALF_HEIGHT: f32 = 1.20;
    pub const BELT_DEPTH: f32 = -0.01;
    /// Number of stripes drawn on the belt
    pub const BELT_STRIPES: u32 = 12;
    /// Distance between stripe centres along the belt
    pub const BELT_PERIOD: f32 = 2.0 * BELT_HALF_HEIGHT / BELT_STRIPES as f32;
}

/// Elapsed seconds for a tick count.
///
/// Divides instead of multiplying by `SIM_DT` so whole seconds stay exact.
#[inline]
pub fn ticks_to_seconds(ticks: u64) -> f64 {
    ticks as f64 / consts::TICK_RATE as f64
}

/// Centre of an axis-aligned box lying on the play plane
#[inline]
pub fn on_plane(x: f32, y: f32) -> Vec3 {
    Vec3::new(x, y, 0.0)
}

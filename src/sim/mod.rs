//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision};
pub use difficulty::Difficulty;
pub use spawner::{SpawnRequest, Spawner};
pub use state::{Food, FoodKind, GameEvent, GamePhase, GameState, Plate};
pub use tick::{TickInput, tick, update_foods};

//! Game state and core simulation types
//!
//! Everything a session mutates lives in `GameState`, owned by the frame
//! loop and handed to `tick` by reference.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::Difficulty;
use super::spawner::Spawner;
use crate::consts::*;
use crate::tuning::Tuning;
use crate::{on_plane, ticks_to_seconds};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Food is falling
    Playing,
    /// Game is paused
    Paused,
}

/// Food varieties. Each maps to one entry of the renderer's style table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodKind {
    Apple,
    Burger,
    Cake,
}

impl FoodKind {
    pub const COUNT: usize = 3;
    pub const ALL: [FoodKind; Self::COUNT] = [FoodKind::Apple, FoodKind::Burger, FoodKind::Cake];

    /// Position in `ALL` and in per-kind lookup tables
    pub fn index(self) -> usize {
        match self {
            FoodKind::Apple => 0,
            FoodKind::Burger => 1,
            FoodKind::Cake => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodKind::Apple => "apple",
            FoodKind::Burger => "burger",
            FoodKind::Cake => "cake",
        }
    }
}

/// A falling food item
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: u32,
    pub pos: Vec3,
    pub kind: FoodKind,
}

impl Food {
    pub fn new(id: u32, lane_x: f32, spawn_y: f32, kind: FoodKind) -> Self {
        Self {
            id,
            pos: on_plane(lane_x, spawn_y),
            kind,
        }
    }

    /// Still falling (above the floor)
    #[inline]
    pub fn is_live(&self, floor_y: f32) -> bool {
        self.pos.y > floor_y
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.pos)
    }

    /// Park the food far below the play area
    pub fn mark_collected(&mut self) {
        self.pos.y = SENTINEL_Y;
    }
}

/// The player's plate
#[derive(Debug, Clone, PartialEq)]
pub struct Plate {
    pub pos: Vec3,
}

impl Plate {
    pub fn new(y: f32) -> Self {
        Self { pos: on_plane(0.0, y) }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::around(self.pos)
    }

    /// Move one step per held direction, clamped to `[-bound, bound]`
    pub fn steer(&mut self, left: bool, right: bool, step: f32, bound: f32) {
        if right {
            self.pos.x = (self.pos.x + step).min(bound);
        }
        if left {
            self.pos.x = (self.pos.x - step).max(-bound);
        }
    }
}

/// Something the frame loop should react to (audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32, kind: FoodKind },
    Collected { id: u32, kind: FoodKind },
    Dropped { id: u32, kind: FoodKind },
    LevelUp { level: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawner RNG, seeded from `seed`
    pub rng: Pcg32,
    /// Gameplay numbers for this session
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Player plate
    pub plate: Plate,
    /// Falling food, in spawn order
    pub foods: Vec<Food>,
    pub difficulty: Difficulty,
    pub spawner: Spawner,
    /// Food caught on the plate
    pub collected: u32,
    /// Food that fell past the plate
    pub dropped: u32,
    /// Food spawned this session
    pub spawned: u32,
    /// Conveyor belt scroll offset in [0, 1)
    pub belt_offset: f32,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new game state with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            plate: Plate::new(tuning.plate_y),
            foods: Vec::new(),
            difficulty: Difficulty::new(&tuning),
            spawner: Spawner::new(),
            collected: 0,
            dropped: 0,
            spawned: 0,
            belt_offset: 0.0,
            events: Vec::new(),
            next_id: 1,
            tuning,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Elapsed simulation time in seconds
    pub fn elapsed(&self) -> f64 {
        ticks_to_seconds(self.time_ticks)
    }

    /// Add a food item at the spawn height of `lane_x`
    pub fn spawn_food(&mut self, lane_x: f32, kind: FoodKind) -> u32 {
        let id = self.next_entity_id();
        self.foods
            .push(Food::new(id, lane_x, self.tuning.spawn_y, kind));
        self.spawned += 1;
        self.events.push(GameEvent::Spawned { id, kind });
        id
    }

    /// Food still in play
    pub fn live_foods(&self) -> impl Iterator<Item = &Food> {
        let floor = self.tuning.floor_y;
        self.foods.iter().filter(move |f| f.is_live(floor))
    }

    /// Drop food that left play on an earlier tick
    pub fn compact(&mut self) {
        let floor = self.tuning.floor_y;
        self.foods.retain(|f| f.is_live(floor));
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

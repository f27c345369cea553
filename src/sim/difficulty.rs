//! Time-driven difficulty ramp
//!
//! Every `ramp_interval` seconds the level goes up, food falls a little
//! faster and spawns a little more often. Both increments are divided by
//! the new level, so the ramp flattens out the longer a session runs.

use crate::tuning::Tuning;

/// Level, fall speed and spawn delay
#[derive(Debug, Clone, PartialEq)]
pub struct Difficulty {
    pub level: u32,
    /// Scene units per tick
    pub fall_speed: f32,
    /// Seconds between spawns
    pub spawn_delay: f64,
    /// Elapsed time of the last level-up
    pub last_level_up: f64,
}

impl Difficulty {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            level: 1,
            fall_speed: tuning.fall_speed,
            spawn_delay: tuning.spawn_delay,
            last_level_up: 0.0,
        }
    }

    /// Apply a level-up if a full interval has passed since the last one.
    ///
    /// The speed guard looks at the level before the increment, so the very
    /// first level-up only shortens the spawn delay. Both divisions use the
    /// new level. Returns true when a level-up happened.
    pub fn update(&mut self, now: f64, tuning: &Tuning) -> bool {
        if now < self.last_level_up + tuning.ramp_interval {
            return false;
        }

        let boost_speed = self.level > 1;
        self.level += 1;
        let level = self.level as f32;

        if boost_speed {
            self.fall_speed += tuning.speed_increment / level;
        }

        let next_delay = self.spawn_delay - tuning.delay_decrement / self.level as f64;
        self.spawn_delay = if next_delay < tuning.min_spawn_delay {
            tuning.min_spawn_delay.min(self.spawn_delay)
        } else {
            next_delay
        };

        self.last_level_up = now;
        true
    }
}

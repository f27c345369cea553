//! Data-driven game balance
//!
//! Every gameplay number lives here so a session can be re-tuned from a JSON
//! file without touching the simulation. Missing fields fall back to the
//! defaults below.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Food ===
    /// Starting fall speed (scene units per tick)
    pub fall_speed: f32,
    /// Fall speed gained per level-up, divided by the new level
    pub speed_increment: f32,
    /// Height new food appears at
    pub spawn_y: f32,
    /// Horizontal lanes food can spawn in
    pub lanes: Vec<f32>,
    /// Food at or below this height is out of play
    pub floor_y: f32,

    // === Spawner / difficulty ===
    /// Starting delay between spawns (seconds)
    pub spawn_delay: f64,
    /// Spawn delay removed per level-up, divided by the new level
    pub delay_decrement: f64,
    /// Spawn delay never drops below this
    pub min_spawn_delay: f64,
    /// Seconds between level-ups
    pub ramp_interval: f64,

    // === Plate ===
    /// Plate movement per tick while a direction is held
    pub plate_step: f32,
    /// Plate x is clamped to [-bound, bound]
    pub plate_bound: f32,
    /// Fixed plate height
    pub plate_y: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fall_speed: 0.007,
            speed_increment: 0.004,
            spawn_y: 1.20,
            lanes: vec![-0.5, 0.0, 0.5],
            floor_y: -1.10,

            spawn_delay: 2.0,
            delay_decrement: 0.5,
            min_spawn_delay: 0.25,
            ramp_interval: 5.0,

            plate_step: 0.03,
            plate_bound: 0.45,
            plate_y: -1.10,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::TuningIo {
            path: path.to_string(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path);
        Ok(tuning)
    }

    /// Reject values that would stall or break the simulation
    pub fn validate(&self) -> Result<()> {
        if self.lanes.is_empty() {
            return Err(Error::InvalidTuning("at least one lane is required".into()));
        }
        if self.lanes.iter().any(|x| !x.is_finite()) {
            return Err(Error::InvalidTuning("lanes must be finite".into()));
        }
        if !(self.fall_speed > 0.0) {
            return Err(Error::InvalidTuning("fall_speed must be positive".into()));
        }
        if self.speed_increment < 0.0 {
            return Err(Error::InvalidTuning("speed_increment must not be negative".into()));
        }
        if !(self.min_spawn_delay > 0.0) {
            return Err(Error::InvalidTuning("min_spawn_delay must be positive".into()));
        }
        if self.spawn_delay < self.min_spawn_delay {
            return Err(Error::InvalidTuning(
                "spawn_delay must be at least min_spawn_delay".into(),
            ));
        }
        if self.delay_decrement < 0.0 {
            return Err(Error::InvalidTuning("delay_decrement must not be negative".into()));
        }
        if !(self.ramp_interval > 0.0) {
            return Err(Error::InvalidTuning("ramp_interval must be positive".into()));
        }
        if !(self.plate_step > 0.0) || !(self.plate_bound >= 0.0) {
            return Err(Error::InvalidTuning(
                "plate_step must be positive and plate_bound not negative".into(),
            ));
        }
        if self.spawn_y <= self.floor_y {
            return Err(Error::InvalidTuning("spawn_y must be above floor_y".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "ramp_interval": 6.0 }"#).unwrap();
        assert_eq!(tuning.ramp_interval, 6.0);
        assert_eq!(tuning.lanes, vec![-0.5, 0.0, 0.5]);
        assert_eq!(tuning.plate_step, 0.03);
    }

    #[test]
    fn test_rejects_empty_lanes() {
        let err = Tuning::from_json(r#"{ "lanes": [] }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }

    #[test]
    fn test_rejects_bad_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::TuningParse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_reports_path() {
        let path = std::env::temp_dir().join("collect-it-no-such-tuning.json");
        let path = path.to_string_lossy();
        let err = Tuning::load(&path).unwrap_err();
        match err {
            Error::TuningIo { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_delay_below_floor() {
        let err = Tuning::from_json(r#"{ "spawn_delay": 0.1, "min_spawn_delay": 0.25 }"#)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidTuning(_)));
    }
}

//! Food spawner

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::FoodKind;

/// What the spawner decided to drop this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub lane_x: f32,
    pub kind: FoodKind,
}

/// Fires once every `spawn_delay` seconds of elapsed time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawner {
    /// Elapsed time of the last spawn
    pub last_spawn: f64,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a lane and kind if the spawn timer has elapsed.
    ///
    /// `lanes` must not be empty (guaranteed by `Tuning::validate`).
    pub fn poll(
        &mut self,
        now: f64,
        spawn_delay: f64,
        lanes: &[f32],
        rng: &mut Pcg32,
    ) -> Option<SpawnRequest> {
        if now < self.last_spawn + spawn_delay || lanes.is_empty() {
            return None;
        }
        self.last_spawn = now;

        let lane_x = lanes[rng.random_range(0..lanes.len())];
        let kind = FoodKind::ALL[rng.random_range(0..FoodKind::COUNT)];
        Some(SpawnRequest { lane_x, kind })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_waits_for_delay() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut spawner = Spawner::new();
        let lanes = [-0.5, 0.0, 0.5];

        assert!(spawner.poll(1.99, 2.0, &lanes, &mut rng).is_none());
        assert!(spawner.poll(2.0, 2.0, &lanes, &mut rng).is_some());
        assert_eq!(spawner.last_spawn, 2.0);
        assert!(spawner.poll(3.5, 2.0, &lanes, &mut rng).is_none());
        assert!(spawner.poll(4.0, 2.0, &lanes, &mut rng).is_some());
    }

    #[test]
    fn test_lanes_and_kinds_come_from_sets() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut spawner = Spawner::new();
        let lanes = [-0.5, 0.0, 0.5];
        let mut seen_kinds = [false; FoodKind::COUNT];
        let mut seen_lanes = [false; 3];

        for i in 1..=300 {
            let req = spawner.poll(i as f64, 1.0, &lanes, &mut rng).unwrap();
            let lane = lanes.iter().position(|&x| x == req.lane_x).unwrap();
            seen_lanes[lane] = true;
            seen_kinds[req.kind.index()] = true;
        }

        assert!(seen_lanes.iter().all(|&s| s));
        assert!(seen_kinds.iter().all(|&s| s));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let lanes = [-0.5, 0.0, 0.5];
        let run = |seed| {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut spawner = Spawner::new();
            (1..=20)
                .filter_map(|i| spawner.poll(i as f64, 1.0, &lanes, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(1234), run(1234));
    }
}

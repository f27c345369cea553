//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. One tick is
//! 1/60 s; all per-tick deltas (fall speed, plate step) are in scene units
//! per tick.

use super::collision::check_collision;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::BELT_PERIOD;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Move the plate left (held)
    pub move_left: bool,
    /// Move the plate right (held)
    pub move_right: bool,
    /// Pause toggle
    pub pause: bool,
    /// Demo mode - the plate steers itself
    pub autopilot: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Handle pause toggle
    if input.pause {
        state.phase = match state.phase {
            GamePhase::Playing => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Playing,
        };
        log::info!("Phase: {:?}", state.phase);
    }

    if state.phase == GamePhase::Paused {
        return;
    }

    // Food that left play last tick is gone for good
    state.compact();

    state.time_ticks += 1;
    let now = state.elapsed();

    // Plate input
    let (left, right) = if input.autopilot {
        autopilot(state)
    } else {
        (input.move_left, input.move_right)
    };
    let (step, bound) = (state.tuning.plate_step, state.tuning.plate_bound);
    state.plate.steer(left, right, step, bound);

    // Spawner
    let spawn = state.spawner.poll(
        now,
        state.difficulty.spawn_delay,
        &state.tuning.lanes,
        &mut state.rng,
    );
    if let Some(req) = spawn {
        state.spawn_food(req.lane_x, req.kind);
    }

    // Difficulty ramp
    if state.difficulty.update(now, &state.tuning) {
        let diff = &state.difficulty;
        log::info!(
            "Level {} at {:.1}s: fall speed {:.4}, spawn delay {:.3}s",
            diff.level,
            now,
            diff.fall_speed,
            diff.spawn_delay
        );
        state.events.push(GameEvent::LevelUp { level: diff.level });
    }

    update_foods(state);

    // Stripes travel as far as the food does; offset is in stripe periods
    state.belt_offset = (state.belt_offset + state.difficulty.fall_speed / BELT_PERIOD).fract();
}

/// Drop every live food by the current fall speed and test it against the plate
pub fn update_foods(state: &mut GameState) {
    let floor = state.tuning.floor_y;
    let fall_speed = state.difficulty.fall_speed;
    let plate_box = state.plate.aabb();

    for food in &mut state.foods {
        if !food.is_live(floor) {
            continue;
        }

        food.pos.y -= fall_speed;

        if check_collision(&food.aabb(), &plate_box) {
            food.mark_collected();
            state.collected += 1;
            log::debug!("Collected {} #{} ({} total)", food.kind.as_str(), food.id, state.collected);
            state.events.push(GameEvent::Collected {
                id: food.id,
                kind: food.kind,
            });
        } else if !food.is_live(floor) {
            state.dropped += 1;
            log::debug!("Dropped {} #{} ({} total)", food.kind.as_str(), food.id, state.dropped);
            state.events.push(GameEvent::Dropped {
                id: food.id,
                kind: food.kind,
            });
        }
    }
}

/// Steer toward the lane of the lowest food still above the plate.
///
/// Returns (left, right).
fn autopilot(state: &GameState) -> (bool, bool) {
    let plate = state.plate.pos;
    let target = state
        .live_foods()
        .filter(|f| f.pos.y > plate.y)
        .min_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|f| f.pos.x);

    let Some(target) = target else {
        return (false, false);
    };

    let dead_zone = state.tuning.plate_step * 0.5;
    let dx = target - plate.x;
    (dx < -dead_zone, dx > dead_zone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FoodKind;
    use crate::tuning::Tuning;

    /// Tuning with spawning and level-ups pushed far into the future
    fn quiet_tuning() -> Tuning {
        Tuning {
            spawn_delay: 1.0e9,
            ramp_interval: 1.0e9,
            ..Default::default()
        }
    }

    #[test]
    fn test_food_falls_each_tick() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.spawn_food(0.5, FoodKind::Apple);

        tick(&mut state, &TickInput::default());
        assert!((state.foods[0].pos.y - (1.20 - 0.007)).abs() < 1e-6);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_collision_scenario() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        let id = state.spawn_food(0.0, FoodKind::Cake);
        state.drain_events();

        let mut collected_at = None;
        for i in 0..400 {
            tick(&mut state, &TickInput::default());
            if collected_at.is_none() && state.collected == 1 {
                collected_at = Some(i);
                assert_eq!(state.foods.len(), 1);
                assert_eq!(state.foods[0].pos.y, -10.0);
                let events = state.drain_events();
                assert_eq!(
                    events,
                    vec![GameEvent::Collected {
                        id,
                        kind: FoodKind::Cake
                    }]
                );
            }
        }

        assert!(collected_at.is_some());
        assert_eq!(state.collected, 1);
        assert_eq!(state.dropped, 0);
        // Compacted on the tick after the catch
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_missed_food_is_dropped_once() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.plate.pos.x = 0.45;
        state.spawn_food(-0.5, FoodKind::Burger);

        for _ in 0..400 {
            tick(&mut state, &TickInput::default());
        }

        assert_eq!(state.collected, 0);
        assert_eq!(state.dropped, 1);
        assert!(state.foods.is_empty());
    }

    #[test]
    fn test_dead_food_is_not_updated() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.spawn_food(0.5, FoodKind::Apple);
        state.foods[0].pos.y = -1.10;
        state.plate.pos.x = 0.45;
        state.plate.pos.y = -1.15;

        // Would overlap the plate if it were still processed
        update_foods(&mut state);
        assert_eq!(state.foods[0].pos.y, -1.10);
        assert_eq!(state.collected, 0);
        assert_eq!(state.dropped, 0);
    }

    #[test]
    fn test_pause_freezes_simulation() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.spawn_food(0.0, FoodKind::Apple);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Paused);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.foods[0].pos.y, 1.20);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &pause);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_plate_moves_with_input() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        let right = TickInput {
            move_right: true,
            ..Default::default()
        };
        for _ in 0..100 {
            tick(&mut state, &right);
        }
        assert_eq!(state.plate.pos.x, 0.45);
    }

    #[test]
    fn test_spawns_on_cadence() {
        let tuning = Tuning {
            spawn_delay: 2.0,
            ramp_interval: 1.0e9,
            ..Default::default()
        };
        let mut state = GameState::with_tuning(5, tuning);

        // 20 seconds at 60 ticks per second
        for _ in 0..1200 {
            tick(&mut state, &TickInput::default());
        }
        assert_eq!(state.spawned, 10);
    }

    #[test]
    fn test_level_up_event() {
        let mut state = GameState::new(5);
        let mut levels = Vec::new();
        for _ in 0..(5 * 60) {
            tick(&mut state, &TickInput::default());
            levels.extend(state.drain_events().into_iter().filter_map(|e| match e {
                GameEvent::LevelUp { level } => Some(level),
                _ => None,
            }));
        }
        assert_eq!(levels, vec![2]);
        assert!((state.difficulty.spawn_delay - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_autopilot_catches_food() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.spawn_food(-0.5, FoodKind::Apple);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..400 {
            tick(&mut state, &input);
        }
        assert_eq!(state.collected, 1);
        assert_eq!(state.dropped, 0);
    }

    #[test]
    fn test_belt_offset_wraps() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        for _ in 0..1000 {
            tick(&mut state, &TickInput::default());
            assert!((0.0..1.0).contains(&state.belt_offset));
        }
    }

    #[test]
    fn test_belt_keeps_pace_with_food() {
        let mut state = GameState::with_tuning(1, quiet_tuning());
        state.spawn_food(-0.5, FoodKind::Cake);
        let start_y = state.foods[0].pos.y;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
        }
        let food_travel = start_y - state.foods[0].pos.y;
        let belt_travel = state.belt_offset * BELT_PERIOD;
        assert!((food_travel - belt_travel).abs() < 1e-5);
    }

    #[test]
    fn test_determinism() {
        let run = |seed| {
            let mut state = GameState::new(seed);
            let input = TickInput {
                autopilot: true,
                ..Default::default()
            };
            for _ in 0..3000 {
                tick(&mut state, &input);
            }
            (state.spawned, state.collected, state.dropped, state.plate.pos.x)
        };
        assert_eq!(run(99999), run(99999));
    }
}

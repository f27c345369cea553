//! Score text shown over the game
//!
//! The simulation only counts; this turns the counters into the strings the
//! page (or the log, natively) displays, and remembers which ones changed.

use crate::sim::{GameEvent, GameState};

pub fn dropped_message(count: u32) -> String {
    format!("Object dropped: {}", count)
}

pub fn collected_message(count: u32) -> String {
    format!("Object collected: {}", count)
}

pub fn level_message(level: u32) -> String {
    format!("Level: {}", level)
}

/// HUD lines plus a dirty flag so the DOM is only touched on change
#[derive(Debug, Clone)]
pub struct Hud {
    pub dropped: String,
    pub collected: String,
    pub level: String,
    dirty: bool,
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

impl Hud {
    pub fn new() -> Self {
        Self {
            dropped: dropped_message(0),
            collected: collected_message(0),
            level: level_message(1),
            dirty: true,
        }
    }

    /// Refresh the lines an event affects
    pub fn apply(&mut self, event: &GameEvent, state: &GameState) {
        match event {
            GameEvent::Collected { .. } => {
                self.collected = collected_message(state.collected);
                self.dirty = true;
            }
            GameEvent::Dropped { .. } => {
                self.dropped = dropped_message(state.dropped);
                self.dirty = true;
            }
            GameEvent::LevelUp { level } => {
                self.level = level_message(*level);
                self.dirty = true;
            }
            GameEvent::Spawned { .. } => {}
        }
    }

    /// Force a redraw, e.g. after the HUD was shown again
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True once after any line changed
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn lines(&self) -> [&str; 3] {
        [&self.collected, &self.dropped, &self.level]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FoodKind;

    #[test]
    fn test_messages() {
        assert_eq!(dropped_message(3), "Object dropped: 3");
        assert_eq!(collected_message(0), "Object collected: 0");
    }

    #[test]
    fn test_apply_collected() {
        let mut state = GameState::new(1);
        let mut hud = Hud::new();
        assert!(hud.take_dirty());
        assert!(!hud.take_dirty());

        state.collected = 4;
        hud.apply(
            &GameEvent::Collected {
                id: 1,
                kind: FoodKind::Apple,
            },
            &state,
        );
        assert_eq!(hud.collected, "Object collected: 4");
        assert_eq!(hud.dropped, "Object dropped: 0");
        assert!(hud.take_dirty());
    }

    #[test]
    fn test_mark_dirty_forces_redraw() {
        let mut hud = Hud::new();
        hud.take_dirty();
        hud.mark_dirty();
        assert!(hud.take_dirty());
        assert!(!hud.take_dirty());
    }

    #[test]
    fn test_spawn_does_not_dirty() {
        let state = GameState::new(1);
        let mut hud = Hud::new();
        hud.take_dirty();
        hud.apply(
            &GameEvent::Spawned {
                id: 1,
                kind: FoodKind::Cake,
            },
            &state,
        );
        assert!(!hud.take_dirty());
    }
}

//! Keyboard bindings
//!
//! Keys are identified by their DOM `KeyboardEvent.key` strings. Held
//! actions are polled once per frame; toggles fire once per key press.
//! Preference keys (mute, FPS, HUD, volume) are handled by `Settings::apply`.

use crate::sim::TickInput;

/// Logical actions the game understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Quit,
    Pause,
    Autopilot,
    ToggleMute,
    ToggleFps,
    ToggleHud,
    VolumeUp,
    VolumeDown,
}

impl Action {
    /// Map a key name to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" | "ArrowLeft" => Some(Action::MoveLeft),
            "d" | "D" | "ArrowRight" => Some(Action::MoveRight),
            "Escape" => Some(Action::Quit),
            "p" | "P" => Some(Action::Pause),
            "i" | "I" => Some(Action::Autopilot),
            "m" | "M" => Some(Action::ToggleMute),
            "f" | "F" => Some(Action::ToggleFps),
            "h" | "H" => Some(Action::ToggleHud),
            "=" | "+" => Some(Action::VolumeUp),
            "-" | "_" => Some(Action::VolumeDown),
            _ => None,
        }
    }
}

/// Which actions are held, plus pending one-shot toggles
#[derive(Debug, Clone, Default)]
pub struct InputState {
    left_held: bool,
    right_held: bool,
    quit: bool,
    pause_pressed: bool,
    autopilot: bool,
}

impl InputState {
    pub fn new(autopilot: bool) -> Self {
        Self {
            autopilot,
            ..Default::default()
        }
    }

    /// Returns true if the key is bound (so the caller can swallow the event)
    pub fn key_down(&mut self, key: &str, repeat: bool) -> bool {
        let Some(action) = Action::from_key(key) else {
            return false;
        };
        match action {
            Action::MoveLeft => self.left_held = true,
            Action::MoveRight => self.right_held = true,
            Action::Quit => self.quit = true,
            Action::Pause if !repeat => self.pause_pressed = true,
            Action::Autopilot if !repeat => {
                self.autopilot = !self.autopilot;
                log::info!("Autopilot: {}", self.autopilot);
            }
            _ => {}
        }
        true
    }

    pub fn key_up(&mut self, key: &str) -> bool {
        match Action::from_key(key) {
            Some(Action::MoveLeft) => self.left_held = false,
            Some(Action::MoveRight) => self.right_held = false,
            Some(_) => {}
            None => return false,
        }
        true
    }

    /// Release everything (window lost focus)
    pub fn release_all(&mut self) {
        self.left_held = false;
        self.right_held = false;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn request_pause(&mut self) {
        self.pause_pressed = true;
    }

    /// Input for the next tick. One-shot toggles are consumed.
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            move_left: self.left_held,
            move_right: self.right_held,
            pause: std::mem::take(&mut self.pause_pressed),
            autopilot: self.autopilot,
        }
    }
}

//! Fixed-step frame clock
//!
//! Turns the variable delta between displayed frames into a whole number of
//! simulation ticks, carrying the remainder to the next frame.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Longest frame delta we accept (seconds); longer stalls are clipped
const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FrameClock {
    accumulator: f32,
    last_time: Option<f64>,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            accumulator: 0.0,
            last_time: None,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame at `time_ms` and return how many ticks to run
    pub fn frame(&mut self, time_ms: f64) -> u32 {
        let dt = match self.last_time {
            Some(last) => ((time_ms - last) / 1000.0) as f32,
            None => SIM_DT,
        };
        self.last_time = Some(time_ms);
        self.track_fps(time_ms);
        self.advance(dt)
    }

    /// Add `dt` seconds and return how many ticks are due
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        substeps
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    fn track_fps(&mut self, time_ms: f64) {
        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();

        // Oldest entry is the one we will overwrite next
        let oldest = self.frame_times[self.frame_index];
        if oldest > 0.0 {
            let elapsed = time_ms - oldest;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }
    }
}

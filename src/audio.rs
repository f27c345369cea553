//! Sound cues
//!
//! The simulation fires events; the frame loop turns them into cues and hands
//! them to an `AudioSink`. On the web the cues are procedurally generated
//! with the Web Audio API (no sound files needed). Natively they are logged.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Food landed on the plate
    Collect,
    /// Food fell off the belt
    Drop,
    /// Difficulty went up
    LevelUp,
}

impl AudioCue {
    /// The cue an event should trigger, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Collected { .. } => Some(AudioCue::Collect),
            GameEvent::Dropped { .. } => Some(AudioCue::Drop),
            GameEvent::LevelUp { .. } => Some(AudioCue::LevelUp),
            GameEvent::Spawned { .. } => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::Collect => "collect",
            AudioCue::Drop => "drop",
            AudioCue::LevelUp => "level-up",
        }
    }
}

/// Fire-and-forget cue playback
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Volume state shared by every sink
#[derive(Debug, Clone, Copy)]
pub struct Volume {
    pub master: f32,
    pub sfx: f32,
    pub muted: bool,
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            master: 0.8,
            sfx: 1.0,
            muted: false,
        }
    }
}

impl Volume {
    /// Get effective volume
    pub fn effective(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master * self.sfx).clamp(0.0, 1.0)
        }
    }
}

/// Native sink: writes each cue to the log
#[derive(Debug, Default)]
pub struct LogAudio {
    pub volume: Volume,
    pub played: u32,
}

impl AudioSink for LogAudio {
    fn play(&mut self, cue: AudioCue) {
        if self.volume.effective() <= 0.0 {
            return;
        }
        self.played += 1;
        log::debug!("Cue: {}", cue.name());
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{AudioCue, AudioSink, Volume};

    /// Web Audio sink
    pub struct WebAudio {
        ctx: Option<AudioContext>,
        pub volume: Volume,
    }

    impl Default for WebAudio {
        fn default() -> Self {
            Self::new()
        }
    }

    impl WebAudio {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                volume: Volume::default(),
            }
        }

        /// Resume audio context (required after user gesture)
        pub fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                let _ = ctx.resume();
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short tone sliding from `from` to `to` Hz
        fn sweep(
            ctx: &AudioContext,
            vol: f32,
            osc_type: OscillatorType,
            from: f32,
            to: f32,
            duration: f64,
        ) {
            let Some((osc, gain)) = Self::create_osc(ctx, from, osc_type) else {
                return;
            };
            let t = ctx.current_time();

            gain.gain().set_value_at_time(vol, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + duration)
                .ok();
            osc.frequency().set_value_at_time(from, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(to, t + duration)
                .ok();

            osc.start().ok();
            osc.stop_with_when(t + duration + 0.05).ok();
        }
    }

    impl AudioSink for WebAudio {
        fn play(&mut self, cue: AudioCue) {
            let vol = self.volume.effective();
            if vol <= 0.0 {
                return;
            }

            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            match cue {
                // Bright upward chirp
                AudioCue::Collect => {
                    Self::sweep(ctx, vol * 0.5, OscillatorType::Triangle, 520.0, 1040.0, 0.12)
                }
                // Dull thud
                AudioCue::Drop => {
                    Self::sweep(ctx, vol * 0.4, OscillatorType::Sine, 180.0, 60.0, 0.2)
                }
                AudioCue::LevelUp => {
                    Self::sweep(ctx, vol * 0.4, OscillatorType::Square, 330.0, 880.0, 0.35)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::FoodKind;

    #[test]
    fn test_cue_for_event() {
        let collected = GameEvent::Collected {
            id: 1,
            kind: FoodKind::Apple,
        };
        assert_eq!(AudioCue::for_event(&collected), Some(AudioCue::Collect));

        let spawned = GameEvent::Spawned {
            id: 2,
            kind: FoodKind::Cake,
        };
        assert_eq!(AudioCue::for_event(&spawned), None);
    }

    #[test]
    fn test_muted_sink_plays_nothing() {
        let mut sink = LogAudio::default();
        sink.play(AudioCue::Collect);
        assert_eq!(sink.played, 1);

        sink.volume.muted = true;
        sink.play(AudioCue::Collect);
        assert_eq!(sink.played, 1);
    }
}

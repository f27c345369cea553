//! Collect it! entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, WheelEvent};

    use collect_it::audio::{AudioCue, AudioSink, WebAudio};
    use collect_it::camera::Camera;
    use collect_it::platform::{Action, FrameClock, InputState};
    use collect_it::renderer::{RenderState, build_scene};
    use collect_it::sim::{GameState, tick};
    use collect_it::{Hud, Settings, Tuning};

    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        clock: FrameClock,
        input: InputState,
        camera: Camera,
        audio: WebAudio,
        hud: Hud,
        settings: Settings,
        stopped: bool,
    }

    impl Game {
        fn new(seed: u64, settings: Settings) -> Self {
            let state = GameState::with_tuning(seed, Tuning::default());
            let mut audio = WebAudio::new();
            audio.volume = settings.volume();
            let mut camera = Camera::default();
            camera.zoom = settings.zoom.clamp(collect_it::camera::MIN_ZOOM, collect_it::camera::MAX_ZOOM);
            Self {
                state,
                render_state: None,
                clock: FrameClock::new(),
                input: InputState::new(settings.autopilot),
                camera,
                audio,
                hud: Hud::new(),
                settings,
                stopped: false,
            }
        }

        /// Run simulation ticks and react to what happened
        fn update(&mut self, time: f64) {
            let ticks = self.clock.frame(time);
            for _ in 0..ticks {
                let input = self.input.take_tick_input();
                tick(&mut self.state, &input);

                for event in self.state.drain_events() {
                    if let Some(cue) = AudioCue::for_event(&event) {
                        self.audio.play(cue);
                    }
                    self.hud.apply(&event, &self.state);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = build_scene(&self.state);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices, &self.camera) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if let Some(el) = document.get_element_by_id("hud-fps") {
                let text = if self.settings.show_fps {
                    format!("{} fps", self.clock.fps())
                } else {
                    String::new()
                };
                el.set_text_content(Some(&text));
            }

            if !self.hud.take_dirty() {
                return;
            }

            if let Some(el) = document.get_element_by_id("hud") {
                let class = if self.settings.show_hud { "" } else { "hidden" };
                let _ = el.set_attribute("class", class);
            }
            for (id, text) in [
                ("hud-collected", &self.hud.collected),
                ("hud-dropped", &self.hud.dropped),
                ("hud-level", &self.hud.level),
            ] {
                if let Some(el) = document.get_element_by_id(id) {
                    el.set_text_content(Some(text.as_str()));
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
        }

        log::info!("Collect it! starting...");

        if let Err(e) = start().await {
            log::error!("Startup failed: {}", e);
            if let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("loading"))
            {
                el.set_text_content(Some(&format!("Failed to start: {}", e)));
            }
        }
    }

    async fn start() -> Result<(), String> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("no canvas")?
            .dyn_into()
            .map_err(|_| "not a canvas")?;

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        let game = Rc::new(RefCell::new(Game::new(seed, settings)));
        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .map_err(|e| collect_it::Error::from(e).to_string())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| collect_it::Error::from(e).to_string())?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .map_err(|e| e.to_string())?;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(&canvas, game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Collect it! running!");
        Ok(())
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                g.audio.resume();
                let key = event.key();
                if g.input.key_down(&key, event.repeat()) {
                    event.prevent_default();
                }
                if event.repeat() {
                    return;
                }
                if let Some(action) = Action::from_key(&key) {
                    if g.settings.apply(action) {
                        let volume = g.settings.volume();
                        g.audio.volume = volume;
                        g.hud.mark_dirty();
                        g.settings.save();
                    }
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if game.borrow_mut().input.key_up(&event.key()) {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse wheel zoom
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: WheelEvent| {
                event.prevent_default();
                let mut g = game.borrow_mut();
                // One notch is ~100 px in most browsers
                let notches = -(event.delta_y() / 100.0) as f32;
                g.camera.scroll(notches);
                g.settings.zoom = g.camera.zoom;
                g.settings.save();
            });
            let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        use collect_it::sim::GamePhase;

        let Some(window) = web_sys::window() else {
            return;
        };

        // Window blur (click outside)
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
            let mut g = game.borrow_mut();
            g.input.release_all();
            if g.settings.pause_on_blur && g.state.phase == GamePhase::Playing {
                g.input.request_pause();
                log::info!("Auto-paused (window blur)");
            }
        });
        let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            if g.stopped {
                return;
            }
            if g.input.quit_requested() {
                g.stopped = true;
                log::info!(
                    "Quit: collected {}, dropped {}",
                    g.state.collected,
                    g.state.dropped
                );
                return;
            }

            g.update(time);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Collect it! (native) starting...");
    log::info!("Native mode runs a headless autopilot session - run with `trunk serve` to play");

    if let Err(e) = headless::run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use collect_it::audio::{AudioCue, AudioSink, LogAudio};
    use collect_it::consts::TICK_RATE;
    use collect_it::hud::Hud;
    use collect_it::sim::{GameState, TickInput, tick};
    use collect_it::{Settings, Tuning};

    /// Length of the demo session in seconds
    const SESSION_SECONDS: u64 = 60;

    pub fn run() -> collect_it::Result<()> {
        // Tuning path: COLLECT_IT_TUNING, else first argument
        let path = std::env::var("COLLECT_IT_TUNING")
            .ok()
            .or_else(|| std::env::args().nth(1));
        let tuning = match path {
            Some(path) => Tuning::load(&path)?,
            None => Tuning::default(),
        };

        let settings = Settings::load();
        let mut audio = LogAudio {
            volume: settings.volume(),
            ..Default::default()
        };
        let mut hud = Hud::new();

        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let mut state = GameState::with_tuning(seed, tuning);
        log::info!("Game initialized with seed: {}", seed);

        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..SESSION_SECONDS * TICK_RATE as u64 {
            tick(&mut state, &input);
            for event in state.drain_events() {
                if let Some(cue) = AudioCue::for_event(&event) {
                    audio.play(cue);
                }
                hud.apply(&event, &state);
            }
            if hud.take_dirty() {
                log::debug!("{}", hud.lines().join(" | "));
            }
        }

        log::info!(
            "Session over after {:.0}s: {} | {} | {} ({} spawned, {} cues)",
            state.elapsed(),
            hud.collected,
            hud.dropped,
            hud.level,
            state.spawned,
            audio.played
        );
        Ok(())
    }
}

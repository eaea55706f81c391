//! Quad Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use anyhow::{Context, anyhow};
    use wasm_bindgen::prelude::*;
    use web_sys::{FocusEvent, HtmlCanvasElement, KeyboardEvent};

    use quad_pong::Settings;
    use quad_pong::consts::*;
    use quad_pong::platform::overlay::CanvasText;
    use quad_pong::platform::{FpsCounter, FrameClock, KeyState};
    use quad_pong::renderer::{FrameInfo, RenderState, draw_frame};
    use quad_pong::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: RenderState,
        text: CanvasText,
        keys: KeyState,
        clock: FrameClock,
        fps: FpsCounter,
        settings: Settings,
    }

    impl Game {
        /// One display refresh: snapshot input, tick, draw
        fn frame(&mut self, time: f64) {
            let input = self.keys.snapshot();
            let dt = self.clock.advance(time);
            tick(&mut self.state, &input, dt);
            self.fps.record(time);
            self.render(time, dt);
        }

        fn render(&mut self, time: f64, dt: f32) {
            let info = FrameInfo {
                timestamp_ms: time,
                dt,
                fps: self.settings.show_fps.then(|| self.fps.fps()),
                blink_prompt: self.settings.blink_prompt,
            };

            self.text.clear();
            self.render_state.begin_frame();
            draw_frame(&self.state, &info, &mut self.render_state, &mut self.text);

            match self.render_state.present() {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let (w, h) = self.render_state.size;
                    self.render_state.resize(w, h);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of memory!");
                }
                Err(e) => log::warn!("Render error: {:?}", e),
            }
        }
    }

    fn canvas_by_id(document: &web_sys::Document, id: &str) -> anyhow::Result<HtmlCanvasElement> {
        document
            .get_element_by_id(id)
            .with_context(|| format!("no #{id} element"))?
            .dyn_into()
            .map_err(|_| anyhow!("#{id} is not a canvas"))
    }

    async fn start() -> anyhow::Result<()> {
        let settings = Settings::load();

        let window = web_sys::window().context("no window")?;
        let document = window.document().context("no document")?;

        // Both canvases render at field resolution; CSS scales them up
        let width = FIELD_WIDTH as u32;
        let height = FIELD_HEIGHT as u32;

        let canvas = canvas_by_id(&document, "canvas")?;
        canvas.set_width(width);
        canvas.set_height(height);

        let text = CanvasText::new(&canvas_by_id(&document, "text")?, width, height)?;

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas))
            .map_err(|e| anyhow!("failed to create surface: {e}"))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| anyhow!("no suitable GPU adapter: {e}"))?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height)
            .await
            .context("renderer setup failed")?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed);
        state.debug = settings.debug_overlay;
        log::info!("Game initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            render_state,
            text,
            keys: KeyState::new(),
            clock: FrameClock::new(),
            fps: FpsCounter::new(),
            settings,
        }));

        setup_input_handlers(&window, game.clone());
        request_animation_frame(game);

        log::info!("Quad Pong running!");
        Ok(())
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("logger init failed: {e}").into());
        }

        log::info!("Quad Pong starting...");

        if let Err(e) = start().await {
            log::error!("Quad Pong failed to start: {:#}", e);
        }
    }

    fn setup_input_handlers(window: &web_sys::Window, game: Rc<RefCell<Game>>) {
        // Key down - latch bound keys, keep the page from scrolling
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(key) = g.settings.bindings.lookup(&event.code()) {
                    event.prevent_default();
                    g.keys.key_down(key);
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
                let mut g = game.borrow_mut();
                if let Some(key) = g.settings.bindings.lookup(&event.code()) {
                    g.keys.key_up(key);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur - key-up events won't reach us, so drop held keys
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: FocusEvent| {
                game.borrow_mut().keys.release_all();
                log::debug!("Window blur, released held keys");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("Window went away, stopping game loop");
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
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
    log::info!("Quad Pong (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    println!("\nPlaying a headless match...");
    headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Both paddles sweep on a fixed rhythm until someone wins
#[cfg(not(target_arch = "wasm32"))]
fn headless_match() {
    use quad_pong::consts::WIN_SCORE;
    use quad_pong::sim::{Direction, GameEvent, GamePhase, GameState, Side, TickInput, tick};
    use std::time::{SystemTime, UNIX_EPOCH};

    const DT: f32 = 1.0 / 60.0;
    // Ten minutes of play
    const MAX_TICKS: u32 = 60 * 60 * 10;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();
    let mut state = GameState::new(seed);
    let mut hits = 0;

    for n in 0..MAX_TICKS {
        let sweep = if (n / 45) % 2 == 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        let input = TickInput {
            left: sweep,
            right: if (n / 70) % 2 == 0 {
                Direction::Down
            } else {
                Direction::Up
            },
            serve: matches!(state.phase, GamePhase::MainMenu | GamePhase::Serving),
            ..Default::default()
        };

        for event in tick(&mut state, &input, DT) {
            if let GameEvent::PaddleHit(_) = event {
                hits += 1;
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    println!(
        "Seed {}: {} - {} after {} ticks ({} paddle hits)",
        seed, state.score.left, state.score.right, state.time_ticks, hits
    );
    match state.score.winner(WIN_SCORE) {
        Some(Side::Left) => println!("✓ Player 1 wins"),
        Some(Side::Right) => println!("✓ Player 2 wins"),
        None => println!("No winner within the time limit"),
    }
}

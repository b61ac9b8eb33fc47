//! Canvas Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

    use canvas_pong::input::{pointer_to_target_y, surface_scale};
    use canvas_pong::{FrameDriver, GameConfig, Simulation};

    /// Game instance holding all state
    struct Game {
        driver: FrameDriver,
        ctx: CanvasRenderingContext2d,
        canvas: HtmlCanvasElement,
    }

    impl Game {
        /// Feed a pointer's client y to the player paddle
        fn pointer_moved(&mut self, client_y: f32) {
            let config = self.driver.simulation().config();
            let rect = self.canvas.get_bounding_client_rect();
            let scale = surface_scale(config.height, rect.height() as f32);
            let y = pointer_to_target_y(client_y, rect.top() as f32, scale, config.paddle_height);
            self.driver.set_player_target_y(y);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Canvas Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("getContext failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        // Playfield size is whatever the page gave the canvas
        let config = GameConfig {
            width: canvas.width() as f32,
            height: canvas.height() as f32,
            ..GameConfig::default()
        };

        let seed = js_sys::Date::now() as u64;
        let sim = Simulation::from_seed(config, seed).expect("invalid game configuration");
        log::info!(
            "Game initialized with seed: {} ({}x{})",
            seed,
            canvas.width(),
            canvas.height()
        );

        let game = Rc::new(RefCell::new(Game {
            driver: FrameDriver::new(sim),
            ctx,
            canvas: canvas.clone(),
        }));

        setup_input_handlers(&canvas, game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Canvas Pong running!");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse move
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                game.borrow_mut().pointer_moved(event.client_y() as f32);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    game.borrow_mut().pointer_moved(touch.client_y() as f32);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            log::error!("no window, game loop stopped");
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            let Game { driver, ctx, .. } = &mut *g;
            driver.frame(ctx);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Frames simulated by the native headless run (ten seconds at 60 Hz)
#[cfg(not(target_arch = "wasm32"))]
const HEADLESS_FRAMES: u64 = 600;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use canvas_pong::render::RecordingCanvas;
    use canvas_pong::{FrameDriver, GameConfig, Simulation};

    env_logger::init();
    log::info!("Canvas Pong (native) starting...");
    log::info!("Native mode runs headless - build for wasm32 to play in a browser");

    let seed: u64 = rand::random();
    let sim = Simulation::from_seed(GameConfig::default(), seed).expect("invalid game configuration");
    log::info!("Game initialized with seed: {}", seed);

    let mut driver = FrameDriver::new(sim);
    let mut canvas = RecordingCanvas::new();
    driver.run_headless(HEADLESS_FRAMES, &mut canvas);

    match serde_json::to_string_pretty(&driver.simulation().snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

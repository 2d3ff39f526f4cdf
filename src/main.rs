//! Bounce Ball entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, Window};

    use bounce_ball::renderer::CanvasRenderer;
    use bounce_ball::{Action, Game, Settings};

    /// Id of the canvas element the game draws into
    const CANVAS_ID: &str = "canvas";

    /// Game instance holding all state
    struct App {
        game: Game,
        renderer: CanvasRenderer,
    }

    impl App {
        /// One clock tick: simulate, then paint
        fn frame(&mut self) {
            self.game.update();
            self.game.draw(&mut self.renderer);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Failed to init logger: {e}").into());
        }

        log::info!("Bounce Ball starting...");

        let Some(window) = web_sys::window() else {
            log::error!("No window");
            return;
        };
        let Some(document) = window.document() else {
            log::error!("No document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id(CANVAS_ID)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::error!("No <canvas id=\"{CANVAS_ID}\"> found");
            return;
        };

        // Optional tuning blob, e.g. <canvas data-settings='{"court_width": 640}'>
        let settings = canvas
            .get_attribute("data-settings")
            .map(|json| Settings::from_json_or_default(&json))
            .unwrap_or_default();

        canvas.set_width(settings.court_width as u32);
        canvas.set_height(settings.court_height as u32);

        let Some(renderer) = CanvasRenderer::new(&canvas) else {
            log::error!("Canvas 2D context unavailable");
            return;
        };

        let app = Rc::new(RefCell::new(App {
            game: Game::new(&settings),
            renderer,
        }));

        setup_input_handlers(&window, app.clone());
        start_clock(&window, app, settings.clock_interval_ms());

        log::info!("Bounce Ball running!");
    }

    /// Map a key event, falling back to `keyCode` when `code` is empty
    #[allow(deprecated)]
    fn action_for(event: &KeyboardEvent) -> Option<Action> {
        Action::from_event(&event.code(), event.key_code())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) {
        // Key down
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for(&event) {
                    event.prevent_default();
                    app.borrow_mut().game.handle_key_down(action);
                }
            });
            let _ = window.add_event_listener_with_callback_and_bool(
                "keydown",
                closure.as_ref().unchecked_ref(),
                true,
            );
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(action) = action_for(&event) {
                    event.prevent_default();
                    app.borrow_mut().game.handle_key_up(action);
                }
            });
            let _ = window.add_event_listener_with_callback_and_bool(
                "keyup",
                closure.as_ref().unchecked_ref(),
                true,
            );
            closure.forget();
        }
    }

    /// Drive the game at a fixed interval. The core never schedules itself.
    fn start_clock(window: &Window, app: Rc<RefCell<App>>, interval_ms: i32) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().frame();
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        ) {
            Ok(_) => log::info!("Clock started ({interval_ms} ms/tick)"),
            Err(e) => log::error!("setInterval failed: {:?}", e),
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use bounce_ball::Settings;

    env_logger::init();
    log::info!("Bounce Ball (native) starting...");
    log::info!("Native mode is a headless demo - run with `trunk serve` for the web version");

    let settings = match std::env::var("BOUNCE_BALL_SETTINGS") {
        Ok(json) => Settings::from_json_or_default(&json),
        Err(_) => Settings::default(),
    };

    run_demo(&settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Length of the headless demo (30 seconds of play)
#[cfg(not(target_arch = "wasm32"))]
const DEMO_TICKS: u64 = 60 * 30;

/// Ticks between changes in the scripted key presses
#[cfg(not(target_arch = "wasm32"))]
const DEMO_PHASE_TICKS: u64 = 45;

/// Play a scripted match and print the final frame
#[cfg(not(target_arch = "wasm32"))]
fn run_demo(settings: &bounce_ball::Settings) {
    use bounce_ball::renderer::TextRenderer;
    use bounce_ball::sim::GameEvent;
    use bounce_ball::{Action, Game};

    let mut game = Game::new(settings);
    let mut goals = 0;

    for tick in 0..DEMO_TICKS {
        if tick % DEMO_PHASE_TICKS == 0 {
            // Both players sweep their paddles in opposite directions, pausing between sweeps
            match (tick / DEMO_PHASE_TICKS) % 4 {
                0 => {
                    game.handle_key_down(Action::Player1Down);
                    game.handle_key_down(Action::Player2Up);
                }
                2 => {
                    game.handle_key_down(Action::Player1Up);
                    game.handle_key_down(Action::Player2Down);
                }
                _ => {
                    game.handle_key_up(Action::Player1Up);
                    game.handle_key_up(Action::Player2Up);
                }
            }
        }

        game.update();
        goals += game
            .events()
            .iter()
            .filter(|e| matches!(e, GameEvent::Goal { .. }))
            .count();
    }

    let (left, right) = game.score();
    log::info!("Demo finished after {DEMO_TICKS} ticks: {goals} goals, {left} - {right}");

    let mut frame = TextRenderer::new(&game.court, 50, 25);
    game.draw(&mut frame);
    println!("{frame}");
}

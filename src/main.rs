//! Gate Flap entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent};

    use gate_flap::sim::{FrameView, GameEvent};
    use gate_flap::{Session, SessionPhase, Settings};

    const BIRD_COLOR: &str = "#FF0000";
    const GATE_COLOR: &str = "#228B22";
    const TEXT_COLOR: &str = "#000";

    /// Game instance holding the session and the drawing surface
    struct Game {
        session: Session,
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        /// An animation frame is already scheduled
        looping: bool,
    }

    impl Game {
        /// Match the canvas backing store to the session's viewport
        fn sync_canvas_size(&self) {
            let view = self.session.view();
            self.canvas.set_width(view.width);
            self.canvas.set_height(view.height);
        }

        /// Draw the current frame
        fn render(&self) {
            draw_frame(&self.ctx, &self.session.view());
        }

        /// Show the game-over screen once the run ends
        fn update_screens(&self) {
            if self.session.phase() != SessionPhase::GameOver {
                return;
            }
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("finalScore") {
                let score = self.session.final_score().unwrap_or(0);
                el.set_text_content(Some(&score.to_string()));
            }
            set_display("gameOverScreen", "flex");
        }
    }

    fn draw_frame(ctx: &CanvasRenderingContext2d, view: &FrameView) {
        let w = view.width as f64;
        let h = view.height as f64;
        ctx.clear_rect(0.0, 0.0, w, h);

        // Bird
        ctx.set_fill_style_str(BIRD_COLOR);
        ctx.begin_path();
        let _ = ctx.arc(
            view.bird.x as f64,
            view.bird.y as f64,
            view.bird.radius as f64,
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();

        // Gates
        ctx.set_fill_style_str(GATE_COLOR);
        for gate in &view.gates {
            let x = gate.x as f64;
            let width = gate.width as f64;
            ctx.fill_rect(x, 0.0, width, gate.top as f64);
            ctx.fill_rect(x, h - gate.bottom as f64, width, gate.bottom as f64);
        }

        // Score
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_font(&format!("{}px Arial", w * 0.05));
        let _ = ctx.fill_text(&format!("Score: {}", view.score), w * 0.05, h * 0.1);
    }

    fn set_display(id: &str, display: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let _ = el.style().set_property("display", display);
        }
    }

    fn window_size() -> (i32, i32) {
        let window = web_sys::window().unwrap();
        let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32;
        (dim(window.inner_width()), dim(window.inner_height()))
    }

    pub fn run() {
        let settings = Settings::load();
        gate_flap::platform::init_logging(settings.verbose_log);

        log::info!("Gate Flap starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("context lookup failed")
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let (width, height) = window_size();
        let seed = js_sys::Date::now() as u64;
        let session = Session::new(settings, width, height, seed);

        let game = Rc::new(RefCell::new(Game {
            session,
            canvas: canvas.clone(),
            ctx,
            looping: false,
        }));
        game.borrow().sync_canvas_size();

        setup_input_handlers(&canvas, game.clone());
        setup_buttons(game.clone());
        setup_resize(game);

        log::info!("Gate Flap ready");
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().session.jump();
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch (non-passive so the page does not scroll)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().session.jump();
            });
            let options = web_sys::AddEventListenerOptions::new();
            options.set_passive(false);
            let _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
                "touchstart",
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    " " | "ArrowUp" => g.session.jump(),
                    "i" | "I" => {
                        g.session.toggle_idle_mode();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        if let Some(btn) = document.get_element_by_id("startButton") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_display("startScreen", "none");
                {
                    let mut g = game.borrow_mut();
                    let _ = g.canvas.focus();
                    g.session.start();
                }
                start_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("restartButton") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                set_display("gameOverScreen", "none");
                {
                    let mut g = game.borrow_mut();
                    g.session.restart();
                    g.sync_canvas_size();
                }
                start_loop(game.clone());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let (width, height) = window_size();
            let mut g = game.borrow_mut();
            let viewport = g.session.resize(width, height);
            if g.session.phase() != SessionPhase::Playing {
                g.sync_canvas_size();
            }
            log::debug!("Resize: viewport {}x{}", viewport.width(), viewport.height());
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Kick off the frame loop unless one is already scheduled
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.looping {
                return;
            }
            g.looping = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let more = {
            let mut g = game.borrow_mut();
            let (events, more) = g.session.advance();
            g.render();
            if events.iter().any(|e| matches!(e, GameEvent::GameOver { .. })) {
                g.update_screens();
            }
            g.looping = more;
            more
        };

        if more {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Longest headless run before giving up
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u32 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use gate_flap::settings::DeviceClass;
    use gate_flap::sim::GameEvent;
    use gate_flap::{Session, Settings};

    // Optional settings file as the first argument
    let mut settings = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path).map(|json| Settings::from_json(&json)) {
            Ok(Ok(settings)) => settings,
            Ok(Err(e)) => {
                eprintln!("Invalid settings in {}: {}", path, e);
                Settings::default()
            }
            Err(e) => {
                eprintln!("Cannot read {}: {}", path, e);
                Settings::default()
            }
        },
        None => Settings::load(),
    };
    if let Some(device) = std::env::var("GATE_FLAP_DEVICE")
        .ok()
        .and_then(|s| DeviceClass::from_str(&s))
    {
        settings.device_override = Some(device);
    }

    gate_flap::platform::init_logging(settings.verbose_log);
    log::info!("Gate Flap (native) starting...");
    log::info!("Native mode runs headless with the autopilot - use `trunk serve` to play");

    let device = settings.device_class(1024);
    let mut session = Session::new(settings, 1024, 768, rand::random());
    log::info!("Device class: {}", device.as_str());

    session.toggle_idle_mode();
    session.start();

    let mut frames = 0;
    while frames < MAX_HEADLESS_FRAMES {
        let (events, more) = session.advance();
        frames += 1;
        for event in events {
            if let GameEvent::GatePassed { score } = event {
                log::info!("Frame {}: score {}", frames, score);
            }
        }
        if !more {
            break;
        }
    }

    match serde_json::to_string(&session.view()) {
        Ok(json) => log::info!("Last frame: {}", json),
        Err(e) => log::warn!("Could not serialize last frame: {}", e),
    }
    println!(
        "Autopilot flew {} frames and scored {}",
        frames,
        session.state().score()
    );
}

//! Browser frame loop: keyboard in, canvas and scoreboard out

use game_core::{step, Config, GameState, InputState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, Performance, Window};

use crate::hud::{find_element, Scoreboard};
use crate::input::{get_key_from_event, handle_key_down, handle_key_up};
use crate::logging::parse_log_level;
use crate::renderer::Renderer;

type FrameCallback = Closure<dyn FnMut()>;

/// Main client state
pub struct App {
    state: GameState,
    input: Rc<RefCell<InputState>>,
    renderer: Renderer,
    scoreboard: Scoreboard,
    performance: Performance,
}

impl App {
    pub fn new(
        config: Config,
        renderer: Renderer,
        scoreboard: Scoreboard,
        performance: Performance,
    ) -> Result<Self, JsValue> {
        let state = GameState::new(config, seconds(&performance))
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?;

        let (width, height) = renderer.size();
        if width as f32 != state.map.width || height as f32 != state.map.height {
            log::warn!(
                "canvas is {}x{} but the court is {}x{}",
                width,
                height,
                state.map.width,
                state.map.height
            );
        }

        Ok(Self {
            state,
            input: Rc::new(RefCell::new(InputState::new())),
            renderer,
            scoreboard,
            performance,
        })
    }

    /// Shared handle that key listeners write into
    pub fn input(&self) -> Rc<RefCell<InputState>> {
        self.input.clone()
    }

    /// Advance and draw one frame
    pub fn frame(&mut self) -> Result<(), JsValue> {
        let now = seconds(&self.performance);
        let snapshot = *self.input.borrow();

        let frame = step(&mut self.state, &snapshot, now);

        self.renderer.draw(&frame.commands)?;
        self.scoreboard.update(&frame.score_text());
        Ok(())
    }
}

/// Start the game on an existing page
///
/// `config_json` may override any subset of the tuning values and
/// `log_level` (e.g. "debug") defaults to info.
#[wasm_bindgen]
pub fn start(
    canvas_id: &str,
    player1_id: &str,
    player2_id: &str,
    config_json: Option<String>,
    log_level: Option<String>,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let level = parse_log_level(log_level.as_deref())
        .map_err(|e| JsValue::from_str(&format!("Invalid log level: {e}")))?;
    let _ = console_log::init_with_level(level);

    let config = match config_json {
        Some(json) => Config::from_json(&json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {e}")))?,
        None => Config::default(),
    };

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let performance = window
        .performance()
        .ok_or_else(|| JsValue::from_str("No performance timer"))?;

    let canvas = find_element(&document, canvas_id)?.dyn_into::<HtmlCanvasElement>()?;
    let renderer = Renderer::new(&canvas)?;
    let scoreboard = Scoreboard::new(&document, player1_id, player2_id)?;

    let app = App::new(config, renderer, scoreboard, performance)?;
    listen_for_keys(&window, &document, app.input())?;
    run_loop(window, Rc::new(RefCell::new(app)))?;

    log::info!("pong: started");
    Ok(())
}

fn listen_for_keys(
    window: &Window,
    document: &Document,
    input: Rc<RefCell<InputState>>,
) -> Result<(), JsValue> {
    let down_input = input.clone();
    let on_key_down = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        if handle_key_down(&key, &mut down_input.borrow_mut()) {
            // Arrow keys would otherwise scroll the page
            event.prevent_default();
        }
    });

    let up_input = input.clone();
    let on_key_up = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let key = get_key_from_event(&event);
        if handle_key_up(&key, &mut up_input.borrow_mut()) {
            event.prevent_default();
        }
    });

    // Key releases are never delivered once the page loses focus
    let on_blur = Closure::<dyn FnMut()>::new(move || {
        input.borrow_mut().release_all();
    });

    document.add_event_listener_with_callback("keydown", on_key_down.as_ref().unchecked_ref())?;
    document.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    window.add_event_listener_with_callback("blur", on_blur.as_ref().unchecked_ref())?;

    // Listeners live for the lifetime of the page
    on_key_down.forget();
    on_key_up.forget();
    on_blur.forget();
    Ok(())
}

fn run_loop(window: Window, app: Rc<RefCell<App>>) -> Result<(), JsValue> {
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let loop_window = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        if let Err(err) = app.borrow_mut().frame() {
            log::error!("frame failed: {:?}", err);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_animation_frame(&loop_window, callback) {
                log::error!("could not schedule next frame: {:?}", err);
            }
        }
    }));

    let scheduled = slot
        .borrow()
        .as_ref()
        .map(|callback| request_animation_frame(&window, callback));
    scheduled.unwrap_or_else(|| Err(JsValue::from_str("Frame callback missing")))?;
    Ok(())
}

fn request_animation_frame(window: &Window, callback: &FrameCallback) -> Result<i32, JsValue> {
    let function: &js_sys::Function = callback.as_ref().unchecked_ref();
    window.request_animation_frame(function)
}

fn seconds(performance: &Performance) -> f64 {
    performance.now() / 1000.0
}

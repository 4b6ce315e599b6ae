//! Browser host
//!
//! Everything shared between callbacks sits in one `Rc<RefCell<WebGame>>`.
//! Callbacks never overlap on the browser's single thread, so each one simply
//! borrows for its own duration.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};

use super::CANVAS_ID;
use crate::driver::Game;
use crate::error::{Error, Result};
use crate::renderer::CanvasSurface;
use crate::settings::Settings;
use crate::sim::Field;

struct WebGame {
    game: Game,
    surface: CanvasSurface,
}

/// Acquire the canvas, wire input and start the frame loop
pub fn run() -> Result<()> {
    console_error_panic_hook::set_once();

    let settings = Settings::load();
    if console_log::init_with_level(settings.log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }

    log::info!("Canvas Pong starting...");
    // Write back what was actually applied, so rejected values do not linger
    settings.save();

    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    let canvas: HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| Error::CanvasNotFound(CANVAS_ID.to_string()))?
        .dyn_into()
        .map_err(|_| Error::NotACanvas(CANVAS_ID.to_string()))?;

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")?
        .ok_or(Error::NoContext2d)?
        .dyn_into()
        .map_err(|_| Error::NoContext2d)?;

    let field = Field::new(canvas.width() as f32, canvas.height() as f32)?;
    let seed = js_sys::Date::now() as u64;

    let web_game = Rc::new(RefCell::new(WebGame {
        game: Game::new(field, seed, settings),
        surface: CanvasSurface::new(ctx),
    }));
    log::info!("Seed: {}", seed);

    setup_input_handlers(&canvas, web_game.clone())?;
    request_animation_frame(web_game)?;

    log::info!("Canvas Pong running!");
    Ok(())
}

/// Pointer position relative to the canvas top edge
fn canvas_relative_y(canvas: &HtmlCanvasElement, client_y: i32) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (client_y as f64 - rect.top()) as f32
}

fn setup_input_handlers(canvas: &HtmlCanvasElement, web_game: Rc<RefCell<WebGame>>) -> Result<()> {
    // Mouse move
    {
        let web_game = web_game.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let y = canvas_relative_y(&canvas_clone, event.client_y());
            web_game.borrow_mut().game.on_pointer(y);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch move
    {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            event.prevent_default();
            if let Some(touch) = event.touches().get(0) {
                let y = canvas_relative_y(&canvas_clone, touch.client_y());
                web_game.borrow_mut().game.on_pointer(y);
            }
        });
        canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(web_game: Rc<RefCell<WebGame>>) -> Result<()> {
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let closure = Closure::once(move |_time: f64| {
        game_loop(web_game);
    });
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(web_game: Rc<RefCell<WebGame>>) {
    {
        let mut wg = web_game.borrow_mut();
        let WebGame { game, surface } = &mut *wg;
        game.run_frame(surface);
    }

    if let Err(e) = request_animation_frame(web_game) {
        log::error!("Frame loop stopped: {e}");
    }
}

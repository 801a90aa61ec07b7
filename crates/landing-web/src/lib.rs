#![cfg(target_arch = "wasm32")]
//! WASM entry point for the encrypted-truth landing experience: wires the
//! canvas, audio element, keyboard input and overlay to the stage sequencer,
//! then starts the render loop.

use instant::Instant;
use landing_core::STAR_BASE_SCALE;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod sequence;
mod timers;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::get_as::<web::HtmlCanvasElement>(&document, "app-canvas")?;
    wire_canvas_resize(&canvas);

    // Autoplay attempt happens immediately; a rejection defers to the first
    // space press.
    let audio = audio::AudioController::new(&document)?;
    audio.start_with_fade();

    let sequencer = sequence::Sequencer::new(document.clone(), audio);
    events::wire_global_keydown(sequencer.clone());

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        sequencer,
        canvas,
        gpu,
        last_instant: Instant::now(),
        rotation: [0.0, 0.0],
        star_scale: STAR_BASE_SCALE,
        burst: None,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

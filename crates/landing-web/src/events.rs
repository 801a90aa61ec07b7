//! Global keyboard wiring. Space is the only recognized input; the sequencer
//! decides whether it does anything in the current stage.

use wasm_bindgen::JsCast;
use web_sys as web;

use crate::sequence::Sequencer;

pub fn wire_global_keydown(sequencer: Sequencer) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if ev.code() == "Space" {
                    sequencer.on_trigger_key();
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

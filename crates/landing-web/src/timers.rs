//! Cancellable timer guards over `setTimeout`/`setInterval`.
//!
//! Each guard clears its platform timer on drop, so a timer's lifetime is
//! tied to the stage block that owns it: dropping the guard when a block
//! unmounts is the teardown obligation, nothing can leak.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-shot delayed action. Cancelled if dropped before it fires.
pub struct Timeout {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(ms: i32, callback: impl FnOnce() + 'static) -> Result<Self, ()> {
        let window = web::window().ok_or(())?;
        let mut cb = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = cb.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| log::error!("set_timeout error: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_timeout_with_handle(self.id);
        }
    }
}

/// Repeating action at a fixed interval. Stops when dropped.
pub struct Interval {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(ms: i32, mut callback: impl FnMut() + 'static) -> Result<Self, ()> {
        let window = web::window().ok_or(())?;
        let closure = Closure::wrap(Box::new(move || callback()) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(|e| log::error!("set_interval error: {:?}", e))?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.id);
        }
    }
}

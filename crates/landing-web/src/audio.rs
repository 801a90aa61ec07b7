//! Looping background audio with a stepped fade-in, deferring playback to the
//! first user gesture when the platform blocks autoplay.

use std::cell::Cell;
use std::cell::RefCell;
use std::rc::Rc;

use landing_core::{FadeRamp, AUDIO_FADE_STEPS, AUDIO_FADE_STEP_MS, AUDIO_TARGET_VOLUME};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

use crate::dom;

#[derive(Clone)]
pub struct AudioController {
    inner: Rc<Inner>,
}

struct Inner {
    element: web::HtmlAudioElement,
    // Raw interval handle so the fade tick can clear itself once done.
    fade_id: Cell<Option<i32>>,
}

impl AudioController {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let element = dom::get_as::<web::HtmlAudioElement>(document, "bg-audio")?;
        Ok(Self {
            inner: Rc::new(Inner {
                element,
                fade_id: Cell::new(None),
            }),
        })
    }

    /// Attempt autoplay at volume 0 and ramp up if the platform permits it.
    /// A rejection is logged and recovered from by waiting for the first
    /// user interaction; it is never surfaced as an error.
    pub fn start_with_fade(&self) {
        self.inner.element.set_volume(0.0);
        let promise = match self.inner.element.play() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("audio play() rejected synchronously: {:?}", e);
                return;
            }
        };
        let this = self.clone();
        spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => this.run_fade(),
                Err(_) => {
                    log::warn!("audio autoplay was prevented; music will start on user interaction")
                }
            }
        });
    }

    /// User-gesture fallback: if playback never started, skip the ramp, set
    /// the target volume directly and try once more. A second failure is also
    /// swallowed.
    pub fn play_on_interaction(&self) {
        if !self.inner.element.paused() {
            return;
        }
        self.clear_fade();
        self.inner.element.set_volume(AUDIO_TARGET_VOLUME as f64);
        if let Ok(promise) = self.inner.element.play() {
            spawn_local(async move {
                if JsFuture::from(promise).await.is_err() {
                    log::warn!("audio play on interaction failed");
                }
            });
        }
    }

    // 30 equal volume steps over 3 s, then the interval clears itself.
    fn run_fade(&self) {
        let ramp = Rc::new(RefCell::new(FadeRamp::new(
            AUDIO_TARGET_VOLUME,
            AUDIO_FADE_STEPS,
        )));
        let this = self.clone();
        let closure = Closure::wrap(Box::new(move || {
            if let Some(v) = ramp.borrow_mut().advance() {
                this.inner.element.set_volume(v as f64);
            }
            if ramp.borrow().is_done() {
                this.clear_fade();
            }
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            match w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                AUDIO_FADE_STEP_MS,
            ) {
                Ok(id) => self.inner.fade_id.set(Some(id)),
                Err(e) => log::error!("fade interval error: {:?}", e),
            }
        }
        // The closure must outlive the interval; cleanup goes through the id.
        closure.forget();
    }

    fn clear_fade(&self) {
        if let Some(id) = self.inner.fade_id.take() {
            if let Some(w) = web::window() {
                w.clear_interval_with_handle(id);
            }
        }
    }
}

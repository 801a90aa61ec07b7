//! The sequencer owns the stage machine and every timer whose lifetime is
//! scoped to a stage: the 10 s reveal timeout, the overlay swap timeout and
//! the 60 ms scramble interval. Replacing or dropping a guard cancels the
//! underlying platform timer, so leaving a stage tears its timers down.

use std::cell::RefCell;
use std::rc::Rc;

use landing_core::{
    Scrambler, Stage, StageMachine, DECRYPT_HOLD_MS, OVERLAY_EXIT_MS, SCRAMBLE_INTERVAL_MS,
};
use web_sys as web;

use crate::audio::AudioController;
use crate::overlay;
use crate::timers::{Interval, Timeout};

#[derive(Clone)]
pub struct Sequencer {
    inner: Rc<Inner>,
}

struct Inner {
    machine: RefCell<StageMachine>,
    document: web::Document,
    audio: AudioController,
    reveal_timer: RefCell<Option<Timeout>>,
    swap_timer: RefCell<Option<Timeout>>,
    scramble: RefCell<Option<Interval>>,
}

impl Sequencer {
    pub fn new(document: web::Document, audio: AudioController) -> Self {
        Self {
            inner: Rc::new(Inner {
                machine: RefCell::new(StageMachine::new()),
                document,
                audio,
                reveal_timer: RefCell::new(None),
                swap_timer: RefCell::new(None),
                scramble: RefCell::new(None),
            }),
        }
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.inner.machine.borrow().current()
    }

    /// Space keydown. Only the first press while landing does anything.
    pub fn on_trigger_key(&self) {
        if !self.inner.machine.borrow_mut().trigger_key() {
            return;
        }
        log::info!("stage: landing -> decrypting");
        // Autoplay fallback: a user gesture is now available.
        self.inner.audio.play_on_interaction();
        self.begin_decrypting();
    }

    fn begin_decrypting(&self) {
        overlay::begin_exit(&self.inner.document, Stage::Landing);

        // Mount the decrypting block only after the landing block has fully
        // animated out ("wait" handoff).
        let seq = self.clone();
        *self.inner.swap_timer.borrow_mut() = Timeout::new(OVERLAY_EXIT_MS, move || {
            overlay::show_stage(&seq.inner.document, Stage::Decrypting);
            seq.start_scramble();
        })
        .ok();

        // The reveal delay runs from stage entry, independent of the swap.
        let seq = self.clone();
        *self.inner.reveal_timer.borrow_mut() =
            Timeout::new(DECRYPT_HOLD_MS, move || seq.on_reveal_timer()).ok();
    }

    fn start_scramble(&self) {
        let mut scrambler = Scrambler::new(js_random_seed());
        let document = self.inner.document.clone();
        *self.inner.scramble.borrow_mut() = Interval::new(SCRAMBLE_INTERVAL_MS, move || {
            overlay::set_decrypt_text(&document, &scrambler.next_frame());
        })
        .ok();
    }

    fn on_reveal_timer(&self) {
        self.inner.reveal_timer.borrow_mut().take();
        if !self.inner.machine.borrow_mut().reveal_timer_fired() {
            return;
        }
        log::info!("stage: decrypting -> revealing");
        // The decrypting block unmounts: its interval goes with it.
        self.inner.scramble.borrow_mut().take();
        overlay::begin_exit(&self.inner.document, Stage::Decrypting);

        let seq = self.clone();
        *self.inner.swap_timer.borrow_mut() = Timeout::new(OVERLAY_EXIT_MS, move || {
            overlay::show_stage(&seq.inner.document, Stage::Revealing);
        })
        .ok();
    }
}

#[inline]
fn js_random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64
}

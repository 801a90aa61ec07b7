//! requestAnimationFrame loop: advances the starfield/burst motion from the
//! current stage and elapsed time, then renders.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use landing_core::{
    ease_toward, BurstMotion, BURST_GROWTH_PER_SEC, BURST_OPACITY_EASE, STAR_BASE_SCALE,
    STAR_REVEAL_SCALE, STAR_ROT_X_PER_SEC, STAR_ROT_Y_PER_SEC, STAR_SCALE_EASE,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render;
use crate::sequence::Sequencer;

pub struct FrameContext {
    pub sequencer: Sequencer,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'static>>,

    pub last_instant: Instant,
    pub rotation: [f32; 2],
    pub star_scale: f32,
    pub burst: Option<BurstMotion>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let stage = self.sequencer.stage();
        let revealing = stage.is_revealing();

        self.rotation[0] += STAR_ROT_X_PER_SEC * dt_sec;
        self.rotation[1] += STAR_ROT_Y_PER_SEC * dt_sec;
        let target = if revealing {
            STAR_REVEAL_SCALE
        } else {
            STAR_BASE_SCALE
        };
        self.star_scale = ease_toward(self.star_scale, target, STAR_SCALE_EASE);

        // The burst mounts with the revealing stage and is discarded with it.
        match (self.burst.as_mut(), revealing) {
            (None, true) => {
                self.burst = Some(BurstMotion::new());
                if let Some(g) = &mut self.gpu {
                    g.spawn_burst();
                }
                log::info!("confetti burst mounted");
            }
            (Some(b), true) => b.step(dt_sec, BURST_GROWTH_PER_SEC, BURST_OPACITY_EASE),
            (Some(_), false) => self.burst = None,
            (None, false) => {}
        }

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(dt_sec, self.rotation, self.star_scale, self.burst, revealing)
            {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

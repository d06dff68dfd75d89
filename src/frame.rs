use crate::core::{needs_style_write, ProgressSmoother};
use crate::events::ScrollTracker;
use crate::stage::Stage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub stage: Stage,
    pub tracker: ScrollTracker,
    pub smoother: ProgressSmoother,

    pub started: Instant,
    pub last_instant: Instant,
    pub last_written: Option<f32>,
}

impl FrameContext {
    pub fn new(stage: Stage, tracker: ScrollTracker, smoother: ProgressSmoother) -> Self {
        let now = Instant::now();
        Self {
            stage,
            tracker,
            smoother,
            started: now,
            last_instant: now,
            last_written: None,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let raw = self.tracker.raw_progress();
        let smoothed = self.smoother.step(raw, dt_sec);
        if needs_style_write(self.last_written, smoothed, raw) {
            self.stage.apply(smoothed);
            self.last_written = Some(smoothed);
        }

        self.stage
            .animate_indicator((now - self.started).as_secs_f32());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

use crate::core::scroll_progress;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Latest raw progress of the scroll container, written by scroll/resize
/// listeners and read once per frame.
#[derive(Clone)]
pub struct ScrollTracker {
    container: web::Element,
    raw: Rc<Cell<f32>>,
}

impl ScrollTracker {
    pub fn new(container: web::Element) -> Self {
        let tracker = Self {
            container,
            raw: Rc::new(Cell::new(0.0)),
        };
        tracker.sample();
        tracker
    }

    #[inline]
    pub fn raw_progress(&self) -> f32 {
        self.raw.get()
    }

    pub fn sample(&self) {
        let rect = self.container.get_bounding_client_rect();
        self.raw.set(scroll_progress(rect.top(), rect.height()));
    }
}

pub fn wire_scroll_tracking(tracker: &ScrollTracker) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    let on_scroll = tracker.clone();
    dom::add_passive_listener(target, "scroll", move || on_scroll.sample());

    let on_resize = tracker.clone();
    dom::add_passive_listener(target, "resize", move || on_resize.sample());
}

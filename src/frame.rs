use crate::core::{CancelToken, Easing, FrameScheduler, ScrollAnimator};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame`-backed scheduler.
pub struct RafScheduler;

impl FrameScheduler for RafScheduler {
    fn request_frame(&self, callback: Box<dyn FnOnce()>) {
        let Some(w) = web::window() else {
            return;
        };
        let cb = Closure::once_into_js(move || callback());
        if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {:?}", e);
        }
    }
}

/// Smooth horizontal scroll driven one frame at a time.
pub struct RafScrollAnimator {
    track: web::Element,
    frames: Rc<dyn FrameScheduler>,
}

impl RafScrollAnimator {
    pub fn new(track: web::Element, frames: Rc<dyn FrameScheduler>) -> Self {
        Self { track, frames }
    }
}

struct ScrollTween {
    track: web::Element,
    from: f64,
    to: f64,
    started: Instant,
    duration: Duration,
    easing: Easing,
    cancelled: Cell<bool>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl ScrollTween {
    fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.started.elapsed().as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }
}

fn step(tween: Rc<ScrollTween>, frames: Rc<dyn FrameScheduler>) {
    if tween.cancelled.get() {
        return;
    }
    let t = tween.progress();
    let x = tween.from + (tween.to - tween.from) * tween.easing.apply(t);
    tween.track.set_scroll_left(x.round() as i32);
    if t >= 1.0 {
        let done = tween.on_complete.borrow_mut().take();
        if let Some(done) = done {
            done();
        }
        return;
    }
    let next = frames.clone();
    frames.request_frame(Box::new(move || step(tween, next)));
}

impl ScrollAnimator for RafScrollAnimator {
    fn animate_to(
        &self,
        offset: f64,
        duration: Duration,
        easing: Easing,
        on_complete: Box<dyn FnOnce()>,
    ) -> CancelToken {
        let tween = Rc::new(ScrollTween {
            track: self.track.clone(),
            from: self.track.scroll_left() as f64,
            to: offset,
            started: Instant::now(),
            duration,
            easing,
            cancelled: Cell::new(false),
            on_complete: RefCell::new(Some(on_complete)),
        });
        let weak = Rc::downgrade(&tween);
        step(tween, self.frames.clone());
        CancelToken::new(move || {
            if let Some(t) = weak.upgrade() {
                t.cancelled.set(true);
                t.on_complete.borrow_mut().take();
            }
        })
    }
}

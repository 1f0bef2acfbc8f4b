//! Cadence-throttled repeating callbacks on top of `requestAnimationFrame`.
//!
//! The tick is re-requested on every display refresh; the callback itself
//! only runs once `interval_ms` has passed since its previous run.

use crate::core::Cadence;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Ticker {
    cadence: RefCell<Cadence>,
    callback: RefCell<Box<dyn FnMut(f64)>>,
    raf_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Ticker {
    fn request(&self, window: &web::Window) {
        if let Some(tick) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(tick.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }
}

/// Owner of a running schedule. Dropping it cancels the schedule.
pub struct FrameHandle {
    ticker: Rc<Ticker>,
}

impl FrameHandle {
    /// Stop future ticks. Safe to call more than once.
    pub fn cancel(&self) {
        if self.ticker.cancelled.replace(true) {
            return;
        }
        if let Some(id) = self.ticker.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.ticker.cancelled.get()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Run `callback` (with the frame timestamp in ms) at most once per
/// `interval_ms`, checked on every display refresh. Without a window the
/// schedule is inert.
pub fn schedule(callback: impl FnMut(f64) + 'static, interval_ms: f64) -> FrameHandle {
    let ticker = Rc::new(Ticker {
        cadence: RefCell::new(Cadence::new(interval_ms)),
        callback: RefCell::new(Box::new(callback)),
        raf_id: Cell::new(None),
        cancelled: Cell::new(false),
        tick: RefCell::new(None),
    });

    let Some(window) = web::window() else {
        log::warn!("[frame] no window; schedule is a no-op");
        ticker.cancelled.set(true);
        return FrameHandle { ticker };
    };

    let weak: Weak<Ticker> = Rc::downgrade(&ticker);
    let tick = Closure::wrap(Box::new(move |now_ms: f64| {
        let Some(t) = weak.upgrade() else {
            return;
        };
        t.raf_id.set(None);
        if t.cancelled.get() {
            return;
        }
        if t.cadence.borrow_mut().ready(now_ms) {
            let mut callback = t.callback.borrow_mut();
            (&mut *callback)(now_ms);
        }
        if !t.cancelled.get() {
            if let Some(w) = web::window() {
                t.request(&w);
            }
        }
    }) as Box<dyn FnMut(f64)>);
    *ticker.tick.borrow_mut() = Some(tick);
    ticker.request(&window);

    FrameHandle { ticker }
}

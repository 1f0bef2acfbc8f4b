use crate::core::{ThrottleAction, ThrottleGate};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct Inner<A> {
    gate: RefCell<ThrottleGate<A>>,
    handler: RefCell<Box<dyn FnMut(A)>>,
    timer: Cell<Option<i32>>,
    fire: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl<A> Inner<A> {
    fn clear_timer(&self) {
        if let Some(id) = self.timer.take() {
            if let Some(w) = web::window() {
                w.clear_timeout_with_handle(id);
            }
        }
    }
}

/// Leading + trailing edge rate limiter for event handlers.
///
/// The first call (or any call `wait_ms` after the last run) runs right
/// away. Calls in between keep only their latest arguments and re-arm a
/// single timer that runs them `wait_ms` later.
pub struct Throttle<A: 'static> {
    inner: Rc<Inner<A>>,
}

impl<A: 'static> Throttle<A> {
    pub fn new(handler: impl FnMut(A) + 'static, wait_ms: f64) -> Self {
        let inner = Rc::new(Inner {
            gate: RefCell::new(ThrottleGate::new(wait_ms)),
            handler: RefCell::new(Box::new(handler)),
            timer: Cell::new(None),
            fire: RefCell::new(None),
        });
        let weak = Rc::downgrade(&inner);
        let fire = Closure::wrap(Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.timer.set(None);
            let args = inner.gate.borrow_mut().fire(instant::now());
            if let Some(args) = args {
                let mut handler = inner.handler.borrow_mut();
                (&mut *handler)(args);
            }
        }) as Box<dyn FnMut()>);
        *inner.fire.borrow_mut() = Some(fire);
        Self { inner }
    }

    pub fn call(&self, args: A) {
        self.inner.clear_timer();
        let action = self.inner.gate.borrow_mut().call(instant::now(), args);
        match action {
            ThrottleAction::Invoke(args) => {
                let mut handler = self.inner.handler.borrow_mut();
                (&mut *handler)(args);
            }
            ThrottleAction::Defer { delay_ms } => {
                let Some(w) = web::window() else {
                    return;
                };
                if let Some(fire) = self.inner.fire.borrow().as_ref() {
                    match w.set_timeout_with_callback_and_timeout_and_arguments_0(
                        fire.as_ref().unchecked_ref(),
                        delay_ms.round() as i32,
                    ) {
                        Ok(id) => self.inner.timer.set(Some(id)),
                        Err(e) => log::warn!("[throttle] setTimeout failed: {:?}", e),
                    }
                }
            }
        }
    }
}

impl<A: 'static> Drop for Throttle<A> {
    fn drop(&mut self) {
        self.inner.clear_timer();
    }
}

use crate::core::{MomentumScroller, ScrollExtent};
use crate::dom;
use crate::frame::{self, FrameHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct ScrollerWiring {
    container: web::HtmlElement,
    scroller: Rc<RefCell<MomentumScroller>>,
    decay: Rc<RefCell<Option<FrameHandle>>>,
}

impl ScrollerWiring {
    fn offset_left(&self) -> f64 {
        self.container.get_bounding_client_rect().left()
    }

    fn start_decay(&self) {
        let container = self.container.clone();
        let scroller = self.scroller.clone();
        let handle = frame::schedule(
            move |_now| {
                let extent = ScrollExtent {
                    scroll_left: container.scroll_left() as f64,
                    scroll_width: container.scroll_width() as f64,
                    viewport_width: container.client_width() as f64,
                };
                if let Some(next) = scroller.borrow_mut().step(extent) {
                    container.set_scroll_left(next.round() as i32);
                }
            },
            0.0,
        );
        // replacing the previous handle cancels it
        *self.decay.borrow_mut() = Some(handle);
    }

    fn stop_decay(&self) {
        self.decay.borrow_mut().take();
    }
}

/// Drag-to-scroll with inertia and autoplay on `container`. The decay loop
/// starts immediately and runs for the page lifetime.
pub fn wire_momentum_scroller(container: web::HtmlElement) -> Rc<RefCell<MomentumScroller>> {
    let w = ScrollerWiring {
        container,
        scroller: Rc::new(RefCell::new(MomentumScroller::new())),
        decay: Rc::new(RefCell::new(None)),
    };

    {
        let w = w.clone();
        dom::add_listener(&w.container.clone(), "pointerdown", move |ev: web::PointerEvent| {
            w.stop_decay();
            let scroll_left = w.container.scroll_left() as f64;
            w.scroller
                .borrow_mut()
                .pointer_down(ev.client_x() as f64, w.offset_left(), scroll_left);
            ev.prevent_default();
        });
    }
    {
        let w = w.clone();
        dom::add_listener(&w.container.clone(), "pointermove", move |ev: web::PointerEvent| {
            let target = w
                .scroller
                .borrow_mut()
                .pointer_move(ev.client_x() as f64, w.offset_left());
            if let Some(scroll_left) = target {
                w.container.set_scroll_left(scroll_left.round() as i32);
                ev.prevent_default();
            }
        });
    }
    {
        let w = w.clone();
        dom::add_listener(&w.container.clone(), "pointerup", move |_: web::PointerEvent| {
            if w.scroller.borrow_mut().pointer_release() {
                w.start_decay();
            }
        });
    }
    {
        let w = w.clone();
        dom::add_listener(&w.container.clone(), "pointerenter", move |_: web::PointerEvent| {
            w.scroller.borrow_mut().hover_enter();
        });
    }
    {
        let w = w.clone();
        dom::add_listener(&w.container.clone(), "pointerleave", move |_: web::PointerEvent| {
            let released = {
                let mut scroller = w.scroller.borrow_mut();
                scroller.hover_leave();
                scroller.pointer_release()
            };
            if released {
                w.start_decay();
            }
        });
    }

    w.start_decay();
    log::info!("[scroll] momentum scroller attached");
    w.scroller
}

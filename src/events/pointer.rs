use crate::core::PointerState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

thread_local! {
    static FEED: RefCell<Option<Rc<RefCell<PointerState>>>> = const { RefCell::new(None) };
}

/// Page-wide pointer position, starting at (0, 0). The first call wires a
/// window `pointermove` listener; later calls share the same state.
pub fn pointer_feed() -> Rc<RefCell<PointerState>> {
    FEED.with(|feed| {
        feed.borrow_mut()
            .get_or_insert_with(|| {
                let state = Rc::new(RefCell::new(PointerState::default()));
                wire_pointermove(state.clone());
                state
            })
            .clone()
    })
}

fn wire_pointermove(state: Rc<RefCell<PointerState>>) {
    let Some(window) = web::window() else {
        log::warn!("[pointer] no window; pointer feed stays at origin");
        return;
    };
    dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
        state
            .borrow_mut()
            .on_pointer_move(ev.client_x() as f32, ev.client_y() as f32);
    });
}

use crate::constants::RESIZE_THROTTLE_MS;
use crate::dom;
use crate::render::WaveCanvas;
use crate::throttle::Throttle;
use web_sys as web;

/// Re-tile every mounted canvas on viewport resize, at most once per
/// `RESIZE_THROTTLE_MS` with a trailing call after the last event.
/// The canvases (and their schedules) live as long as the listener.
pub fn wire_throttled_resize(canvases: Vec<WaveCanvas>) {
    let Some(window) = web::window() else {
        return;
    };
    let throttled = Throttle::new(
        move |()| {
            for canvas in &canvases {
                canvas.resize_canvas();
            }
        },
        RESIZE_THROTTLE_MS,
    );
    dom::add_listener(&window, "resize", move |_: web::Event| throttled.call(()));
}

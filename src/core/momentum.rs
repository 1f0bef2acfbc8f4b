// Drag-to-scroll with inertia for a horizontally scrolling marquee.
//
// The scroller never stops on its own: after a drag the speed decays
// geometrically, then snaps to a constant autoplay speed (or to zero while
// the pointer hovers the container). Hitting either scroll extreme reverses
// the direction.

use super::constants::{AUTOPLAY_SPEED, MOMENTUM_DECAY, MOMENTUM_SNAP_THRESHOLD};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollPhase {
    Idle,
    Dragging,
    Coasting,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    /// Pointer position at drag start, relative to the container.
    pub x: f64,
    /// Pointer position at the previous move event.
    pub old_x: f64,
    pub is_down: bool,
    /// Container scroll offset at drag start.
    pub scroll_left: f64,
    pub slide_speed: f64,
    /// Last non-zero speed; its sign picks the autoplay direction.
    pub last_slide_speed: f64,
    /// Cleared while the pointer hovers the container.
    pub should_slide: bool,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            x: 0.0,
            old_x: 0.0,
            is_down: false,
            scroll_left: 0.0,
            slide_speed: -AUTOPLAY_SPEED,
            last_slide_speed: -AUTOPLAY_SPEED,
            should_slide: true,
        }
    }
}

/// Scroll geometry of the container at the time of a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollExtent {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub viewport_width: f64,
}

impl ScrollExtent {
    #[inline]
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.viewport_width).max(0.0)
    }

    #[inline]
    pub fn at_edge(&self) -> bool {
        self.scroll_left <= 0.0 || self.scroll_left >= self.max_scroll()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MomentumScroller {
    drag: DragState,
    coasting: bool,
}

impl MomentumScroller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub fn phase(&self) -> ScrollPhase {
        if self.drag.is_down {
            ScrollPhase::Dragging
        } else if self.coasting {
            ScrollPhase::Coasting
        } else {
            ScrollPhase::Idle
        }
    }

    pub fn pointer_down(&mut self, pointer_x: f64, container_offset_left: f64, scroll_left: f64) {
        self.drag.is_down = true;
        self.drag.old_x = pointer_x;
        self.drag.x = pointer_x - container_offset_left;
        self.drag.scroll_left = scroll_left;
        self.coasting = false;
    }

    /// Returns the scroll offset the container should jump to, or `None`
    /// when no drag is in progress.
    pub fn pointer_move(&mut self, pointer_x: f64, container_offset_left: f64) -> Option<f64> {
        if !self.drag.is_down {
            return None;
        }
        self.set_speed(pointer_x - self.drag.old_x);
        self.drag.old_x = pointer_x;
        let walked = (pointer_x - container_offset_left) - self.drag.x;
        Some(self.drag.scroll_left - walked)
    }

    /// Pointer up or leave. Returns true when a drag ended and the decay loop
    /// should be restarted.
    pub fn pointer_release(&mut self) -> bool {
        let was_down = self.drag.is_down;
        self.drag.is_down = false;
        self.coasting = true;
        was_down
    }

    pub fn hover_enter(&mut self) {
        self.drag.should_slide = false;
    }

    pub fn hover_leave(&mut self) {
        self.drag.should_slide = true;
    }

    /// One frame of the decay loop. Returns the new scroll offset, clamped
    /// to the container's scroll range, or `None` while dragging.
    pub fn step(&mut self, extent: ScrollExtent) -> Option<f64> {
        if self.drag.is_down {
            return None;
        }
        self.coasting = true;
        let speed = self.drag.slide_speed;
        if speed.abs() > MOMENTUM_SNAP_THRESHOLD {
            self.drag.slide_speed = speed * MOMENTUM_DECAY;
        } else if self.drag.should_slide {
            let sign = if self.drag.last_slide_speed < 0.0 { -1.0 } else { 1.0 };
            self.drag.slide_speed = sign * AUTOPLAY_SPEED;
        } else {
            self.drag.slide_speed = 0.0;
        }

        if extent.at_edge() {
            self.drag.slide_speed = -self.drag.slide_speed;
        }
        self.set_speed(self.drag.slide_speed);

        let next = extent.scroll_left - self.drag.slide_speed;
        Some(next.clamp(0.0, extent.max_scroll()))
    }

    fn set_speed(&mut self, speed: f64) {
        self.drag.slide_speed = speed;
        if speed != 0.0 {
            self.drag.last_slide_speed = speed;
        }
    }
}

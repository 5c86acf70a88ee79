//! Drag-session and tap-timing state for the toolbox drag handle.

use crate::geometry::Point;
use crate::view::PointerId;

/// Two taps closer than this (milliseconds) count as a double tap.
pub const DOUBLE_TAP_MS: f64 = 300.0;

/// State captured on pointer-down for one active drag.
///
/// At most one session exists per toolbox; it is discarded on pointer-up or
/// pointer-cancel. Moves from any other pointer id are ignored while the
/// session is open, which models pointer capture.
#[derive(Clone, Copy, Debug)]
pub struct DragSession {
    /// Element position when the drag started, local to its parent.
    pub origin: Point,
    /// Pointer position when the drag started.
    pub origin_pointer: Point,
    /// The captured pointer.
    pub pointer_id: PointerId,
}

impl DragSession {
    pub fn new(origin: Point, origin_pointer: Point, pointer_id: PointerId) -> Self {
        Self {
            origin,
            origin_pointer,
            pointer_id,
        }
    }

    /// Candidate element position for the current pointer position.
    pub fn candidate(&self, pointer: Point) -> Point {
        self.origin + (pointer - self.origin_pointer)
    }
}

/// Tracks the previous tap timestamp and decides whether a new tap completes
/// a double tap.
#[derive(Clone, Copy, Debug, Default)]
pub struct TapTracker {
    last_tap_ms: f64,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tap at `now_ms`. Returns true when it completes a double
    /// tap; the window is consumed exactly once, so a third rapid tap starts
    /// a fresh window instead of chaining.
    pub fn register_tap(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_tap_ms < DOUBLE_TAP_MS {
            self.last_tap_ms = 0.0;
            true
        } else {
            self.last_tap_ms = now_ms;
            false
        }
    }

    /// Timestamp of the pending single tap, 0 when none is pending.
    pub fn last_tap_ms(&self) -> f64 {
        self.last_tap_ms
    }
}

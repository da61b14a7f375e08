//! Per-gesture touch tracking
//!
//! A session lives from press to release/cancel. Whether the gesture was a
//! click is decided at release from the press-to-release displacement alone.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::CLICK_ACTION_THRESHOLD;

/// Gesture lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TouchPhase {
    /// No gesture in flight
    #[default]
    Idle,
    /// Pointer down, not yet moved past the click threshold
    Pressed,
    /// Pointer moved past the click threshold at some point
    Dragging,
}

/// Transient state of one gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSession {
    start: Vec2,
    dragging: bool,
}

impl TouchSession {
    pub fn new(start: Vec2) -> Self {
        Self {
            start,
            dragging: false,
        }
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn phase(&self) -> TouchPhase {
        if self.dragging {
            TouchPhase::Dragging
        } else {
            TouchPhase::Pressed
        }
    }

    /// Note a pointer move; once dragging, the session stays dragging
    pub fn track(&mut self, pointer: Vec2) {
        if !is_click(self.start, pointer) {
            self.dragging = true;
        }
    }

    /// Whether releasing at `end` completes a click
    pub fn is_click(&self, end: Vec2) -> bool {
        is_click(self.start, end)
    }
}

/// Displacement of at most `CLICK_ACTION_THRESHOLD` counts as a click
#[inline]
pub fn is_click(start: Vec2, end: Vec2) -> bool {
    start.distance(end) <= CLICK_ACTION_THRESHOLD
}

/// What a pointer event did, for the host to act on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchAction {
    /// Visible state changed
    pub should_redraw: bool,
    /// New progress, if the event moved it
    pub progress_changed: Option<i32>,
    /// Value of the marker whose click listener fired
    pub marker_clicked: Option<i32>,
}

impl TouchAction {
    /// Event had no effect
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn redraw() -> Self {
        Self {
            should_redraw: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_threshold() {
        let start = Vec2::new(100.0, 100.0);
        assert!(is_click(start, start));
        assert!(is_click(start, Vec2::new(103.0, 104.0)));
        assert!(!is_click(start, Vec2::new(104.0, 104.0)));
    }

    #[test]
    fn test_session_phases() {
        let mut session = TouchSession::new(Vec2::ZERO);
        assert_eq!(session.phase(), TouchPhase::Pressed);

        session.track(Vec2::new(2.0, 2.0));
        assert_eq!(session.phase(), TouchPhase::Pressed);

        session.track(Vec2::new(20.0, 0.0));
        assert_eq!(session.phase(), TouchPhase::Dragging);

        // Coming back does not undo the drag, but release is judged on its own
        session.track(Vec2::new(1.0, 0.0));
        assert!(session.is_dragging());
        assert!(session.is_click(Vec2::new(1.0, 0.0)));
    }
}

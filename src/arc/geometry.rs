//! Arc bounds and radius from available layout space
//!
//! Markers reserve `2 * marker_text_radius` of clearance so their labels are
//! never clipped, and force a square layout since that clearance has to be
//! symmetric.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of side `size` with its top-left corner at `origin`
    pub fn square(origin: Vec2, size: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + size, origin.y + size)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Derived layout of the control
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    /// Arc radius (never negative)
    pub radius: f32,
    /// Center of the arc; every derived position is relative to this
    pub origin: Vec2,
    /// Square the arc is inscribed in
    pub arc_rect: Rect,
    /// Size the control asks its host for
    pub measured_size: Vec2,
    /// Dead zone around the origin where touches are ignored
    pub touch_ignore_radius: f32,
}

impl Geometry {
    /// Lay out the arc inside `width × height`
    ///
    /// `marker_clearance` is the marker text radius when markers exist, `None`
    /// otherwise. Without markers the arc is centered in the smaller dimension
    /// of a possibly non-square control.
    pub fn compute(width: f32, height: f32, padding: f32, marker_clearance: Option<f32>) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let min = width.min(height);

        let (origin, diameter, measured_size) = match marker_clearance {
            Some(text_radius) => (
                Vec2::splat(min / 2.0),
                min - padding - 2.0 * text_radius,
                Vec2::splat(min),
            ),
            None => (
                Vec2::new(width / 2.0, height / 2.0),
                min - padding,
                Vec2::new(width, height),
            ),
        };
        let diameter = diameter.max(0.0);
        let radius = diameter / 2.0;
        let arc_rect = Rect::square(origin - Vec2::splat(radius), diameter);

        Self {
            radius,
            origin,
            arc_rect,
            measured_size,
            touch_ignore_radius: 0.0,
        }
    }

    /// Recompute the touch dead zone
    ///
    /// With `touch_inside` only the inner quarter of the radius is dead;
    /// otherwise everything short of the thumb's inner edge is. The exact
    /// radius would make grabbing the arc too fiddly.
    pub fn update_touch_ignore_radius(&mut self, touch_inside: bool, thumb_half_extent: f32) {
        self.touch_ignore_radius = if touch_inside {
            self.radius / 4.0
        } else {
            (self.radius - thumb_half_extent).max(0.0)
        };
    }

    /// Whether a pointer falls inside the dead zone
    pub fn ignores(&self, pointer: Vec2) -> bool {
        pointer.distance(self.origin) < self.touch_ignore_radius
    }
}

//! Seek Arc - geometry and interaction engine for a circular seek control
//!
//! Core modules:
//! - `arc`: Deterministic engine (angle conversion, layout, markers, touch handling)
//! - `config`: Serializable configuration with defaults
//! - `frame`: Render-facing snapshot consumed by a drawing layer
//! - `error`: Error types for configuration loading
//!
//! Angles are in degrees with 0° at 12 o'clock. Screen coordinates follow the
//! usual convention of y growing downward.

pub mod arc;
pub mod config;
pub mod error;
pub mod frame;

pub use arc::{Geometry, Marker, SeekArc, TouchAction, TouchPhase};
pub use config::{ArcConfig, ArcStyle, SeekArcConfig};
pub use error::ConfigError;
pub use frame::DrawFrame;

use glam::Vec2;

/// Engine configuration constants
pub mod consts {
    /// Default marker label text size
    pub const MARKER_TEXT_SIZE: f32 = 18.0;
    /// Default distance of a marker label beyond the arc
    pub const TEXT_RADIUS: f32 = 40.0;
    /// Maximum distance from a marker that still counts as clicking it
    pub const MARKER_TOUCH_RADIUS: f32 = 48.0;
    /// Maximum press-to-release displacement for a gesture to be a click
    pub const CLICK_ACTION_THRESHOLD: f32 = 5.0;
    /// Marker labels are truncated to this many characters
    pub const MAX_LABEL_CHARS: usize = 6;
    /// Drawing offset so the arc starts at 12 o'clock (degrees)
    pub const ANGLE_OFFSET: i32 = -90;

    /// Config defaults
    pub const DEFAULT_MAX: i32 = 100;
    pub const DEFAULT_SWEEP_ANGLE: i32 = 360;
    pub const DEFAULT_ARC_WIDTH: f32 = 2.0;
    pub const DEFAULT_PROGRESS_WIDTH: f32 = 4.0;
}

/// Normalize an angle to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if angle >= 360.0 { 0.0 } else { angle }
}

/// Convert polar (r, degrees) to a cartesian offset (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, degrees: f32) -> Vec2 {
    let theta = degrees.to_radians();
    Vec2::new(r * theta.cos(), r * theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-90.0) - 270.0).abs() < 1e-9);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-9);
        assert!(normalize_degrees(-1e-18) < 360.0);
    }

    #[test]
    fn test_polar_to_cartesian() {
        let p = polar_to_cartesian(10.0, 90.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);

        let p = polar_to_cartesian(10.0, 180.0);
        assert!((p.x + 10.0).abs() < 1e-5);
    }
}

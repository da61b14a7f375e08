//! Angle/value conversion
//!
//! Pure functions mapping progress ↔ arc angle ↔ pointer position.
//!
//! Two angle conventions meet here:
//! - arc angles: degrees from 12 o'clock, relative to `start_angle`
//! - trig angles: `start + sweep + rotation + 90`, fed to cos/sin; the
//!   resulting offset is subtracted from the origin to get a screen point

use glam::Vec2;

use crate::config::ArcConfig;
use crate::{normalize_degrees, polar_to_cartesian};

/// Degrees of arc covered by `progress`
///
/// A `max` of zero has no meaningful fraction; it maps to an empty sweep.
#[inline]
pub fn progress_to_sweep(progress: i32, max: i32, sweep_angle: i32) -> f32 {
    if max <= 0 {
        return 0.0;
    }
    progress as f32 / max as f32 * sweep_angle as f32
}

/// Pointer angle relative to the arc start
///
/// The result is in `[-start_angle, 360 - start_angle)`; negative values lie
/// before the arc start.
pub fn angle_from_pointer(pointer: Vec2, origin: Vec2, config: &ArcConfig) -> f64 {
    let d = pointer - origin;
    // Anti-clockwise arcs are mirrored horizontally
    let x = f64::from(if config.clockwise { d.x } else { -d.x });
    let y = f64::from(d.y);
    let angle = y.atan2(x).to_degrees() + 90.0 - f64::from(config.rotation);
    normalize_degrees(angle) - f64::from(config.start_angle)
}

/// Progress for an angle relative to the arc start
///
/// Angles that project outside `[0, max]` return `None`. They are rejected,
/// never clamped, so a pointer off the end of the arc leaves progress alone.
pub fn angle_to_progress(angle: f64, max: i32, sweep_angle: i32) -> Option<i32> {
    if sweep_angle <= 0 {
        return None;
    }
    let value_per_degree = f64::from(max) / f64::from(sweep_angle);
    let progress = (value_per_degree * angle).round();
    (0.0..=f64::from(max))
        .contains(&progress)
        .then_some(progress as i32)
}

/// Progress under a pointer, or `None` when it lies off the arc
///
/// Arcs whose span crosses 12 o'clock (after rotation) see their tail as a
/// negative relative angle; those get a second chance one full turn later.
/// This deliberately goes beyond plain "normalize, then subtract the start",
/// which would reject the tail outright.
pub fn pointer_to_progress(pointer: Vec2, origin: Vec2, config: &ArcConfig) -> Option<i32> {
    let angle = angle_from_pointer(pointer, origin, config);
    angle_to_progress(angle, config.max, config.sweep_angle).or_else(|| {
        if angle < 0.0 {
            angle_to_progress(angle + 360.0, config.max, config.sweep_angle)
        } else {
            None
        }
    })
}

/// Trig angle (degrees) of a point `sweep` degrees along the arc
#[inline]
pub fn sweep_to_trig_angle(sweep: f32, config: &ArcConfig) -> f32 {
    config.start_angle as f32 + sweep + config.rotation as f32 + 90.0
}

/// Screen position of a point `sweep` degrees along a circle of `radius`
pub fn sweep_to_position(sweep: f32, radius: f32, origin: Vec2, config: &ArcConfig) -> Vec2 {
    let offset = polar_to_cartesian(radius, sweep_to_trig_angle(sweep, config));
    if config.clockwise {
        origin - offset
    } else {
        Vec2::new(origin.x + offset.x, origin.y - offset.y)
    }
}

/// Screen position of `value` on the arc
pub fn value_to_position(value: i32, radius: f32, origin: Vec2, config: &ArcConfig) -> Vec2 {
    let sweep = progress_to_sweep(value, config.max, config.sweep_angle);
    sweep_to_position(sweep, radius, origin, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ORIGIN: Vec2 = Vec2::new(200.0, 200.0);

    fn config() -> ArcConfig {
        ArcConfig::default()
    }

    #[test]
    fn test_progress_to_sweep() {
        assert_eq!(progress_to_sweep(50, 100, 360), 180.0);
        assert_eq!(progress_to_sweep(0, 100, 360), 0.0);
        assert_eq!(progress_to_sweep(10, 20, 180), 90.0);
    }

    #[test]
    fn test_progress_to_sweep_zero_max() {
        assert_eq!(progress_to_sweep(0, 0, 360), 0.0);
        assert_eq!(progress_to_sweep(5, 0, 360), 0.0);
    }

    #[test]
    fn test_pointer_angles_clockwise() {
        let config = config();
        // 12, 3, 6 and 9 o'clock
        let top = angle_from_pointer(Vec2::new(200.0, 100.0), ORIGIN, &config);
        let right = angle_from_pointer(Vec2::new(300.0, 200.0), ORIGIN, &config);
        let bottom = angle_from_pointer(Vec2::new(200.0, 300.0), ORIGIN, &config);
        let left = angle_from_pointer(Vec2::new(100.0, 200.0), ORIGIN, &config);
        assert!(top.abs() < 1e-9);
        assert!((right - 90.0).abs() < 1e-9);
        assert!((bottom - 180.0).abs() < 1e-9);
        assert!((left - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_angle_anticlockwise_mirrors() {
        let config = ArcConfig {
            clockwise: false,
            ..config()
        };
        let left = angle_from_pointer(Vec2::new(100.0, 200.0), ORIGIN, &config);
        assert!((left - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_pointer_angle_rotation_and_start() {
        let config = ArcConfig {
            rotation: 90,
            start_angle: 30,
            ..config()
        };
        // 3 o'clock is the rotated top, which is 30 degrees before the start
        let right = angle_from_pointer(Vec2::new(300.0, 200.0), ORIGIN, &config);
        assert!((right + 30.0).abs() < 1e-9);
        assert_eq!(angle_to_progress(right, 100, 360), None);
    }

    #[test]
    fn test_pointer_to_progress_wraps_past_twelve() {
        let config = ArcConfig {
            start_angle: 270,
            sweep_angle: 180,
            ..config()
        };
        // 3 o'clock is 90 degrees past 12, i.e. 180 degrees into the arc
        let right = Vec2::new(300.0, 200.0);
        assert_eq!(pointer_to_progress(right, ORIGIN, &config), Some(100));
        // 6 o'clock is off the arc entirely
        let bottom = Vec2::new(200.0, 300.0);
        assert_eq!(pointer_to_progress(bottom, ORIGIN, &config), None);
    }

    #[test]
    fn test_pointer_to_progress_keeps_rounding_at_start() {
        let config = ArcConfig {
            start_angle: 30,
            sweep_angle: 300,
            ..config()
        };
        // A hair before the start still rounds to zero
        let pointer = sweep_to_position(-0.5, 100.0, ORIGIN, &config);
        assert_eq!(pointer_to_progress(pointer, ORIGIN, &config), Some(0));
    }

    #[test]
    fn test_quarter_turn_is_quarter_progress() {
        let config = config();
        let angle = angle_from_pointer(Vec2::new(350.0, 200.0), ORIGIN, &config);
        assert_eq!(angle_to_progress(angle, 100, 360), Some(25));
    }

    #[test]
    fn test_angle_to_progress_rejects_outside_span() {
        assert_eq!(angle_to_progress(-10.0, 100, 180), None);
        assert_eq!(angle_to_progress(200.0, 100, 180), None);
        assert_eq!(angle_to_progress(180.0, 100, 180), Some(100));
        // Rounds back into range at the edge
        assert_eq!(angle_to_progress(-0.4, 100, 360), Some(0));
    }

    #[test]
    fn test_angle_to_progress_zero_sweep() {
        assert_eq!(angle_to_progress(0.0, 100, 0), None);
        assert_eq!(angle_to_progress(45.0, 100, 0), None);
    }

    #[test]
    fn test_value_to_position() {
        let config = config();
        let zero = value_to_position(0, 100.0, ORIGIN, &config);
        assert!(zero.distance(Vec2::new(200.0, 100.0)) < 1e-3);
        let quarter = value_to_position(25, 100.0, ORIGIN, &config);
        assert!(quarter.distance(Vec2::new(300.0, 200.0)) < 1e-3);

        let ccw = ArcConfig {
            clockwise: false,
            ..config
        };
        let quarter = value_to_position(25, 100.0, ORIGIN, &ccw);
        assert!(quarter.distance(Vec2::new(100.0, 200.0)) < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_sweep_round_trips(max in 1i32..1000, sweep in 1i32..=360, frac in 0.0f64..=1.0) {
            let progress = (f64::from(max) * frac).round() as i32;
            let angle = f64::from(progress_to_sweep(progress, max, sweep));
            prop_assert_eq!(angle_to_progress(angle, max, sweep), Some(progress));
        }

        #[test]
        fn prop_outside_span_is_invalid(max in 1i32..1000, sweep in 1i32..=360, past in 1.0f64..180.0) {
            // Far enough out that rounding cannot pull it back in
            let margin = past + f64::from(sweep) / f64::from(max);
            prop_assert_eq!(angle_to_progress(-margin, max, sweep), None);
            prop_assert_eq!(angle_to_progress(f64::from(sweep) + margin, max, sweep), None);
        }

        #[test]
        fn prop_pointer_round_trips(
            max in 10i32..200,
            sweep in 10i32..=350,
            start in 0i32..=360,
            rotation in -360i32..=360,
            clockwise in any::<bool>(),
            frac in 0.01f64..0.99,
        ) {
            let config = ArcConfig {
                max,
                sweep_angle: sweep,
                start_angle: start,
                rotation,
                clockwise,
                ..ArcConfig::default()
            };
            let progress = (f64::from(max) * frac).round() as i32;
            prop_assume!(progress > 0 && progress < max);
            let pointer = value_to_position(progress, 150.0, ORIGIN, &config);
            prop_assert_eq!(pointer_to_progress(pointer, ORIGIN, &config), Some(progress));
        }
    }
}

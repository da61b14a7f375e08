//! Fixed markers along the arc
//!
//! Markers are placed by value, optionally labelled and optionally clickable.
//! Positions are cached and recomputed whenever the layout or the arc's
//! angles change.

use std::rc::{Rc, Weak};

use glam::Vec2;

use super::convert::{progress_to_sweep, sweep_to_position};
use super::geometry::Geometry;
use crate::config::ArcConfig;
use crate::consts::{MARKER_TOUCH_RADIUS, MAX_LABEL_CHARS};

/// Receives marker clicks
pub trait MarkerClickListener {
    fn on_marker_clicked(&self, value: i32, label: &str);
}

impl<F: Fn(i32, &str)> MarkerClickListener for F {
    fn on_marker_clicked(&self, value: i32, label: &str) {
        self(value, label)
    }
}

/// A point of interest on the arc
#[derive(Debug, Clone)]
pub struct Marker {
    value: i32,
    label: Option<String>,
    /// Subtracted from the label anchor
    text_offset: Vec2,
    position: Vec2,
    text_position: Vec2,
    on_click: Option<Weak<dyn MarkerClickListener>>,
}

impl Marker {
    fn new(
        label: Option<&str>,
        value: i32,
        text_offset: Vec2,
        on_click: Option<Weak<dyn MarkerClickListener>>,
    ) -> Self {
        Self {
            value,
            label: label.map(truncate_label),
            text_offset,
            position: Vec2::ZERO,
            text_position: Vec2::ZERO,
            on_click,
        }
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Explicit label, if one was given
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Label to display: the explicit label or the value as text
    pub fn resolved_label(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.value.to_string())
    }

    pub fn text_offset(&self) -> Vec2 {
        self.text_offset
    }

    /// Screen position on the arc
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Screen position of the label anchor
    pub fn text_position(&self) -> Vec2 {
        self.text_position
    }

    /// Reached markers are drawn filled
    #[inline]
    pub fn is_filled(&self, progress: i32) -> bool {
        progress >= self.value
    }

    /// Click listener, if one was registered and is still alive
    pub fn click_listener(&self) -> Option<Rc<dyn MarkerClickListener>> {
        self.on_click.as_ref().and_then(Weak::upgrade)
    }

    fn place(&mut self, geometry: &Geometry, config: &ArcConfig, text_radius: f32) {
        let sweep = progress_to_sweep(self.value, config.max, config.sweep_angle);
        self.position = sweep_to_position(sweep, geometry.radius, geometry.origin, config);
        let anchor = sweep_to_position(
            sweep,
            geometry.radius + text_radius,
            geometry.origin,
            config,
        );
        self.text_position = anchor - self.text_offset;
    }
}

/// Labels longer than `MAX_LABEL_CHARS` are cut short
fn truncate_label(label: &str) -> String {
    label.chars().take(MAX_LABEL_CHARS).collect()
}

/// Ordered marker sequence; later markers sit on top
#[derive(Debug, Clone, Default)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a marker if `value` lies in `[0, max]`
    pub fn add(
        &mut self,
        label: Option<&str>,
        value: i32,
        text_offset: Vec2,
        on_click: Option<Weak<dyn MarkerClickListener>>,
        max: i32,
    ) -> bool {
        if !(0..=max).contains(&value) {
            log::debug!("Rejected marker {value}: outside 0..={max}");
            return false;
        }
        self.markers
            .push(Marker::new(label, value, text_offset, on_click));
        true
    }

    /// Drop markers whose value now exceeds `max`
    pub fn retain_within(&mut self, max: i32) {
        self.markers.retain(|m| {
            let keep = m.value <= max;
            if !keep {
                log::debug!("Dropped marker {}: outside 0..={max}", m.value);
            }
            keep
        });
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    pub fn as_slice(&self) -> &[Marker] {
        &self.markers
    }

    /// Recompute every marker's position
    pub fn recompute_positions(&mut self, geometry: &Geometry, config: &ArcConfig, text_radius: f32) {
        for marker in &mut self.markers {
            marker.place(geometry, config, text_radius);
        }
    }

    /// Nearest live clickable marker within `MARKER_TOUCH_RADIUS` of `point`
    ///
    /// Ties go to the later marker, which is drawn on top.
    pub fn hit_test(&self, point: Vec2) -> Option<&Marker> {
        self.markers
            .iter()
            .filter(|m| m.click_listener().is_some())
            .map(|m| (m, m.position.distance(point)))
            .filter(|&(_, dist)| dist <= MARKER_TOUCH_RADIUS)
            .fold(None, |best: Option<(&Marker, f32)>, (m, dist)| match best {
                Some((_, best_dist)) if dist > best_dist => best,
                _ => Some((m, dist)),
            })
            .map(|(m, _)| m)
    }
}

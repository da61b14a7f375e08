//! The seek arc engine
//!
//! Owns configuration, layout, markers and the in-flight gesture. A host
//! forwards size changes and pointer events here and draws from the derived
//! positions (see [`crate::frame::DrawFrame`]).
//!
//! Everything runs synchronously on the caller's thread. Listeners are held
//! weakly and called from inside engine methods; they must not call back into
//! the engine.

use std::rc::{Rc, Weak};

use glam::Vec2;

use super::convert::{pointer_to_progress, progress_to_sweep, sweep_to_position};
use super::geometry::Geometry;
use super::marker::{Marker, MarkerClickListener, MarkerSet};
use super::touch::{TouchAction, TouchPhase, TouchSession};
use crate::config::{ArcConfig, ArcStyle, SeekArcConfig, clamp_start_angle};

/// Receives progress and gesture notifications
pub trait SeekArcChangeListener {
    /// Progress is about to become `progress`; `from_user` is true for touch
    fn on_progress_changed(&self, _progress: i32, _from_user: bool) {}

    /// A gesture started
    fn on_start_tracking_touch(&self) {}

    /// A gesture ended (release or cancel)
    fn on_stop_tracking_touch(&self) {}
}

/// Last size handed to `compute_layout`, replayed when markers appear
#[derive(Debug, Clone, Copy, PartialEq)]
struct LayoutRequest {
    width: f32,
    height: f32,
    padding: f32,
}

/// A circular seek control
#[derive(Debug)]
pub struct SeekArc {
    config: ArcConfig,
    style: ArcStyle,
    geometry: Geometry,
    layout: Option<LayoutRequest>,
    progress_sweep: f32,
    thumb_position: Vec2,
    markers: MarkerSet,
    session: Option<TouchSession>,
    pressed: bool,
    listener: Option<Weak<dyn SeekArcChangeListener>>,
}

impl Default for SeekArc {
    fn default() -> Self {
        Self::new(SeekArcConfig::default())
    }
}

impl SeekArc {
    /// Build an engine; a style that fails validation is replaced by the default
    pub fn new(config: SeekArcConfig) -> Self {
        let SeekArcConfig { arc, style } = config;
        let style = match style.validate() {
            Ok(()) => style,
            Err(e) => {
                log::warn!("{e}; using default style");
                ArcStyle::default()
            }
        };
        let mut seek_arc = Self {
            config: arc.sanitized(),
            style,
            geometry: Geometry::default(),
            layout: None,
            progress_sweep: 0.0,
            thumb_position: Vec2::ZERO,
            markers: MarkerSet::new(),
            session: None,
            pressed: false,
            listener: None,
        };
        seek_arc.refresh_sweep();
        seek_arc
    }

    /// Register the change listener (held weakly)
    pub fn set_change_listener<L: SeekArcChangeListener + 'static>(&mut self, listener: &Rc<L>) {
        let weak: Weak<L> = Rc::downgrade(listener);
        self.listener = Some(weak);
    }

    pub fn clear_change_listener(&mut self) {
        self.listener = None;
    }

    fn listener(&self) -> Option<Rc<dyn SeekArcChangeListener>> {
        self.listener.as_ref().and_then(Weak::upgrade)
    }

    // === Layout ===

    /// Lay the control out in the space its host offers
    pub fn compute_layout(&mut self, width: f32, height: f32, padding: f32) -> Geometry {
        self.layout = Some(LayoutRequest {
            width,
            height,
            padding,
        });
        self.relayout();
        self.geometry
    }

    /// Replay the last layout request (if any), then reposition everything
    fn relayout(&mut self) {
        if let Some(req) = self.layout {
            let clearance = (!self.markers.is_empty()).then_some(self.style.marker_text_radius);
            self.geometry = Geometry::compute(req.width, req.height, req.padding, clearance);
            self.geometry.update_touch_ignore_radius(
                self.config.touch_inside,
                self.style.thumb_half_extent(),
            );
            log::debug!(
                "Layout {}x{}: radius {}, origin {}",
                req.width,
                req.height,
                self.geometry.radius,
                self.geometry.origin
            );
        }
        self.refresh_positions();
    }

    /// Recompute the thumb and every marker from the current sweep
    fn refresh_positions(&mut self) {
        self.thumb_position = sweep_to_position(
            self.progress_sweep,
            self.geometry.radius,
            self.geometry.origin,
            &self.config,
        );
        self.markers.recompute_positions(
            &self.geometry,
            &self.config,
            self.style.marker_text_radius,
        );
    }

    /// Sweep follows progress, max and sweep angle
    fn refresh_sweep(&mut self) {
        self.progress_sweep =
            progress_to_sweep(self.config.progress, self.config.max, self.config.sweep_angle);
        self.refresh_positions();
    }

    // === Markers ===

    /// Add a marker at `value`; rejected unless `0 <= value <= max`
    ///
    /// Labels longer than six characters are truncated. The first marker
    /// reserves label clearance, so the whole layout is recomputed.
    pub fn add_marker(
        &mut self,
        label: Option<&str>,
        value: i32,
        offset_x: f32,
        offset_y: f32,
        on_click: Option<&Rc<dyn MarkerClickListener>>,
    ) -> bool {
        let on_click = on_click.map(Rc::downgrade);
        let added = self.markers.add(
            label,
            value,
            Vec2::new(offset_x, offset_y),
            on_click,
            self.config.max,
        );
        if added {
            log::debug!("Added marker {value} ({} total)", self.markers.len());
            self.relayout();
        }
        added
    }

    pub fn markers(&self) -> &[Marker] {
        self.markers.as_slice()
    }

    // === Progress ===

    /// Set progress programmatically (`from_user = false`), clamped to `[0, max]`
    pub fn set_progress(&mut self, progress: i32) {
        self.update_progress(progress.clamp(0, self.config.max), false);
    }

    /// Notify, then commit. Listeners see the new value as an argument while
    /// the accessors still report the old one.
    fn update_progress(&mut self, progress: i32, from_user: bool) {
        if let Some(listener) = self.listener() {
            listener.on_progress_changed(progress, from_user);
        }
        self.config.progress = progress;
        self.refresh_sweep();
    }

    pub fn progress(&self) -> i32 {
        self.config.progress
    }

    /// Degrees of arc covered by the current progress
    pub fn progress_sweep(&self) -> f32 {
        self.progress_sweep
    }

    pub fn thumb_position(&self) -> Vec2 {
        self.thumb_position
    }

    // === Pointer input ===

    /// Pointer down
    pub fn press(&mut self, x: f32, y: f32) -> TouchAction {
        if !self.config.enabled {
            return TouchAction::ignored();
        }
        let pointer = Vec2::new(x, y);
        self.session = Some(TouchSession::new(pointer));
        self.pressed = true;
        if let Some(listener) = self.listener() {
            listener.on_start_tracking_touch();
        }
        TouchAction {
            progress_changed: self.update_on_touch(pointer),
            ..TouchAction::redraw()
        }
    }

    /// Pointer moved during a gesture
    pub fn move_to(&mut self, x: f32, y: f32) -> TouchAction {
        if !self.config.enabled {
            return TouchAction::ignored();
        }
        let pointer = Vec2::new(x, y);
        let Some(session) = self.session.as_mut() else {
            log::trace!("Move at {pointer} without a press");
            return TouchAction::ignored();
        };
        session.track(pointer);
        let progress_changed = self.update_on_touch(pointer);
        TouchAction {
            should_redraw: progress_changed.is_some(),
            progress_changed,
            marker_clicked: None,
        }
    }

    /// Pointer up; a short enough gesture clicks the nearest marker
    pub fn release(&mut self, x: f32, y: f32) -> TouchAction {
        let was_pressed = std::mem::replace(&mut self.pressed, false);
        let session = self.session.take();
        let action = TouchAction {
            should_redraw: was_pressed,
            ..TouchAction::ignored()
        };
        if !self.config.enabled {
            return action;
        }
        let Some(session) = session else {
            return action;
        };

        let pointer = Vec2::new(x, y);
        let marker_clicked = if session.is_click(pointer) {
            self.click_marker_at(pointer)
        } else {
            None
        };
        if let Some(listener) = self.listener() {
            listener.on_stop_tracking_touch();
        }
        TouchAction {
            marker_clicked,
            ..action
        }
    }

    /// Gesture aborted by the host; no click resolution
    pub fn cancel(&mut self) -> TouchAction {
        if !self.config.enabled {
            return TouchAction::ignored();
        }
        self.pressed = false;
        if self.session.take().is_some() {
            if let Some(listener) = self.listener() {
                listener.on_stop_tracking_touch();
            }
        }
        TouchAction::redraw()
    }

    /// Move progress under the pointer, unless it is in the dead zone or off the arc
    fn update_on_touch(&mut self, pointer: Vec2) -> Option<i32> {
        if self.geometry.ignores(pointer) {
            log::trace!("Touch at {pointer} inside ignore radius");
            return None;
        }
        let Some(progress) = pointer_to_progress(pointer, self.geometry.origin, &self.config)
        else {
            log::trace!("Touch at {pointer} off the arc");
            return None;
        };
        self.pressed = true;
        self.update_progress(progress, true);
        Some(progress)
    }

    fn click_marker_at(&self, pointer: Vec2) -> Option<i32> {
        let marker = self.markers.hit_test(pointer)?;
        let listener = marker.click_listener()?;
        let label = marker.resolved_label();
        log::debug!("Marker {} ({label}) clicked", marker.value());
        listener.on_marker_clicked(marker.value(), &label);
        Some(marker.value())
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn touch_phase(&self) -> TouchPhase {
        self.session
            .as_ref()
            .map_or(TouchPhase::Idle, TouchSession::phase)
    }

    // === Configuration ===

    pub fn config(&self) -> &ArcConfig {
        &self.config
    }

    pub fn style(&self) -> &ArcStyle {
        &self.style
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn max(&self) -> i32 {
        self.config.max
    }

    /// Set the maximum; progress is pulled down to stay within it and
    /// markers past the new maximum are dropped
    pub fn set_max(&mut self, max: i32) {
        self.config.max = max.max(0);
        self.config.progress = self.config.progress.min(self.config.max);
        self.progress_sweep =
            progress_to_sweep(self.config.progress, self.config.max, self.config.sweep_angle);
        self.markers.retain_within(self.config.max);
        // Dropping the last marker gives back its label clearance
        self.relayout();
    }

    pub fn start_angle(&self) -> i32 {
        self.config.start_angle
    }

    /// Start angles outside 0..=360 reset to 0
    pub fn set_start_angle(&mut self, start_angle: i32) {
        self.config.start_angle = clamp_start_angle(start_angle);
        self.refresh_positions();
    }

    pub fn sweep_angle(&self) -> i32 {
        self.config.sweep_angle
    }

    pub fn set_sweep_angle(&mut self, sweep_angle: i32) {
        self.config.sweep_angle = sweep_angle.clamp(0, 360);
        self.refresh_sweep();
    }

    pub fn arc_rotation(&self) -> i32 {
        self.config.rotation
    }

    pub fn set_arc_rotation(&mut self, rotation: i32) {
        self.config.rotation = rotation;
        self.refresh_positions();
    }

    pub fn is_clockwise(&self) -> bool {
        self.config.clockwise
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.config.clockwise = clockwise;
        self.refresh_positions();
    }

    pub fn is_touch_inside(&self) -> bool {
        self.config.touch_inside
    }

    pub fn set_touch_inside(&mut self, touch_inside: bool) {
        self.config.touch_inside = touch_inside;
        self.geometry
            .update_touch_ignore_radius(touch_inside, self.style.thumb_half_extent());
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
    }

    // === Style ===

    pub fn arc_width(&self) -> f32 {
        self.style.arc_width
    }

    pub fn set_arc_width(&mut self, width: f32) {
        self.style.arc_width = width;
    }

    pub fn progress_width(&self) -> f32 {
        self.style.progress_width
    }

    pub fn set_progress_width(&mut self, width: f32) {
        self.style.progress_width = width;
    }

    pub fn arc_color(&self) -> u32 {
        self.style.arc_color
    }

    pub fn set_arc_color(&mut self, color: u32) {
        self.style.arc_color = color;
    }

    pub fn progress_color(&self) -> u32 {
        self.style.progress_color
    }

    pub fn set_progress_color(&mut self, color: u32) {
        self.style.progress_color = color;
    }

    pub fn has_rounded_edges(&self) -> bool {
        self.style.rounded_edges
    }

    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.style.rounded_edges = rounded;
    }

    pub fn marker_text_color_empty(&self) -> u32 {
        self.style.empty_text_color()
    }

    pub fn set_marker_text_color_empty(&mut self, color: u32) {
        self.style.marker_text_color_empty = Some(color);
    }

    pub fn marker_text_color_fill(&self) -> u32 {
        self.style.fill_text_color()
    }

    pub fn set_marker_text_color_fill(&mut self, color: u32) {
        self.style.marker_text_color_fill = Some(color);
    }

    pub fn marker_text_size(&self) -> f32 {
        self.style.marker_text_size
    }

    pub fn set_marker_text_size(&mut self, size: f32) {
        self.style.marker_text_size = size;
    }

    pub fn marker_text_radius(&self) -> f32 {
        self.style.marker_text_radius
    }

    /// Non-positive radii are ignored
    pub fn set_marker_text_radius(&mut self, radius: f32) {
        if radius > 0.0 {
            self.style.marker_text_radius = radius;
            self.relayout();
        }
    }

    /// Intrinsic thumb size; feeds the ignore radius when touch-inside is off
    pub fn set_thumb_size(&mut self, width: f32, height: f32) {
        self.style.thumb_size = Vec2::new(width, height);
        self.geometry
            .update_touch_ignore_radius(self.config.touch_inside, self.style.thumb_half_extent());
    }
}

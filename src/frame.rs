//! Render-facing snapshot of a seek arc
//!
//! The engine never draws. A renderer captures a `DrawFrame` after each
//! change and paints from it:
//! - the two arcs use drawing angles (0° at 3 o'clock, growing clockwise) and,
//!   when `mirrored`, are flipped horizontally about the arc center
//! - thumb and marker positions are already in final screen space

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::arc::{Rect, SeekArc};
use crate::consts::ANGLE_OFFSET;

/// Stroke parameters for one arc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub width: f32,
    /// Packed ARGB
    pub color: u32,
    pub rounded: bool,
}

/// One marker as it should appear
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerGlyph {
    pub value: i32,
    pub position: Vec2,
    pub text_position: Vec2,
    pub label: String,
    /// Progress has reached this marker
    pub filled: bool,
    pub text_color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawFrame {
    pub arc_rect: Rect,
    /// Drawing angle where both arcs begin
    pub arc_start: i32,
    pub arc_sweep: i32,
    pub progress_sweep: f32,
    pub mirrored: bool,
    pub arc: Stroke,
    pub progress: Stroke,
    /// Hidden while the control is disabled
    pub thumb: Option<Vec2>,
    pub pressed: bool,
    pub marker_text_size: f32,
    pub markers: Vec<MarkerGlyph>,
}

impl DrawFrame {
    pub fn capture(arc: &SeekArc) -> Self {
        let config = arc.config();
        let style = arc.style();
        let progress = arc.progress();

        let markers = arc
            .markers()
            .iter()
            .map(|marker| {
                let filled = marker.is_filled(progress);
                MarkerGlyph {
                    value: marker.value(),
                    position: marker.position(),
                    text_position: marker.text_position(),
                    label: marker.resolved_label(),
                    filled,
                    text_color: if filled {
                        style.fill_text_color()
                    } else {
                        style.empty_text_color()
                    },
                }
            })
            .collect();

        Self {
            arc_rect: arc.geometry().arc_rect,
            arc_start: config.start_angle + ANGLE_OFFSET + config.rotation,
            arc_sweep: config.sweep_angle,
            progress_sweep: arc.progress_sweep(),
            mirrored: !config.clockwise,
            arc: Stroke {
                width: style.arc_width,
                color: style.arc_color,
                rounded: style.rounded_edges,
            },
            progress: Stroke {
                width: style.progress_width,
                color: style.progress_color,
                rounded: style.rounded_edges,
            },
            thumb: config.enabled.then(|| arc.thumb_position()),
            pressed: arc.is_pressed(),
            marker_text_size: style.marker_text_size,
            markers,
        }
    }
}

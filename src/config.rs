//! Control configuration and appearance
//!
//! Supplied by the host (attribute/theme loading lives outside the engine).
//! Every field has a default, so partial JSON documents are accepted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Default background arc color (light gray, packed ARGB)
pub const DEFAULT_ARC_COLOR: u32 = 0xFFCC_CCCC;
/// Default progress arc color (light blue, packed ARGB)
pub const DEFAULT_PROGRESS_COLOR: u32 = 0xFF33_B5E5;
/// Default thumb drawable size
pub const DEFAULT_THUMB_SIZE: Vec2 = Vec2::new(24.0, 24.0);

/// Behavioral configuration of the arc
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcConfig {
    /// Maximum value (progress runs 0..=max)
    pub max: i32,
    /// Current value
    pub progress: i32,
    /// Where the arc starts, relative to 12 o'clock (0..=360)
    pub start_angle: i32,
    /// Angular extent of the arc (0..=360)
    pub sweep_angle: i32,
    /// Extra rotation of the whole control
    pub rotation: i32,
    /// Progress grows clockwise (false mirrors the control horizontally)
    pub clockwise: bool,
    /// Touches inside the arc (not just on it) move the thumb
    pub touch_inside: bool,
    /// Control reacts to touch and shows its thumb
    pub enabled: bool,
}

impl Default for ArcConfig {
    fn default() -> Self {
        Self {
            max: DEFAULT_MAX,
            progress: 0,
            start_angle: 0,
            sweep_angle: DEFAULT_SWEEP_ANGLE,
            rotation: 0,
            clockwise: true,
            touch_inside: true,
            enabled: true,
        }
    }
}

impl ArcConfig {
    /// Apply construction-time clamps
    ///
    /// A start angle past 360 resets to 0 rather than saturating.
    pub fn sanitized(mut self) -> Self {
        self.max = self.max.max(0);
        self.progress = self.progress.clamp(0, self.max);
        self.sweep_angle = self.sweep_angle.clamp(0, 360);
        self.start_angle = clamp_start_angle(self.start_angle);
        self
    }
}

/// Start angles outside 0..=360 fall back to 0
pub(crate) fn clamp_start_angle(angle: i32) -> i32 {
    if (0..=360).contains(&angle) { angle } else { 0 }
}

/// Visual configuration passed through to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcStyle {
    /// Stroke width of the background arc
    pub arc_width: f32,
    /// Stroke width of the progress arc
    pub progress_width: f32,
    pub arc_color: u32,
    pub progress_color: u32,
    /// Round stroke caps instead of square ones
    pub rounded_edges: bool,
    /// Label color for markers above the current progress (defaults to `arc_color`)
    pub marker_text_color_empty: Option<u32>,
    /// Label color for reached markers (defaults to `progress_color`)
    pub marker_text_color_fill: Option<u32>,
    pub marker_text_size: f32,
    /// Distance of marker labels beyond the arc; also reserved as layout clearance
    pub marker_text_radius: f32,
    /// Intrinsic size of the thumb drawable
    pub thumb_size: Vec2,
}

impl Default for ArcStyle {
    fn default() -> Self {
        Self {
            arc_width: DEFAULT_ARC_WIDTH,
            progress_width: DEFAULT_PROGRESS_WIDTH,
            arc_color: DEFAULT_ARC_COLOR,
            progress_color: DEFAULT_PROGRESS_COLOR,
            rounded_edges: false,
            marker_text_color_empty: None,
            marker_text_color_fill: None,
            marker_text_size: MARKER_TEXT_SIZE,
            marker_text_radius: TEXT_RADIUS,
            thumb_size: DEFAULT_THUMB_SIZE,
        }
    }
}

impl ArcStyle {
    /// Effective label color for unreached markers
    pub fn empty_text_color(&self) -> u32 {
        self.marker_text_color_empty.unwrap_or(self.arc_color)
    }

    /// Effective label color for reached markers
    pub fn fill_text_color(&self) -> u32 {
        self.marker_text_color_fill.unwrap_or(self.progress_color)
    }

    /// Half of the thumb's smaller dimension
    pub fn thumb_half_extent(&self) -> f32 {
        self.thumb_size.min_element() / 2.0
    }

    /// Reject values no renderer can use
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("arc_width", self.arc_width),
            ("progress_width", self.progress_width),
            ("marker_text_size", self.marker_text_size),
            ("thumb_size.x", self.thumb_size.x),
            ("thumb_size.y", self.thumb_size.y),
        ];
        for (field, value) in dims {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("expected a non-negative number, got {value}"),
                });
            }
        }
        if !self.marker_text_radius.is_finite() || self.marker_text_radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "marker_text_radius",
                reason: format!("expected a positive number, got {}", self.marker_text_radius),
            });
        }
        Ok(())
    }
}

/// Complete control configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeekArcConfig {
    pub arc: ArcConfig,
    pub style: ArcStyle,
}

impl SeekArcConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(json)?;
        config.style.validate()?;
        config.arc = config.arc.sanitized();
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load configuration, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using default config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_widget() {
        let config = SeekArcConfig::default();
        assert_eq!(config.arc.max, 100);
        assert_eq!(config.arc.progress, 0);
        assert_eq!(config.arc.sweep_angle, 360);
        assert!(config.arc.clockwise);
        assert!(config.arc.touch_inside);
        assert!(config.arc.enabled);
        assert_eq!(config.style.marker_text_radius, 40.0);
        assert_eq!(config.style.marker_text_size, 18.0);
    }

    #[test]
    fn test_sanitize_clamps() {
        let arc = ArcConfig {
            max: 50,
            progress: 80,
            start_angle: 400,
            sweep_angle: 500,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(arc.progress, 50);
        assert_eq!(arc.start_angle, 0);
        assert_eq!(arc.sweep_angle, 360);

        let arc = ArcConfig {
            max: -3,
            progress: -1,
            start_angle: -10,
            sweep_angle: -10,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(arc.max, 0);
        assert_eq!(arc.progress, 0);
        assert_eq!(arc.start_angle, 0);
        assert_eq!(arc.sweep_angle, 0);
    }

    #[test]
    fn test_partial_json() {
        let config = SeekArcConfig::from_json(
            r#"{ "arc": { "max": 10, "progress": 30, "clockwise": false },
                 "style": { "rounded_edges": true } }"#,
        )
        .unwrap();
        assert_eq!(config.arc.max, 10);
        assert_eq!(config.arc.progress, 10);
        assert!(!config.arc.clockwise);
        assert!(config.style.rounded_edges);
        assert_eq!(config.style.arc_width, DEFAULT_ARC_WIDTH);
    }

    #[test]
    fn test_text_colors_fall_back_to_arc_colors() {
        let mut style = ArcStyle::default();
        assert_eq!(style.empty_text_color(), style.arc_color);
        assert_eq!(style.fill_text_color(), style.progress_color);

        style.marker_text_color_fill = Some(0xFF00_0000);
        assert_eq!(style.fill_text_color(), 0xFF00_0000);
    }

    #[test]
    fn test_invalid_json() {
        let err = SeekArcConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = SeekArcConfig::from_json(r#"{ "style": { "marker_text_radius": 0.0 } }"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "marker_text_radius",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let err = SeekArcConfig::load("/nonexistent/seek-arc.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/seek-arc.json"));

        let config = SeekArcConfig::load_or_default("/nonexistent/seek-arc.json");
        assert_eq!(config, SeekArcConfig::default());
    }
}

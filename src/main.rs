//! Seek Arc demo
//!
//! Lays out a control, adds a few markers, replays a scripted tap and drag,
//! and prints the resulting draw frame as JSON.
//!
//! Usage: `seek-arc [config.json]`

use std::rc::Rc;

use seek_arc::arc::{MarkerClickListener, SeekArcChangeListener};
use seek_arc::{DrawFrame, SeekArc, SeekArcConfig};

/// Control size used for the demo layout
const DEMO_SIZE: f32 = 400.0;
const DEMO_PADDING: f32 = 16.0;

struct LogListener;

impl SeekArcChangeListener for LogListener {
    fn on_progress_changed(&self, progress: i32, from_user: bool) {
        log::info!("Progress -> {progress} (from user: {from_user})");
    }

    fn on_start_tracking_touch(&self) {
        log::info!("Start tracking touch");
    }

    fn on_stop_tracking_touch(&self) {
        log::info!("Stop tracking touch");
    }
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => SeekArcConfig::load_or_default(path),
        None => SeekArcConfig::default(),
    };

    let mut arc = SeekArc::new(config);
    let listener = Rc::new(LogListener);
    arc.set_change_listener(&listener);

    let on_marker: Rc<dyn MarkerClickListener> = Rc::new(|value: i32, label: &str| {
        log::info!("Marker {label} clicked (value {value})");
    });
    for (label, value) in [(None, 20), (Some("label"), 70), (None, 40)] {
        if !arc.add_marker(label, value, 0.0, 0.0, Some(&on_marker)) {
            log::warn!("Marker {value} does not fit max {}", arc.max());
        }
    }

    let geometry = arc.compute_layout(DEMO_SIZE, DEMO_SIZE, DEMO_PADDING);
    log::info!(
        "Arc radius {} at {} (measured {})",
        geometry.radius,
        geometry.origin,
        geometry.measured_size
    );

    // Tap the first marker
    if let Some(target) = arc.markers().first().map(|m| m.position()) {
        arc.press(target.x, target.y);
        let action = arc.release(target.x + 2.0, target.y + 2.0);
        log::info!("Tap: {action:?}");
    }

    // Drag from the top of the arc a quarter turn around
    let origin = geometry.origin;
    let radius = geometry.radius;
    arc.press(origin.x, origin.y - radius);
    for step in 1..=9 {
        let theta = (step as f32 * 10.0).to_radians();
        arc.move_to(origin.x + radius * theta.sin(), origin.y - radius * theta.cos());
    }
    let action = arc.release(origin.x + radius, origin.y);
    log::info!("Drag: {action:?}, progress {}", arc.progress());

    match serde_json::to_string_pretty(&DrawFrame::capture(&arc)) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize frame: {e}"),
    }
}

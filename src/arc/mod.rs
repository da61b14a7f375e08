//! Seek arc engine
//!
//! All geometry and interaction logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - No global state; one `SeekArc` owns everything it derives
//! - Synchronous, single-threaded; pointer events are handled in arrival order

pub mod convert;
pub mod engine;
pub mod geometry;
pub mod marker;
pub mod touch;

pub use convert::{
    angle_from_pointer, angle_to_progress, pointer_to_progress, progress_to_sweep,
    value_to_position,
};
pub use engine::{SeekArc, SeekArcChangeListener};
pub use geometry::{Geometry, Rect};
pub use marker::{Marker, MarkerClickListener, MarkerSet};
pub use touch::{TouchAction, TouchPhase, TouchSession};

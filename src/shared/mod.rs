//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die sowohl `app` als auch das Binary lesen.

pub mod options;

pub use options::SketchOptions;
pub use options::{CANVAS_HEIGHT, CANVAS_WIDTH, PICK_RADIUS};

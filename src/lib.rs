//! Bézier-Sketch Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod script;
pub mod shared;

pub use app::{SketchCommand, SketchController, SketchIntent, SketchState};
pub use core::{
    BezierCurve, CurveKind, DrawRole, Figure, InteractionMode, LineSegment, PointRef, PointSlot,
    Scene, SceneError, SceneSettings,
};
pub use render::{write_svg, RecordingRenderer, Renderer, SvgExport};
pub use script::{parse_script, run_script};
pub use shared::SketchOptions;

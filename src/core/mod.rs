//! Core-Domänentypen: Geometrie, Figur-Zustandsmaschine, Szene, Punkt-Index.

pub mod figure;
pub mod geometry;
pub mod scene;
pub mod spatial;
mod style;

pub use figure::{AddOutcome, CurveKind, DrawRole, Figure, FigureError, PointSlot, Transition};
pub use geometry::{distance, BezierCurve, LineSegment};
pub use scene::{InteractionMode, Scene, SceneError, SceneSettings, DEFAULT_PICK_RADIUS};
pub use spatial::{PointIndex, PointMatch, PointRef};
pub use style::SketchStyle;

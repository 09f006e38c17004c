//! Renderer-Vertrag und mitgelieferte Renderer-Implementierungen.
//!
//! Der Core zeichnet ausschließlich über den [`Renderer`]-Trait und bekommt
//! dafür opake Handles zurück. Wie ein Element tatsächlich dargestellt wird
//! (SVG, GPU, DOM), entscheidet die Implementierung.
//!
//! - `recording`: In-Memory-Renderer, hält alle sichtbaren Elemente in Zeichenreihenfolge
//! - `svg`: Export der sichtbaren Elemente als SVG-Dokument

pub mod recording;
pub mod svg;

pub use recording::{ElementId, RecordingRenderer};
pub use svg::{write_svg, SvgExport};

use crate::core::{BezierCurve, LineSegment};
use glam::Vec2;

/// RGBA-Farbe mit Komponenten in [0, 1].
pub type Color = [f32; 4];

/// Ein darstellbares Element inklusive Stil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Kreis-Markierung (Anker, Steuerpunkt, Highlight)
    Marker {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// Gerade Hilfslinie
    Line { segment: LineSegment, color: Color },
    /// Bézier-Kurve
    Curve { curve: BezierCurve, color: Color },
}

/// Externer Zeichen-Kollaborateur.
///
/// `remove` muss idempotent sein: ein bereits entferntes oder unbekanntes
/// Handle wird stillschweigend ignoriert.
pub trait Renderer {
    /// Opakes Handle auf ein dargestelltes Element.
    type Handle: Copy + Eq + std::fmt::Debug;

    fn draw_marker(&mut self, center: Vec2, radius: f32, color: Color) -> Self::Handle;

    fn draw_line(&mut self, segment: LineSegment, color: Color) -> Self::Handle;

    fn draw_curve(&mut self, curve: BezierCurve, color: Color) -> Self::Handle;

    /// Entfernt ein Element. Unbekannte Handles sind ein No-op.
    fn remove(&mut self, handle: Self::Handle);

    /// Entfernt alle aktuell dargestellten Elemente.
    fn clear_all(&mut self);

    /// Zeichnet ein beliebiges [`Shape`] über die passende `draw_*`-Methode.
    fn draw_shape(&mut self, shape: Shape) -> Self::Handle {
        match shape {
            Shape::Marker {
                center,
                radius,
                color,
            } => self.draw_marker(center, radius, color),
            Shape::Line { segment, color } => self.draw_line(segment, color),
            Shape::Curve { curve, color } => self.draw_curve(curve, color),
        }
    }
}

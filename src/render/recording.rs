//! In-Memory-Renderer: merkt sich alle sichtbaren Elemente in Zeichenreihenfolge.
//!
//! Dient als Backend für den SVG-Export und als beobachtbarer Renderer in Tests.

use super::{Color, Renderer, Shape};
use crate::core::{BezierCurve, LineSegment};
use glam::Vec2;
use indexmap::IndexMap;

/// Handle eines vom [`RecordingRenderer`] gezeichneten Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Renderer, der Elemente nur aufzeichnet statt sie anzuzeigen.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    elements: IndexMap<ElementId, Shape>,
    next_id: u64,
    removed_count: usize,
}

impl RecordingRenderer {
    /// Erstellt einen leeren Renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Anzahl aktuell sichtbarer Elemente.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Gibt `true` zurück, wenn nichts sichtbar ist.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Sichtbares Element zu einem Handle.
    pub fn get(&self, id: ElementId) -> Option<&Shape> {
        self.elements.get(&id)
    }

    /// Gibt `true` zurück, wenn das Handle noch sichtbar ist.
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Alle sichtbaren Elemente in Zeichenreihenfolge.
    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Shape)> {
        self.elements.iter().map(|(id, shape)| (*id, shape))
    }

    /// Anzahl der bisher tatsächlich entfernten Elemente (ohne No-op-Aufrufe).
    pub fn removed_count(&self) -> usize {
        self.removed_count
    }

    fn push(&mut self, shape: Shape) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, shape);
        id
    }
}

impl Renderer for RecordingRenderer {
    type Handle = ElementId;

    fn draw_marker(&mut self, center: Vec2, radius: f32, color: Color) -> ElementId {
        self.push(Shape::Marker {
            center,
            radius,
            color,
        })
    }

    fn draw_line(&mut self, segment: LineSegment, color: Color) -> ElementId {
        self.push(Shape::Line { segment, color })
    }

    fn draw_curve(&mut self, curve: BezierCurve, color: Color) -> ElementId {
        self.push(Shape::Curve { curve, color })
    }

    fn remove(&mut self, handle: ElementId) {
        // shift_remove hält die Zeichenreihenfolge der übrigen Elemente stabil
        if self.elements.shift_remove(&handle).is_some() {
            self.removed_count += 1;
        } else {
            log::debug!("remove({handle:?}) ignoriert: Element nicht vorhanden");
        }
    }

    fn clear_all(&mut self) {
        self.removed_count += self.elements.len();
        self.elements.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = [0.0, 0.0, 0.0, 1.0];

    #[test]
    fn draw_calls_return_distinct_handles_in_order() {
        let mut renderer = RecordingRenderer::new();
        let a = renderer.draw_marker(Vec2::new(1.0, 2.0), 4.0, BLACK);
        let b = renderer.draw_line(LineSegment::new(Vec2::ZERO, Vec2::ONE), BLACK);

        assert_ne!(a, b);
        let ids: Vec<ElementId> = renderer.elements().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut renderer = RecordingRenderer::new();
        let a = renderer.draw_marker(Vec2::ZERO, 2.0, BLACK);

        renderer.remove(a);
        renderer.remove(a);
        renderer.remove(ElementId(999));

        assert!(renderer.is_empty());
        assert_eq!(renderer.removed_count(), 1);
    }

    #[test]
    fn clear_all_empties_renderer_and_keeps_ids_unique() {
        let mut renderer = RecordingRenderer::new();
        let a = renderer.draw_marker(Vec2::ZERO, 2.0, BLACK);
        renderer.draw_marker(Vec2::ONE, 2.0, BLACK);

        renderer.clear_all();
        assert!(renderer.is_empty());

        let c = renderer.draw_marker(Vec2::ZERO, 2.0, BLACK);
        assert_ne!(a, c);
        assert!(!renderer.contains(a));
        assert!(renderer.contains(c));
    }
}

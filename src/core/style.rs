//! Darstellungsparameter für Figuren und Edit-Highlight.

use crate::render::Color;

/// Radien und Farben aller Elemente, die der Core zeichnen lässt.
///
/// Wird aus den `SketchOptions` abgeleitet, siehe `SketchOptions::sketch_style`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SketchStyle {
    /// Radius der Anker-Markierungen (Start, Ende)
    pub anchor_radius: f32,
    /// Radius der Steuerpunkt-Markierungen
    pub control_radius: f32,
    /// Radius der Highlight-Markierung im Edit-Modus
    pub highlight_radius: f32,
    pub anchor_color: Color,
    pub control_color: Color,
    /// Farbe der Sehne Start→Ende
    pub chord_color: Color,
    /// Farbe der Hilfslinien zu den Steuerpunkten
    pub guide_color: Color,
    pub curve_color: Color,
    pub highlight_color: Color,
}

impl Default for SketchStyle {
    fn default() -> Self {
        const BLACK: Color = [0.0, 0.0, 0.0, 1.0];
        const RED: Color = [1.0, 0.0, 0.0, 1.0];
        Self {
            anchor_radius: 4.0,
            control_radius: 2.0,
            highlight_radius: 6.0,
            anchor_color: BLACK,
            control_color: BLACK,
            chord_color: BLACK,
            guide_color: RED,
            curve_color: BLACK,
            highlight_color: RED,
        }
    }
}

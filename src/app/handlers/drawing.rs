//! Handler für den Zeichenmodus: Punkte setzen, Kurventyp, Leeren.

use crate::app::SketchState;
use crate::core::CurveKind;
use crate::render::Renderer;
use glam::Vec2;

/// Hängt einen Punkt an die aktuelle Figur an oder beginnt eine neue.
pub fn add_point<R: Renderer>(state: &mut SketchState<R>, pos: Vec2) {
    let placed = state.scene.add_click_point(pos);
    state.notice = None;
    log::debug!("Punkt {placed:?} bei {pos} gesetzt");
}

/// Setzt den Kurventyp für künftige Figuren.
pub fn set_curve_kind<R: Renderer>(state: &mut SketchState<R>, kind: CurveKind) {
    state.scene.set_curve_kind(kind);
    state.options.curve_kind = kind;
}

/// Entfernt alle Figuren.
pub fn clear<R: Renderer>(state: &mut SketchState<R>) {
    state.scene.clear();
    state.notice = None;
}

//! Handler für den Edit-Modus: Punktauswahl und Neuplatzierung.

use crate::app::SketchState;
use crate::core::SceneError;
use crate::render::Renderer;
use glam::Vec2;

/// Wechselt in die Punktauswahl.
///
/// Eine unvollständige Figur lehnt den Wechsel ab; das ist kein Fehler,
/// sondern wird als Hinweis im State vermerkt.
pub fn begin_selection<R: Renderer>(state: &mut SketchState<R>) -> anyhow::Result<()> {
    match state.scene.begin_point_selection() {
        Ok(()) => {
            state.notice = None;
            Ok(())
        }
        Err(err @ SceneError::FigureIncomplete) => {
            log::info!("Edit-Modus nicht verfügbar: {err}");
            state.notice = Some(err.to_string());
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Verlässt den Edit-Modus.
pub fn end_selection<R: Renderer>(state: &mut SketchState<R>) {
    state.scene.end_point_selection();
    state.notice = None;
}

/// Wählt den nächstgelegenen Punkt im Pick-Radius aus.
pub fn select_nearest<R: Renderer>(state: &mut SketchState<R>, pos: Vec2) -> anyhow::Result<()> {
    if state.scene.select_nearest_point(pos)?.is_none() {
        log::debug!("Kein Punkt bei {pos} in Reichweite");
    }
    Ok(())
}

/// Verschiebt den ausgewählten Punkt.
pub fn place_selected<R: Renderer>(state: &mut SketchState<R>, pos: Vec2) -> anyhow::Result<()> {
    let moved = state.scene.place_selected_point(pos)?;
    log::debug!("Punkt {moved:?} nach {pos} verschoben");
    Ok(())
}

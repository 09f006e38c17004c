//! Application State: Szene, Optionen und Statuszeile.

use crate::core::{InteractionMode, Scene};
use crate::render::Renderer;
use crate::shared::SketchOptions;

/// Zentrale Datenhaltung einer Sketch-Sitzung.
#[derive(Debug)]
pub struct SketchState<R: Renderer> {
    /// Alle Figuren samt Renderer
    pub scene: Scene<R>,
    /// Laufzeit-Optionen (Canvas, Radien, Farben)
    pub options: SketchOptions,
    /// Hinweis zur letzten abgelehnten Aktion (z.B. Edit bei unvollständiger Kurve)
    pub notice: Option<String>,
}

impl<R: Renderer> SketchState<R> {
    /// Erstellt einen leeren State mit den gegebenen Optionen.
    pub fn new(renderer: R, options: SketchOptions) -> Self {
        let scene = Scene::new(renderer, options.scene_settings());
        Self {
            scene,
            options,
            notice: None,
        }
    }

    /// Statuszeile passend zum aktuellen Modus.
    pub fn status_text(&self) -> &'static str {
        match self.scene.mode() {
            InteractionMode::Drawing => "Kurve zeichnen",
            InteractionMode::SelectingPoint => "Punkt zum Ändern wählen",
            InteractionMode::PlacingPoint => "Neue Position für den Punkt wählen",
        }
    }

    /// Ob der Edit-Schalter bedienbar ist: nur ohne unvollständige Figur.
    pub fn edit_toggle_enabled(&self) -> bool {
        !self.scene.has_incomplete_figure()
    }
}

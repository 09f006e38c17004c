//! Szene: alle Figuren, Interaktionsmodus und Edit-Kontext.
//!
//! Die Szene besitzt den Renderer und reicht ihn an die Figur-Operationen
//! weiter. Auf die Handle-Slots einer Figur greift sie nie direkt zu.

use super::figure::{AddOutcome, CurveKind, Figure, FigureError, PointSlot};
use super::spatial::{PointIndex, PointMatch, PointRef};
use super::style::SketchStyle;
use crate::render::Renderer;
use glam::Vec2;

/// Standard-Pick-Radius für die Punktauswahl im Edit-Modus.
pub const DEFAULT_PICK_RADIUS: f32 = 20.0;

/// Interaktionsmodus der Szene.
///
/// [`Scene::clear`] behält den Modus, nur `PlacingPoint` fällt mangels
/// Auswahl auf `SelectingPoint` zurück.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    /// Klicks erweitern die aktuelle Figur oder beginnen eine neue
    #[default]
    Drawing,
    /// Edit-Phase 1: Klick wählt den nächstgelegenen Punkt
    SelectingPoint,
    /// Edit-Phase 2: Klick setzt die neue Position des gewählten Punktes
    PlacingPoint,
}

/// Fehler bei Szenen-Operationen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// Edit-Modus angefordert, während die letzte Figur unvollständig ist
    #[error("die aktuelle Kurve ist noch nicht vollständig")]
    FigureIncomplete,
    /// Operation im falschen Modus aufgerufen
    #[error("Operation erwartet Modus {expected:?}, aktiv ist {actual:?}")]
    ModeMismatch {
        expected: InteractionMode,
        actual: InteractionMode,
    },
    /// Ausgewählter Punkt verweist auf keine existierende Figur
    #[error("Figur {0} existiert nicht")]
    UnknownFigure(usize),
    #[error(transparent)]
    Figure(#[from] FigureError),
}

/// Einstellungen, die beim Anlegen der Szene übergeben werden.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSettings {
    /// Grad für neu begonnene Figuren
    pub curve_kind: CurveKind,
    /// Maximaler Abstand für die Punktauswahl (inklusive)
    pub pick_radius: f32,
    pub style: SketchStyle,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            curve_kind: CurveKind::default(),
            pick_radius: DEFAULT_PICK_RADIUS,
            style: SketchStyle::default(),
        }
    }
}

/// Transienter Zustand zwischen Punktauswahl und Neuplatzierung.
#[derive(Debug, Clone, Copy)]
struct EditContext<H> {
    selected: PointRef,
    highlight: H,
}

/// Sitzungsweiter Besitzer aller Figuren.
#[derive(Debug)]
pub struct Scene<R: Renderer> {
    renderer: R,
    figures: Vec<Figure<R::Handle>>,
    mode: InteractionMode,
    edit: Option<EditContext<R::Handle>>,
    settings: SceneSettings,
}

impl<R: Renderer> Scene<R> {
    /// Erstellt eine leere Szene im Zeichenmodus.
    pub fn new(renderer: R, settings: SceneSettings) -> Self {
        Self {
            renderer,
            figures: Vec::new(),
            mode: InteractionMode::Drawing,
            edit: None,
            settings,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Gibt den Renderer zurück und verwirft die Szene.
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub fn figures(&self) -> &[Figure<R::Handle>] {
        &self.figures
    }

    pub fn figure(&self, index: usize) -> Option<&Figure<R::Handle>> {
        self.figures.get(index)
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn settings(&self) -> &SceneSettings {
        &self.settings
    }

    /// Grad, mit dem die nächste neue Figur beginnt.
    pub fn curve_kind(&self) -> CurveKind {
        self.settings.curve_kind
    }

    /// Ändert den Grad für künftige Figuren; eine begonnene Figur behält ihren.
    pub fn set_curve_kind(&mut self, kind: CurveKind) {
        if self.settings.curve_kind != kind {
            log::info!("Kurventyp für neue Figuren: {}", kind.label());
        }
        self.settings.curve_kind = kind;
    }

    /// Aktuell zum Verschieben ausgewählter Punkt.
    pub fn selected_point(&self) -> Option<PointRef> {
        self.edit.map(|ctx| ctx.selected)
    }

    /// Handle der Highlight-Markierung, solange ein Punkt ausgewählt ist.
    pub fn highlight_handle(&self) -> Option<R::Handle> {
        self.edit.map(|ctx| ctx.highlight)
    }

    /// Koordinate eines gesetzten Punktes.
    pub fn point(&self, point: PointRef) -> Option<Vec2> {
        self.figures.get(point.figure)?.point(point.slot)
    }

    /// True wenn die letzte Figur noch Punkte erwartet.
    pub fn has_incomplete_figure(&self) -> bool {
        self.figures.last().is_some_and(|figure| !figure.is_complete())
    }

    /// Alle gesetzten Punkte aller Figuren mit ihrer Adresse, in Szenen-Reihenfolge.
    pub fn points(&self) -> impl Iterator<Item = (PointRef, Vec2)> + '_ {
        self.figures.iter().enumerate().flat_map(|(figure, fig)| {
            PointSlot::ALL
                .iter()
                .zip(fig.points())
                .map(move |(slot, pos)| (PointRef { figure, slot: *slot }, *pos))
        })
    }

    // --- Zeichenmodus ---

    /// Übernimmt einen Klick im Zeichenmodus und gibt die Adresse des gesetzten Punktes zurück.
    ///
    /// Ist die letzte Figur vollständig (oder meldet sie Overflow), beginnt mit
    /// dem Punkt eine neue Figur des aktuell eingestellten Grades.
    pub fn add_click_point(&mut self, pos: Vec2) -> PointRef {
        let needs_new_figure = self.figures.last().is_none_or(Figure::is_complete);
        if !needs_new_figure {
            let figure = self.figures.len() - 1;
            if let Some(last) = self.figures.last_mut() {
                match last.add_point(pos, &mut self.renderer, &self.settings.style) {
                    AddOutcome::Added(slot) => return PointRef { figure, slot },
                    AddOutcome::Overflow => {
                        log::debug!("Figur {figure} voll, {pos} beginnt neue Figur");
                    }
                }
            }
        }
        self.start_figure(pos)
    }

    fn start_figure(&mut self, pos: Vec2) -> PointRef {
        let kind = self.settings.curve_kind;
        let mut figure = Figure::new(kind);
        let outcome = figure.add_point(pos, &mut self.renderer, &self.settings.style);
        self.figures.push(figure);

        let index = self.figures.len() - 1;
        log::info!("Figur {index} begonnen ({})", kind.label());
        let slot = match outcome {
            AddOutcome::Added(slot) => slot,
            AddOutcome::Overflow => PointSlot::Start,
        };
        PointRef {
            figure: index,
            slot,
        }
    }

    // --- Edit-Modus ---

    /// Wechselt in die Punktauswahl.
    ///
    /// Abgelehnt mit [`SceneError::FigureIncomplete`], solange die letzte Figur
    /// unvollständig ist; der Modus bleibt dann unverändert.
    pub fn begin_point_selection(&mut self) -> Result<(), SceneError> {
        if self.has_incomplete_figure() {
            log::debug!("Edit-Modus abgelehnt: letzte Figur unvollständig");
            return Err(SceneError::FigureIncomplete);
        }
        if self.mode == InteractionMode::Drawing {
            self.mode = InteractionMode::SelectingPoint;
            log::debug!("Edit-Modus: Punktauswahl");
        }
        Ok(())
    }

    /// Verlässt den Edit-Modus; eine offene Auswahl wird verworfen.
    pub fn end_point_selection(&mut self) {
        self.drop_selection();
        if self.mode != InteractionMode::Drawing {
            log::debug!("Edit-Modus beendet");
        }
        self.mode = InteractionMode::Drawing;
    }

    /// Wählt den nächstgelegenen Punkt aller Figuren aus.
    ///
    /// Liegt kein Punkt innerhalb des Pick-Radius, bleibt alles unverändert
    /// und es wird `Ok(None)` zurückgegeben.
    pub fn select_nearest_point(&mut self, pos: Vec2) -> Result<Option<PointMatch>, SceneError> {
        self.expect_mode(InteractionMode::SelectingPoint)?;

        let index = PointIndex::from_points(self.points());
        let Some(hit) = index.nearest_within(pos, self.settings.pick_radius) else {
            log::debug!("Kein Punkt im Umkreis {} um {pos}", self.settings.pick_radius);
            return Ok(None);
        };

        let style = &self.settings.style;
        let highlight =
            self.renderer
                .draw_marker(hit.position, style.highlight_radius, style.highlight_color);
        self.edit = Some(EditContext {
            selected: hit.point,
            highlight,
        });
        self.mode = InteractionMode::PlacingPoint;
        log::debug!("Punkt {:?} ausgewählt ({:.1} entfernt)", hit.point, hit.distance);
        Ok(Some(hit))
    }

    /// Verschiebt den ausgewählten Punkt nach `pos` und zeichnet seine Figur neu.
    pub fn place_selected_point(&mut self, pos: Vec2) -> Result<PointRef, SceneError> {
        self.expect_mode(InteractionMode::PlacingPoint)?;
        let Some(ctx) = self.edit.take() else {
            // PlacingPoint ohne Kontext: zurück in die Auswahl
            self.mode = InteractionMode::SelectingPoint;
            return Err(SceneError::ModeMismatch {
                expected: InteractionMode::PlacingPoint,
                actual: InteractionMode::SelectingPoint,
            });
        };

        self.renderer.remove(ctx.highlight);
        self.mode = InteractionMode::SelectingPoint;

        let selected = ctx.selected;
        let figure = self
            .figures
            .get_mut(selected.figure)
            .ok_or(SceneError::UnknownFigure(selected.figure))?;
        figure.edit_point(selected.slot, pos, &mut self.renderer, &self.settings.style)?;
        Ok(selected)
    }

    /// Entfernt alle Figuren samt ihrer Elemente.
    ///
    /// Der Modus bleibt erhalten; eine offene Auswahl fällt zurück auf die Punktauswahl.
    pub fn clear(&mut self) {
        self.drop_selection();
        for figure in &mut self.figures {
            figure.clear(&mut self.renderer);
        }
        let count = self.figures.len();
        self.figures.clear();
        self.renderer.clear_all();
        log::info!("Szene geleert ({count} Figuren verworfen)");
    }

    fn drop_selection(&mut self) {
        if let Some(ctx) = self.edit.take() {
            self.renderer.remove(ctx.highlight);
        }
        if self.mode == InteractionMode::PlacingPoint {
            self.mode = InteractionMode::SelectingPoint;
        }
    }

    fn expect_mode(&self, expected: InteractionMode) -> Result<(), SceneError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(SceneError::ModeMismatch {
                expected,
                actual: self.mode,
            })
        }
    }
}

#[cfg(test)]
mod tests;

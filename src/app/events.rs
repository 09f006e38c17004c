//! SketchIntent- und SketchCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::CurveKind;
use glam::Vec2;

/// Eingaben aus UI/Skript ohne direkte Mutationslogik.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchIntent {
    /// Klick auf den Canvas (Welteinheiten)
    CanvasClicked { pos: Vec2 },
    /// Edit-Button gedrückt
    EditModeToggled,
    /// Kurventyp für neue Figuren gewählt
    CurveKindSelected { kind: CurveKind },
    /// Alles löschen
    EraseRequested,
}

/// Mutierende Commands, die der Controller auf den State anwendet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SketchCommand {
    /// Punkt an aktuelle Figur anhängen oder neue Figur beginnen
    AddCurvePoint { pos: Vec2 },
    /// In die Punktauswahl wechseln
    BeginPointSelection,
    /// Edit-Modus verlassen
    EndPointSelection,
    /// Nächstgelegenen Punkt im Pick-Radius auswählen
    SelectNearestPoint { pos: Vec2 },
    /// Ausgewählten Punkt neu platzieren
    PlaceSelectedPoint { pos: Vec2 },
    SetCurveKind { kind: CurveKind },
    /// Alle Figuren entfernen
    ClearScene,
}

//! Zentrale Konfiguration für den Bézier-Sketch.
//!
//! `SketchOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurveKind, SceneSettings, SketchStyle};
use serde::{Deserialize, Serialize};

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Canvas-Breite (Welteinheiten = SVG-Nutzereinheiten).
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Canvas-Höhe.
pub const CANVAS_HEIGHT: f32 = 600.0;

// ── Edit-Modus ──────────────────────────────────────────────────────

/// Maximaler Abstand (inklusive) zwischen Klick und Punkt bei der Punktauswahl.
pub const PICK_RADIUS: f32 = crate::core::DEFAULT_PICK_RADIUS;

// ── Markierungen ────────────────────────────────────────────────────

/// Radius der Anker-Markierungen (Start, Ende).
pub const ANCHOR_RADIUS: f32 = 4.0;
/// Radius der Steuerpunkt-Markierungen.
pub const CONTROL_RADIUS: f32 = 2.0;
/// Radius der Highlight-Markierung des ausgewählten Punktes.
pub const HIGHLIGHT_RADIUS: f32 = 6.0;
/// Linienstärke aller Elemente im SVG-Export.
pub const STROKE_WIDTH: f32 = 1.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Farbe von Ankern, Sehne und Kurve (RGBA: Schwarz).
pub const COLOR_INK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Farbe von Hilfslinien und Highlight (RGBA: Rot).
pub const COLOR_ACCENT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Sketch-Optionen.
/// Wird als `bezier_sketch.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Canvas-Breite; Klicks außerhalb werden ignoriert
    pub canvas_width: f32,
    /// Canvas-Höhe
    pub canvas_height: f32,

    // ── Figuren ─────────────────────────────────────────────────
    /// Grad neu begonnener Figuren
    pub curve_kind: CurveKind,
    /// Pick-Radius für die Punktauswahl
    pub pick_radius: f32,

    // ── Markierungen ────────────────────────────────────────────
    pub anchor_radius: f32,
    pub control_radius: f32,
    pub highlight_radius: f32,
    /// Linienstärke im SVG-Export
    pub stroke_width: f32,

    // ── Farben ──────────────────────────────────────────────────
    pub anchor_color: [f32; 4],
    pub control_color: [f32; 4],
    /// Farbe der Sehne Start→Ende
    pub chord_color: [f32; 4],
    /// Farbe der Hilfslinien zu den Steuerpunkten
    pub guide_color: [f32; 4],
    pub curve_color: [f32; 4],
    pub highlight_color: [f32; 4],
}

impl Default for SketchOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            curve_kind: CurveKind::Quadratic,
            pick_radius: PICK_RADIUS,

            anchor_radius: ANCHOR_RADIUS,
            control_radius: CONTROL_RADIUS,
            highlight_radius: HIGHLIGHT_RADIUS,
            stroke_width: STROKE_WIDTH,

            anchor_color: COLOR_INK,
            control_color: COLOR_INK,
            chord_color: COLOR_INK,
            guide_color: COLOR_ACCENT,
            curve_color: COLOR_INK,
            highlight_color: COLOR_ACCENT,
        }
    }
}

impl SketchOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier-sketch"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_sketch.toml")
    }

    /// Radien und Farben für den Core.
    pub fn sketch_style(&self) -> SketchStyle {
        SketchStyle {
            anchor_radius: self.anchor_radius,
            control_radius: self.control_radius,
            highlight_radius: self.highlight_radius,
            anchor_color: self.anchor_color,
            control_color: self.control_color,
            chord_color: self.chord_color,
            guide_color: self.guide_color,
            curve_color: self.curve_color,
            highlight_color: self.highlight_color,
        }
    }

    /// Startwerte einer neuen Szene.
    pub fn scene_settings(&self) -> SceneSettings {
        SceneSettings {
            curve_kind: self.curve_kind,
            pick_radius: self.pick_radius,
            style: self.sketch_style(),
        }
    }

    /// Prüft, ob eine Position innerhalb des Canvas liegt (Ränder inklusive).
    pub fn contains(&self, pos: glam::Vec2) -> bool {
        (0.0..=self.canvas_width).contains(&pos.x) && (0.0..=self.canvas_height).contains(&pos.y)
    }
}

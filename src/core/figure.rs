//! Figur: Zustandsmaschine einer einzelnen Bézier-Kurve.
//!
//! **Quadratisch (3 Punkte):** Start → Ende (Sehne) → Steuerpunkt (Kurve)
//! **Kubisch (4 Punkte):** Start → Ende (Sehne) → CP1 (quadratische Vorschau) → CP2 (Kurve)
//!
//! Jeder Übergang entfernt genau die Elemente, die von der neuen, genaueren
//! Näherung abgelöst werden, und zeichnet die neuen. Welche Rollen das sind,
//! steht in der Übergangstabelle [`CurveKind::transitions`]. Das Editieren
//! eines Punktes räumt die Figur komplett ab und spielt die Tabelle von vorn ab.

use super::geometry::{BezierCurve, LineSegment};
use super::style::SketchStyle;
use crate::render::{Renderer, Shape};
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Grad der Bézier-Kurve, beim Anlegen einer Figur festgelegt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CurveKind {
    /// Quadratisch: 1 Steuerpunkt
    #[default]
    Quadratic,
    /// Kubisch: 2 Steuerpunkte
    Cubic,
}

impl CurveKind {
    /// Anzahl Punkte, bis eine Figur dieses Grades vollständig ist.
    pub const fn required_points(self) -> usize {
        match self {
            CurveKind::Quadratic => 3,
            CurveKind::Cubic => 4,
        }
    }

    /// Übergangstabelle: Eintrag `i` wird beim Setzen des Punktes `i` angewendet.
    pub fn transitions(self) -> &'static [Transition] {
        &TRANSITIONS[..self.required_points()]
    }

    /// Anzeigename für Status und Logs.
    pub fn label(self) -> &'static str {
        match self {
            CurveKind::Quadratic => "Bézier Grad 2",
            CurveKind::Cubic => "Bézier Grad 3",
        }
    }
}

/// Position eines Punktes innerhalb seiner Figur (in Klick-Reihenfolge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PointSlot {
    Start,
    End,
    Control1,
    /// Nur bei kubischen Figuren
    Control2,
}

impl PointSlot {
    pub const ALL: [PointSlot; 4] = [
        PointSlot::Start,
        PointSlot::End,
        PointSlot::Control1,
        PointSlot::Control2,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Zweck eines gezeichneten Elements innerhalb einer Figur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawRole {
    StartMarker,
    EndMarker,
    /// Sehne Start→Ende, nur solange kein Steuerpunkt existiert
    Chord,
    Control1Marker,
    StartToControl1,
    EndToControl1,
    /// Quadratische Kurve (bei kubischen Figuren nur als Zwischenstand)
    QuadraticCurve,
    Control2Marker,
    Control1ToControl2,
    EndToControl2,
    CubicCurve,
}

impl DrawRole {
    pub const COUNT: usize = 11;

    pub const ALL: [DrawRole; DrawRole::COUNT] = [
        DrawRole::StartMarker,
        DrawRole::EndMarker,
        DrawRole::Chord,
        DrawRole::Control1Marker,
        DrawRole::StartToControl1,
        DrawRole::EndToControl1,
        DrawRole::QuadraticCurve,
        DrawRole::Control2Marker,
        DrawRole::Control1ToControl2,
        DrawRole::EndToControl2,
        DrawRole::CubicCurve,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Leitet das zu zeichnende Element aus den aktuellen Punkten ab.
    ///
    /// `None`, wenn ein benötigter Punkt noch nicht gesetzt ist.
    pub fn shape(self, points: &[Vec2], style: &SketchStyle) -> Option<Shape> {
        let p = |slot: PointSlot| points.get(slot.index()).copied();
        let guide = |a: PointSlot, b: PointSlot| -> Option<Shape> {
            Some(Shape::Line {
                segment: LineSegment::new(p(a)?, p(b)?),
                color: style.guide_color,
            })
        };

        match self {
            DrawRole::StartMarker => Some(Shape::Marker {
                center: p(PointSlot::Start)?,
                radius: style.anchor_radius,
                color: style.anchor_color,
            }),
            DrawRole::EndMarker => Some(Shape::Marker {
                center: p(PointSlot::End)?,
                radius: style.anchor_radius,
                color: style.anchor_color,
            }),
            DrawRole::Chord => Some(Shape::Line {
                segment: LineSegment::new(p(PointSlot::Start)?, p(PointSlot::End)?),
                color: style.chord_color,
            }),
            DrawRole::Control1Marker => Some(Shape::Marker {
                center: p(PointSlot::Control1)?,
                radius: style.control_radius,
                color: style.control_color,
            }),
            DrawRole::StartToControl1 => guide(PointSlot::Start, PointSlot::Control1),
            DrawRole::EndToControl1 => guide(PointSlot::End, PointSlot::Control1),
            DrawRole::QuadraticCurve => Some(Shape::Curve {
                curve: BezierCurve::quadratic(
                    p(PointSlot::Start)?,
                    p(PointSlot::End)?,
                    p(PointSlot::Control1)?,
                ),
                color: style.curve_color,
            }),
            DrawRole::Control2Marker => Some(Shape::Marker {
                center: p(PointSlot::Control2)?,
                radius: style.control_radius,
                color: style.control_color,
            }),
            DrawRole::Control1ToControl2 => guide(PointSlot::Control1, PointSlot::Control2),
            DrawRole::EndToControl2 => guide(PointSlot::End, PointSlot::Control2),
            DrawRole::CubicCurve => Some(Shape::Curve {
                curve: BezierCurve::cubic(
                    p(PointSlot::Start)?,
                    p(PointSlot::End)?,
                    p(PointSlot::Control1)?,
                    p(PointSlot::Control2)?,
                ),
                color: style.curve_color,
            }),
        }
    }
}

/// Ein Zeilen-Eintrag der Übergangstabelle.
#[derive(Debug)]
pub struct Transition {
    /// Rollen, deren Elemente beim Übergang entfernt werden
    pub supersedes: &'static [DrawRole],
    /// Rollen, die danach neu gezeichnet werden (in dieser Reihenfolge)
    pub draws: &'static [DrawRole],
}

static TRANSITIONS: [Transition; 4] = [
    Transition {
        supersedes: &[],
        draws: &[DrawRole::StartMarker],
    },
    Transition {
        supersedes: &[],
        draws: &[DrawRole::EndMarker, DrawRole::Chord],
    },
    Transition {
        supersedes: &[DrawRole::Chord],
        draws: &[
            DrawRole::Control1Marker,
            DrawRole::StartToControl1,
            DrawRole::EndToControl1,
            DrawRole::QuadraticCurve,
        ],
    },
    Transition {
        supersedes: &[DrawRole::QuadraticCurve, DrawRole::EndToControl1],
        draws: &[
            DrawRole::Control2Marker,
            DrawRole::Control1ToControl2,
            DrawRole::EndToControl2,
            DrawRole::CubicCurve,
        ],
    },
];

/// Ergebnis von [`Figure::add_point`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Punkt übernommen, in diesem Slot gespeichert
    Added(PointSlot),
    /// Figur war bereits vollständig, der Punkt wurde nicht übernommen
    Overflow,
}

/// Fehler bei Operationen auf einer einzelnen Figur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FigureError {
    #[error("Punkt {slot:?} gehört nicht zur Figur (nur {placed} Punkte gesetzt)")]
    UnknownPoint { slot: PointSlot, placed: usize },
}

/// Feste Handle-Slots, einer pro [`DrawRole`].
#[derive(Debug, Clone)]
struct RoleSlots<H> {
    slots: [Option<H>; DrawRole::COUNT],
}

impl<H: Copy> RoleSlots<H> {
    fn new() -> Self {
        Self {
            slots: [None; DrawRole::COUNT],
        }
    }

    fn get(&self, role: DrawRole) -> Option<H> {
        self.slots[role.index()]
    }

    /// Setzt das Handle einer Rolle und gibt ein eventuell vorhandenes zurück.
    fn set(&mut self, role: DrawRole, handle: H) -> Option<H> {
        self.slots[role.index()].replace(handle)
    }

    fn take(&mut self, role: DrawRole) -> Option<H> {
        self.slots[role.index()].take()
    }

    fn drain(&mut self) -> impl Iterator<Item = H> + '_ {
        self.slots.iter_mut().filter_map(Option::take)
    }

    fn iter(&self) -> impl Iterator<Item = (DrawRole, H)> + '_ {
        DrawRole::ALL
            .iter()
            .filter_map(|role| self.get(*role).map(|handle| (*role, handle)))
    }
}

/// Eine Bézier-Figur: Punktfolge plus Handles aller aktuell gezeichneten Elemente.
///
/// `H` ist der Handle-Typ des verwendeten [`Renderer`].
#[derive(Debug, Clone)]
pub struct Figure<H> {
    kind: CurveKind,
    points: Vec<Vec2>,
    roles: RoleSlots<H>,
}

impl<H: Copy + Eq + std::fmt::Debug> Figure<H> {
    /// Erstellt eine leere Figur des gegebenen Grades.
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            points: Vec::with_capacity(kind.required_points()),
            roles: RoleSlots::new(),
        }
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    /// Gesetzte Punkte in Klick-Reihenfolge (Start, Ende, CP1, CP2).
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn point(&self, slot: PointSlot) -> Option<Vec2> {
        self.points.get(slot.index()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True wenn alle Punkte für den Grad gesetzt sind.
    pub fn is_complete(&self) -> bool {
        self.points.len() == self.kind.required_points()
    }

    /// Handle des Elements einer Rolle, falls gezeichnet.
    pub fn handle(&self, role: DrawRole) -> Option<H> {
        self.roles.get(role)
    }

    /// Alle aktuell gezeichneten Rollen samt Handle, in Tabellen-Reihenfolge.
    pub fn handles(&self) -> impl Iterator<Item = (DrawRole, H)> + '_ {
        self.roles.iter()
    }

    /// Alle aktuell gezeichneten Rollen.
    pub fn drawn_roles(&self) -> Vec<DrawRole> {
        self.roles.iter().map(|(role, _)| role).collect()
    }

    /// Erweitert die Figur um einen Punkt und aktualisiert die Darstellung.
    ///
    /// Bei vollständiger Figur bleibt alles unverändert und es wird
    /// [`AddOutcome::Overflow`] zurückgegeben.
    pub fn add_point<R>(&mut self, pos: Vec2, renderer: &mut R, style: &SketchStyle) -> AddOutcome
    where
        R: Renderer<Handle = H>,
    {
        if self.is_complete() {
            log::debug!("{}: Figur vollständig, Punkt {pos} abgewiesen", self.kind.label());
            return AddOutcome::Overflow;
        }

        let step = self.points.len();
        let Some(slot) = PointSlot::from_index(step) else {
            return AddOutcome::Overflow;
        };
        self.points.push(pos);
        self.apply_transition(step, renderer, style);

        AddOutcome::Added(slot)
    }

    /// Ersetzt den Punkt in `slot` und zeichnet die gesamte Figur neu.
    pub fn edit_point<R>(
        &mut self,
        slot: PointSlot,
        pos: Vec2,
        renderer: &mut R,
        style: &SketchStyle,
    ) -> Result<(), FigureError>
    where
        R: Renderer<Handle = H>,
    {
        let placed = self.points.len();
        let Some(stored) = self.points.get_mut(slot.index()) else {
            return Err(FigureError::UnknownPoint { slot, placed });
        };
        *stored = pos;

        self.clear(renderer);
        let points = std::mem::take(&mut self.points);
        for point in points {
            if self.add_point(point, renderer, style) == AddOutcome::Overflow {
                log::error!("Neuaufbau: Punkt {point} überzählig für {}", self.kind.label());
            }
        }

        log::debug!("{}: Punkt {slot:?} nach {pos} verschoben", self.kind.label());
        Ok(())
    }

    /// Entfernt alle gezeichneten Elemente der Figur. Die Punkte bleiben erhalten.
    pub fn clear<R>(&mut self, renderer: &mut R)
    where
        R: Renderer<Handle = H>,
    {
        for handle in self.roles.drain() {
            renderer.remove(handle);
        }
    }

    fn apply_transition<R>(&mut self, step: usize, renderer: &mut R, style: &SketchStyle)
    where
        R: Renderer<Handle = H>,
    {
        let Some(transition) = self.kind.transitions().get(step) else {
            log::error!("Kein Übergang {step} für {}", self.kind.label());
            return;
        };

        for role in transition.supersedes {
            if let Some(handle) = self.roles.take(*role) {
                renderer.remove(handle);
            }
        }

        for role in transition.draws {
            let Some(shape) = role.shape(&self.points, style) else {
                log::error!("{role:?} ohne benötigte Punkte ({} gesetzt)", self.points.len());
                continue;
            };
            let handle = renderer.draw_shape(shape);
            if let Some(stale) = self.roles.set(*role, handle) {
                renderer.remove(stale);
            }
        }
    }
}

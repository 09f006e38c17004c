//! Spatial-Index (KD-Tree) für die Nearest-Point-Suche im Edit-Modus.

use glam::Vec2;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashSet;

use super::figure::PointSlot;

/// Adresse eines gesetzten Punktes: Figur-Index in der Szene plus Slot.
///
/// Identität eines Punktes ist seine Adresse, nicht seine Koordinate.
/// Zwei Figuren dürfen numerisch gleiche Punkte haben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointRef {
    pub figure: usize,
    pub slot: PointSlot,
}

/// Ergebnis einer Distanzabfrage gegen den Punkt-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMatch {
    pub point: PointRef,
    /// Koordinate des gefundenen Punktes
    pub position: Vec2,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f32,
}

/// Read-only Index über alle gesetzten Punkte einer Szene.
///
/// Wird pro Suche neu aufgebaut, da Figuren zwischen zwei Suchen mutieren.
/// Jede Koordinate steht nur einmal im Baum; deckungsgleiche Punkte werden
/// durch den zuerst gesetzten vertreten.
#[derive(Debug, Clone)]
pub struct PointIndex {
    tree: KdTree<f64, 2>,
    entries: Vec<(PointRef, Vec2)>,
}

impl PointIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            entries: Vec::new(),
        }
    }

    /// Baut einen Index aus Punkt-Adressen und Koordinaten.
    ///
    /// Die Reihenfolge der Eingabe bestimmt den Vorrang bei gleichem Abstand.
    pub fn from_points(points: impl IntoIterator<Item = (PointRef, Vec2)>) -> Self {
        let mut seen: HashSet<(u32, u32)> = HashSet::new();
        let entries: Vec<(PointRef, Vec2)> = points
            .into_iter()
            .filter(|(_, pos)| seen.insert(coord_key(*pos)))
            .collect();
        let coords: Vec<[f64; 2]> = entries
            .iter()
            .map(|(_, pos)| [pos.x as f64, pos.y as f64])
            .collect();
        let tree: KdTree<f64, 2> = (&coords).into();

        Self { tree, entries }
    }

    /// Anzahl unterschiedlicher Koordinaten im Index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Findet den nächsten Punkt zur Query-Position.
    ///
    /// Bei exakt gleichem Abstand gewinnt der zuerst eingefügte Punkt.
    pub fn nearest(&self, query: Vec2) -> Option<PointMatch> {
        if self.is_empty() {
            return None;
        }

        let q = [query.x as f64, query.y as f64];
        let best = self.tree.nearest_one::<SquaredEuclidean>(&q);

        // Gleichstände einsammeln: KD-Tree liefert bei gleichem Abstand einen beliebigen
        let tie_radius = best.distance + best.distance.max(1.0) * 1e-9;
        let item = self
            .tree
            .within::<SquaredEuclidean>(&q, tie_radius)
            .into_iter()
            .filter(|entry| entry.distance <= best.distance)
            .map(|entry| entry.item)
            .min()
            .unwrap_or(best.item);

        let (point, position) = *self.entries.get(item as usize)?;
        Some(PointMatch {
            point,
            position,
            distance: (best.distance as f32).sqrt(),
        })
    }

    /// Wie [`nearest`](Self::nearest), aber nur innerhalb von `max_distance` (inklusive).
    pub fn nearest_within(&self, query: Vec2, max_distance: f32) -> Option<PointMatch> {
        self.nearest(query).filter(|hit| hit.distance <= max_distance)
    }
}

/// Bitgenauer Schlüssel einer Koordinate (`-0.0` zählt als `0.0`).
fn coord_key(pos: Vec2) -> (u32, u32) {
    ((pos.x + 0.0).to_bits(), (pos.y + 0.0).to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_ref(figure: usize, slot: PointSlot) -> PointRef {
        PointRef { figure, slot }
    }

    fn sample_index() -> PointIndex {
        PointIndex::from_points([
            (point_ref(0, PointSlot::Start), Vec2::new(0.0, 0.0)),
            (point_ref(0, PointSlot::End), Vec2::new(10.0, 0.0)),
            (point_ref(1, PointSlot::Start), Vec2::new(4.0, 3.0)),
        ])
    }

    #[test]
    fn nearest_returns_expected_point() {
        let hit = sample_index()
            .nearest(Vec2::new(3.9, 2.9))
            .expect("Treffer erwartet");

        assert_eq!(hit.point, point_ref(1, PointSlot::Start));
        assert_eq!(hit.position, Vec2::new(4.0, 3.0));
        assert!(hit.distance < 0.2);
    }

    #[test]
    fn nearest_within_respects_threshold_inclusively() {
        let index = sample_index();

        assert!(index.nearest_within(Vec2::new(-3.0, -4.0), 5.0).is_some());
        assert!(index.nearest_within(Vec2::new(-3.0, -4.0), 4.9).is_none());
    }

    #[test]
    fn coincident_points_prefer_first_inserted() {
        let index = PointIndex::from_points([
            (point_ref(0, PointSlot::End), Vec2::new(5.0, 5.0)),
            (point_ref(1, PointSlot::Start), Vec2::new(5.0, 5.0)),
            (point_ref(2, PointSlot::Start), Vec2::new(5.0, 5.0)),
        ]);

        let hit = index.nearest(Vec2::new(6.0, 5.0)).unwrap();
        assert_eq!(hit.point, point_ref(0, PointSlot::End));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn many_coincident_points_build_a_single_entry() {
        // Mehr deckungsgleiche Punkte als ein KD-Tree-Bucket aufnehmen kann
        let mut points: Vec<(PointRef, Vec2)> = (0..64)
            .map(|figure| (point_ref(figure, PointSlot::Start), Vec2::new(100.0, 100.0)))
            .collect();
        points.push((point_ref(64, PointSlot::Start), Vec2::new(150.0, 100.0)));

        let index = PointIndex::from_points(points);

        assert_eq!(index.len(), 2);
        let hit = index.nearest_within(Vec2::new(101.0, 100.0), 20.0).unwrap();
        assert_eq!(hit.point, point_ref(0, PointSlot::Start));
        assert_eq!(hit.position, Vec2::new(100.0, 100.0));
        let far = index.nearest(Vec2::new(149.0, 100.0)).unwrap();
        assert_eq!(far.point, point_ref(64, PointSlot::Start));
    }

    #[test]
    fn equidistant_distinct_points_prefer_first_inserted() {
        let index = PointIndex::from_points([
            (point_ref(0, PointSlot::Control1), Vec2::new(2.0, 0.0)),
            (point_ref(1, PointSlot::Start), Vec2::new(0.0, 0.0)),
        ]);

        let hit = index.nearest(Vec2::new(1.0, 0.0)).unwrap();
        assert_eq!(hit.point, point_ref(0, PointSlot::Control1));
    }

    #[test]
    fn empty_index_has_no_entries() {
        let index = PointIndex::empty();

        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.nearest(Vec2::new(0.0, 0.0)).is_none());
    }
}

//! Geometrie-Werttypen: Liniensegment und Bézier-Kurven-Deskriptor.
//!
//! Alle Typen sind unveränderliche Werte ohne Seiteneffekte. Punkte sind
//! `glam::Vec2` in Canvas-Koordinaten.

use glam::Vec2;

/// Euklidische Distanz zwischen zwei Punkten.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Gerades Segment zwischen zwei Punkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vec2,
    pub end: Vec2,
}

impl LineSegment {
    /// Erstellt ein Segment von `start` nach `end`.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Länge des Segments.
    pub fn length(&self) -> f32 {
        distance(self.start, self.end)
    }
}

/// Bézier-Kurve 2. oder 3. Grades, beschrieben durch ihre definierenden Punkte.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierCurve {
    /// Quadratisch: Start, Ende, 1 Steuerpunkt
    Quadratic { start: Vec2, end: Vec2, control: Vec2 },
    /// Kubisch: Start, Ende, 2 Steuerpunkte
    Cubic {
        start: Vec2,
        end: Vec2,
        control1: Vec2,
        control2: Vec2,
    },
}

impl BezierCurve {
    pub fn quadratic(start: Vec2, end: Vec2, control: Vec2) -> Self {
        Self::Quadratic {
            start,
            end,
            control,
        }
    }

    pub fn cubic(start: Vec2, end: Vec2, control1: Vec2, control2: Vec2) -> Self {
        Self::Cubic {
            start,
            end,
            control1,
            control2,
        }
    }

    /// Startpunkt der Kurve.
    pub fn start(&self) -> Vec2 {
        match *self {
            Self::Quadratic { start, .. } | Self::Cubic { start, .. } => start,
        }
    }

    /// Endpunkt der Kurve.
    pub fn end(&self) -> Vec2 {
        match *self {
            Self::Quadratic { end, .. } | Self::Cubic { end, .. } => end,
        }
    }

    /// Wertet die Kurve bei Parameter `t` ∈ [0, 1] aus.
    pub fn point_at(&self, t: f32) -> Vec2 {
        match *self {
            Self::Quadratic {
                start,
                end,
                control,
            } => quadratic_bezier(start, control, end, t),
            Self::Cubic {
                start,
                end,
                control1,
                control2,
            } => cubic_bezier(start, control1, control2, end, t),
        }
    }

    /// SVG-Pfaddaten (`d`-Attribut) der Kurve.
    pub fn path_data(&self) -> String {
        match *self {
            Self::Quadratic {
                start,
                end,
                control,
            } => format!(
                "M{} {} Q {} {} {} {}",
                start.x, start.y, control.x, control.y, end.x, end.y
            ),
            Self::Cubic {
                start,
                end,
                control1,
                control2,
            } => format!(
                "M{} {} C {} {} {} {} {} {}",
                start.x, start.y, control1.x, control1.y, control2.x, control2.y, end.x, end.y
            ),
        }
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * p0 + 2.0 * inv * t * p1 + t * t * p2
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_is_euclidean() {
        assert_relative_eq!(distance(Vec2::new(0.0, 0.0), Vec2::new(3.0, 4.0)), 5.0);
        assert_relative_eq!(
            LineSegment::new(Vec2::new(1.0, 1.0), Vec2::new(1.0, 6.0)).length(),
            5.0
        );
    }

    #[test]
    fn test_quadratic_curve_endpoints_and_mid() {
        let curve = BezierCurve::quadratic(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 10.0),
        );

        assert!((curve.point_at(0.0) - curve.start()).length() < 0.001);
        assert!((curve.point_at(1.0) - curve.end()).length() < 0.001);
        assert!((curve.point_at(0.5) - Vec2::new(5.0, 5.0)).length() < 0.001);
    }

    #[test]
    fn test_cubic_curve_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let curve = BezierCurve::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        );

        let mid = curve.point_at(0.5);
        assert_relative_eq!(mid.x, 5.0, epsilon = 1e-5);
        assert_relative_eq!(mid.y, 5.0, epsilon = 1e-5);
        assert!((curve.point_at(1.0) - Vec2::new(10.0, 10.0)).length() < 0.001);
    }

    #[test]
    fn test_path_data_orders_control_before_end() {
        let quad = BezierCurve::quadratic(
            Vec2::new(10.0, 10.0),
            Vec2::new(50.0, 10.0),
            Vec2::new(30.0, 40.0),
        );
        assert_eq!(quad.path_data(), "M10 10 Q 30 40 50 10");

        let cubic = BezierCurve::cubic(
            Vec2::new(0.0, 0.0),
            Vec2::new(90.0, 0.0),
            Vec2::new(30.0, 40.0),
            Vec2::new(60.0, 40.0),
        );
        assert_eq!(cubic.path_data(), "M0 0 C 30 40 60 40 90 0");
    }
}

use super::{InteractionMode, Scene, SceneError, SceneSettings};
use crate::core::{CurveKind, DrawRole, FigureError, PointRef, PointSlot};
use crate::render::{RecordingRenderer, Shape};
use glam::Vec2;

fn scene(kind: CurveKind) -> Scene<RecordingRenderer> {
    Scene::new(
        RecordingRenderer::new(),
        SceneSettings {
            curve_kind: kind,
            ..SceneSettings::default()
        },
    )
}

fn click_all(scene: &mut Scene<RecordingRenderer>, points: &[(f32, f32)]) {
    for &(x, y) in points {
        scene.add_click_point(Vec2::new(x, y));
    }
}

/// Summe aller Figur-Handles muss der Anzahl sichtbarer Elemente entsprechen
/// (zzgl. Highlight), und jedes Handle muss sichtbar sein.
fn assert_consistent(scene: &Scene<RecordingRenderer>) {
    let renderer = scene.renderer();
    let mut count = 0;
    for figure in scene.figures() {
        for (role, handle) in figure.handles() {
            assert!(renderer.contains(handle), "{role:?} zeigt auf entferntes Element");
            count += 1;
        }
    }
    if let Some(highlight) = scene.highlight_handle() {
        assert!(renderer.contains(highlight));
        count += 1;
    }
    assert_eq!(count, renderer.len());

    // Nur die letzte Figur darf unvollständig sein
    let figures = scene.figures();
    for figure in figures.iter().take(figures.len().saturating_sub(1)) {
        assert!(figure.is_complete());
    }
}

// ── Zeichnen ──

#[test]
fn test_quadratic_scenario_rolls_over_into_new_figure() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);

    assert_eq!(scene.figures().len(), 1);
    assert!(scene.figures()[0].is_complete());

    let placed = scene.add_click_point(Vec2::new(80.0, 80.0));

    assert_eq!(
        placed,
        PointRef {
            figure: 1,
            slot: PointSlot::Start
        }
    );
    assert_eq!(scene.figures().len(), 2);
    assert_eq!(scene.figures()[1].points(), &[Vec2::new(80.0, 80.0)]);
    assert_eq!(scene.figures()[0].points().len(), 3);
    assert_consistent(&scene);
}

#[test]
fn test_cubic_figure_needs_four_clicks() {
    let mut scene = scene(CurveKind::Cubic);
    click_all(&mut scene, &[(0.0, 0.0), (90.0, 0.0), (30.0, 40.0)]);
    assert!(scene.has_incomplete_figure());

    scene.add_click_point(Vec2::new(60.0, 40.0));
    assert!(!scene.has_incomplete_figure());
    assert_eq!(scene.figures().len(), 1);

    scene.add_click_point(Vec2::new(5.0, 5.0));
    assert_eq!(scene.figures().len(), 2);
    assert_consistent(&scene);
}

#[test]
fn test_curve_kind_change_only_affects_next_figure() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0)]);

    scene.set_curve_kind(CurveKind::Cubic);
    click_all(&mut scene, &[(30.0, 40.0), (100.0, 100.0)]);

    assert_eq!(scene.figures()[0].kind(), CurveKind::Quadratic);
    assert!(scene.figures()[0].is_complete());
    assert_eq!(scene.figures()[1].kind(), CurveKind::Cubic);
}

#[test]
fn test_points_are_addressed_by_figure_and_slot() {
    let mut scene = scene(CurveKind::Quadratic);
    // Zwei Figuren mit numerisch identischem Startpunkt
    click_all(
        &mut scene,
        &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0), (10.0, 10.0)],
    );

    let refs: Vec<PointRef> = scene.points().map(|(r, _)| r).collect();
    assert_eq!(refs.len(), 4);
    assert_eq!(
        refs[3],
        PointRef {
            figure: 1,
            slot: PointSlot::Start
        }
    );
    assert_eq!(scene.point(refs[0]), scene.point(refs[3]));
}

// ── Edit-Modus ──

#[test]
fn test_begin_selection_rejected_while_figure_incomplete() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0)]);

    assert_eq!(
        scene.begin_point_selection(),
        Err(SceneError::FigureIncomplete)
    );
    assert_eq!(scene.mode(), InteractionMode::Drawing);
}

#[test]
fn test_begin_selection_allowed_on_empty_scene() {
    let mut scene = scene(CurveKind::Quadratic);

    scene.begin_point_selection().unwrap();

    assert_eq!(scene.mode(), InteractionMode::SelectingPoint);
    assert_eq!(scene.select_nearest_point(Vec2::ZERO), Ok(None));
}

#[test]
fn test_edit_scenario_moves_end_point() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);
    scene.begin_point_selection().unwrap();

    let hit = scene
        .select_nearest_point(Vec2::new(52.0, 11.0))
        .unwrap()
        .expect("Punkt in Reichweite");
    assert_eq!(
        hit.point,
        PointRef {
            figure: 0,
            slot: PointSlot::End
        }
    );
    assert_eq!(scene.mode(), InteractionMode::PlacingPoint);
    let highlight = scene.highlight_handle().unwrap();
    assert!(matches!(
        scene.renderer().get(highlight),
        Some(Shape::Marker { center, radius, .. }) if *center == Vec2::new(50.0, 10.0) && *radius == 6.0
    ));
    assert_consistent(&scene);

    scene.place_selected_point(Vec2::new(60.0, 20.0)).unwrap();

    assert_eq!(scene.mode(), InteractionMode::SelectingPoint);
    assert!(scene.selected_point().is_none());
    assert!(!scene.renderer().contains(highlight));
    assert_eq!(
        scene.figures()[0].points(),
        &[
            Vec2::new(10.0, 10.0),
            Vec2::new(60.0, 20.0),
            Vec2::new(30.0, 40.0)
        ]
    );
    assert_eq!(scene.figures()[0].drawn_roles().len(), 6);
    assert_consistent(&scene);
}

#[test]
fn test_selection_threshold_only_accepts_close_points() {
    // Punkte in Abstand 5, 30 und 50 vom Referenzpunkt (100, 100)
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(105.0, 100.0), (130.0, 100.0), (100.0, 150.0)]);
    scene.begin_point_selection().unwrap();

    let hit = scene
        .select_nearest_point(Vec2::new(100.0, 100.0))
        .unwrap()
        .unwrap();
    assert_eq!(hit.point.slot, PointSlot::Start);

    // Nach Neuplatzierung liegen nur noch Punkte in Abstand 30 und 50
    scene.place_selected_point(Vec2::new(300.0, 300.0)).unwrap();
    let miss = scene.select_nearest_point(Vec2::new(100.0, 100.0)).unwrap();
    assert!(miss.is_none());
    assert_eq!(scene.mode(), InteractionMode::SelectingPoint);
}

#[test]
fn test_select_ignored_click_changes_nothing() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);
    scene.begin_point_selection().unwrap();
    let drawn_before = scene.renderer().len();

    let result = scene.select_nearest_point(Vec2::new(400.0, 400.0)).unwrap();

    assert!(result.is_none());
    assert_eq!(scene.renderer().len(), drawn_before);
    assert!(scene.selected_point().is_none());
}

#[test]
fn test_edit_only_redraws_owning_figure() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(
        &mut scene,
        &[
            (10.0, 10.0),
            (50.0, 10.0),
            (30.0, 40.0),
            (200.0, 200.0),
            (250.0, 200.0),
            (225.0, 240.0),
        ],
    );
    let untouched: Vec<_> = scene.figures()[0].handles().collect();

    scene.begin_point_selection().unwrap();
    scene
        .select_nearest_point(Vec2::new(226.0, 238.0))
        .unwrap()
        .unwrap();
    scene.place_selected_point(Vec2::new(225.0, 280.0)).unwrap();

    assert_eq!(scene.figures()[0].handles().collect::<Vec<_>>(), untouched);
    assert_eq!(
        scene.figures()[1].point(PointSlot::Control1),
        Some(Vec2::new(225.0, 280.0))
    );
    assert_consistent(&scene);
}

#[test]
fn test_wrong_mode_operations_are_rejected() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);

    assert_eq!(
        scene.select_nearest_point(Vec2::new(10.0, 10.0)),
        Err(SceneError::ModeMismatch {
            expected: InteractionMode::SelectingPoint,
            actual: InteractionMode::Drawing
        })
    );
    assert!(matches!(
        scene.place_selected_point(Vec2::ZERO),
        Err(SceneError::ModeMismatch { .. })
    ));
}

#[test]
fn test_end_selection_removes_pending_highlight() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);
    scene.begin_point_selection().unwrap();
    scene
        .select_nearest_point(Vec2::new(10.0, 10.0))
        .unwrap()
        .unwrap();

    scene.end_point_selection();

    assert_eq!(scene.mode(), InteractionMode::Drawing);
    assert!(scene.highlight_handle().is_none());
    assert_consistent(&scene);
}

#[test]
fn test_unknown_point_error_converts() {
    let err: SceneError = FigureError::UnknownPoint {
        slot: PointSlot::Control2,
        placed: 3,
    }
    .into();
    assert!(matches!(err, SceneError::Figure(_)));
    assert!(err.to_string().contains("Control2"));
}

// ── Leeren ──

#[test]
fn test_clear_then_replay_matches_fresh_scene() {
    let clicks = [(10.0, 10.0), (50.0, 10.0), (30.0, 40.0), (80.0, 80.0)];

    let mut used = scene(CurveKind::Quadratic);
    click_all(&mut used, &clicks);
    used.clear();

    assert!(used.figures().is_empty());
    assert!(used.renderer().is_empty());

    click_all(&mut used, &clicks);
    let mut fresh = scene(CurveKind::Quadratic);
    click_all(&mut fresh, &clicks);

    assert_eq!(used.figures().len(), fresh.figures().len());
    for (a, b) in used.figures().iter().zip(fresh.figures()) {
        assert_eq!(a.points(), b.points());
        assert_eq!(a.drawn_roles(), b.drawn_roles());
    }
    let used_shapes: Vec<_> = used.renderer().elements().map(|(_, s)| *s).collect();
    let fresh_shapes: Vec<_> = fresh.renderer().elements().map(|(_, s)| *s).collect();
    assert_eq!(used_shapes, fresh_shapes);
}

#[test]
fn test_clear_keeps_edit_mode_but_drops_selection() {
    let mut scene = scene(CurveKind::Quadratic);
    click_all(&mut scene, &[(10.0, 10.0), (50.0, 10.0), (30.0, 40.0)]);
    scene.begin_point_selection().unwrap();
    scene
        .select_nearest_point(Vec2::new(30.0, 40.0))
        .unwrap()
        .unwrap();

    scene.clear();

    assert_eq!(scene.mode(), InteractionMode::SelectingPoint);
    assert!(scene.selected_point().is_none());
    assert!(scene.renderer().is_empty());
}

#[test]
fn test_cubic_edit_of_second_control_point() {
    let mut scene = scene(CurveKind::Cubic);
    click_all(
        &mut scene,
        &[(0.0, 0.0), (90.0, 0.0), (30.0, 40.0), (60.0, 40.0)],
    );
    scene.begin_point_selection().unwrap();
    scene
        .select_nearest_point(Vec2::new(61.0, 41.0))
        .unwrap()
        .unwrap();
    scene.place_selected_point(Vec2::new(60.0, -40.0)).unwrap();

    let figure = &scene.figures()[0];
    assert_eq!(figure.point(PointSlot::Control2), Some(Vec2::new(60.0, -40.0)));
    assert!(figure.handle(DrawRole::CubicCurve).is_some());
    assert!(figure.handle(DrawRole::QuadraticCurve).is_none());
    assert_consistent(&scene);
}

#[test]
fn test_selection_with_many_coincident_points() {
    // 14 vollständige quadratische Figuren, alle Punkte deckungsgleich
    let mut scene = scene(CurveKind::Quadratic);
    for _ in 0..42 {
        scene.add_click_point(Vec2::new(100.0, 100.0));
    }
    assert_eq!(scene.figures().len(), 14);
    scene.begin_point_selection().unwrap();

    let hit = scene
        .select_nearest_point(Vec2::new(101.0, 100.0))
        .unwrap()
        .expect("Punkt in Reichweite");
    assert_eq!(
        hit.point,
        PointRef {
            figure: 0,
            slot: PointSlot::Start
        }
    );

    scene.place_selected_point(Vec2::new(200.0, 200.0)).unwrap();
    let next = scene
        .select_nearest_point(Vec2::new(101.0, 100.0))
        .unwrap()
        .unwrap();
    assert_eq!(
        next.point,
        PointRef {
            figure: 0,
            slot: PointSlot::End
        }
    );
    assert_consistent(&scene);
}

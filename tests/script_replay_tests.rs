use bezier_sketch::{run_script, CurveKind, InteractionMode, PointSlot, SketchOptions};
use glam::Vec2;

#[test]
fn test_replay_builds_two_figures_and_edits_first() {
    let script = "\
# erste Figur quadratisch
click 10 10
click 50 10
click 30 40
# zweite Figur beginnt automatisch
kind cubic
click 200 200
click 300 200
click 230 260
click 270 260
edit
click 51 9
click 60 20
edit
";
    let state = run_script(script, &SketchOptions::default()).expect("Skript sollte durchlaufen");

    let figures = state.scene.figures();
    assert_eq!(figures.len(), 2);
    assert_eq!(figures[0].kind(), CurveKind::Quadratic);
    assert_eq!(figures[1].kind(), CurveKind::Cubic);
    assert!(figures[1].is_complete());
    assert_eq!(figures[0].point(PointSlot::End), Some(Vec2::new(60.0, 20.0)));
    assert_eq!(state.scene.mode(), InteractionMode::Drawing);
    assert_eq!(state.scene.renderer().len(), 6 + 8);
}

#[test]
fn test_replay_with_rejected_edit_continues() {
    let state = run_script("click 10 10\nedit\nclick 50 10\n", &SketchOptions::default())
        .expect("Abgelehnter Edit ist kein Fehler");

    assert_eq!(state.scene.figures()[0].points().len(), 2);
    assert_eq!(state.scene.mode(), InteractionMode::Drawing);
}

#[test]
fn test_malformed_script_reports_line_number() {
    let err = run_script("click 10 10\nclick zehn 10\n", &SketchOptions::default()).unwrap_err();

    assert!(format!("{err:#}").contains("Zeile 2"), "{err:#}");
}

#[test]
fn test_options_drive_pick_radius() {
    let options = SketchOptions {
        pick_radius: 2.0,
        ..SketchOptions::default()
    };

    let state = run_script(
        "click 10 10\nclick 50 10\nclick 30 40\nedit\nclick 15 10\n",
        &options,
    )
    .unwrap();

    assert_eq!(state.scene.mode(), InteractionMode::SelectingPoint);
    assert!(state.scene.selected_point().is_none());
}

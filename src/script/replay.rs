//! Abspielen geparster Skripte über den Controller.

use super::parser::{parse_script, ScriptStep};
use crate::app::{SketchController, SketchState};
use crate::render::{RecordingRenderer, Renderer};
use crate::shared::SketchOptions;
use anyhow::{Context, Result};

/// Spielt alle Schritte nacheinander über den Controller ab.
pub fn replay<R: Renderer>(
    controller: &mut SketchController,
    state: &mut SketchState<R>,
    steps: &[ScriptStep],
) -> Result<()> {
    for step in steps {
        controller
            .handle_intent(state, step.intent)
            .with_context(|| format!("Zeile {}: {:?} fehlgeschlagen", step.line, step.intent))?;
        if let Some(notice) = &state.notice {
            log::info!("Zeile {}: {notice}", step.line);
        }
    }
    Ok(())
}

/// Parst ein Skript und spielt es auf einem frischen [`RecordingRenderer`] ab.
pub fn run_script(source: &str, options: &SketchOptions) -> Result<SketchState<RecordingRenderer>> {
    let steps = parse_script(source)?;
    let mut state = SketchState::new(RecordingRenderer::new(), options.clone());
    let mut controller = SketchController::new();

    replay(&mut controller, &mut state, &steps)?;

    log::info!(
        "Skript abgespielt: {} Schritte, {} Figuren, {} Elemente",
        steps.len(),
        state.scene.figures().len(),
        state.scene.renderer().len()
    );
    Ok(state)
}

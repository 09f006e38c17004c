//! Mapping von UI-Intents auf mutierende Sketch-Commands.

use super::{SketchCommand, SketchIntent, SketchState};
use crate::core::InteractionMode;
use crate::render::Renderer;

/// Übersetzt einen `SketchIntent` in eine Sequenz ausführbarer `SketchCommand`s.
pub fn map_intent_to_commands<R: Renderer>(
    state: &SketchState<R>,
    intent: SketchIntent,
) -> Vec<SketchCommand> {
    match intent {
        SketchIntent::CanvasClicked { pos } => {
            if !state.options.contains(pos) {
                log::debug!("Klick außerhalb des Canvas ignoriert: {pos}");
                return vec![];
            }
            match state.scene.mode() {
                InteractionMode::Drawing => vec![SketchCommand::AddCurvePoint { pos }],
                InteractionMode::SelectingPoint => vec![SketchCommand::SelectNearestPoint { pos }],
                InteractionMode::PlacingPoint => vec![SketchCommand::PlaceSelectedPoint { pos }],
            }
        }
        SketchIntent::EditModeToggled => match state.scene.mode() {
            InteractionMode::Drawing => vec![SketchCommand::BeginPointSelection],
            InteractionMode::SelectingPoint | InteractionMode::PlacingPoint => {
                vec![SketchCommand::EndPointSelection]
            }
        },
        SketchIntent::CurveKindSelected { kind } => vec![SketchCommand::SetCurveKind { kind }],
        SketchIntent::EraseRequested => vec![SketchCommand::ClearScene],
    }
}

//! Sketch Controller für zentrale Event-Verarbeitung.

use super::{SketchCommand, SketchIntent, SketchState};
use crate::render::Renderer;

/// Orchestriert UI-Events und Handler auf den SketchState.
#[derive(Default)]
pub struct SketchController;

impl SketchController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent<R: Renderer>(
        &mut self,
        state: &mut SketchState<R>,
        intent: SketchIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem SketchState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command<R: Renderer>(
        &mut self,
        state: &mut SketchState<R>,
        command: SketchCommand,
    ) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Zeichnen ===
            SketchCommand::AddCurvePoint { pos } => handlers::drawing::add_point(state, pos),
            SketchCommand::SetCurveKind { kind } => handlers::drawing::set_curve_kind(state, kind),
            SketchCommand::ClearScene => handlers::drawing::clear(state),

            // === Edit-Modus ===
            SketchCommand::BeginPointSelection => handlers::editing::begin_selection(state)?,
            SketchCommand::EndPointSelection => handlers::editing::end_selection(state),
            SketchCommand::SelectNearestPoint { pos } => {
                handlers::editing::select_nearest(state, pos)?
            }
            SketchCommand::PlaceSelectedPoint { pos } => {
                handlers::editing::place_selected(state, pos)?
            }
        }

        Ok(())
    }
}

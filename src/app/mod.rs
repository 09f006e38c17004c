//! Application-Layer: Controller, State, Events und Handler.

pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
/// Application State
///
/// Hält Szene, Optionen und Statuszeile einer Sketch-Sitzung.
pub mod state;

pub use controller::SketchController;
pub use events::{SketchCommand, SketchIntent};
pub use intent_mapping::map_intent_to_commands;
pub use state::SketchState;

//! Skript-Wiedergabe für den Bézier-Sketch.
//!
//! Ein Skript ist eine zeilenweise Folge von Eingaben (`click X Y`, `edit`,
//! `kind quadratic|cubic`, `clear`), die über den Controller abgespielt wird.
//! Leerzeilen und Zeilen ab `#` werden übersprungen.

pub mod parser;
mod replay;

pub use parser::{parse_script, ScriptStep};
pub use replay::{replay, run_script};

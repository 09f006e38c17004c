//! Parser für Sketch-Skripte.

use crate::app::SketchIntent;
use crate::core::CurveKind;
use anyhow::{bail, Context, Result};
use glam::Vec2;

/// Eine geparste Skriptzeile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// Zeilennummer (1-basiert) für Fehlermeldungen
    pub line: usize,
    pub intent: SketchIntent,
}

/// Parst ein Skript in eine Folge von Intents.
///
/// Bricht bei der ersten fehlerhaften Zeile ab; die Fehlermeldung nennt die Zeilennummer.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let content = raw.split('#').next().unwrap_or("").trim();
        if content.is_empty() {
            continue;
        }

        let intent = parse_line(content).with_context(|| format!("Zeile {line}: '{content}'"))?;
        steps.push(ScriptStep { line, intent });
    }

    log::debug!("Skript geparst: {} Schritte", steps.len());
    Ok(steps)
}

fn parse_line(content: &str) -> Result<SketchIntent> {
    let mut tokens = content.split_whitespace();
    let Some(keyword) = tokens.next() else {
        bail!("Leere Anweisung");
    };
    let args: Vec<&str> = tokens.collect();

    let intent = match keyword.to_ascii_lowercase().as_str() {
        "click" => {
            let [x, y] = args[..] else {
                bail!("'click' erwartet zwei Koordinaten, erhalten: {}", args.len());
            };
            SketchIntent::CanvasClicked {
                pos: Vec2::new(parse_coord(x)?, parse_coord(y)?),
            }
        }
        "edit" => {
            expect_no_args(keyword, &args)?;
            SketchIntent::EditModeToggled
        }
        "kind" => {
            let [kind] = args[..] else {
                bail!("'kind' erwartet genau einen Kurventyp");
            };
            SketchIntent::CurveKindSelected {
                kind: parse_curve_kind(kind)?,
            }
        }
        "clear" => {
            expect_no_args(keyword, &args)?;
            SketchIntent::EraseRequested
        }
        other => bail!("Unbekannte Anweisung '{other}'"),
    };

    Ok(intent)
}

fn parse_coord(text: &str) -> Result<f32> {
    let value: f32 = text
        .parse()
        .with_context(|| format!("Koordinate '{text}' konnte nicht geparst werden"))?;
    if !value.is_finite() {
        bail!("Koordinate '{text}' ist nicht endlich");
    }
    Ok(value)
}

fn parse_curve_kind(text: &str) -> Result<CurveKind> {
    match text.to_ascii_lowercase().as_str() {
        "quadratic" | "2" => Ok(CurveKind::Quadratic),
        "cubic" | "3" => Ok(CurveKind::Cubic),
        other => bail!("Unbekannter Kurventyp '{other}' (erwartet: quadratic, cubic)"),
    }
}

fn expect_no_args(keyword: &str, args: &[&str]) -> Result<()> {
    if !args.is_empty() {
        bail!("'{keyword}' erwartet keine Argumente");
    }
    Ok(())
}

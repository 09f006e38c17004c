//! Bézier-Sketch.
//!
//! Spielt ein Sketch-Skript ab und schreibt das Ergebnis als SVG.
//!
//! Aufruf: `bezier-sketch <skript> [ausgabe.svg]` (ohne Ausgabepfad nach stdout).

use anyhow::{Context, Result};
use bezier_sketch::{run_script, write_svg, SketchOptions, SvgExport};
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "bezier-sketch",
    version,
    about = "Spielt ein Sketch-Skript ab und schreibt das Ergebnis als SVG"
)]
struct Cli {
    /// Skriptdatei (`click X Y`, `edit`, `kind quadratic|cubic`, `clear`)
    script: PathBuf,

    /// Ziel-SVG; ohne Angabe wird nach stdout geschrieben
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        script: script_path,
        output: output_path,
    } = cli;

    log::info!("Bézier-Sketch v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let options = SketchOptions::load_from_file(&SketchOptions::config_path());

    let source = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Skript {} nicht lesbar", script_path.display()))?;
    let state = run_script(&source, &options)
        .with_context(|| format!("Skript {} fehlgeschlagen", script_path.display()))?;
    log::info!("Status: {}", state.status_text());

    let export = SvgExport {
        width: options.canvas_width,
        height: options.canvas_height,
        stroke_width: options.stroke_width,
        title: script_title(&script_path),
    };
    let svg = write_svg(state.scene.renderer(), &export);

    match output_path {
        Some(path) => {
            std::fs::write(&path, svg)
                .with_context(|| format!("SVG {} nicht schreibbar", path.display()))?;
            log::info!("SVG geschrieben nach: {}", path.display());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(svg.as_bytes())
                .context("SVG-Ausgabe auf stdout fehlgeschlagen")?;
        }
    }

    Ok(())
}

fn script_title(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_accepts_script_with_optional_output() {
        let cli = Cli::try_parse_from(["bezier-sketch", "kurve.txt"]).unwrap();
        assert_eq!(cli.script, PathBuf::from("kurve.txt"));
        assert!(cli.output.is_none());

        let cli = Cli::try_parse_from(["bezier-sketch", "kurve.txt", "kurve.svg"]).unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("kurve.svg")));
    }

    #[test]
    fn cli_rejects_missing_script_and_extra_arguments() {
        assert!(Cli::try_parse_from(["bezier-sketch"]).is_err());
        assert!(Cli::try_parse_from(["bezier-sketch", "a", "b", "c"]).is_err());
    }

    #[test]
    fn script_title_uses_file_stem() {
        assert_eq!(
            script_title(Path::new("skripte/kurve.txt")),
            Some("kurve".to_string())
        );
    }
}

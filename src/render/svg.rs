//! Export der sichtbaren Elemente eines [`RecordingRenderer`] als SVG-Dokument.

use super::{Color, RecordingRenderer, Shape};

/// Rahmendaten des exportierten Dokuments.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgExport {
    /// Canvas-Breite (Welteinheiten = SVG-Nutzereinheiten)
    pub width: f32,
    /// Canvas-Höhe
    pub height: f32,
    /// Linienstärke aller Elemente
    pub stroke_width: f32,
    /// Optionaler `<title>` des Dokuments
    pub title: Option<String>,
}

/// Schreibt alle sichtbaren Elemente in Zeichenreihenfolge als SVG.
///
/// Alle Elemente werden ungefüllt (`fill="none"`) mit ihrer Farbe als Stroke
/// ausgegeben.
pub fn write_svg(renderer: &RecordingRenderer, export: &SvgExport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        format_float(export.width),
        format_float(export.height),
        format_float(export.width),
        format_float(export.height)
    ));

    if let Some(title) = &export.title {
        output.push_str(&format!(
            "    <title>{}</title>\n",
            quick_xml::escape::escape(title.as_str())
        ));
    }

    for (_, shape) in renderer.elements() {
        let element = match shape {
            Shape::Marker {
                center,
                radius,
                color,
            } => format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
                format_float(center.x),
                format_float(center.y),
                format_float(*radius),
                stroke_attributes(*color, export.stroke_width)
            ),
            Shape::Line { segment, color } => format!(
                "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
                format_float(segment.start.x),
                format_float(segment.start.y),
                format_float(segment.end.x),
                format_float(segment.end.y),
                stroke_attributes(*color, export.stroke_width)
            ),
            Shape::Curve { curve, color } => format!(
                "<path d=\"{}\" {}/>",
                curve.path_data(),
                stroke_attributes(*color, export.stroke_width)
            ),
        };
        output.push_str("    ");
        output.push_str(&element);
        output.push('\n');
    }

    output.push_str("</svg>\n");
    output
}

fn stroke_attributes(color: Color, stroke_width: f32) -> String {
    let mut attrs = format!(
        "stroke=\"{}\" stroke-width=\"{}\" fill=\"none\"",
        rgb_string(color),
        format_float(stroke_width)
    );
    if color[3] < 1.0 {
        attrs.push_str(&format!(" stroke-opacity=\"{}\"", format_float(color[3])));
    }
    attrs
}

fn rgb_string(color: Color) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgb({},{},{})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2])
    )
}

/// Kompakte Zahlendarstellung: ganze Werte ohne Nachkommastellen, sonst max. 3.
fn format_float(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        let text = format!("{:.3}", value);
        text.trim_end_matches('0').to_string()
    }
}

//! Vector document emission: placed boxes and text runs to SVG markup.

use crate::rendering::layout::{Placed, PlacedBox, Rect, TextRun};
use crate::Canvas;

// Baseline sits a bit above the vertical middle of the line box.
const BASELINE_SHIFT: f32 = 0.35;

/// Serialize a placed tree into a standalone SVG document sized to the canvas
pub fn to_svg(root: &Placed, canvas: Canvas) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = canvas.width,
        h = canvas.height,
    ));
    let mut clip_counter = 0u32;
    emit(&mut svg, root, &mut clip_counter);
    svg.push_str("</svg>");
    svg
}

fn emit(out: &mut String, placed: &Placed, clip_counter: &mut u32) {
    match placed {
        Placed::Box(container) => emit_box(out, container, clip_counter),
        Placed::Text(run) => emit_text(out, run),
    }
}

fn emit_box(out: &mut String, container: &PlacedBox, clip_counter: &mut u32) {
    if let Some(fill) = &container.background {
        out.push_str(&rect_element(&container.rect, container.corner_radius, fill));
    }
    if container.clip {
        let id = *clip_counter;
        *clip_counter += 1;
        out.push_str(&format!(
            "<clipPath id=\"clip{id}\"><rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{r:.2}\"/></clipPath>",
            x = container.rect.x,
            y = container.rect.y,
            w = container.rect.width,
            h = container.rect.height,
            r = container.corner_radius,
        ));
        out.push_str(&format!("<g clip-path=\"url(#clip{id})\">"));
        for child in &container.children {
            emit(out, child, clip_counter);
        }
        out.push_str("</g>");
    } else {
        for child in &container.children {
            emit(out, child, clip_counter);
        }
    }
}

fn emit_text(out: &mut String, run: &TextRun) {
    if run.content.trim().is_empty() {
        return;
    }
    let (x, anchor) = match run.align {
        crate::tree::TextAlign::Left => (run.rect.x, ""),
        crate::tree::TextAlign::Right => {
            (run.rect.x + run.rect.width, " text-anchor=\"end\"")
        }
    };
    let baseline = run.rect.y + run.rect.height / 2.0 + run.size * BASELINE_SHIFT;

    out.push_str(&format!("<text x=\"{:.2}\" y=\"{:.2}\"", x, baseline));
    if let Some(family) = &run.family {
        out.push_str(&format!(" font-family=\"{}\"", escape_xml(family)));
    }
    out.push_str(&format!(" font-size=\"{:.2}\" font-weight=\"{}\"", run.size, run.weight));
    if run.italic {
        out.push_str(" font-style=\"italic\"");
    }
    if run.letter_spacing != 0.0 {
        out.push_str(&format!(" letter-spacing=\"{:.2}\"", run.letter_spacing));
    }
    out.push_str(&format!(
        "{} fill=\"{}\" xml:space=\"preserve\">{}</text>",
        anchor,
        escape_xml(&run.color),
        escape_xml(&run.content),
    ));
}

fn rect_element(rect: &Rect, corner_radius: f32, fill: &str) -> String {
    let mut element = format!(
        "<rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\"",
        rect.x, rect.y, rect.width, rect.height,
    );
    if corner_radius > 0.0 {
        element.push_str(&format!(" rx=\"{:.2}\"", corner_radius));
    }
    element.push_str(&format!(" fill=\"{}\"/>", escape_xml(fill)));
    element
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

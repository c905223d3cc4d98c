// File: crates/viz-core/src/overlay.rs
// Summary: Tooltip, legend, and detail-modal marks derived from selection state.

use serde_json::Value;

use crate::color::Palette;
use crate::data::Datum;
use crate::error::VizError;
use crate::geometry::clamp;
use crate::interaction::PointerPos;
use crate::scene::{Anchor, Mark};

/// Tooltip/modal content source: a caller closure, or a `{field}` string
/// template substituted against the datum.
pub enum DetailContent {
    Template(String),
    Render(Box<dyn Fn(&Datum) -> String>),
}

impl DetailContent {
    pub fn resolve(&self, datum: &Datum) -> Result<String, VizError> {
        match self {
            DetailContent::Template(t) => render_template(t, datum),
            DetailContent::Render(f) => Ok(f(datum)),
        }
    }
}

/// Substitute `{field}` placeholders against the datum. `{label}` resolves
/// to the datum label; any other field is looked up in the opaque payload.
/// Values are substituted as plain text; the renderer escapes them, so
/// caller strings are never interpreted as markup.
pub fn render_template(template: &str, datum: &Datum) -> Result<String, VizError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 1..];
        let Some(close) = tail.find('}') else {
            out.push('{');
            rest = tail;
            continue;
        };
        let field = &tail[..close];
        out.push_str(&lookup_field(datum, field)?);
        rest = &tail[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

fn lookup_field(datum: &Datum, field: &str) -> Result<String, VizError> {
    if field == "label" {
        return Ok(datum.label.clone().unwrap_or_default());
    }
    let payload = datum
        .payload
        .as_ref()
        .ok_or_else(|| VizError::TemplateField(field.to_string()))?;
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Null) | None => Err(VizError::TemplateField(field.to_string())),
        Some(other) => Ok(other.to_string()),
    }
}

const TOOLTIP_OFFSET: f32 = 12.0;
const TOOLTIP_PAD: f32 = 8.0;
const TOOLTIP_FONT: f32 = 12.0;
// Glyph width approximation; the core has no text shaper.
const CHAR_W: f32 = 7.0;

/// Tooltip anchored near the pointer, clamped into the scene bounds.
pub fn tooltip_marks(
    text: &str,
    pos: PointerPos,
    bounds: (f32, f32),
    palette: &Palette,
) -> Vec<Mark> {
    let w = text.chars().count() as f32 * CHAR_W + TOOLTIP_PAD * 2.0;
    let h = TOOLTIP_FONT + TOOLTIP_PAD * 2.0;
    let x = clamp(pos.x + TOOLTIP_OFFSET, 0.0, (bounds.0 - w).max(0.0));
    let y = clamp(pos.y - h - TOOLTIP_OFFSET, 0.0, (bounds.1 - h).max(0.0));
    vec![
        Mark::Rect {
            x,
            y,
            width: w,
            height: h,
            fill: palette.tooltip_bg.to_string(),
            opacity: 0.95,
            key: None,
            enter: None,
        },
        Mark::Text {
            x: x + TOOLTIP_PAD,
            y: y + TOOLTIP_PAD + TOOLTIP_FONT * 0.8,
            content: text.to_string(),
            size: TOOLTIP_FONT,
            fill: palette.tooltip_text.to_string(),
            anchor: Anchor::Start,
        },
    ]
}

const SWATCH: f32 = 10.0;
const LEGEND_ROW: f32 = 18.0;

/// Legend swatches for `(name, color)` entries, stacked vertically from
/// `origin`.
pub fn legend_marks(entries: &[(String, String)], origin: (f32, f32), palette: &Palette) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(entries.len() * 2);
    for (i, (name, color)) in entries.iter().enumerate() {
        let y = origin.1 + i as f32 * LEGEND_ROW;
        marks.push(Mark::Rect {
            x: origin.0,
            y,
            width: SWATCH,
            height: SWATCH,
            fill: color.clone(),
            opacity: 1.0,
            key: None,
            enter: None,
        });
        marks.push(Mark::Text {
            x: origin.0 + SWATCH + 6.0,
            y: y + SWATCH * 0.9,
            content: name.clone(),
            size: TOOLTIP_FONT,
            fill: palette.axis_label.to_string(),
            anchor: Anchor::Start,
        });
    }
    marks
}

const MODAL_W: f32 = 280.0;
const MODAL_LINE: f32 = 18.0;

/// Detail modal shown while a click is active and a detail renderer is
/// configured. Content lines are split on `\n`.
pub fn modal_marks(text: &str, bounds: (f32, f32), palette: &Palette) -> Vec<Mark> {
    let lines: Vec<&str> = text.lines().collect();
    let h = lines.len() as f32 * MODAL_LINE + TOOLTIP_PAD * 2.0;
    let x = (bounds.0 - MODAL_W) * 0.5;
    let y = (bounds.1 - h) * 0.5;
    let mut marks = vec![Mark::Rect {
        x,
        y,
        width: MODAL_W,
        height: h,
        fill: palette.tooltip_bg.to_string(),
        opacity: 0.98,
        key: None,
        enter: None,
    }];
    for (i, line) in lines.iter().enumerate() {
        marks.push(Mark::Text {
            x: x + TOOLTIP_PAD,
            y: y + TOOLTIP_PAD + (i as f32 + 0.8) * MODAL_LINE,
            content: (*line).to_string(),
            size: TOOLTIP_FONT,
            fill: palette.tooltip_text.to_string(),
            anchor: Anchor::Start,
        });
    }
    marks
}

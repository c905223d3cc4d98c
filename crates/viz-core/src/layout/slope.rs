// File: crates/viz-core/src/layout/slope.rs
// Summary: Slope and dumbbell layouts connecting paired endpoints per group.

use serde::Deserialize;

use crate::color::Palette;
use crate::data::SpanDatum;
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Enter, Mark};

/// Which pair of endpoints a span connects. `MinMax` reorders so the
/// arrowhead always points at the larger value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanOrder {
    #[default]
    FirstLast,
    MinMax,
}

const ENDPOINT_R: f32 = 4.0;
const ARROW: f32 = 7.0;

/// Slope chart: two vertical value axes at `left_x`/`right_x`, one
/// connecting line per span.
pub fn slope_layout(
    spans: &[SpanDatum],
    left_x: f32,
    right_x: f32,
    y: &LinearScale,
    order: SpanOrder,
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    let mut marks = Vec::new();
    for (i, span) in spans.iter().enumerate() {
        let Some((a, b)) = endpoints(span, order) else { continue };
        let key = Some(span.datum.key(i));
        let color = fill_for(span, palette, i);
        marks.push(Mark::Line {
            x1: left_x,
            y1: y.map(a),
            x2: right_x,
            y2: y.map(b),
            stroke: color.clone(),
            width: 2.0,
            dashed: false,
            key: key.clone(),
        });
        for (cx, v) in [(left_x, a), (right_x, b)] {
            marks.push(Mark::Circle {
                cx,
                cy: y.map(v),
                r: ENDPOINT_R,
                fill: color.clone(),
                opacity: 1.0,
                key: key.clone(),
                enter,
            });
        }
    }
    marks
}

/// Dumbbell chart: one row per span, endpoints on the x value scale joined
/// by a line with an arrowhead at the destination endpoint.
pub fn dumbbell_layout(
    spans: &[SpanDatum],
    rows: &BandScale,
    x: &LinearScale,
    order: SpanOrder,
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    let mut marks = Vec::new();
    for (i, span) in spans.iter().enumerate() {
        let Some((a, b)) = endpoints(span, order) else { continue };
        let key = Some(span.datum.key(i));
        let color = fill_for(span, palette, i);
        let cy = rows.center(i);
        let (x0, x1) = (x.map(a), x.map(b));
        marks.push(Mark::Line {
            x1: x0,
            y1: cy,
            x2: x1,
            y2: cy,
            stroke: color.clone(),
            width: 2.0,
            dashed: false,
            key: key.clone(),
        });
        for cx in [x0, x1] {
            marks.push(Mark::Circle {
                cx,
                cy,
                r: ENDPOINT_R,
                fill: color.clone(),
                opacity: 1.0,
                key: key.clone(),
                enter,
            });
        }
        // Arrowhead direction follows endpoint ordering.
        let dir = if x1 >= x0 { 1.0 } else { -1.0 };
        marks.push(Mark::Path {
            points: vec![
                (x1 + dir * ARROW, cy),
                (x1, cy - ARROW * 0.6),
                (x1, cy + ARROW * 0.6),
            ],
            stroke: None,
            stroke_width: 0.0,
            fill: Some(color),
            opacity: 1.0,
            closed: true,
            key,
            enter,
        });
    }
    marks
}

fn endpoints(span: &SpanDatum, order: SpanOrder) -> Option<(f64, f64)> {
    let a = span.start.filter(|v| v.is_finite())?;
    let b = span.end.filter(|v| v.is_finite())?;
    match order {
        SpanOrder::FirstLast => Some((a, b)),
        SpanOrder::MinMax => Some((a.min(b), a.max(b))),
    }
}

fn fill_for(span: &SpanDatum, palette: &Palette, i: usize) -> String {
    span.datum
        .color
        .clone()
        .unwrap_or_else(|| palette.series_color(i).to_string())
}

// File: crates/viz-core/src/layout/line.rs
// Summary: Polyline layout with null gaps and invert-based hover hit-testing.

use crate::color::Palette;
use crate::data::XyDatum;
use crate::scale::LinearScale;
use crate::scene::{Enter, Mark};

/// One stroked path per contiguous run of non-null points; a null y breaks
/// the polyline rather than bridging the gap.
pub fn layout(
    points: &[XyDatum],
    x: &LinearScale,
    y: &LinearScale,
    stroke: &str,
    enter: Option<Enter>,
) -> Vec<Mark> {
    let mut marks = Vec::new();
    let mut run: Vec<(f32, f32)> = Vec::new();
    let mut flush = |run: &mut Vec<(f32, f32)>| {
        if run.len() >= 2 {
            marks.push(Mark::Path {
                points: std::mem::take(run),
                stroke: Some(stroke.to_string()),
                stroke_width: 2.0,
                fill: None,
                opacity: 1.0,
                closed: false,
                key: None,
                enter,
            });
        } else {
            run.clear();
        }
    };
    for p in points {
        match p.y.filter(|v| v.is_finite()) {
            Some(v) => run.push((x.map(p.x), y.map(v))),
            None => flush(&mut run),
        }
    }
    flush(&mut run);
    marks
}

/// Circle markers at each non-null point, keyed for pointer routing.
pub fn point_markers(
    points: &[XyDatum],
    x: &LinearScale,
    y: &LinearScale,
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let v = p.y.filter(|v| v.is_finite())?;
            Some(Mark::Circle {
                cx: x.map(p.x),
                cy: y.map(v),
                r: 3.5,
                fill: p
                    .datum
                    .color
                    .clone()
                    .unwrap_or_else(|| palette.series_color(0).to_string()),
                opacity: 1.0,
                key: Some(p.datum.key(i)),
                enter,
            })
        })
        .collect()
}

/// Index of the non-null point nearest to a hovered pixel, found by
/// inverting the x scale back into the domain.
pub fn nearest_point(points: &[XyDatum], x: &LinearScale, px: f32) -> Option<usize> {
    let target = x.invert(px);
    points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.y.map(|v| v.is_finite()).unwrap_or(false))
        .min_by(|(_, a), (_, b)| {
            let da = (a.x - target).abs();
            let db = (b.x - target).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
}

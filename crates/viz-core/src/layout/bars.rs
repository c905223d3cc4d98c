// File: crates/viz-core/src/layout/bars.rs
// Summary: Plain/stacked/grouped bar layout, totals, and timeline frame completion.

use crate::color::Palette;
use crate::data::{BarGroup, Datum, Frame};
use crate::scale::{BandScale, LinearScale};
use crate::scene::{Anchor, Enter, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarMode {
    Plain,
    Stacked,
    Grouped,
}

/// Sum of the non-null entries in a group; `None` when every entry is null.
pub fn group_total(values: &[Option<f64>]) -> Option<f64> {
    let mut total = None;
    for v in values.iter().flatten().filter(|v| v.is_finite()) {
        *total.get_or_insert(0.0) += v;
    }
    total
}

/// Position one rect per (group, series) value. Stacking offsets are the
/// running sum of prior non-null series values within the group, so a
/// skipped null leaves no gap.
pub fn layout(
    groups: &[BarGroup],
    mode: BarMode,
    series_count: usize,
    band: &BandScale,
    value: &LinearScale,
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    let mut marks = Vec::new();
    let baseline = value.map(0.0);
    for (gi, group) in groups.iter().enumerate() {
        let key = Some(group.datum.key(gi));
        match mode {
            BarMode::Stacked => {
                let mut offset = 0.0f64;
                for (si, v) in group.values.iter().copied().enumerate() {
                    let Some(v) = v.filter(|v| v.is_finite()) else { continue };
                    let y0 = value.map(offset);
                    let y1 = value.map(offset + v);
                    marks.push(segment_rect(
                        band.position(gi),
                        band.bandwidth(),
                        y0,
                        y1,
                        fill_for(&group.datum, palette, si),
                        key.clone(),
                        enter,
                    ));
                    offset += v;
                }
            }
            BarMode::Grouped => {
                let slot = band.bandwidth() / series_count.max(1) as f32;
                for (si, v) in group.values.iter().copied().enumerate() {
                    let Some(v) = v.filter(|v| v.is_finite()) else { continue };
                    marks.push(segment_rect(
                        band.position(gi) + slot * si as f32,
                        slot,
                        baseline,
                        value.map(v),
                        fill_for(&group.datum, palette, si),
                        key.clone(),
                        enter,
                    ));
                }
            }
            BarMode::Plain => {
                if let Some(v) = group.values.first().copied().flatten().filter(|v| v.is_finite())
                {
                    marks.push(segment_rect(
                        band.position(gi),
                        band.bandwidth(),
                        baseline,
                        value.map(v),
                        fill_for(&group.datum, palette, gi),
                        key,
                        enter,
                    ));
                }
            }
        }
    }
    marks
}

/// Total labels above each group (stacked totals, or the single value).
#[allow(clippy::too_many_arguments)]
pub fn total_labels(
    groups: &[BarGroup],
    band: &BandScale,
    value: &LinearScale,
    na_label: &str,
    precision: usize,
    prefix: &str,
    suffix: &str,
    palette: &Palette,
) -> Vec<Mark> {
    groups
        .iter()
        .enumerate()
        .map(|(gi, group)| {
            let total = group_total(&group.values);
            let y = value.map(total.unwrap_or(0.0).max(0.0)) - 6.0;
            Mark::Text {
                x: band.center(gi),
                y,
                content: crate::format::format_value(total, na_label, precision, prefix, suffix),
                size: 11.0,
                fill: palette.axis_label.to_string(),
                anchor: Anchor::Middle,
            }
        })
        .collect()
}

/// Complete dated frames so every frame carries the full label universe, in
/// first-appearance order, synthesizing null groups for missing labels.
/// Timeline playback then animates between frames over stable keys.
pub fn complete_frames(frames: &[Frame]) -> Vec<Frame> {
    let mut universe: Vec<String> = Vec::new();
    let mut series_len = 0usize;
    for frame in frames {
        for group in &frame.groups {
            series_len = series_len.max(group.values.len());
            if let Some(label) = &group.datum.label {
                if !universe.iter().any(|l| l == label) {
                    universe.push(label.clone());
                }
            }
        }
    }

    frames
        .iter()
        .map(|frame| {
            let groups = universe
                .iter()
                .map(|label| {
                    frame
                        .groups
                        .iter()
                        .find(|g| g.datum.label.as_deref() == Some(label))
                        .cloned()
                        .unwrap_or_else(|| BarGroup {
                            datum: Datum::labeled(label.clone()),
                            values: vec![None; series_len],
                        })
                })
                .collect();
            Frame { date: frame.date, groups }
        })
        .collect()
}

fn fill_for(datum: &Datum, palette: &Palette, series_index: usize) -> String {
    datum
        .color
        .clone()
        .unwrap_or_else(|| palette.series_color(series_index).to_string())
}

fn segment_rect(
    x: f32,
    width: f32,
    y0: f32,
    y1: f32,
    fill: String,
    key: Option<crate::data::DatumKey>,
    enter: Option<Enter>,
) -> Mark {
    Mark::Rect {
        x,
        y: y0.min(y1),
        width,
        height: (y0 - y1).abs(),
        fill,
        opacity: 1.0,
        key,
        enter,
    }
}

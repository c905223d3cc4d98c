// File: crates/viz-core/src/layout/sankey.rs
// Summary: Two-column flow layout: node stacking, link ribbons, per-link gradients.

use std::collections::HashMap;

use log::warn;

use crate::color::Palette;
use crate::data::{FlowLink, FlowNode, Tier};
use crate::geometry::RectF32;
use crate::scene::{Anchor, Enter, GradientDef, Mark};

const NODE_W: f32 = 18.0;
const NODE_GAP: f32 = 10.0;

struct NodeSlot {
    top: f32,
    height: f32,
    color: String,
    // Running anchor offsets for outgoing/incoming link attachment.
    out_cursor: f32,
    in_cursor: f32,
}

/// Lay out source/target node columns and the link ribbons between them.
/// Node heights and ribbon thicknesses share one pixels-per-unit factor, so
/// flow is conserved visually: the ribbons attached to a node exactly fill
/// its height when the data balances.
pub fn layout(
    nodes: &[FlowNode],
    links: &[FlowLink],
    rect: RectF32,
    palette: &Palette,
    enter: Option<Enter>,
) -> (Vec<Mark>, Vec<GradientDef>) {
    // Per-node throughflow from the link values.
    let mut flow: HashMap<&str, f64> = HashMap::new();
    for link in links {
        let Some(v) = link.value.filter(|v| v.is_finite() && *v > 0.0) else { continue };
        *flow.entry(link.source.as_str()).or_default() += v;
        *flow.entry(link.target.as_str()).or_default() += v;
    }

    let column_flow = |tier: Tier| -> f64 {
        nodes
            .iter()
            .filter(|n| n.tier == tier)
            .filter_map(|n| n.datum.label.as_deref())
            .filter_map(|l| flow.get(l))
            .copied()
            .sum()
    };
    let max_flow = column_flow(Tier::Source).max(column_flow(Tier::Target));
    if max_flow <= 0.0 {
        warn!("sankey: no positive link values, rendering nothing");
        return (Vec::new(), Vec::new());
    }

    let gaps = |count: usize| NODE_GAP * count.saturating_sub(1) as f32;
    let source_count = nodes.iter().filter(|n| n.tier == Tier::Source).count();
    let target_count = nodes.iter().filter(|n| n.tier == Tier::Target).count();
    let usable = rect.height() - gaps(source_count.max(target_count));
    let px_per_unit = (usable.max(1.0) / max_flow as f32) as f64;

    // Stack nodes per column in supplied order.
    let mut marks = Vec::new();
    let mut slots: HashMap<String, NodeSlot> = HashMap::new();
    for tier in [Tier::Source, Tier::Target] {
        let x = match tier {
            Tier::Source => rect.left,
            Tier::Target => rect.right - NODE_W,
        };
        let mut cursor = rect.top;
        for (i, node) in nodes.iter().enumerate().filter(|(_, n)| n.tier == tier) {
            let Some(label) = node.datum.label.clone() else {
                warn!("sankey: node {i} has no label, skipping");
                continue;
            };
            let height = (flow.get(label.as_str()).copied().unwrap_or(0.0) * px_per_unit) as f32;
            let color = node
                .datum
                .color
                .clone()
                .unwrap_or_else(|| palette.series_color(i).to_string());
            marks.push(Mark::Rect {
                x,
                y: cursor,
                width: NODE_W,
                height,
                fill: color.clone(),
                opacity: 1.0,
                key: Some(node.datum.key(i)),
                enter,
            });
            let (anchor, tx) = match tier {
                Tier::Source => (Anchor::End, x - 6.0),
                Tier::Target => (Anchor::Start, x + NODE_W + 6.0),
            };
            marks.push(Mark::Text {
                x: tx,
                y: cursor + height * 0.5 + 4.0,
                content: label.clone(),
                size: 11.0,
                fill: palette.axis_label.to_string(),
                anchor,
            });
            slots.insert(
                label,
                NodeSlot { top: cursor, height, color, out_cursor: 0.0, in_cursor: 0.0 },
            );
            cursor += height + NODE_GAP;
        }
    }

    // Ribbons, each with its own source-to-target gradient.
    let mut defs = Vec::new();
    for (li, link) in links.iter().enumerate() {
        let Some(v) = link.value.filter(|v| v.is_finite() && *v > 0.0) else { continue };
        let thickness = (v * px_per_unit) as f32;
        let (y0, y1, from, to) = {
            let Some(src) = slots.get(link.source.as_str()) else {
                warn!("sankey: link {li} references unknown source `{}`", link.source);
                continue;
            };
            let Some(tgt) = slots.get(link.target.as_str()) else {
                warn!("sankey: link {li} references unknown target `{}`", link.target);
                continue;
            };
            (
                src.top + src.out_cursor + thickness * 0.5,
                tgt.top + tgt.in_cursor + thickness * 0.5,
                src.color.clone(),
                tgt.color.clone(),
            )
        };
        if let Some(src) = slots.get_mut(link.source.as_str()) {
            src.out_cursor += thickness;
        }
        if let Some(tgt) = slots.get_mut(link.target.as_str()) {
            tgt.in_cursor += thickness;
        }

        let id = format!("flow-link-{li}");
        defs.push(GradientDef { id: id.clone(), from, to });
        marks.push(Mark::Ribbon {
            x0: rect.left + NODE_W,
            y0,
            x1: rect.right - NODE_W,
            y1,
            thickness,
            fill: format!("url(#{id})"),
            opacity: 0.6,
            key: Some(crate::data::DatumKey::Label(format!(
                "{} \u{2192} {}",
                link.source, link.target
            ))),
            enter,
        });
    }

    (marks, defs)
}

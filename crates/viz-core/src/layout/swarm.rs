// File: crates/viz-core/src/layout/swarm.rs
// Summary: Beeswarm layout via a small force simulation (axis attraction + collision).

use log::debug;
use serde::Deserialize;

use crate::color::Palette;
use crate::data::PointDatum;
use crate::scale::LinearScale;
use crate::scene::{Enter, Mark};

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwarmOptions {
    /// Fixed iteration budget; the run is synchronous and positions are
    /// committed atomically only after it finishes.
    pub max_ticks: usize,
    /// Convergence threshold on the largest per-tick displacement, px.
    pub decay: f32,
    pub default_radius: f32,
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self { max_ticks: 10_000, decay: 0.01, default_radius: 5.0 }
    }
}

/// A settled point; `index` refers back into the input slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwarmPoint {
    pub index: usize,
    pub x: f32,
    pub y: f32,
    pub r: f32,
}

/// Run the simulation to convergence. Points are attracted to their scaled
/// value along x and to `center_y` along y, while overlapping pairs are
/// pushed apart. Deterministic: the initial jitter is index-derived, no
/// randomness.
pub fn simulate(
    points: &[PointDatum],
    value: &LinearScale,
    center_y: f32,
    opts: &SwarmOptions,
) -> Vec<SwarmPoint> {
    let mut sim: Vec<SwarmPoint> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| {
            let v = p.value.filter(|v| v.is_finite())?;
            let r = p.radius.map(|r| r as f32).unwrap_or(opts.default_radius);
            // Small alternating jitter so stacked equal values separate.
            let jitter = (i % 7) as f32 - 3.0;
            Some(SwarmPoint { index: i, x: value.map(v), y: center_y + jitter * 0.5, r })
        })
        .collect();

    let n = sim.len();
    for tick in 0..opts.max_ticks {
        let mut max_move = 0.0f32;

        // Positional attraction toward the value axis position.
        for p in sim.iter_mut() {
            let target_x = value.map(
                points[p.index].value.unwrap_or(0.0),
            );
            let dx = (target_x - p.x) * 0.1;
            let dy = (center_y - p.y) * 0.02;
            p.x += dx;
            p.y += dy;
            max_move = max_move.max(dx.abs().max(dy.abs()));
        }

        // Pairwise collision resolution.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = sim[j].x - sim[i].x;
                let dy = sim[j].y - sim[i].y;
                let min_dist = sim[i].r + sim[j].r + 0.5;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist >= min_dist {
                    continue;
                }
                // Coincident points separate vertically.
                let (ux, uy) = if dist > 1e-6 {
                    (dx / dist, dy / dist)
                } else {
                    (0.0, 1.0)
                };
                let push = (min_dist - dist) * 0.5;
                sim[i].x -= ux * push;
                sim[i].y -= uy * push;
                sim[j].x += ux * push;
                sim[j].y += uy * push;
                max_move = max_move.max(push);
            }
        }

        if max_move < opts.decay {
            debug!("swarm converged after {tick} ticks");
            break;
        }
    }
    sim
}

/// Circles for the settled swarm.
pub fn layout(
    settled: &[SwarmPoint],
    points: &[PointDatum],
    palette: &Palette,
    enter: Option<Enter>,
) -> Vec<Mark> {
    settled
        .iter()
        .map(|s| {
            let datum = &points[s.index].datum;
            Mark::Circle {
                cx: s.x,
                cy: s.y,
                r: s.r,
                fill: datum
                    .color
                    .clone()
                    .unwrap_or_else(|| palette.series_color(0).to_string()),
                opacity: 1.0,
                key: Some(datum.key(s.index)),
                enter,
            }
        })
        .collect()
}

// File: crates/viz-core/src/layout/mod.rs
// Summary: Per-chart-family layout engines (pure data -> positioned marks).

pub mod bars;
pub mod heatmap;
pub mod line;
pub mod sankey;
pub mod slope;
pub mod swarm;

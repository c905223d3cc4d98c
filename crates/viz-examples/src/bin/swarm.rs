// File: crates/viz-examples/src/bin/swarm.rs
// Summary: Renders a beeswarm chart from CSV data to SVG.

use anyhow::{Context, Result};
use viz_core::{ChartConfig, ChartData, ChartKind, ChartView, Datum, PointDatum};
use viz_render_svg::SvgRenderer;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "data/cities.csv".to_string());
    let mut reader = csv::Reader::from_path(&path).with_context(|| format!("open {path}"))?;

    let mut points = Vec::new();
    for record in reader.records() {
        let record = record?;
        let label = record.get(0).unwrap_or_default().to_string();
        // Malformed numbers become absent values, never errors.
        let value = record.get(1).and_then(|v| v.trim().parse::<f64>().ok());
        points.push(PointDatum { datum: Datum::labeled(label), value, radius: None });
    }

    let config = ChartConfig::from_json(serde_json::json!({
        "suffix": "k",
        "precision": 0,
    }))?;

    let mut view = ChartView::new(ChartKind::BeeSwarm, config);
    let scene = view.render(&ChartData::Points { points });

    let out = std::path::PathBuf::from("target/out/swarm.svg");
    SvgRenderer::new().render_to_file(&scene, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

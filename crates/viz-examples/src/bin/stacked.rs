// File: crates/viz-examples/src/bin/stacked.rs
// Summary: Renders an animated stacked bar chart to SVG.

use anyhow::Result;
use viz_core::{BarGroup, ChartConfig, ChartData, ChartKind, ChartView};
use viz_render_svg::SvgRenderer;

fn main() -> Result<()> {
    let data = ChartData::Bars {
        series: vec!["Hardware".into(), "Software".into(), "Services".into()],
        groups: vec![
            BarGroup::new("Q1", vec![Some(12.0), Some(8.5), Some(3.0)]),
            BarGroup::new("Q2", vec![Some(14.0), None, Some(4.5)]),
            BarGroup::new("Q3", vec![Some(11.0), Some(10.0), Some(5.0)]),
            BarGroup::new("Q4", vec![Some(16.5), Some(12.0), Some(6.0)]),
        ],
    };

    let config = ChartConfig::from_json(serde_json::json!({
        "prefix": "$",
        "suffix": "M",
        "showLegend": true,
        "animation": { "enabled": true, "durationMs": 800 },
    }))?;

    let mut view = ChartView::new(ChartKind::StackedBar, config);
    let scene = view.render(&data);

    let out = std::path::PathBuf::from("target/out/stacked.svg");
    SvgRenderer::new().render_to_file(&scene, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

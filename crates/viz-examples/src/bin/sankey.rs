// File: crates/viz-examples/src/bin/sankey.rs
// Summary: Renders a two-column sankey flow chart to SVG.

use anyhow::Result;
use viz_core::{ChartConfig, ChartData, ChartKind, ChartView, Datum, FlowLink, FlowNode, Tier};
use viz_render_svg::SvgRenderer;

fn node(label: &str, tier: Tier) -> FlowNode {
    FlowNode { datum: Datum::labeled(label), tier }
}

fn link(source: &str, target: &str, value: f64) -> FlowLink {
    FlowLink { source: source.into(), target: target.into(), value: Some(value), payload: None }
}

fn main() -> Result<()> {
    let data = ChartData::Flow {
        nodes: vec![
            node("Wind", Tier::Source),
            node("Solar", Tier::Source),
            node("Hydro", Tier::Source),
            node("Residential", Tier::Target),
            node("Industry", Tier::Target),
        ],
        links: vec![
            link("Wind", "Residential", 32.0),
            link("Wind", "Industry", 18.0),
            link("Solar", "Residential", 12.0),
            link("Hydro", "Industry", 25.0),
        ],
    };

    let mut view = ChartView::new(ChartKind::Sankey, ChartConfig::default());
    let scene = view.render(&data);

    let out = std::path::PathBuf::from("target/out/sankey.svg");
    SvgRenderer::new().render_to_file(&scene, &out)?;
    println!("Wrote {}", out.display());
    Ok(())
}

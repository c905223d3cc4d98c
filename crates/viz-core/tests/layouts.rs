// File: crates/viz-core/tests/layouts.rs
// Purpose: Swarm convergence, sankey flow conservation, heatmap scale selection,
// line hit-testing, and span endpoint ordering.

use viz_core::color::{ColorMode, ColorScale, Rgb};
use viz_core::geometry::RectF32;
use viz_core::layout::{heatmap, line, sankey, slope, swarm};
use viz_core::{
    BandOptions, BandScale, Datum, Domain, FlowLink, FlowNode, HeatCell, LinearScale, Mark,
    Palette, PointDatum, SpanDatum, Tier, XyDatum,
};

fn point(label: &str, value: f64) -> PointDatum {
    PointDatum { datum: Datum::labeled(label), value: Some(value), radius: None }
}

#[test]
fn swarm_separates_overlapping_points() {
    let points = vec![point("a", 5.0), point("b", 5.0), point("c", 5.0)];
    let scale = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 400.0));
    let settled = swarm::simulate(&points, &scale, 100.0, &swarm::SwarmOptions::default());

    assert_eq!(settled.len(), 3);
    for i in 0..settled.len() {
        for j in (i + 1)..settled.len() {
            let dx = settled[i].x - settled[j].x;
            let dy = settled[i].y - settled[j].y;
            let dist = (dx * dx + dy * dy).sqrt();
            let min_dist = settled[i].r + settled[j].r;
            assert!(dist >= min_dist - 0.5, "points {i},{j} still overlap: {dist}");
        }
    }
}

#[test]
fn swarm_is_deterministic() {
    let points = vec![point("a", 2.0), point("b", 2.0), point("c", 7.0)];
    let scale = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 400.0));
    let opts = swarm::SwarmOptions::default();
    let run1 = swarm::simulate(&points, &scale, 50.0, &opts);
    let run2 = swarm::simulate(&points, &scale, 50.0, &opts);
    assert_eq!(run1, run2);
}

#[test]
fn swarm_skips_null_values() {
    let points = vec![
        point("a", 1.0),
        PointDatum { datum: Datum::labeled("b"), value: None, radius: None },
    ];
    let scale = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 400.0));
    let settled = swarm::simulate(&points, &scale, 50.0, &swarm::SwarmOptions::default());
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0].index, 0);
}

#[test]
fn sankey_conserves_flow_at_the_source_node() {
    let nodes = vec![
        FlowNode { datum: Datum::labeled("Wind"), tier: Tier::Source },
        FlowNode { datum: Datum::labeled("Homes"), tier: Tier::Target },
        FlowNode { datum: Datum::labeled("Industry"), tier: Tier::Target },
    ];
    let links = vec![
        FlowLink { source: "Wind".into(), target: "Homes".into(), value: Some(30.0), payload: None },
        FlowLink { source: "Wind".into(), target: "Industry".into(), value: Some(20.0), payload: None },
    ];
    let rect = RectF32::from_ltrb(0.0, 0.0, 600.0, 400.0);
    let (marks, defs) = sankey::layout(&nodes, &links, rect, &Palette::dark(), None);

    // One gradient per rendered link.
    assert_eq!(defs.len(), 2);

    let source_height: f32 = marks
        .iter()
        .filter_map(|m| match m {
            Mark::Rect { x, height, .. } if *x == rect.left => Some(*height),
            _ => None,
        })
        .sum();
    let ribbon_total: f32 = marks
        .iter()
        .filter_map(|m| match m {
            Mark::Ribbon { thickness, .. } => Some(*thickness),
            _ => None,
        })
        .sum();
    assert!(
        (source_height - ribbon_total).abs() < 1e-2,
        "ribbons must fill the source node: node {source_height} vs links {ribbon_total}"
    );
}

#[test]
fn sankey_with_no_positive_links_renders_nothing() {
    let nodes = vec![
        FlowNode { datum: Datum::labeled("a"), tier: Tier::Source },
        FlowNode { datum: Datum::labeled("b"), tier: Tier::Target },
    ];
    let links =
        vec![FlowLink { source: "a".into(), target: "b".into(), value: None, payload: None }];
    let rect = RectF32::from_ltrb(0.0, 0.0, 600.0, 400.0);
    let (marks, defs) = sankey::layout(&nodes, &links, rect, &Palette::dark(), None);
    assert!(marks.is_empty());
    assert!(defs.is_empty());
}

#[test]
fn heatmap_auto_scale_goes_categorical_for_few_integer_levels() {
    let values = vec![Some(1.0), Some(2.0), Some(1.0), Some(3.0)];
    let scale = ColorScale::select(
        &values,
        Domain::new(0.0, 3.0),
        &Palette::dark(),
        ColorMode::Auto,
        &[],
    );
    assert!(matches!(scale, ColorScale::Categorical { .. }));
    // Same level, same color.
    let c1 = scale.color_of(Some(1.0));
    assert_eq!(c1, scale.color_of(Some(1.0)));
    assert_ne!(c1, scale.color_of(Some(2.0)));
}

#[test]
fn heatmap_auto_scale_goes_linear_for_continuous_values() {
    let values = vec![Some(0.25), Some(1.5), Some(2.75)];
    let scale = ColorScale::select(
        &values,
        Domain::new(0.0, 3.0),
        &Palette::dark(),
        ColorMode::Auto,
        &[],
    );
    assert!(matches!(scale, ColorScale::Linear { .. }));
}

#[test]
fn heatmap_thresholds_override_auto() {
    let values = vec![Some(1.0), Some(2.0)];
    let scale = ColorScale::select(
        &values,
        Domain::new(0.0, 3.0),
        &Palette::dark(),
        ColorMode::Auto,
        &[1.5],
    );
    assert!(matches!(scale, ColorScale::Threshold { .. }));
    assert_ne!(scale.color_of(Some(1.0)), scale.color_of(Some(2.0)));
}

#[test]
fn rgb_parse_tolerates_malformed_input() {
    assert_eq!(Rgb::parse("#40a0ff"), Rgb { r: 0x40, g: 0xa0, b: 0xff });
    let black = Rgb { r: 0, g: 0, b: 0 };
    assert_eq!(Rgb::parse("#40a0"), black);
    assert_eq!(Rgb::parse("zzzzzz"), black);
    // 6 bytes of multibyte UTF-8 must not slice mid-codepoint.
    assert_eq!(Rgb::parse("aééa"), black);
}

#[test]
fn heatmap_grid_completes_the_cartesian_product() {
    let cell = |row: &str, col: &str, v: f64| HeatCell {
        datum: Datum::labeled(format!("{row}/{col}")),
        row: row.into(),
        col: col.into(),
        value: Some(v),
    };
    // Three cells over a 2x2 label universe: the fourth is synthesized.
    let cells = vec![cell("r1", "c1", 1.0), cell("r1", "c2", 2.0), cell("r2", "c1", 3.0)];
    let (rows, cols) = heatmap::axes_labels(&cells);
    assert_eq!(rows, vec!["r1", "r2"]);
    assert_eq!(cols, vec!["c1", "c2"]);

    let row_band = BandScale::new(2, (0.0, 200.0), BandOptions::default());
    let col_band = BandScale::new(2, (0.0, 200.0), BandOptions::default());
    let values: Vec<Option<f64>> = cells.iter().map(|c| c.value).collect();
    let scale = ColorScale::select(
        &values,
        Domain::new(0.0, 3.0),
        &Palette::dark(),
        ColorMode::Linear,
        &[],
    );
    let marks = heatmap::layout(
        &cells,
        &rows,
        &cols,
        &row_band,
        &col_band,
        &scale,
        &Palette::dark(),
        None,
    );
    assert_eq!(marks.len(), 4);
    let empty_fills = marks
        .iter()
        .filter(|m| matches!(m, Mark::Rect { fill, .. } if fill == Palette::dark().empty_cell))
        .count();
    assert_eq!(empty_fills, 1);
}

#[test]
fn line_nearest_point_inverts_the_scale() {
    let points: Vec<XyDatum> = [(0.0, 1.0), (1.0, 2.0), (2.0, 0.5), (3.0, 1.5)]
        .iter()
        .map(|&(x, y)| XyDatum { datum: Datum::default(), x, y: Some(y) })
        .collect();
    let x = LinearScale::new(Domain::new(0.0, 3.0), (0.0, 300.0));
    assert_eq!(line::nearest_point(&points, &x, 210.0), Some(2));
    assert_eq!(line::nearest_point(&points, &x, 299.0), Some(3));
}

#[test]
fn line_nearest_point_skips_null_values() {
    let points = vec![
        XyDatum { datum: Datum::default(), x: 0.0, y: Some(1.0) },
        XyDatum { datum: Datum::default(), x: 1.0, y: None },
    ];
    let x = LinearScale::new(Domain::new(0.0, 1.0), (0.0, 100.0));
    // The pixel sits over the null point; the finite neighbor wins.
    assert_eq!(line::nearest_point(&points, &x, 95.0), Some(0));
}

#[test]
fn line_breaks_path_at_nulls() {
    let points: Vec<XyDatum> = [Some(1.0), Some(2.0), None, Some(3.0), Some(4.0)]
        .iter()
        .enumerate()
        .map(|(i, y)| XyDatum { datum: Datum::default(), x: i as f64, y: *y })
        .collect();
    let x = LinearScale::new(Domain::new(0.0, 4.0), (0.0, 400.0));
    let y = LinearScale::new(Domain::new(0.0, 4.0), (400.0, 0.0));
    let marks = line::layout(&points, &x, &y, "#fff", None);
    // Two runs of >= 2 points on either side of the null.
    assert_eq!(marks.len(), 2);
}

#[test]
fn dumbbell_min_max_order_points_arrow_at_the_larger_value() {
    let spans = vec![SpanDatum { datum: Datum::labeled("g"), start: Some(5.0), end: Some(2.0) }];
    let x = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 100.0));
    let rows = BandScale::new(1, (0.0, 50.0), BandOptions::default());
    let marks = slope::dumbbell_layout(
        &spans,
        &rows,
        &x,
        slope::SpanOrder::MinMax,
        &Palette::dark(),
        None,
    );
    let lines: Vec<&Mark> = marks.iter().filter(|m| matches!(m, Mark::Line { .. })).collect();
    assert_eq!(lines.len(), 1);
    if let Mark::Line { x1, x2, .. } = lines[0] {
        // Min-max order: the line runs left to right toward the max.
        assert!(x1 < x2);
        assert_eq!(*x1, x.map(2.0));
        assert_eq!(*x2, x.map(5.0));
    }
}

#[test]
fn span_with_missing_endpoint_is_skipped() {
    let spans = vec![SpanDatum { datum: Datum::labeled("g"), start: None, end: Some(2.0) }];
    let x = LinearScale::new(Domain::new(0.0, 10.0), (0.0, 100.0));
    let rows = BandScale::new(1, (0.0, 50.0), BandOptions::default());
    let marks = slope::dumbbell_layout(
        &spans,
        &rows,
        &x,
        slope::SpanOrder::FirstLast,
        &Palette::dark(),
        None,
    );
    assert!(marks.is_empty());
}

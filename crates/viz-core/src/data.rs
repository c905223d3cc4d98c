// File: crates/viz-core/src/data.rs
// Summary: Datum model shared by all chart families, plus per-family records.

use chrono::NaiveDate;
use serde_json::Value;

/// Stable identity for a datum: its label, or the index it was supplied at
/// when no label is present.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum DatumKey {
    Label(String),
    Index(usize),
}

/// Fields every chart family shares. `payload` is opaque to the library and
/// is handed back untouched through callbacks and templates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datum {
    pub label: Option<String>,
    pub color: Option<String>,
    pub payload: Option<Value>,
}

impl Datum {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self { label: Some(label.into()), color: None, payload: None }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn key(&self, index: usize) -> DatumKey {
        match &self.label {
            Some(l) => DatumKey::Label(l.clone()),
            None => DatumKey::Index(index),
        }
    }
}

/// One bar group: a label plus one value per series (missing entries stay
/// `None` and are skipped by stacking and totals).
#[derive(Clone, Debug, PartialEq)]
pub struct BarGroup {
    pub datum: Datum,
    pub values: Vec<Option<f64>>,
}

impl BarGroup {
    pub fn new(label: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        Self { datum: Datum::labeled(label), values }
    }
}

/// A dated snapshot of bar groups, used by timeline playback.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub date: NaiveDate,
    pub groups: Vec<BarGroup>,
}

/// An (x, y) record for line charts; `y: None` breaks the polyline.
#[derive(Clone, Debug, PartialEq)]
pub struct XyDatum {
    pub datum: Datum,
    pub x: f64,
    pub y: Option<f64>,
}

/// A start/end pair per group for slope and dumbbell charts.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanDatum {
    pub datum: Datum,
    pub start: Option<f64>,
    pub end: Option<f64>,
}

/// A single-value record for beeswarm charts.
#[derive(Clone, Debug, PartialEq)]
pub struct PointDatum {
    pub datum: Datum,
    pub value: Option<f64>,
    pub radius: Option<f64>,
}

/// Which visual column a sankey node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    Source,
    Target,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FlowNode {
    pub datum: Datum,
    pub tier: Tier,
}

/// A flow between a source-tier and a target-tier node, matched by label.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLink {
    pub source: String,
    pub target: String,
    pub value: Option<f64>,
    pub payload: Option<Value>,
}

/// A heatmap cell; the grid is completed to the full row x column product.
#[derive(Clone, Debug, PartialEq)]
pub struct HeatCell {
    pub datum: Datum,
    pub row: String,
    pub col: String,
    pub value: Option<f64>,
}

/// Per-family input data, matched against the chart kind at render time.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Bars { series: Vec<String>, groups: Vec<BarGroup> },
    Line { points: Vec<XyDatum> },
    Spans { left_label: String, right_label: String, spans: Vec<SpanDatum> },
    Points { points: Vec<PointDatum> },
    Flow { nodes: Vec<FlowNode>, links: Vec<FlowLink> },
    Grid { cells: Vec<HeatCell> },
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        match self {
            ChartData::Bars { groups, .. } => groups.is_empty(),
            ChartData::Line { points } => points.is_empty(),
            ChartData::Spans { spans, .. } => spans.is_empty(),
            ChartData::Points { points } => points.is_empty(),
            ChartData::Flow { nodes, links } => nodes.is_empty() || links.is_empty(),
            ChartData::Grid { cells } => cells.is_empty(),
        }
    }

    /// Identity of the data set, in supplied order. Selection state is
    /// reset whenever this changes.
    pub fn keys(&self) -> Vec<DatumKey> {
        match self {
            ChartData::Bars { groups, .. } => {
                groups.iter().enumerate().map(|(i, g)| g.datum.key(i)).collect()
            }
            ChartData::Line { points } => {
                points.iter().enumerate().map(|(i, p)| p.datum.key(i)).collect()
            }
            ChartData::Spans { spans, .. } => {
                spans.iter().enumerate().map(|(i, s)| s.datum.key(i)).collect()
            }
            ChartData::Points { points } => {
                points.iter().enumerate().map(|(i, p)| p.datum.key(i)).collect()
            }
            ChartData::Flow { nodes, .. } => {
                nodes.iter().enumerate().map(|(i, n)| n.datum.key(i)).collect()
            }
            ChartData::Grid { cells } => {
                cells.iter().enumerate().map(|(i, c)| c.datum.key(i)).collect()
            }
        }
    }

    /// Look up the datum behind a key, for callback dispatch.
    pub fn datum_by_key(&self, key: &DatumKey) -> Option<&Datum> {
        fn find_in<'a>(data: Vec<(&'a Datum, DatumKey)>, key: &DatumKey) -> Option<&'a Datum> {
            data.into_iter().find(|(_, k)| k == key).map(|(d, _)| d)
        }
        match self {
            ChartData::Bars { groups, .. } => find_in(
                groups.iter().enumerate().map(|(i, g)| (&g.datum, g.datum.key(i))).collect(),
                key,
            ),
            ChartData::Line { points } => find_in(
                points.iter().enumerate().map(|(i, p)| (&p.datum, p.datum.key(i))).collect(),
                key,
            ),
            ChartData::Spans { spans, .. } => find_in(
                spans.iter().enumerate().map(|(i, s)| (&s.datum, s.datum.key(i))).collect(),
                key,
            ),
            ChartData::Points { points } => find_in(
                points.iter().enumerate().map(|(i, p)| (&p.datum, p.datum.key(i))).collect(),
                key,
            ),
            ChartData::Flow { nodes, .. } => find_in(
                nodes.iter().enumerate().map(|(i, n)| (&n.datum, n.datum.key(i))).collect(),
                key,
            ),
            ChartData::Grid { cells } => find_in(
                cells.iter().enumerate().map(|(i, c)| (&c.datum, c.datum.key(i))).collect(),
                key,
            ),
        }
    }
}

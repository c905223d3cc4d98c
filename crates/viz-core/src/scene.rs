// File: crates/viz-core/src/scene.rs
// Summary: Renderer-agnostic visual tree: marks, gradient defs, extension slots.

use crate::data::DatumKey;

/// Entrance animation metadata attached to a mark. The renderer decides how
/// to express it (SVG `<animate>`, CSS transition, nothing).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enter {
    pub duration_ms: u32,
    pub from: EnterFrom,
}

/// Neutral initial state a mark enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnterFrom {
    /// Opacity 0 to final opacity.
    FadeIn,
    /// Zero height growing up from the baseline (bars).
    GrowUp,
}

/// Horizontal text anchoring, SVG semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// A linear gradient definition referenced by marks as `url(#id)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientDef {
    pub id: String,
    pub from: String,
    pub to: String,
}

/// One visual primitive. Data marks carry the key of the datum they were
/// laid out from, so hosts can route pointer events back by key.
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        fill: String,
        opacity: f32,
        key: Option<DatumKey>,
        enter: Option<Enter>,
    },
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: String,
        opacity: f32,
        key: Option<DatumKey>,
        enter: Option<Enter>,
    },
    /// Open polyline (stroked) or closed polygon (filled) through `points`.
    Path {
        points: Vec<(f32, f32)>,
        stroke: Option<String>,
        stroke_width: f32,
        fill: Option<String>,
        opacity: f32,
        closed: bool,
        key: Option<DatumKey>,
        enter: Option<Enter>,
    },
    /// Straight reference/axis/connector line.
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: String,
        width: f32,
        dashed: bool,
        key: Option<DatumKey>,
    },
    /// Thick curved band between two anchors (sankey links). The fill may
    /// reference a gradient def by `url(#id)`.
    Ribbon {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        thickness: f32,
        fill: String,
        opacity: f32,
        key: Option<DatumKey>,
        enter: Option<Enter>,
    },
    Text {
        x: f32,
        y: f32,
        content: String,
        size: f32,
        fill: String,
        anchor: Anchor,
    },
}

impl Mark {
    pub fn key(&self) -> Option<&DatumKey> {
        match self {
            Mark::Rect { key, .. }
            | Mark::Circle { key, .. }
            | Mark::Path { key, .. }
            | Mark::Line { key, .. }
            | Mark::Ribbon { key, .. } => key.as_ref(),
            Mark::Text { .. } => None,
        }
    }
}

/// The render surface output. `before` and `after` are caller-supplied
/// extension slots rendered strictly around the main mark set; the core
/// never inspects their contents.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub defs: Vec<GradientDef>,
    pub before: Vec<Mark>,
    pub marks: Vec<Mark>,
    pub after: Vec<Mark>,
    /// Tooltip/legend/modal chrome, drawn above everything.
    pub overlay: Vec<Mark>,
}

impl Scene {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            defs: Vec::new(),
            before: Vec::new(),
            marks: Vec::new(),
            after: Vec::new(),
            overlay: Vec::new(),
        }
    }

    /// A zero-size scene; renderers emit nothing for it.
    pub fn empty() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn is_blank(&self) -> bool {
        self.before.is_empty()
            && self.marks.is_empty()
            && self.after.is_empty()
            && self.overlay.is_empty()
    }
}

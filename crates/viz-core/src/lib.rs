// File: crates/viz-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart construction.

pub mod chart;
pub mod color;
pub mod data;
pub mod domain;
pub mod error;
pub mod format;
pub mod geometry;
pub mod interaction;
pub mod layout;
pub mod overlay;
pub mod scale;
pub mod scene;
pub mod types;

pub use chart::{AnimationOptions, ChartConfig, ChartKind, ChartView};
pub use color::{ColorMode, ColorScale, Palette};
pub use data::{
    BarGroup, ChartData, Datum, DatumKey, FlowLink, FlowNode, Frame, HeatCell, PointDatum,
    SpanDatum, Tier, XyDatum,
};
pub use domain::{resolve_domain, resolve_domain_multi, Domain, DomainOverride};
pub use error::VizError;
pub use format::format_value;
pub use interaction::{InteractionController, PointerPos, SelectionEvent};
pub use overlay::DetailContent;
pub use scale::{BandOptions, BandScale, LinearScale};
pub use scene::{Anchor, Enter, EnterFrom, GradientDef, Mark, Scene};
pub use types::{Dimensions, Insets};

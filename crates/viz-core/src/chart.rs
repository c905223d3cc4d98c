// File: crates/viz-core/src/chart.rs
// Summary: Chart kind dispatch, configuration, and the stateful view component.

use log::warn;
use serde::Deserialize;

use crate::color::{self, ColorMode, ColorScale, Palette};
use crate::data::{ChartData, Datum, DatumKey};
use crate::domain::{raw_extent, resolve_domain, Domain, DomainOverride};
use crate::error::VizError;
use crate::format::format_value;
use crate::geometry::{plot_rect, RectF32};
use crate::interaction::{InteractionController, PointerPos, SelectionEvent};
use crate::layout::{bars, heatmap, line, sankey, slope, swarm};
use crate::overlay::{self, DetailContent};
use crate::scale::{BandOptions, BandScale, LinearScale};
use crate::scene::{Anchor, Enter, EnterFrom, Mark, Scene};
use crate::types::{Dimensions, Insets};

/// Tagged chart variant. `Unknown` carries the unrecognized dispatch key
/// and renders the visible error message instead of failing silently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    StackedBar,
    GroupedBar,
    Line,
    Slope,
    Dumbbell,
    BeeSwarm,
    Sankey,
    HeatMap,
    Unknown(String),
}

impl ChartKind {
    pub fn from_key(key: &str) -> Self {
        match key.to_ascii_lowercase().as_str() {
            "bar" => ChartKind::Bar,
            "stacked-bar" | "stackedbar" => ChartKind::StackedBar,
            "grouped-bar" | "groupedbar" => ChartKind::GroupedBar,
            "line" => ChartKind::Line,
            "slope" => ChartKind::Slope,
            "dumbbell" => ChartKind::Dumbbell,
            "beeswarm" | "bee-swarm" => ChartKind::BeeSwarm,
            "sankey" => ChartKind::Sankey,
            "heatmap" | "heat-map" => ChartKind::HeatMap,
            other => {
                warn!("unknown chart kind `{other}`");
                ChartKind::Unknown(other.to_string())
            }
        }
    }
}

/// Entrance animation knobs. `replay_on_visibility` decides whether the
/// animation replays every time the surface enters view or only once; it is
/// a flag checked against the view's settled latch, not a separate path.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimationOptions {
    pub enabled: bool,
    pub duration_ms: u32,
    pub replay_on_visibility: bool,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self { enabled: false, duration_ms: 600, replay_on_visibility: false }
    }
}

/// Recognized configuration options; every field has a default and unknown
/// JSON keys are ignored on deserialization.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub insets: Insets,
    pub palette: String,
    pub precision: usize,
    pub na_label: String,
    pub prefix: String,
    pub suffix: String,
    pub domain: DomainOverride,
    pub band: BandOptions,
    pub animation: AnimationOptions,
    /// Clears the click when the clicked datum is clicked again. Matching
    /// by equality, not by a double-click timing window.
    pub reset_on_reclick: bool,
    pub show_legend: bool,
    pub show_totals: bool,
    pub x_axis_title: Option<String>,
    pub y_axis_title: Option<String>,
    pub span_order: slope::SpanOrder,
    pub color_mode: ColorMode,
    pub thresholds: Vec<f64>,
    pub swarm: swarm::SwarmOptions,
    pub grid_lines: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            palette: "dark".to_string(),
            precision: 1,
            na_label: "N/A".to_string(),
            prefix: String::new(),
            suffix: String::new(),
            domain: DomainOverride::default(),
            band: BandOptions::default(),
            animation: AnimationOptions::default(),
            reset_on_reclick: false,
            show_legend: false,
            show_totals: true,
            x_axis_title: None,
            y_axis_title: None,
            span_order: slope::SpanOrder::default(),
            color_mode: ColorMode::default(),
            thresholds: Vec::new(),
            swarm: swarm::SwarmOptions::default(),
            grid_lines: 5,
        }
    }
}

impl ChartConfig {
    /// Deserialize a caller-supplied JSON configuration object. Unknown
    /// options are ignored; recognized options override the defaults.
    pub fn from_json(value: serde_json::Value) -> Result<Self, VizError> {
        Ok(serde_json::from_value(value)?)
    }
}

type SelectionCallback = Box<dyn FnMut(Option<&Datum>)>;

/// The stateful chart component: owns selection state, the settled-animation
/// latch, callbacks, and the caller extension layers. Rendering is a pure
/// function of (data, dimensions, selection); nothing is cached across
/// renders.
pub struct ChartView {
    kind: ChartKind,
    config: ChartConfig,
    palette: Palette,
    interaction: InteractionController,
    settled: bool,
    tooltip: Option<DetailContent>,
    detail: Option<DetailContent>,
    before: Vec<Mark>,
    after: Vec<Mark>,
    on_series_mouse_over: Option<SelectionCallback>,
    on_series_mouse_click: Option<SelectionCallback>,
}

impl ChartView {
    pub fn new(kind: ChartKind, config: ChartConfig) -> Self {
        let palette = color::find(&config.palette);
        let interaction = InteractionController::new(config.reset_on_reclick);
        Self {
            kind,
            config,
            palette,
            interaction,
            settled: false,
            tooltip: None,
            detail: None,
            before: Vec::new(),
            after: Vec::new(),
            on_series_mouse_over: None,
            on_series_mouse_click: None,
        }
    }

    pub fn with_tooltip(mut self, content: DetailContent) -> Self {
        self.tooltip = Some(content);
        self
    }

    pub fn with_detail(mut self, content: DetailContent) -> Self {
        self.detail = Some(content);
        self
    }

    /// Opaque marks rendered strictly before the main mark set.
    pub fn with_before_layer(mut self, marks: Vec<Mark>) -> Self {
        self.before = marks;
        self
    }

    /// Opaque marks rendered strictly after the main mark set.
    pub fn with_after_layer(mut self, marks: Vec<Mark>) -> Self {
        self.after = marks;
        self
    }

    pub fn on_series_mouse_over(mut self, cb: SelectionCallback) -> Self {
        self.on_series_mouse_over = Some(cb);
        self
    }

    pub fn on_series_mouse_click(mut self, cb: SelectionCallback) -> Self {
        self.on_series_mouse_click = Some(cb);
        self
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn interaction(&self) -> &InteractionController {
        &self.interaction
    }

    /// Pointer entered or moved over the datum behind `key`.
    pub fn pointer_over(&mut self, data: &ChartData, key: DatumKey, pos: PointerPos) {
        if let Some(event) = self.interaction.pointer_over(key, pos) {
            Self::dispatch(&mut self.on_series_mouse_over, data, &event);
        }
    }

    /// Pointer left the mark set; callers see `None` as "no selection".
    pub fn pointer_leave(&mut self) {
        if self.interaction.pointer_leave().is_some() {
            if let Some(cb) = self.on_series_mouse_over.as_mut() {
                cb(None);
            }
        }
    }

    /// Click on the datum behind `key`; toggles the clicked selection.
    pub fn click(&mut self, data: &ChartData, key: DatumKey) {
        let event = self.interaction.click(key);
        Self::dispatch(&mut self.on_series_mouse_click, data, &event);
    }

    fn dispatch(cb: &mut Option<SelectionCallback>, data: &ChartData, event: &SelectionEvent) {
        let Some(cb) = cb.as_mut() else { return };
        match event {
            SelectionEvent::HoverSet(key) | SelectionEvent::ClickSet(key) => {
                cb(data.datum_by_key(key));
            }
            SelectionEvent::HoverCleared | SelectionEvent::ClickCleared => cb(None),
        }
    }

    /// Build the scene for the current data and dimensions. Unknown or
    /// stale dimensions render an empty scene; empty data renders the
    /// empty-state placeholder.
    pub fn render(&mut self, data: &ChartData) -> Scene {
        self.render_sized(data, Dimensions::default())
    }

    pub fn render_sized(&mut self, data: &ChartData, dims: Dimensions) -> Scene {
        if !dims.is_drawable() {
            return Scene::empty();
        }
        self.interaction.sync_data(data.keys());

        let mut scene = Scene::new(dims.width, dims.height);
        scene.before = self.before.clone();
        scene.after = self.after.clone();

        if let ChartKind::Unknown(key) = &self.kind {
            scene.marks.push(center_text(
                &scene,
                format!("Invalid chart type: {key}"),
                &self.palette,
            ));
            return scene;
        }
        if data.is_empty() {
            scene.marks.push(center_text(
                &scene,
                "No data to display".to_string(),
                &self.palette,
            ));
            return scene;
        }

        let insets = self.config.insets.with_axis_titles(
            self.config.x_axis_title.is_some(),
            self.config.y_axis_title.is_some(),
        );
        let Some(plot) = plot_rect(dims, &insets) else {
            return Scene::empty();
        };

        let enter = self.next_enter();
        self.build_marks(data, plot, &mut scene, enter);
        self.apply_selection(&mut scene);
        self.build_overlay(data, &mut scene);
        self.draw_axis_titles(plot, &mut scene);

        if self.config.animation.enabled {
            self.settled = true;
        }
        scene
    }

    /// Entrance duration for this render, honoring the settled latch.
    fn next_enter(&self) -> Option<u32> {
        let anim = &self.config.animation;
        if anim.enabled && (!self.settled || anim.replay_on_visibility) {
            Some(anim.duration_ms)
        } else {
            None
        }
    }

    fn enter_as(&self, pending: Option<u32>, from: EnterFrom) -> Option<Enter> {
        pending.map(|duration_ms| Enter { duration_ms, from })
    }

    fn build_marks(
        &self,
        data: &ChartData,
        plot: RectF32,
        scene: &mut Scene,
        pending_enter: Option<u32>,
    ) {
        match (&self.kind, data) {
            (ChartKind::Bar | ChartKind::StackedBar | ChartKind::GroupedBar, ChartData::Bars { series, groups }) => {
                let mode = match self.kind {
                    ChartKind::StackedBar => bars::BarMode::Stacked,
                    ChartKind::GroupedBar => bars::BarMode::Grouped,
                    _ => bars::BarMode::Plain,
                };
                let domain = self.bar_domain(groups, mode);
                let value = LinearScale::new(domain, (plot.bottom, plot.top));
                let band = BandScale::new(groups.len(), (plot.left, plot.right), self.config.band);
                self.draw_grid(&value, plot, scene);
                scene.marks.extend(bars::layout(
                    groups,
                    mode,
                    series.len().max(1),
                    &band,
                    &value,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::GrowUp),
                ));
                if self.config.show_totals {
                    scene.marks.extend(bars::total_labels(
                        groups,
                        &band,
                        &value,
                        &self.config.na_label,
                        self.config.precision,
                        &self.config.prefix,
                        &self.config.suffix,
                        &self.palette,
                    ));
                }
                for (gi, group) in groups.iter().enumerate() {
                    if let Some(label) = &group.datum.label {
                        scene.marks.push(Mark::Text {
                            x: band.center(gi),
                            y: plot.bottom + 16.0,
                            content: label.clone(),
                            size: 11.0,
                            fill: self.palette.axis_label.to_string(),
                            anchor: Anchor::Middle,
                        });
                    }
                }
                if self.config.show_legend && series.len() > 1 {
                    let entries: Vec<(String, String)> = series
                        .iter()
                        .enumerate()
                        .map(|(i, s)| (s.clone(), self.palette.series_color(i).to_string()))
                        .collect();
                    scene.overlay.extend(overlay::legend_marks(
                        &entries,
                        (plot.right - 120.0, plot.top),
                        &self.palette,
                    ));
                }
            }
            (ChartKind::Line, ChartData::Line { points }) => {
                let xs: Vec<Option<f64>> = points.iter().map(|p| Some(p.x)).collect();
                let ys: Vec<Option<f64>> = points.iter().map(|p| p.y).collect();
                let x = LinearScale::new(raw_extent(&xs), (plot.left, plot.right));
                let y = LinearScale::new(
                    resolve_domain(&ys, &self.config.domain),
                    (plot.bottom, plot.top),
                );
                self.draw_grid(&y, plot, scene);
                let enter = self.enter_as(pending_enter, EnterFrom::FadeIn);
                scene.marks.extend(line::layout(
                    points,
                    &x,
                    &y,
                    self.palette.series_color(0),
                    enter,
                ));
                scene.marks.extend(line::point_markers(points, &x, &y, &self.palette, enter));
            }
            (ChartKind::Slope, ChartData::Spans { left_label, right_label, spans }) => {
                let y = LinearScale::new(
                    self.span_domain(spans),
                    (plot.bottom, plot.top),
                );
                let (lx, rx) = (plot.left + 8.0, plot.right - 8.0);
                scene.marks.extend(slope::slope_layout(
                    spans,
                    lx,
                    rx,
                    &y,
                    self.config.span_order,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::FadeIn),
                ));
                for (label, x, anchor) in
                    [(left_label, lx, Anchor::Middle), (right_label, rx, Anchor::Middle)]
                {
                    scene.marks.push(Mark::Text {
                        x,
                        y: plot.bottom + 16.0,
                        content: label.clone(),
                        size: 11.0,
                        fill: self.palette.axis_label.to_string(),
                        anchor,
                    });
                }
            }
            (ChartKind::Dumbbell, ChartData::Spans { spans, .. }) => {
                let x = LinearScale::new(self.span_domain(spans), (plot.left, plot.right));
                let rows = BandScale::new(spans.len(), (plot.top, plot.bottom), self.config.band);
                scene.marks.extend(slope::dumbbell_layout(
                    spans,
                    &rows,
                    &x,
                    self.config.span_order,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::FadeIn),
                ));
                for (i, span) in spans.iter().enumerate() {
                    if let Some(label) = &span.datum.label {
                        scene.marks.push(Mark::Text {
                            x: plot.left - 8.0,
                            y: rows.center(i) + 4.0,
                            content: label.clone(),
                            size: 11.0,
                            fill: self.palette.axis_label.to_string(),
                            anchor: Anchor::End,
                        });
                    }
                }
            }
            (ChartKind::BeeSwarm, ChartData::Points { points }) => {
                let values: Vec<Option<f64>> = points.iter().map(|p| p.value).collect();
                let x = LinearScale::new(
                    resolve_domain(&values, &self.config.domain),
                    (plot.left, plot.right),
                );
                self.draw_value_axis(&x, plot, scene);
                let settled =
                    swarm::simulate(points, &x, plot.center().1, &self.config.swarm);
                scene.marks.extend(swarm::layout(
                    &settled,
                    points,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::FadeIn),
                ));
            }
            (ChartKind::Sankey, ChartData::Flow { nodes, links }) => {
                let (marks, defs) = sankey::layout(
                    nodes,
                    links,
                    plot,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::FadeIn),
                );
                scene.marks.extend(marks);
                scene.defs.extend(defs);
            }
            (ChartKind::HeatMap, ChartData::Grid { cells }) => {
                let (rows, cols) = heatmap::axes_labels(cells);
                let row_band = BandScale::new(rows.len(), (plot.top, plot.bottom), self.config.band);
                let col_band = BandScale::new(cols.len(), (plot.left, plot.right), self.config.band);
                let values: Vec<Option<f64>> = cells.iter().map(|c| c.value).collect();
                let domain = resolve_domain(&values, &self.config.domain);
                let scale = ColorScale::select(
                    &values,
                    domain,
                    &self.palette,
                    self.config.color_mode,
                    &self.config.thresholds,
                );
                scene.marks.extend(heatmap::layout(
                    cells,
                    &rows,
                    &cols,
                    &row_band,
                    &col_band,
                    &scale,
                    &self.palette,
                    self.enter_as(pending_enter, EnterFrom::FadeIn),
                ));
                for (ri, row) in rows.iter().enumerate() {
                    scene.marks.push(Mark::Text {
                        x: plot.left - 8.0,
                        y: row_band.center(ri) + 4.0,
                        content: row.clone(),
                        size: 11.0,
                        fill: self.palette.axis_label.to_string(),
                        anchor: Anchor::End,
                    });
                }
                for (ci, col) in cols.iter().enumerate() {
                    scene.marks.push(Mark::Text {
                        x: col_band.center(ci),
                        y: plot.bottom + 16.0,
                        content: col.clone(),
                        size: 11.0,
                        fill: self.palette.axis_label.to_string(),
                        anchor: Anchor::Middle,
                    });
                }
            }
            (kind, _) => {
                warn!("chart kind {kind:?} does not match the supplied data family");
            }
        }
    }

    fn bar_domain(&self, groups: &[crate::data::BarGroup], mode: bars::BarMode) -> Domain {
        let values: Vec<Option<f64>> = match mode {
            // Stacked bars scale against group totals, not single segments.
            bars::BarMode::Stacked => {
                groups.iter().map(|g| bars::group_total(&g.values)).collect()
            }
            _ => groups.iter().flat_map(|g| g.values.iter().copied()).collect(),
        };
        resolve_domain(&values, &self.config.domain)
    }

    fn span_domain(&self, spans: &[crate::data::SpanDatum]) -> Domain {
        let values: Vec<Option<f64>> =
            spans.iter().flat_map(|s| [s.start, s.end]).collect();
        resolve_domain(&values, &self.config.domain)
    }

    /// Horizontal gridlines plus tick labels on the value axis.
    fn draw_grid(&self, value: &LinearScale, plot: RectF32, scene: &mut Scene) {
        if value.domain.is_degenerate() {
            return;
        }
        for tick in value.ticks(self.config.grid_lines.max(2)) {
            let y = value.map(tick);
            scene.marks.push(Mark::Line {
                x1: plot.left,
                y1: y,
                x2: plot.right,
                y2: y,
                stroke: self.palette.grid.to_string(),
                width: 1.0,
                dashed: false,
                key: None,
            });
            scene.marks.push(Mark::Text {
                x: plot.left - 8.0,
                y: y + 4.0,
                content: format_value(
                    Some(tick),
                    &self.config.na_label,
                    self.config.precision,
                    &self.config.prefix,
                    &self.config.suffix,
                ),
                size: 10.0,
                fill: self.palette.axis_label.to_string(),
                anchor: Anchor::End,
            });
        }
    }

    /// Vertical gridlines for charts whose value axis runs along x.
    fn draw_value_axis(&self, value: &LinearScale, plot: RectF32, scene: &mut Scene) {
        if value.domain.is_degenerate() {
            return;
        }
        for tick in value.ticks(self.config.grid_lines.max(2)) {
            let x = value.map(tick);
            scene.marks.push(Mark::Line {
                x1: x,
                y1: plot.top,
                x2: x,
                y2: plot.bottom,
                stroke: self.palette.grid.to_string(),
                width: 1.0,
                dashed: false,
                key: None,
            });
            scene.marks.push(Mark::Text {
                x,
                y: plot.bottom + 16.0,
                content: format_value(
                    Some(tick),
                    &self.config.na_label,
                    self.config.precision,
                    &self.config.prefix,
                    &self.config.suffix,
                ),
                size: 10.0,
                fill: self.palette.axis_label.to_string(),
                anchor: Anchor::Middle,
            });
        }
    }

    /// Dim unselected marks while something is hovered or clicked.
    fn apply_selection(&self, scene: &mut Scene) {
        if self.interaction.hovered().is_none() && self.interaction.clicked().is_none() {
            return;
        }
        for mark in scene.marks.iter_mut() {
            let Some(key) = mark.key().cloned() else { continue };
            let o = self.interaction.opacity_for(&key);
            match mark {
                Mark::Rect { opacity, .. }
                | Mark::Circle { opacity, .. }
                | Mark::Path { opacity, .. }
                | Mark::Ribbon { opacity, .. } => *opacity *= o,
                _ => {}
            }
        }
    }

    /// Tooltip while hovering, modal while a click is active.
    fn build_overlay(&self, data: &ChartData, scene: &mut Scene) {
        let bounds = (scene.width, scene.height);
        if let (Some(key), Some(pos), Some(content)) =
            (self.interaction.hovered(), self.interaction.pointer(), self.tooltip.as_ref())
        {
            if let Some(datum) = data.datum_by_key(key) {
                match content.resolve(datum) {
                    Ok(text) => scene
                        .overlay
                        .extend(overlay::tooltip_marks(&text, pos, bounds, &self.palette)),
                    Err(e) => warn!("tooltip content failed: {e}"),
                }
            }
        }
        if let (Some(key), Some(content)) = (self.interaction.clicked(), self.detail.as_ref()) {
            if let Some(datum) = data.datum_by_key(key) {
                match content.resolve(datum) {
                    Ok(text) => {
                        scene.overlay.extend(overlay::modal_marks(&text, bounds, &self.palette))
                    }
                    Err(e) => warn!("detail content failed: {e}"),
                }
            }
        }
    }

    fn draw_axis_titles(&self, plot: RectF32, scene: &mut Scene) {
        if let Some(title) = &self.config.x_axis_title {
            scene.marks.push(Mark::Text {
                x: plot.center().0,
                y: scene.height - 8.0,
                content: title.clone(),
                size: 12.0,
                fill: self.palette.axis_label.to_string(),
                anchor: Anchor::Middle,
            });
        }
        if let Some(title) = &self.config.y_axis_title {
            scene.marks.push(Mark::Text {
                x: 8.0,
                y: plot.top - 8.0,
                content: title.clone(),
                size: 12.0,
                fill: self.palette.axis_label.to_string(),
                anchor: Anchor::Start,
            });
        }
    }
}

fn center_text(scene: &Scene, content: String, palette: &Palette) -> Mark {
    Mark::Text {
        x: scene.width * 0.5,
        y: scene.height * 0.5,
        content,
        size: 14.0,
        fill: palette.axis_label.to_string(),
        anchor: Anchor::Middle,
    }
}

// File: crates/viz-render-svg/src/lib.rs
// Summary: Renders a viz-core Scene to SVG markup (gradients, marks, animations).

use std::fmt::Write as _;

use log::debug;
use viz_core::{Anchor, Enter, EnterFrom, GradientDef, Mark, Scene};

/// Stateless scene-to-SVG renderer. All text content and attribute values
/// that originate from caller data are XML-escaped.
#[derive(Clone, Copy, Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Serialize the scene. A zero-size scene yields an empty SVG element
    /// so hosts can mount it unconditionally.
    pub fn render(&self, scene: &Scene) -> String {
        let mut out = String::new();
        let w = scene.width.max(0.0);
        let h = scene.height.max(0.0);
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">"
        );
        if scene.width <= 0.0 || scene.height <= 0.0 {
            out.push_str("</svg>");
            return out;
        }

        if !scene.defs.is_empty() {
            out.push_str("<defs>");
            for def in &scene.defs {
                write_gradient(&mut out, def);
            }
            out.push_str("</defs>");
        }

        for (class, marks) in [
            ("layer-before", &scene.before),
            ("layer-marks", &scene.marks),
            ("layer-after", &scene.after),
            ("layer-overlay", &scene.overlay),
        ] {
            if marks.is_empty() {
                continue;
            }
            let _ = write!(out, "<g class=\"{class}\">");
            for mark in marks {
                write_mark(&mut out, mark);
            }
            out.push_str("</g>");
        }
        out.push_str("</svg>");
        debug!("rendered scene: {} bytes of svg", out.len());
        out
    }

    /// Render and write to a file in one step.
    pub fn render_to_file(
        &self,
        scene: &Scene,
        path: impl AsRef<std::path::Path>,
    ) -> std::io::Result<()> {
        let svg = self.render(scene);
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, svg)
    }
}

fn write_gradient(out: &mut String, def: &GradientDef) {
    let _ = write!(
        out,
        "<linearGradient id=\"{}\" x1=\"0\" y1=\"0\" x2=\"1\" y2=\"0\">\
         <stop offset=\"0\" stop-color=\"{}\"/><stop offset=\"1\" stop-color=\"{}\"/>\
         </linearGradient>",
        escape_xml(&def.id),
        escape_xml(&def.from),
        escape_xml(&def.to),
    );
}

fn write_mark(out: &mut String, mark: &Mark) {
    match mark {
        Mark::Rect { x, y, width, height, fill, opacity, enter, .. } => {
            let _ = write!(
                out,
                "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{width:.2}\" height=\"{height:.2}\" fill=\"{}\" opacity=\"{opacity}\"",
                escape_xml(fill),
            );
            match enter {
                Some(e) => {
                    out.push('>');
                    write_rect_enter(out, e, *x, *y, *width, *height);
                    out.push_str("</rect>");
                }
                None => out.push_str("/>"),
            }
        }
        Mark::Circle { cx, cy, r, fill, opacity, enter, .. } => {
            let _ = write!(
                out,
                "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{}\" opacity=\"{opacity}\"",
                escape_xml(fill),
            );
            write_enter_or_close(out, *enter, "circle");
        }
        Mark::Path { points, stroke, stroke_width, fill, opacity, closed, enter, .. } => {
            let mut d = String::new();
            for (i, (px, py)) in points.iter().enumerate() {
                let cmd = if i == 0 { 'M' } else { 'L' };
                let _ = write!(d, "{cmd}{px:.2} {py:.2}");
            }
            if *closed {
                d.push('Z');
            }
            let stroke_attr = match stroke {
                Some(s) => format!(" stroke=\"{}\" stroke-width=\"{stroke_width}\"", escape_xml(s)),
                None => String::new(),
            };
            let fill_attr = match fill {
                Some(f) => format!(" fill=\"{}\"", escape_xml(f)),
                None => " fill=\"none\"".to_string(),
            };
            let _ = write!(out, "<path d=\"{d}\"{stroke_attr}{fill_attr} opacity=\"{opacity}\"");
            write_enter_or_close(out, *enter, "path");
        }
        Mark::Line { x1, y1, x2, y2, stroke, width, dashed, .. } => {
            let dash = if *dashed { " stroke-dasharray=\"4 3\"" } else { "" };
            let _ = write!(
                out,
                "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{width}\"{dash}/>",
                escape_xml(stroke),
            );
        }
        Mark::Ribbon { x0, y0, x1, y1, thickness, fill, opacity, enter, .. } => {
            // Horizontal cubic with symmetric control points; the classic
            // sankey link shape.
            let mx = (x0 + x1) * 0.5;
            let _ = write!(
                out,
                "<path d=\"M{x0:.2} {y0:.2}C{mx:.2} {y0:.2} {mx:.2} {y1:.2} {x1:.2} {y1:.2}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{thickness:.2}\" opacity=\"{opacity}\"",
                escape_xml(fill),
            );
            write_enter_or_close(out, *enter, "path");
        }
        Mark::Text { x, y, content, size, fill, anchor } => {
            let anchor = match anchor {
                Anchor::Start => "start",
                Anchor::Middle => "middle",
                Anchor::End => "end",
            };
            let _ = write!(
                out,
                "<text x=\"{x:.2}\" y=\"{y:.2}\" font-size=\"{size}\" fill=\"{}\" text-anchor=\"{anchor}\" font-family=\"sans-serif\">{}</text>",
                escape_xml(fill),
                escape_xml(content),
            );
        }
    }
}

/// Fade-in entrance for marks that do not grow; closes the element either
/// way.
fn write_enter_or_close(out: &mut String, enter: Option<Enter>, tag: &str) {
    match enter {
        Some(e) => {
            out.push('>');
            write_fade(out, e.duration_ms);
            let _ = write!(out, "</{tag}>");
        }
        None => out.push_str("/>"),
    }
}

fn write_rect_enter(out: &mut String, enter: &Enter, _x: f32, y: f32, _w: f32, h: f32) {
    match enter.from {
        EnterFrom::GrowUp => {
            // Grow from the bottom edge: animate y down-to-final and height
            // zero-to-final together.
            let d = enter.duration_ms;
            let _ = write!(
                out,
                "<animate attributeName=\"y\" from=\"{:.2}\" to=\"{y:.2}\" dur=\"{d}ms\" fill=\"freeze\"/>\
                 <animate attributeName=\"height\" from=\"0\" to=\"{h:.2}\" dur=\"{d}ms\" fill=\"freeze\"/>",
                y + h,
            );
        }
        EnterFrom::FadeIn => write_fade(out, enter.duration_ms),
    }
}

fn write_fade(out: &mut String, duration_ms: u32) {
    let _ = write!(
        out,
        "<animate attributeName=\"opacity\" from=\"0\" to=\"1\" dur=\"{duration_ms}ms\" fill=\"freeze\"/>"
    );
}

/// Escape text for use in SVG content and attribute values.
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

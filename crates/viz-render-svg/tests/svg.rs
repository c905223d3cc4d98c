// File: crates/viz-render-svg/tests/svg.rs
// Purpose: SVG output shape: escaping, layers, gradients, entrance animation.

use viz_core::{Anchor, Enter, EnterFrom, GradientDef, Mark, Scene};
use viz_render_svg::{escape_xml, SvgRenderer};

fn rect(enter: Option<Enter>) -> Mark {
    Mark::Rect {
        x: 10.0,
        y: 20.0,
        width: 30.0,
        height: 40.0,
        fill: "#40a0ff".to_string(),
        opacity: 1.0,
        key: None,
        enter,
    }
}

#[test]
fn empty_scene_renders_a_bare_svg_element() {
    let svg = SvgRenderer::new().render(&Scene::empty());
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(!svg.contains("<g"));
}

#[test]
fn layers_render_as_classed_groups_in_order() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.before.push(rect(None));
    scene.marks.push(rect(None));
    scene.overlay.push(rect(None));
    let svg = SvgRenderer::new().render(&scene);

    let before = svg.find("layer-before").unwrap();
    let marks = svg.find("layer-marks").unwrap();
    let overlay = svg.find("layer-overlay").unwrap();
    assert!(before < marks && marks < overlay);
    // The empty after-layer emits no group.
    assert!(!svg.contains("layer-after"));
}

#[test]
fn text_content_is_escaped() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.marks.push(Mark::Text {
        x: 0.0,
        y: 0.0,
        content: "<b>\"R&D\"</b>".to_string(),
        size: 12.0,
        fill: "#fff".to_string(),
        anchor: Anchor::Start,
    });
    let svg = SvgRenderer::new().render(&scene);
    assert!(svg.contains("&lt;b&gt;&quot;R&amp;D&quot;&lt;/b&gt;"));
    assert!(!svg.contains("<b>"));
}

#[test]
fn gradient_defs_precede_marks() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.defs.push(GradientDef {
        id: "flow-link-0".to_string(),
        from: "#111111".to_string(),
        to: "#222222".to_string(),
    });
    scene.marks.push(rect(None));
    let svg = SvgRenderer::new().render(&scene);
    assert!(svg.contains("<linearGradient id=\"flow-link-0\""));
    assert!(svg.find("<defs>").unwrap() < svg.find("<rect").unwrap());
}

#[test]
fn grow_up_entrance_animates_y_and_height() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.marks.push(rect(Some(Enter { duration_ms: 300, from: EnterFrom::GrowUp })));
    let svg = SvgRenderer::new().render(&scene);
    assert!(svg.contains("attributeName=\"y\" from=\"60.00\" to=\"20.00\" dur=\"300ms\""));
    assert!(svg.contains("attributeName=\"height\" from=\"0\" to=\"40.00\""));
}

#[test]
fn static_marks_carry_no_animate_elements() {
    let mut scene = Scene::new(100.0, 100.0);
    scene.marks.push(rect(None));
    let svg = SvgRenderer::new().render(&scene);
    assert!(!svg.contains("<animate"));
}

#[test]
fn escape_xml_passes_plain_text_through() {
    assert_eq!(escape_xml("plain text 123"), "plain text 123");
    assert_eq!(escape_xml("a&'b"), "a&amp;&apos;b");
}

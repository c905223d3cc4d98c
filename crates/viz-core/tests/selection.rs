// File: crates/viz-core/tests/selection.rs
// Purpose: Hover/click state machine semantics and callback dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use viz_core::{
    BarGroup, ChartConfig, ChartData, ChartKind, ChartView, DatumKey, InteractionController,
    PointerPos, SelectionEvent,
};

fn key(s: &str) -> DatumKey {
    DatumKey::Label(s.to_string())
}

fn pos() -> PointerPos {
    PointerPos { x: 40.0, y: 60.0 }
}

fn bar_data() -> ChartData {
    ChartData::Bars {
        series: vec!["v".into()],
        groups: vec![
            BarGroup::new("a", vec![Some(1.0)]),
            BarGroup::new("b", vec![Some(2.0)]),
        ],
    }
}

#[test]
fn hover_transitions_and_clears() {
    let mut c = InteractionController::new(false);
    assert_eq!(c.pointer_over(key("a"), pos()), Some(SelectionEvent::HoverSet(key("a"))));
    // Moving within the same mark updates the pointer without a transition.
    assert_eq!(c.pointer_over(key("a"), PointerPos { x: 41.0, y: 60.0 }), None);
    assert_eq!(c.pointer().unwrap().x, 41.0);
    assert_eq!(c.pointer_leave(), Some(SelectionEvent::HoverCleared));
    assert!(c.pointer().is_none());
    assert_eq!(c.pointer_leave(), None);
}

#[test]
fn reclick_clears_when_reset_enabled() {
    let mut c = InteractionController::new(true);
    assert_eq!(c.click(key("a")), SelectionEvent::ClickSet(key("a")));
    assert_eq!(c.click(key("a")), SelectionEvent::ClickCleared);
    assert!(c.clicked().is_none());
}

#[test]
fn reclick_resets_same_point_when_disabled() {
    let mut c = InteractionController::new(false);
    assert_eq!(c.click(key("a")), SelectionEvent::ClickSet(key("a")));
    assert_eq!(c.click(key("a")), SelectionEvent::ClickSet(key("a")));
    assert_eq!(c.clicked(), Some(&key("a")));
}

#[test]
fn data_identity_change_resets_selection() {
    let mut c = InteractionController::new(false);
    c.sync_data(vec![key("a"), key("b")]);
    c.click(key("a"));
    c.pointer_over(key("b"), pos());
    // Same identity: selection survives.
    c.sync_data(vec![key("a"), key("b")]);
    assert!(c.clicked().is_some());
    // New identity: selection resets.
    c.sync_data(vec![key("a"), key("c")]);
    assert!(c.clicked().is_none());
    assert!(c.hovered().is_none());
}

#[test]
fn unselected_marks_dim() {
    let mut c = InteractionController::new(false);
    c.pointer_over(key("a"), pos());
    assert_eq!(c.opacity_for(&key("a")), 1.0);
    assert!(c.opacity_for(&key("b")) < 1.0);
}

#[test]
fn click_callback_sees_datum_then_none() {
    let log: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let config = ChartConfig::from_json(serde_json::json!({ "resetOnReclick": true })).unwrap();
    let mut view = ChartView::new(ChartKind::Bar, config)
        .on_series_mouse_click(Box::new(move |d| {
            sink.borrow_mut().push(d.and_then(|d| d.label.clone()));
        }));

    let data = bar_data();
    view.render(&data);
    view.click(&data, key("a"));
    view.click(&data, key("a"));

    // Second click on the same datum clears: callers receive None.
    assert_eq!(*log.borrow(), vec![Some("a".to_string()), None]);
}

#[test]
fn hover_callback_full_cycle() {
    let log: Rc<RefCell<Vec<Option<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);

    let mut view = ChartView::new(ChartKind::Bar, ChartConfig::default())
        .on_series_mouse_over(Box::new(move |d| {
            sink.borrow_mut().push(d.and_then(|d| d.label.clone()));
        }));

    let data = bar_data();
    view.render(&data);
    view.pointer_over(&data, key("b"), pos());
    view.pointer_leave();

    assert_eq!(*log.borrow(), vec![Some("b".to_string()), None]);
}

// File: crates/viz-core/tests/domain.rs
// Purpose: Validate sign-aware domain resolution and override behavior.

use viz_core::{resolve_domain, resolve_domain_multi, DomainOverride};

fn ovr(min: Option<f64>, max: Option<f64>) -> DomainOverride {
    DomainOverride { min, max }
}

#[test]
fn mixed_sign_uses_actual_extremes() {
    let d = resolve_domain(&[Some(-5.0), Some(10.0), None, Some(3.0)], &DomainOverride::default());
    assert_eq!(d.min, -5.0);
    assert_eq!(d.max, 10.0);
}

#[test]
fn all_non_negative_floors_at_zero() {
    let d = resolve_domain(&[Some(2.0), Some(5.0), Some(8.0)], &DomainOverride::default());
    assert_eq!(d.min, 0.0);
    assert_eq!(d.max, 8.0);
}

#[test]
fn all_non_positive_caps_at_zero() {
    let d = resolve_domain(&[Some(-2.0), Some(-8.0)], &DomainOverride::default());
    assert_eq!(d.min, -8.0);
    assert_eq!(d.max, 0.0);
}

#[test]
fn empty_and_all_null_degenerate_to_zero() {
    let d = resolve_domain(&[], &DomainOverride::default());
    assert_eq!((d.min, d.max), (0.0, 0.0));
    assert!(d.is_degenerate());

    let d = resolve_domain(&[None, None], &DomainOverride::default());
    assert_eq!((d.min, d.max), (0.0, 0.0));
}

#[test]
fn bounds_stay_finite_with_at_least_one_finite_value() {
    let d = resolve_domain(
        &[Some(f64::NAN), Some(f64::INFINITY), Some(4.0), None],
        &DomainOverride::default(),
    );
    assert!(d.min.is_finite());
    assert!(d.max.is_finite());
    assert_eq!(d.max, 4.0);
}

#[test]
fn overrides_win_over_computed_extremes() {
    let d = resolve_domain(&[Some(2.0), Some(8.0)], &ovr(Some(-1.0), Some(20.0)));
    assert_eq!(d.min, -1.0);
    assert_eq!(d.max, 20.0);

    // One-sided override keeps the computed other side.
    let d = resolve_domain(&[Some(2.0), Some(8.0)], &ovr(None, Some(20.0)));
    assert_eq!(d.min, 0.0);
    assert_eq!(d.max, 20.0);
}

#[test]
fn multi_series_resolution_spans_all_series() {
    let a = [Some(1.0), Some(4.0)];
    let b = [Some(-3.0), None];
    let d = resolve_domain_multi(&[&a, &b], &DomainOverride::default());
    assert_eq!(d.min, -3.0);
    assert_eq!(d.max, 4.0);
}

// File: crates/viz-core/tests/scales.rs
// Purpose: Linear scale round-trips and band scale slot math.

use viz_core::{BandOptions, BandScale, Domain, LinearScale};

#[test]
fn linear_maps_endpoints_to_range() {
    let s = LinearScale::new(Domain::new(0.0, 10.0), (100.0, 500.0));
    assert_eq!(s.map(0.0), 100.0);
    assert_eq!(s.map(10.0), 500.0);
    assert_eq!(s.map(5.0), 300.0);
}

#[test]
fn linear_round_trip_within_tolerance() {
    let s = LinearScale::new(Domain::new(-20.0, 35.0), (0.0, 640.0));
    for px in [0.0f32, 17.5, 321.0, 639.9] {
        let back = s.map(s.invert(px));
        assert!((back - px).abs() < 1e-3, "px {px} round-tripped to {back}");
    }
}

#[test]
fn degenerate_domain_never_yields_nan() {
    let s = LinearScale::new(Domain::new(0.0, 0.0), (10.0, 90.0));
    assert_eq!(s.map(0.0), 10.0);
    assert!(!s.map(123.0).is_nan());
    assert_eq!(s.invert(50.0), 0.0);
}

#[test]
fn ticks_cover_domain_endpoints() {
    let s = LinearScale::new(Domain::new(0.0, 8.0), (0.0, 100.0));
    let ticks = s.ticks(5);
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(*ticks.last().unwrap(), 8.0);
}

#[test]
fn band_slots_fit_range_with_padding() {
    let band = BandScale::new(4, (0.0, 400.0), BandOptions::default());
    assert_eq!(band.len(), 4);
    assert!(band.position(0) >= 0.0);
    let last_right = band.position(3) + band.bandwidth();
    assert!(last_right <= 400.0 + 1e-3);
    assert!(band.content_len() <= 400.0 + 1e-3);
}

#[test]
fn min_slot_forces_content_overflow() {
    let opts = BandOptions { min_slot: Some(80.0), ..BandOptions::default() };
    let band = BandScale::new(10, (0.0, 400.0), opts);
    assert!(band.bandwidth() >= 80.0);
    // The caller must scroll or clip: slots no longer fit the range.
    assert!(band.content_len() > 400.0);
}

#[test]
fn max_slot_caps_bandwidth() {
    let opts = BandOptions { max_slot: Some(20.0), ..BandOptions::default() };
    let band = BandScale::new(3, (0.0, 600.0), opts);
    assert!(band.bandwidth() <= 20.0 + 1e-3);
}

#[test]
fn index_at_hits_slots_and_misses_gaps() {
    let band = BandScale::new(4, (0.0, 400.0), BandOptions::default());
    let center = band.center(2);
    assert_eq!(band.index_at(center), Some(2));
    // Before the first slot there is only outer padding.
    assert_eq!(band.index_at(-5.0), None);
}

#[test]
fn empty_band_is_harmless() {
    let band = BandScale::new(0, (0.0, 400.0), BandOptions::default());
    assert!(band.is_empty());
    assert_eq!(band.content_len(), 0.0);
    assert_eq!(band.index_at(10.0), None);
}

// File: crates/viz-core/src/domain.rs
// Summary: Sign-aware numeric domain resolution with explicit overrides.

use log::warn;
use serde::Deserialize;

/// A resolved `[min, max]` interval. `min == max` marks a degenerate domain;
/// scales map it without dividing by zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Domain {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn is_degenerate(&self) -> bool {
        self.span().abs() < f64::EPSILON
    }
}

/// Explicit caller overrides; either side wins over the computed extreme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomainOverride {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// All observed values non-negative: floor at zero. Otherwise keep the
/// observed minimum.
fn clamp_floor(observed_min: f64) -> f64 {
    observed_min.min(0.0)
}

/// All observed values non-positive: cap at zero. Otherwise keep the
/// observed maximum.
fn clamp_ceil(observed_max: f64) -> f64 {
    observed_max.max(0.0)
}

/// Resolve a domain from raw optional values. Missing and non-finite
/// entries are filtered before computing extremes; an empty result set
/// resolves to the degenerate `[0, 0]`.
pub fn resolve_domain(values: &[Option<f64>], ovr: &DomainOverride) -> Domain {
    let mut observed_min = f64::INFINITY;
    let mut observed_max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values.iter().flatten() {
        if !v.is_finite() {
            warn!("discarding non-finite value {v} from domain resolution");
            continue;
        }
        observed_min = observed_min.min(*v);
        observed_max = observed_max.max(*v);
        any = true;
    }

    let (floor, ceil) = if any {
        (clamp_floor(observed_min), clamp_ceil(observed_max))
    } else {
        (0.0, 0.0)
    };
    Domain::new(ovr.min.unwrap_or(floor), ovr.max.unwrap_or(ceil))
}

/// Resolve a single domain across several series at once (stacked charts,
/// multi-series lines).
pub fn resolve_domain_multi(series: &[&[Option<f64>]], ovr: &DomainOverride) -> Domain {
    let flat: Vec<Option<f64>> = series.iter().flat_map(|s| s.iter().copied()).collect();
    resolve_domain(&flat, ovr)
}

/// Raw finite extent without the zero-clamp policy; positional axes (line
/// chart x) use this instead of the value-domain rules.
pub fn raw_extent(values: &[Option<f64>]) -> Domain {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values.iter().flatten().filter(|v| v.is_finite()) {
        min = min.min(*v);
        max = max.max(*v);
        any = true;
    }
    if any {
        Domain::new(min, max)
    } else {
        Domain::new(0.0, 0.0)
    }
}

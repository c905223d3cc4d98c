// File: crates/viz-core/src/scale.rs
// Summary: Linear (invertible) and band scales from domain values to pixels.

use serde::Deserialize;

use crate::domain::Domain;

/// Linear interpolation from a numeric domain to a pixel range. The range
/// may be descending (SVG y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: Domain,
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: Domain, range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f32 {
        if self.domain.is_degenerate() {
            return self.range.0;
        }
        let t = (value - self.domain.min) / self.domain.span();
        self.range.0 + t as f32 * (self.range.1 - self.range.0)
    }

    /// Pixel back to domain value, for hit-testing.
    pub fn invert(&self, px: f32) -> f64 {
        let span = self.range.1 - self.range.0;
        if span.abs() < 1e-12 {
            return self.domain.min;
        }
        let t = ((px - self.range.0) / span) as f64;
        self.domain.min + t * self.domain.span()
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let n = count.max(2);
        let step = self.domain.span() / (n as f64 - 1.0);
        (0..n).map(|i| self.domain.min + step * i as f64).collect()
    }
}

/// Band scale knobs. Paddings are fractions of one step; slot bounds are
/// pixel clamps on the band width.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BandOptions {
    pub padding_inner: f32,
    pub padding_outer: f32,
    pub min_slot: Option<f32>,
    pub max_slot: Option<f32>,
}

impl Default for BandOptions {
    fn default() -> Self {
        Self { padding_inner: 0.2, padding_outer: 0.1, min_slot: None, max_slot: None }
    }
}

/// Discrete labels to evenly spaced pixel slots. When a slot clamp forces
/// the band wider than the range allows, `content_len` exceeds the range
/// and the caller decides between scrolling and clipping.
#[derive(Clone, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f32,
    step: f32,
    band: f32,
    opts: BandOptions,
}

impl BandScale {
    pub fn new(count: usize, range: (f32, f32), opts: BandOptions) -> Self {
        if count == 0 {
            return Self { count: 0, start: range.0, step: 0.0, band: 0.0, opts };
        }
        let span = (range.1 - range.0).max(0.0);
        let denom = (count as f32 - opts.padding_inner + 2.0 * opts.padding_outer).max(1e-6);
        let mut step = span / denom;
        let mut band = step * (1.0 - opts.padding_inner).max(0.0);

        // Slot clamps win over fitting the range; step grows with the band.
        let clamped = band
            .max(opts.min_slot.unwrap_or(band))
            .min(opts.max_slot.unwrap_or(band.max(opts.min_slot.unwrap_or(band))));
        if (clamped - band).abs() > f32::EPSILON {
            let scale = if band > 0.0 { clamped / band } else { 1.0 };
            band = clamped;
            step *= scale;
        }

        let start = range.0 + step * opts.padding_outer;
        Self { count, start, step, band, opts }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Left edge of slot `i`.
    pub fn position(&self, i: usize) -> f32 {
        self.start + self.step * i as f32
    }

    /// Center of slot `i`.
    pub fn center(&self, i: usize) -> f32 {
        self.position(i) + self.band * 0.5
    }

    pub fn bandwidth(&self) -> f32 {
        self.band
    }

    /// Total pixel length the slots occupy; may exceed the supplied range.
    pub fn content_len(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.step * (self.count as f32 - self.opts.padding_inner + 2.0 * self.opts.padding_outer)
    }

    /// Slot under a pixel, if any (hit-testing).
    pub fn index_at(&self, px: f32) -> Option<usize> {
        if self.count == 0 || self.step <= 0.0 {
            return None;
        }
        let rel = px - self.start;
        if rel < 0.0 {
            return None;
        }
        let i = (rel / self.step).floor() as usize;
        if i < self.count && rel - i as f32 * self.step <= self.band {
            Some(i)
        } else {
            None
        }
    }
}

// File: crates/survival-core/src/scale.rs
// Summary: Linear scale mapping a data domain onto a pixel range.

use crate::grid;

/// Data-space coordinate (days on X, probability on Y).
pub type Value = f64;

/// Linear transform from `domain` to `range`.
/// The range may be inverted (`r0 > r1`), which is how the Y axis grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Replace the domain, keeping the range.
    pub fn set_domain(&mut self, d0: Value, d1: Value) {
        self.domain = (d0, d1);
    }

    #[inline]
    pub fn map(&self, v: Value) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        // a collapsed domain sits in the middle of the range
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> Value {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return d0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }

    /// Nice tick values within the domain.
    pub fn ticks(&self, count: usize) -> Vec<Value> {
        grid::ticks(self.domain.0, self.domain.1, count)
    }

    /// Tick labels matching [`LinearScale::ticks`] for the same `count`.
    pub fn tick_labels(&self, count: usize) -> Vec<String> {
        let step = grid::tick_step(self.domain.0, self.domain.1, count);
        self.ticks(count).into_iter().map(|v| grid::format_tick(v, step)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_time_onto_plot_width() {
        let s = LinearScale::new((0.0, 15.0), (0.0, 680.0));
        assert_eq!(s.map(0.0), 0.0);
        assert_eq!(s.map(15.0), 680.0);
        assert!((s.map(7.5) - 340.0).abs() < 1e-9);
        assert!((s.invert(340.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn inverted_range_for_probability() {
        let s = LinearScale::new((0.0, 1.0), (400.0, 0.0));
        assert_eq!(s.map(0.0), 400.0);
        assert_eq!(s.map(1.0), 0.0);
        assert!((s.map(0.8) - 80.0).abs() < 1e-9);
    }

    #[test]
    fn collapsed_domain_maps_to_midpoint() {
        let s = LinearScale::new((0.0, 0.0), (0.0, 680.0));
        assert_eq!(s.map(0.0), 340.0);
    }

    #[test]
    fn labels_follow_ticks() {
        let s = LinearScale::new((0.0, 1.0), (400.0, 0.0));
        let labels = s.tick_labels(10);
        assert_eq!(labels.first().map(String::as_str), Some("0.0"));
        assert_eq!(labels.last().map(String::as_str), Some("1.0"));
        assert_eq!(labels.len(), s.ticks(10).len());
    }
}

// File: crates/survival-core/src/axis.rs
// Summary: Axis model with label, domain and regenerated tick marks.

use crate::scale::LinearScale;

/// Default tick count hint, matching the usual ~10 ticks per axis.
pub const TICK_COUNT: usize = 10;
/// Tick mark length in pixels.
pub const TICK_SIZE: f64 = 6.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Horizontal axis, ticks hanging below the line.
    Bottom,
    /// Vertical axis, ticks pointing left.
    Left,
}

/// One tick: data value, plot-local pixel offset along the axis, formatted label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub orient: Orient,
    pub min: f64,
    pub max: f64,
    /// Pixel extent of the axis line (range of the scale).
    pub extent: (f64, f64),
    pub ticks: Vec<Tick>,
    /// Number of times the axis has been regenerated.
    pub redraws: u64,
}

impl Axis {
    pub fn new(label: impl Into<String>, orient: Orient) -> Self {
        Self {
            label: label.into(),
            orient,
            min: 0.0,
            max: 1.0,
            extent: (0.0, 0.0),
            ticks: Vec::new(),
            redraws: 0,
        }
    }

    pub fn bottom(label: impl Into<String>) -> Self {
        Self::new(label, Orient::Bottom)
    }

    pub fn left(label: impl Into<String>) -> Self {
        Self::new(label, Orient::Left)
    }

    /// Regenerate ticks from `scale`. Always rebuilds, even for an unchanged domain.
    pub fn redraw(&mut self, scale: &LinearScale) {
        self.min = scale.domain.0;
        self.max = scale.domain.1;
        self.extent = scale.range;
        self.ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .zip(scale.tick_labels(TICK_COUNT))
            .map(|(value, label)| Tick { value, offset: scale.map(value), label })
            .collect();
        self.redraws += 1;
    }
}

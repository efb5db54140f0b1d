// File: crates/survival-core/src/lib.rs
// Summary: Core library entry point; exports the survival chart model, renderer and controller.

pub mod axis;
pub mod chart;
pub mod controller;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod group;
pub mod reconcile;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, Orient, Tick};
pub use chart::{ChartRenderer, DrawnPath, RenderOptions, RenderOutcome};
pub use controller::{ChartController, DataSource, JsonFileSource, StaticSource, VariableSelector};
pub use dataset::{Dataset, GroupKey, KeyKind, Observation};
pub use error::DataError;
pub use group::Group;
pub use reconcile::{reconcile, Reconciliation};
pub use scale::LinearScale;
pub use series::{PathCommand, SurvivalCurve};
pub use theme::Theme;

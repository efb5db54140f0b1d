// File: crates/survival-core/src/controller.rs
// Summary: Data sources, the grouping-variable selector and the controller that owns
//          the loaded dataset and drives re-renders on selection changes.

use std::path::PathBuf;

use crate::chart::{ChartRenderer, RenderOptions, RenderOutcome};
use crate::dataset::{Dataset, DEFAULT_DATA_PATH};
use crate::error::Result;

/// Variable shown right after the dataset is loaded.
pub const DEFAULT_VARIABLE: &str = "sex";

/// Supplies the dataset, once.
pub trait DataSource {
    fn load(&self) -> Result<Dataset>;
}

/// Reads a JSON array of observations from disk.
#[derive(Clone, Debug)]
pub struct JsonFileSource {
    pub path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_PATH)
    }
}

impl DataSource for JsonFileSource {
    fn load(&self) -> Result<Dataset> {
        Dataset::from_path(&self.path)
    }
}

/// Hands out an already-built dataset.
#[derive(Clone, Debug, Default)]
pub struct StaticSource(pub Dataset);

impl DataSource for StaticSource {
    fn load(&self) -> Result<Dataset> {
        Ok(self.0.clone())
    }
}

/// Current grouping variable plus the options offered to the user.
#[derive(Clone, Debug)]
pub struct VariableSelector {
    options: Vec<String>,
    value: String,
}

impl VariableSelector {
    pub fn new(value: impl Into<String>) -> Self {
        Self { options: Vec::new(), value: value.into() }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
    }

    /// Change the selection. Returns the new value if it differs from the current one.
    /// Values outside `options` are accepted; they render an empty chart.
    pub fn select(&mut self, value: &str) -> Option<&str> {
        if value == self.value {
            return None;
        }
        if !self.options.is_empty() && !self.options.iter().any(|o| o == value) {
            log::warn!("`{value}` is not one of the dataset variables {:?}", self.options);
        }
        self.value = value.to_string();
        Some(&self.value)
    }
}

impl Default for VariableSelector {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE)
    }
}

/// Owns the loaded dataset, the selector and the renderer.
pub struct ChartController {
    renderer: ChartRenderer,
    selector: VariableSelector,
    data: Option<Dataset>,
}

impl ChartController {
    pub fn new(opts: RenderOptions) -> Self {
        Self::with_selector(opts, VariableSelector::default())
    }

    pub fn with_selector(opts: RenderOptions, selector: VariableSelector) -> Self {
        Self { renderer: ChartRenderer::new(opts), selector, data: None }
    }

    /// Load the dataset and draw the selected variable.
    /// On failure the error is logged and returned; the chart stays blank.
    pub fn load(&mut self, source: &dyn DataSource) -> Result<RenderOutcome> {
        let data = source.load().map_err(|e| {
            log::error!("Error loading data: {e}");
            e
        })?;
        self.selector.set_options(data.variables());
        let outcome = self.renderer.render(&data, self.selector.value());
        self.data = Some(data);
        Ok(outcome)
    }

    /// Selection changed to `variable`: re-render with the loaded data.
    /// Returns `None` before a successful load.
    pub fn on_change(&mut self, variable: &str) -> Option<RenderOutcome> {
        let Some(data) = self.data.as_ref() else {
            log::debug!("ignoring selection `{variable}`: no data loaded");
            return None;
        };
        self.selector.select(variable);
        Some(self.renderer.render(data, variable))
    }

    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    pub fn selector(&self) -> &VariableSelector {
        &self.selector
    }

    pub fn data(&self) -> Option<&Dataset> {
        self.data.as_ref()
    }

    pub fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

impl Default for ChartController {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

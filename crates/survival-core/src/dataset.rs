// File: crates/survival-core/src/dataset.rs
// Summary: Observation records, group keys and JSON dataset loading with validation.

use std::collections::BTreeMap;
use std::fmt;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DataError, Result};

/// Default location of the dataset, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/survival_data.json";

/// One input record.
///
/// `variable` names the grouping column this record belongs to; the record's
/// value for that column lives in `fields` under the same name, next to any
/// other extra columns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub variable: String,
    /// Days since start, `>= 0`.
    pub time: f64,
    /// Survival probability in `[0, 1]`.
    pub survival: f64,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Value>,
}

impl Observation {
    /// Build a record whose grouping value is a string, e.g. `("sex", "M")`.
    pub fn new(variable: &str, group: impl Into<Value>, time: f64, survival: f64) -> Self {
        let mut fields = BTreeMap::new();
        fields.insert(variable.to_string(), group.into());
        Self { variable: variable.to_string(), time, survival, fields }
    }

    /// Value of the column named `field`, as a group key.
    /// Returns `None` when the column is absent or holds null, an array or an object.
    pub fn group_key(&self, field: &str) -> Option<GroupKey> {
        match field {
            "variable" => Some(GroupKey::from(self.variable.as_str())),
            "time" => Some(GroupKey::number(self.time)),
            "survival" => Some(GroupKey::number(self.survival)),
            _ => self.fields.get(field).and_then(GroupKey::from_value),
        }
    }

    fn validate(&self, index: usize) -> Result<()> {
        let invalid = |reason: String| -> Result<()> { Err(DataError::InvalidRecord { index, reason }) };
        if self.variable.is_empty() {
            return invalid("empty `variable`".into());
        }
        if !self.time.is_finite() || self.time < 0.0 {
            return invalid(format!("time {} is not a finite non-negative number", self.time));
        }
        if !self.survival.is_finite() || !(0.0..=1.0).contains(&self.survival) {
            return invalid(format!("survival {} is outside [0, 1]", self.survival));
        }
        Ok(())
    }
}

/// JSON type a group key was read from. Keys of different kinds never match,
/// so the number `60` and the string `"60"` are distinct groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyKind {
    Str,
    Num,
    Bool,
}

/// Identity of a group: the grouping value's JSON type plus its canonical text.
/// Numbers compare by value (`1` and `1.0` are one group) and print in their
/// shortest form; `-0` prints as `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKey {
    kind: KeyKind,
    text: String,
}

impl GroupKey {
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) => Some(Self::from(s.as_str())),
            Value::Number(n) => n.as_f64().map(Self::number),
            Value::Bool(b) => Some(Self::boolean(*b)),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn number(n: f64) -> Self {
        let n = if n == 0.0 { 0.0 } else { n };
        Self { kind: KeyKind::Num, text: n.to_string() }
    }

    pub fn boolean(b: bool) -> Self {
        Self { kind: KeyKind::Bool, text: b.to_string() }
    }

    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// Canonical text, used as the SVG `data-key`.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for GroupKey {
    fn from(s: &str) -> Self {
        Self { kind: KeyKind::Str, text: s.to_string() }
    }
}

/// Ordered, validated sequence of observations. Immutable after construction.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Observation>,
}

impl Dataset {
    /// Validate and wrap `records`.
    pub fn new(records: Vec<Observation>) -> Result<Self> {
        for (index, r) in records.iter().enumerate() {
            r.validate(index)?;
        }
        Ok(Self { records })
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Self::new(serde_json::from_str(s)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Self::new(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|source| DataError::Io { path: path.to_path_buf(), source })?;
        let ds = Self::from_json_str(&text)?;
        log::info!("loaded {} observations from {}", ds.len(), path.display());
        Ok(ds)
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Observation> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records belonging to grouping column `variable`, in input order.
    pub fn filter<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a Observation> + 'a {
        self.records.iter().filter(move |r| r.variable == variable)
    }

    /// Distinct `variable` names in first-seen order.
    pub fn variables(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|v| v == &r.variable) {
                out.push(r.variable.clone());
            }
        }
        out
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Observation;
    type IntoIter = std::slice::Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

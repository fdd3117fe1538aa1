//! Declarative chart configuration.
//!
//! A chart is described entirely by data: its kind, the series keys to plot,
//! a color palette, and inline records. The shell owns the rendering; bundles
//! only declare what to show.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The chart kinds the shell knows how to render.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChartKind {
    Pie,
    Bar,
    Line,
}

/// One record of chart data: a label plus a numeric value per series key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    #[serde(flatten)]
    pub values: BTreeMap<String, f64>,
}

impl DataPoint {
    pub fn new(label: impl Into<String>, values: &[(&str, f64)]) -> Self {
        Self {
            label: label.into(),
            values: values
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect(),
        }
    }

    /// Value for a series key. Absent keys render as zero-height marks.
    pub fn value(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }
}

/// Declarative description of a single chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    /// Ordered series keys to plot from each record.
    pub data_keys: Vec<String>,
    /// Ordered `#RRGGBB` palette, matched positionally (see `required_colors`).
    pub colors: Vec<String>,
    pub data: Vec<DataPoint>,
}

impl ChartConfig {
    /// Number of color slots this chart needs for full coverage.
    ///
    /// Colors are matched positionally by index: pie charts index the palette
    /// over data records (one color per category), bar and line charts index
    /// it over `data_keys` (one color per series). A shorter palette is not an
    /// error; the renderer cycles it.
    pub fn required_colors(&self) -> usize {
        match self.kind {
            ChartKind::Pie => self.data.len(),
            ChartKind::Bar | ChartKind::Line => self.data_keys.len(),
        }
    }

    pub fn has_full_color_coverage(&self) -> bool {
        self.colors.len() >= self.required_colors()
    }

    /// Sum of a series across all records, used for pie percentages.
    pub fn series_total(&self, key: &str) -> f64 {
        self.data.iter().filter_map(|p| p.value(key)).sum()
    }

    /// Largest value across all plotted series, used for axis bounds.
    pub fn max_value(&self) -> f64 {
        self.data
            .iter()
            .flat_map(|p| self.data_keys.iter().filter_map(|k| p.value(k)))
            .fold(0.0_f64, f64::max)
    }
}

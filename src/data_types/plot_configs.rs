use super::Color;
use crate::error::{ChartError, Result};
use crate::theme::ChartTheme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Space between the canvas edge and the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 30.0,
            left: 40.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub orientation: Orientation,
    /// Extra space at both ends of the category axis.
    pub padding: f64,
    /// Gap left between neighbouring bars.
    pub bar_spacing: f64,
    pub font_size: f64,
    /// Category label rotation in degrees.
    pub label_rotation: Option<f64>,
    pub label_max_size: Option<usize>,
    pub last_color: Option<Color>,
    pub negative_color: Option<Color>,
    /// Fill used while a bar is hovered. Falls back to the bar's own fill.
    pub hover_color: Option<Color>,
    /// Build hover readouts for every bar.
    pub data_labels: bool,
    /// Target number of intervals on the value axis.
    pub value_ticks: usize,
    pub value_label_unit: Option<String>,
    pub category_grid: bool,
    pub hide_empty_label_grid: bool,
    /// Round the ends of horizontal bars.
    pub rounded: bool,
    pub mean_line: bool,
    /// Chevron in the bottom-left corner of horizontal charts.
    pub focus_hint: bool,
    pub theme: ChartTheme,
    /// Style attributes applied to every bar by name, e.g. `"stroke-dasharray": "-"`.
    pub bar_attributes: BTreeMap<String, serde_json::Value>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            margins: Margins::default(),
            orientation: Orientation::Vertical,
            padding: 0.0,
            bar_spacing: 5.0,
            font_size: 10.0,
            label_rotation: None,
            label_max_size: None,
            last_color: None,
            negative_color: None,
            hover_color: None,
            data_labels: true,
            value_ticks: 5,
            value_label_unit: None,
            category_grid: false,
            hide_empty_label_grid: false,
            rounded: false,
            mean_line: false,
            focus_hint: false,
            theme: ChartTheme::default(),
            bar_attributes: BTreeMap::new(),
        }
    }
}

impl ChartConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = Orientation::Horizontal;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Checks the dimensions that do not depend on the data.
    pub fn validate(&self) -> Result<()> {
        if !is_positive(self.width) || !is_positive(self.height) {
            return Err(ChartError::config(format!(
                "canvas must have positive size, got {}x{}",
                self.width, self.height
            )));
        }
        for (name, v) in [
            ("padding", self.padding),
            ("bar_spacing", self.bar_spacing),
            ("font_size", self.font_size),
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("margins.bottom", self.margins.bottom),
            ("margins.left", self.margins.left),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ChartError::config(format!("{name} must be a non-negative number, got {v}")));
            }
        }
        if self.value_ticks == 0 {
            return Err(ChartError::config("value_ticks must be at least 1"));
        }
        Ok(())
    }
}

pub(crate) fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

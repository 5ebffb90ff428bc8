use crate::error::{ChartError, Result};
use serde::{Deserialize, Serialize};

/// Values to chart, one per category, in display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub values: Vec<f64>,
    pub labels: Vec<String>,
    /// Text shown in each bar's hover readout. Defaults to the formatted value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readouts: Option<Vec<String>>,
}

impl Series {
    pub fn new<S: Into<String>>(values: Vec<f64>, labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            values,
            labels: labels.into_iter().map(Into::into).collect(),
            readouts: None,
        }
    }

    pub fn with_readouts<S: Into<String>>(mut self, readouts: impl IntoIterator<Item = S>) -> Self {
        self.readouts = Some(readouts.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Checks that the series can be laid out at all.
    pub fn validate(&self) -> Result<()> {
        if self.values.is_empty() {
            return Err(ChartError::config("series has no values"));
        }
        if self.labels.len() != self.values.len() {
            return Err(ChartError::config(format!(
                "{} labels for {} values",
                self.labels.len(),
                self.values.len()
            )));
        }
        if let Some(readouts) = &self.readouts {
            if readouts.len() != self.values.len() {
                return Err(ChartError::config(format!(
                    "{} readouts for {} values",
                    readouts.len(),
                    self.values.len()
                )));
            }
        }
        if let Some(i) = self.values.iter().position(|v| !v.is_finite()) {
            return Err(ChartError::config(format!(
                "value at index {i} ({:?}) is not finite",
                self.labels[i]
            )));
        }
        Ok(())
    }

    pub fn readout(&self, index: usize) -> String {
        match &self.readouts {
            Some(r) => r[index].clone(),
            None => crate::utils::format_value(self.values[index]),
        }
    }

    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len().max(1) as f64
    }
}

use crate::error::{ChartError, Result};
use crate::utils::format_value;
use d3rs::scale::{nice_number, LinearScale, Scale as D3Scale};

/// Upper bound on value-axis intervals.
pub const MAX_TICKS: usize = 1000;

/// Linear value scale for the value axis of a bar chart.
///
/// The domain always contains zero and is widened to whole multiples of a
/// "nice" step (1, 2 or 5 times a power of ten). Pixel offsets are measured
/// from the axis origin: the bottom edge of a vertical chart or the left edge
/// of a horizontal one.
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    inner: LinearScale,
    step: f64,
    tick_count: usize,
    length: f64,
}

impl Scale {
    /// Fails when the values are too far apart to be measured in an f64, or
    /// would need more than [`MAX_TICKS`] intervals.
    pub fn for_values(values: &[f64], target_ticks: usize, length: f64) -> Result<Self> {
        let mut min = values.iter().copied().fold(0.0_f64, f64::min);
        let mut max = values.iter().copied().fold(0.0_f64, f64::max);
        if (max - min).abs() < f64::EPSILON {
            // Flat data at zero still needs a non-empty domain.
            min = 0.0;
            max = 1.0;
        }
        if !(max - min).is_finite() {
            return Err(ChartError::config(format!(
                "value range {min}..{max} is too wide to scale"
            )));
        }

        let target = target_ticks.max(1);
        let step = Self::nice_step(max - min, target);
        let inner = LinearScale::new()
            .domain(min, max)
            .range(0.0, length)
            .nice(Some(target));

        let intervals = ((inner.domain_max() - inner.domain_min()) / step).round();
        if !intervals.is_finite() || intervals > MAX_TICKS as f64 {
            return Err(ChartError::config(format!(
                "value range {min}..{max} needs {intervals} ticks of {step}"
            )));
        }

        Ok(Self {
            inner,
            step,
            tick_count: (intervals as usize).max(1),
            length,
        })
    }

    /// The step [`LinearScale::nice`] aligns the domain to.
    pub fn nice_step(span: f64, target: usize) -> f64 {
        let raw = span / target.max(1) as f64;
        if !raw.is_finite() || raw <= 0.0 {
            return 1.0;
        }
        nice_number(raw, true)
    }

    pub fn domain(&self) -> (f64, f64) {
        (self.inner.domain_min(), self.inner.domain_max())
    }

    pub fn span(&self) -> f64 {
        self.inner.domain_max() - self.inner.domain_min()
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Number of intervals between value labels.
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Intervals that lie below zero.
    pub fn zero_ticks(&self) -> usize {
        (-self.inner.domain_min() / self.step).round().max(0.0) as usize
    }

    /// Offset of the zero baseline from the axis origin.
    pub fn baseline(&self) -> f64 {
        self.zero_ticks() as f64 * self.tick_spacing()
    }

    pub fn tick_spacing(&self) -> f64 {
        self.length / self.tick_count as f64
    }

    /// Offset of `value` from the axis origin.
    pub fn map(&self, value: f64) -> f64 {
        let res = self.inner.scale(value);
        if res.is_finite() {
            res
        } else {
            0.0
        }
    }

    /// Length in pixels of a bar for `value`.
    pub fn magnitude(&self, value: f64) -> f64 {
        let res = (self.inner.scale(value.abs()) - self.inner.scale(0.0)).abs();
        if res.is_finite() {
            res
        } else {
            0.0
        }
    }

    /// Tick values from the low end of the domain to the high end, one per
    /// gridline.
    pub fn ticks(&self) -> Vec<f64> {
        let ticks = self.inner.ticks(self.tick_count);
        if ticks.len() == self.tick_count + 1 {
            return ticks;
        }
        // Rounding noise made d3 pick a coarser step than the domain was niced to.
        let start = self.inner.domain_min();
        (0..=self.tick_count).map(|i| start + i as f64 * self.step).collect()
    }

    pub fn format_tick(&self, value: f64) -> String {
        format_value(value)
    }
}

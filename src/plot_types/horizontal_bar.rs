use super::{check_thickness, plot_area, ChartLayout, PlotLayout};
use crate::axis_renderer::display_labels;
use crate::data_types::{BarGeometry, ChartConfig, Orientation, Rect, Series};
use crate::error::Result;
use crate::rendering::bar_fill;
use crate::scales::Scale;
use crate::transform::PlotTransform;
use crate::utils::approx_text_width;
use glam::DVec2;

/// Horizontal bars: categories down the left side, values along x.
pub struct HorizontalBars;

impl HorizontalBars {
    /// Left margin wide enough for the longest category label.
    pub fn label_margin(labels: &[String], font_size: f64) -> f64 {
        let widest = labels
            .iter()
            .map(|l| approx_text_width(l, font_size))
            .fold(0.0, f64::max);
        20.0 + widest
    }
}

impl PlotLayout for HorizontalBars {
    fn layout(&self, series: &Series, config: &ChartConfig) -> Result<ChartLayout> {
        let labels = display_labels(&series.labels, config.label_max_size);
        let area = plot_area(config, Self::label_margin(&labels, config.font_size))?;
        let count = series.len();
        let spacing = config.bar_spacing;
        let available = area.height - 2.0 * config.padding;

        let bar_height = available / count as f64 - spacing;
        check_thickness(bar_height, count)?;
        let step = available / count as f64;

        let scale = Scale::for_values(&series.values, config.value_ticks, area.width)?;
        let transform = PlotTransform::new(Orientation::Horizontal, area, scale);
        let baseline = transform.baseline();

        let bars = series
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let top = area.y + config.padding + spacing / 2.0 + index as f64 * step;
                let magnitude = transform.scale.magnitude(value);
                let translation = if value < 0.0 {
                    DVec2::new(-magnitude, 0.0)
                } else {
                    DVec2::ZERO
                };
                BarGeometry {
                    index,
                    value,
                    anchor: Rect::new(baseline, top, magnitude, bar_height),
                    translation,
                    fill: bar_fill(index, value, count, config),
                }
            })
            .collect();

        tracing::debug!(count, bar_height, step, baseline, "laid out horizontal bars");

        Ok(ChartLayout {
            transform,
            bars,
            labels,
            bar_thickness: bar_height,
            step,
        })
    }
}

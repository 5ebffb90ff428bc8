use super::{check_thickness, plot_area, ChartLayout, PlotLayout};
use crate::axis_renderer::display_labels;
use crate::data_types::{BarGeometry, ChartConfig, Orientation, Rect, Series};
use crate::error::Result;
use crate::rendering::bar_fill;
use crate::scales::Scale;
use crate::transform::PlotTransform;
use glam::DVec2;

/// Vertical bars: categories along x, values along y.
pub struct VerticalBars;

impl PlotLayout for VerticalBars {
    fn layout(&self, series: &Series, config: &ChartConfig) -> Result<ChartLayout> {
        let area = plot_area(config, config.margins.left)?;
        let count = series.len();
        let spacing = config.bar_spacing;
        let available = area.width - 2.0 * config.padding;

        let bar_width = available / count as f64 - spacing;
        check_thickness(bar_width, count)?;
        let half = bar_width / 2.0;

        // A single bar is stepped as if there were two.
        let step_count = count.max(2) - 1;
        let step = (available - 2.0 * half - 2.0 * spacing) / step_count as f64;

        let scale = Scale::for_values(&series.values, config.value_ticks, area.height)?;
        let transform = PlotTransform::new(Orientation::Vertical, area, scale);
        let baseline = transform.baseline();

        let bars = series
            .values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                let center = area.x + config.padding + half + spacing + index as f64 * step;
                let magnitude = transform.scale.magnitude(value);
                let translation = if value < 0.0 {
                    DVec2::new(0.0, magnitude)
                } else {
                    DVec2::ZERO
                };
                BarGeometry {
                    index,
                    value,
                    anchor: Rect::new(center - half, baseline - magnitude, bar_width, magnitude),
                    translation,
                    fill: bar_fill(index, value, count, config),
                }
            })
            .collect();

        tracing::debug!(count, bar_width, step, baseline, "laid out vertical bars");

        Ok(ChartLayout {
            transform,
            bars,
            labels: display_labels(&series.labels, config.label_max_size),
            bar_thickness: bar_width,
            step,
        })
    }
}

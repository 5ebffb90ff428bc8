// Bar layouts, one per orientation

pub mod bar;
pub mod horizontal_bar;

pub use bar::VerticalBars;
pub use horizontal_bar::HorizontalBars;

use crate::data_types::plot_configs::is_positive;
use crate::data_types::{BarGeometry, ChartConfig, Orientation, Rect, Series};
use crate::error::{ChartError, Result};
use crate::transform::PlotTransform;

/// Everything the renderer needs to know about where things go.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub transform: PlotTransform,
    pub bars: Vec<BarGeometry>,
    /// Category labels as displayed, after truncation.
    pub labels: Vec<String>,
    /// Bar extent across the category axis.
    pub bar_thickness: f64,
    /// Distance between neighbouring categories.
    pub step: f64,
}

impl ChartLayout {
    /// Coordinate of a category's center along the category axis.
    pub fn category_center(&self, index: usize) -> f64 {
        let anchor = self.bars[index].anchor;
        match self.transform.orientation {
            Orientation::Vertical => anchor.x + anchor.width / 2.0,
            Orientation::Horizontal => anchor.y + anchor.height / 2.0,
        }
    }

    /// The whole value-axis extent of a category's slot.
    pub fn hover_region(&self, index: usize) -> Rect {
        let anchor = self.bars[index].anchor;
        let area = self.transform.area;
        match self.transform.orientation {
            Orientation::Vertical => Rect::new(anchor.x, area.y, anchor.width, area.height),
            Orientation::Horizontal => Rect::new(area.x, anchor.y, area.width, anchor.height),
        }
    }
}

/// Computes bar placement for one orientation.
pub trait PlotLayout {
    fn layout(&self, series: &Series, config: &ChartConfig) -> Result<ChartLayout>;
}

/// Lays out `series` in the orientation `config` asks for.
pub fn layout(series: &Series, config: &ChartConfig) -> Result<ChartLayout> {
    series.validate()?;
    config.validate()?;
    match config.orientation {
        Orientation::Vertical => VerticalBars.layout(series, config),
        Orientation::Horizontal => HorizontalBars.layout(series, config),
    }
}

pub(crate) fn plot_area(config: &ChartConfig, left: f64) -> Result<Rect> {
    let m = &config.margins;
    let area = Rect::new(
        left,
        m.top,
        config.width - left - m.right,
        config.height - m.top - m.bottom,
    );
    if !is_positive(area.width) || !is_positive(area.height) {
        return Err(ChartError::config(format!(
            "plot area is {}x{} after margins",
            area.width, area.height
        )));
    }
    Ok(area)
}

pub(crate) fn check_thickness(thickness: f64, count: usize) -> Result<()> {
    if !is_positive(thickness) {
        return Err(ChartError::config(format!(
            "{count} bars do not fit: each would be {thickness:.2}px thick"
        )));
    }
    Ok(())
}

// Turns bar geometry into surface calls

use crate::data_types::{BarGeometry, ChartConfig, Color, Orientation, Rect};
use crate::error::Result;
use crate::plot_types::ChartLayout;
use crate::style::Attributes;
use crate::surface::{DrawingSurface, ShapeId};
use glam::DVec2;

/// Picks the fill for bar `index` of `count`.
///
/// The last-bar override wins, then the negative color for negative values,
/// then the theme's bar color.
pub fn bar_fill(index: usize, value: f64, count: usize, config: &ChartConfig) -> Color {
    match (config.last_color, config.negative_color) {
        (Some(last), _) if index + 1 == count => last,
        (_, Some(negative)) if value < 0.0 => negative,
        _ => config.theme.bar,
    }
}

pub fn bar_style(fill: Color) -> Attributes {
    Attributes::new().fill(fill).stroke(fill).stroke_width(0.0)
}

/// Draws bars with the style a chart config asks for.
pub struct BarPainter {
    extra: Attributes,
    rounded: bool,
}

impl BarPainter {
    pub fn new(layout: &ChartLayout, config: &ChartConfig) -> Self {
        Self {
            extra: Attributes::from_json(&config.bar_attributes),
            rounded: config.rounded && layout.transform.orientation == Orientation::Horizontal,
        }
    }

    /// Draws one bar and returns the handle hover animations should target.
    pub fn paint(&self, surface: &mut dyn DrawingSurface, bar: &BarGeometry) -> Result<ShapeId> {
        if self.rounded {
            paint_rounded_bar(surface, bar, &self.extra)
        } else {
            paint_bar(surface, bar.anchor, bar.translation, 0.0, bar.fill, &self.extra)
        }
    }
}

/// Draws every bar in category order and returns one handle per bar.
pub fn paint_bars(
    surface: &mut dyn DrawingSurface,
    layout: &ChartLayout,
    config: &ChartConfig,
) -> Result<Vec<ShapeId>> {
    let painter = BarPainter::new(layout, config);
    layout.bars.iter().map(|bar| painter.paint(surface, bar)).collect()
}

fn paint_bar(
    surface: &mut dyn DrawingSurface,
    anchor: Rect,
    translation: DVec2,
    radius: f64,
    fill: Color,
    extra: &Attributes,
) -> Result<ShapeId> {
    let id = surface.rect(anchor, radius);
    surface.set_attributes(id, &bar_style(fill).merge(extra))?;
    if translation != DVec2::ZERO {
        surface.translate(id, translation)?;
    }
    Ok(id)
}

/// A fully rounded bar plus a square piece that keeps the baseline end flat.
fn paint_rounded_bar(surface: &mut dyn DrawingSurface, bar: &BarGeometry, extra: &Attributes) -> Result<ShapeId> {
    let radius = bar.anchor.height / 2.0;
    let square_len = bar.anchor.width - radius;
    if square_len <= 0.0 {
        return paint_bar(surface, bar.anchor, bar.translation, radius, bar.fill, extra);
    }

    let square = Rect::new(bar.anchor.x, bar.anchor.y, square_len, bar.anchor.height);
    let square_shift = if bar.is_negative() {
        DVec2::new(-square_len, 0.0)
    } else {
        DVec2::ZERO
    };
    let square = paint_bar(surface, square, square_shift, 0.0, bar.fill, extra)?;
    let end = paint_bar(surface, bar.anchor, bar.translation, radius, bar.fill, extra)?;
    surface.group(&[square, end])
}

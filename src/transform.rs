//! Projection from data values to canvas coordinates.

use crate::data_types::{Orientation, Rect};
use crate::scales::Scale;
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub orientation: Orientation,
    /// Plot area inside the margins.
    pub area: Rect,
    pub scale: Scale,
}

impl PlotTransform {
    pub fn new(orientation: Orientation, area: Rect, scale: Scale) -> Self {
        Self {
            orientation,
            area,
            scale,
        }
    }

    /// Canvas coordinate of `value` along the value axis (y for vertical
    /// charts, x for horizontal ones).
    pub fn value_to_screen(&self, value: f64) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.area.bottom() - self.scale.map(value),
            Orientation::Horizontal => self.area.x + self.scale.map(value),
        }
    }

    /// Canvas coordinate of the zero baseline.
    pub fn baseline(&self) -> f64 {
        match self.orientation {
            Orientation::Vertical => self.area.bottom() - self.scale.baseline(),
            Orientation::Horizontal => self.area.x + self.scale.baseline(),
        }
    }

    /// Canvas coordinate of the `i`th value tick.
    pub fn tick_to_screen(&self, i: usize) -> f64 {
        let offset = i as f64 * self.scale.tick_spacing();
        match self.orientation {
            Orientation::Vertical => self.area.bottom() - offset,
            Orientation::Horizontal => self.area.x + offset,
        }
    }

    /// Unit vector pointing toward larger values on screen.
    pub fn positive_direction(&self) -> DVec2 {
        match self.orientation {
            Orientation::Vertical => DVec2::NEG_Y,
            Orientation::Horizontal => DVec2::X,
        }
    }
}

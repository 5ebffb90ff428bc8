//! Hover regions and value readouts.
//!
//! Every bar gets a transparent hit region covering its whole slot along the
//! value axis and a hidden readout (rounded background, nib and text). Entering
//! the region recolors the bar and fades the readout in; leaving reverses both.

use crate::data_types::{ChartConfig, Color, Orientation, Rect};
use crate::error::Result;
use crate::plot_types::ChartLayout;
use crate::rendering::bar_style;
use crate::style::Attributes;
use crate::surface::{DrawingSurface, PathBuilder, ShapeId};
use glam::DVec2;
use std::time::Duration;

pub const HOVER_TRANSITION: Duration = Duration::from_millis(200);
const TEXT_PADDING: f64 = 4.0;
const CORNER_RADIUS: f64 = 3.0;
const NIB_SIZE: f64 = 5.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayState {
    #[default]
    Idle,
    Hover,
}

/// Shapes making up one bar's readout.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Readout {
    pub group: ShapeId,
    pub background: ShapeId,
    pub nib: ShapeId,
    pub text: ShapeId,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HoverOverlay {
    pub index: usize,
    /// The bar shape the hover recolors.
    pub bar: ShapeId,
    pub region: Rect,
    pub hit_area: ShapeId,
    pub readout: Readout,
    color: Color,
    hover_color: Color,
    state: OverlayState,
}

impl HoverOverlay {
    /// Draws the hit region and hidden readout for bar `index`.
    pub fn build(
        surface: &mut dyn DrawingSurface,
        layout: &ChartLayout,
        index: usize,
        bar: ShapeId,
        text: &str,
        config: &ChartConfig,
    ) -> Result<Self> {
        let geometry = &layout.bars[index];
        let color = geometry.fill;
        let hover_color = config.hover_color.unwrap_or(color);

        let region = layout.hover_region(index);
        let hit_area = surface.rect(region, 0.0);
        surface.set_attributes(hit_area, &bar_style(color).opacity(0.0))?;

        let bounds = geometry.bounds();
        let tip = match layout.transform.orientation {
            Orientation::Vertical => bounds.center().x,
            Orientation::Horizontal if geometry.is_negative() => bounds.x,
            Orientation::Horizontal => bounds.right(),
        };
        let at = DVec2::new(tip, bounds.y - config.font_size * 1.5);
        let readout = Self::draw_readout(surface, at, text, config)?;

        let overlay = Self {
            index,
            bar,
            region,
            hit_area,
            readout,
            color,
            hover_color,
            state: OverlayState::Idle,
        };
        overlay.keep_on_canvas(surface)?;
        Ok(overlay)
    }

    fn draw_readout(
        surface: &mut dyn DrawingSurface,
        at: DVec2,
        content: &str,
        config: &ChartConfig,
    ) -> Result<Readout> {
        let theme = &config.theme;
        let text = surface.text(at, content);
        surface.set_attributes(
            text,
            &Attributes::new().font_size(config.font_size).fill(theme.tooltip_text),
        )?;

        let text_box = surface.bbox(text)?;
        let bg_rect = text_box.inflate(TEXT_PADDING);
        let background = surface.rect(bg_rect, CORNER_RADIUS);
        let fill = bar_style(theme.tooltip_background);
        surface.set_attributes(background, &fill)?;

        let mid = bg_rect.x + bg_rect.width / 2.0;
        let mut nib_path = PathBuilder::new();
        nib_path
            .move_to(DVec2::new(mid - NIB_SIZE, bg_rect.bottom()))
            .line_to(DVec2::new(mid, bg_rect.bottom() + NIB_SIZE))
            .line_to(DVec2::new(mid + NIB_SIZE, bg_rect.bottom()))
            .close();
        let nib = surface.path(&nib_path.build());
        surface.set_attributes(nib, &fill)?;

        // Text was created first so it could be measured; lift it above its background.
        surface.to_front(text)?;

        let group = surface.group(&[background, nib, text])?;
        surface.set_attributes(group, &Attributes::new().opacity(0.0))?;

        Ok(Readout {
            group,
            background,
            nib,
            text,
        })
    }

    /// Shifts the readout so its background stays inside the canvas.
    fn keep_on_canvas(&self, surface: &mut dyn DrawingSurface) -> Result<()> {
        let size = surface.size();
        let bg = surface.bbox(self.readout.background)?;

        let dx = if bg.x < 0.0 {
            -bg.x
        } else if bg.right() > size.x {
            size.x - bg.right()
        } else {
            0.0
        };
        let dy = if bg.y < 0.0 { 1.0 - bg.y } else { 0.0 };

        let delta = DVec2::new(dx, dy);
        if delta != DVec2::ZERO {
            surface.translate(self.readout.group, delta)?;
        }
        Ok(())
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn contains(&self, point: DVec2) -> bool {
        self.region.contains(point)
    }

    /// Recolors the bar and fades the readout in. Does nothing while hovered.
    pub fn pointer_enter(&mut self, surface: &mut dyn DrawingSurface) -> Result<()> {
        if self.state == OverlayState::Hover {
            return Ok(());
        }
        self.transition(surface, self.hover_color, 1.0)?;
        self.state = OverlayState::Hover;
        Ok(())
    }

    /// Restores the bar color and fades the readout out. Does nothing while idle.
    pub fn pointer_leave(&mut self, surface: &mut dyn DrawingSurface) -> Result<()> {
        if self.state == OverlayState::Idle {
            return Ok(());
        }
        self.transition(surface, self.color, 0.0)?;
        self.state = OverlayState::Idle;
        Ok(())
    }

    fn transition(&self, surface: &mut dyn DrawingSurface, color: Color, opacity: f64) -> Result<()> {
        surface.animate(
            self.bar,
            &Attributes::new().fill(color).stroke(color),
            HOVER_TRANSITION,
        )?;
        surface.animate(
            self.readout.group,
            &Attributes::new().opacity(opacity),
            HOVER_TRANSITION,
        )
    }
}

use crate::axis_renderer::{AxisRenderer, AxisShapes};
use crate::data_types::{ChartConfig, Series};
use crate::error::Result;
use crate::logging::LogSink;
use crate::overlay::HoverOverlay;
use crate::plot_types::{self, ChartLayout};
use crate::rendering::BarPainter;
use crate::surface::{DrawingSurface, ShapeId};
use glam::DVec2;

/// A bar chart ready to be drawn.
///
/// Rendering is a pure function of the series and config: every call lays
/// the chart out from scratch and draws it onto the given surface.
#[derive(Clone, Debug, PartialEq)]
pub struct BarChart {
    series: Series,
    config: ChartConfig,
}

impl BarChart {
    pub fn new(series: Series, config: ChartConfig) -> Result<Self> {
        series.validate()?;
        config.validate()?;
        Ok(Self { series, config })
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Geometry only, without touching a surface.
    pub fn layout(&self) -> Result<ChartLayout> {
        plot_types::layout(&self.series, &self.config)
    }

    /// Lays the chart out and draws it: gridlines and labels first, then each
    /// bar followed by its hover overlay. Readouts end up above everything.
    ///
    /// Layout errors are returned before anything is drawn.
    pub fn render(&self, surface: &mut dyn DrawingSurface) -> Result<RenderedChart> {
        let layout = self.layout()?;
        let axes = AxisRenderer::paint(surface, &layout, &self.series, &self.config)?;

        let painter = BarPainter::new(&layout, &self.config);
        let mut bars = Vec::with_capacity(layout.bars.len());
        let mut overlays = Vec::new();
        for geometry in &layout.bars {
            let bar = painter.paint(surface, geometry)?;
            if self.config.data_labels {
                let text = self.series.readout(geometry.index);
                overlays.push(HoverOverlay::build(surface, &layout, geometry.index, bar, &text, &self.config)?);
            }
            bars.push(bar);
        }
        for overlay in &overlays {
            surface.to_front(overlay.readout.group)?;
        }

        tracing::debug!(
            bars = bars.len(),
            overlays = overlays.len(),
            baseline = layout.transform.baseline(),
            "rendered bar chart"
        );

        Ok(RenderedChart {
            layout,
            axes,
            bars,
            overlays,
            hovered: None,
        })
    }

    /// [`render`](Self::render), with events going to `sink`.
    pub fn render_logged(&self, surface: &mut dyn DrawingSurface, sink: &LogSink) -> Result<RenderedChart> {
        sink.in_scope(|| self.render(surface))
    }
}

/// The shapes of a rendered chart, and the hover state of its bars.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedChart {
    pub layout: ChartLayout,
    pub axes: AxisShapes,
    /// One handle per bar, in category order.
    pub bars: Vec<ShapeId>,
    overlays: Vec<HoverOverlay>,
    hovered: Option<usize>,
}

impl RenderedChart {
    pub fn overlays(&self) -> &[HoverOverlay] {
        &self.overlays
    }

    /// Index of the bar under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn hit_test(&self, point: DVec2) -> Option<usize> {
        self.overlays.iter().find(|o| o.contains(point)).map(|o| o.index)
    }

    /// Routes a pointer move: leaves the previously hovered bar and enters
    /// the one now under the pointer.
    pub fn pointer_moved(&mut self, point: DVec2, surface: &mut dyn DrawingSurface) -> Result<()> {
        let target = self.hit_test(point);
        if target == self.hovered {
            return Ok(());
        }
        if let Some(old) = self.hovered.take() {
            self.overlay_mut(old).pointer_leave(surface)?;
        }
        if let Some(new) = target {
            self.overlay_mut(new).pointer_enter(surface)?;
        }
        self.hovered = target;
        Ok(())
    }

    /// The pointer left the canvas.
    pub fn pointer_exited(&mut self, surface: &mut dyn DrawingSurface) -> Result<()> {
        if let Some(old) = self.hovered.take() {
            self.overlay_mut(old).pointer_leave(surface)?;
        }
        Ok(())
    }

    fn overlay_mut(&mut self, index: usize) -> &mut HoverOverlay {
        // Overlays are built in bar order, one per bar.
        &mut self.overlays[index]
    }
}

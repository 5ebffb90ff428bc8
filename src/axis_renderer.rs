use crate::data_types::{ChartConfig, Label, LabelSet, Orientation, Segment, Series, TextAnchor};
use crate::error::Result;
use crate::plot_types::ChartLayout;
use crate::style::Attributes;
use crate::surface::{DrawingSurface, PathBuilder, ShapeId};
use glam::DVec2;

/// Gap between the plot area and its labels.
const LABEL_GAP: f64 = 7.0;
const ELLIPSIS: char = '…';
const HINT_SIZE: f64 = 5.0;

/// Shortens `label` to `max` characters followed by an ellipsis. Labels of up
/// to `max + 1` characters are kept whole.
pub fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max + 1 {
        return label.to_string();
    }
    let mut out: String = label.chars().take(max).collect();
    out.push(ELLIPSIS);
    out
}

pub fn display_labels(labels: &[String], max: Option<usize>) -> Vec<String> {
    match max {
        Some(max) => labels.iter().map(|l| truncate_label(l, max)).collect(),
        None => labels.to_vec(),
    }
}

/// Lines drawn behind the bars.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLayout {
    /// One per value tick, evenly spaced.
    pub value_lines: Vec<Segment>,
    /// One per category with a label, when category gridlines are enabled.
    pub category_lines: Vec<Segment>,
    /// The two sides of the plot area along the value axis.
    pub frame: Vec<Segment>,
}

impl GridLayout {
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.value_lines.iter().chain(&self.category_lines).chain(&self.frame)
    }
}

/// Snaps a coordinate to the middle of a pixel so 1px lines stay sharp.
fn crisp(v: f64) -> f64 {
    v.floor() + 0.5
}

pub struct AxisRenderer;

impl AxisRenderer {
    pub fn grid(layout: &ChartLayout, config: &ChartConfig) -> GridLayout {
        let t = &layout.transform;
        let area = t.area;
        let ticks = 0..=t.scale.tick_count();
        let mut grid = GridLayout::default();

        let keep = |i: usize| !(config.hide_empty_label_grid && layout.labels[i].is_empty());

        match t.orientation {
            Orientation::Vertical => {
                grid.value_lines = ticks
                    .map(|i| {
                        let y = crisp(t.tick_to_screen(i));
                        Segment::new(DVec2::new(area.x, y), DVec2::new(area.right(), y))
                    })
                    .collect();
                grid.frame = [area.x, area.right()]
                    .into_iter()
                    .map(|x| Segment::new(DVec2::new(crisp(x), area.y), DVec2::new(crisp(x), area.bottom())))
                    .collect();
                if config.category_grid {
                    grid.category_lines = (0..layout.bars.len())
                        .filter(|&i| keep(i))
                        .map(|i| {
                            let x = crisp(layout.category_center(i));
                            Segment::new(DVec2::new(x, area.y), DVec2::new(x, area.bottom()))
                        })
                        .collect();
                }
            }
            Orientation::Horizontal => {
                grid.value_lines = ticks
                    .map(|i| {
                        let x = crisp(t.tick_to_screen(i));
                        Segment::new(DVec2::new(x, area.y), DVec2::new(x, area.bottom()))
                    })
                    .collect();
                grid.frame = [area.y, area.bottom()]
                    .into_iter()
                    .map(|y| Segment::new(DVec2::new(area.x, crisp(y)), DVec2::new(area.right(), crisp(y))))
                    .collect();
                if config.category_grid {
                    grid.category_lines = (0..layout.bars.len())
                        .filter(|&i| keep(i))
                        .map(|i| {
                            let y = crisp(layout.category_center(i));
                            Segment::new(DVec2::new(area.x, y), DVec2::new(area.right(), y))
                        })
                        .collect();
                }
            }
        }
        grid
    }

    /// One label per category, centered on its bar.
    pub fn category_labels(layout: &ChartLayout, config: &ChartConfig) -> LabelSet {
        let area = layout.transform.area;
        let font = config.font_size;
        layout
            .labels
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let center = layout.category_center(i);
                match layout.transform.orientation {
                    Orientation::Vertical => {
                        let mut anchor = DVec2::new(center, area.bottom() + LABEL_GAP + font / 2.0);
                        if config.label_rotation.is_some() {
                            anchor.x -= font;
                        }
                        Label {
                            text: text.clone(),
                            anchor,
                            rotation: config.label_rotation,
                            text_anchor: TextAnchor::Middle,
                        }
                    }
                    Orientation::Horizontal => {
                        let mut anchor = DVec2::new(area.x - LABEL_GAP, center);
                        if config.label_rotation.is_some() {
                            anchor.y += font / 2.0;
                        }
                        Label {
                            text: text.clone(),
                            anchor,
                            rotation: config.label_rotation,
                            text_anchor: TextAnchor::End,
                        }
                    }
                }
            })
            .collect()
    }

    /// One label per value tick, lowest first.
    pub fn value_labels(layout: &ChartLayout, config: &ChartConfig) -> LabelSet {
        let t = &layout.transform;
        let area = t.area;
        let unit = config.value_label_unit.as_deref().unwrap_or("");
        t.scale
            .ticks()
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let text = format!("{}{unit}", t.scale.format_tick(value));
                let pos = t.tick_to_screen(i);
                match t.orientation {
                    Orientation::Vertical => Label {
                        text,
                        anchor: DVec2::new(area.x - LABEL_GAP, pos),
                        rotation: None,
                        text_anchor: TextAnchor::End,
                    },
                    Orientation::Horizontal => Label {
                        text,
                        anchor: DVec2::new(pos, area.bottom() + LABEL_GAP + config.font_size / 2.0),
                        rotation: None,
                        text_anchor: TextAnchor::Middle,
                    },
                }
            })
            .collect()
    }

    /// A line across the plot area at the series mean.
    pub fn mean_line(layout: &ChartLayout, series: &Series) -> Segment {
        let t = &layout.transform;
        let area = t.area;
        let pos = crisp(t.value_to_screen(series.mean()));
        match t.orientation {
            Orientation::Vertical => Segment::new(DVec2::new(area.x, pos), DVec2::new(area.right(), pos)),
            Orientation::Horizontal => Segment::new(DVec2::new(pos, area.y), DVec2::new(pos, area.bottom())),
        }
    }

    /// Two strokes of a `«` chevron in the bottom-left corner of the plot
    /// area. Only horizontal charts have one.
    pub fn focus_hint(layout: &ChartLayout) -> Option<[Segment; 2]> {
        if layout.transform.orientation != Orientation::Horizontal {
            return None;
        }
        let area = layout.transform.area;
        let x = area.x + HINT_SIZE * 2.0;
        let y = area.bottom() - HINT_SIZE / 2.0;
        Some([
            Segment::new(DVec2::new(x, y), DVec2::new(x - HINT_SIZE, y + HINT_SIZE)),
            Segment::new(
                DVec2::new(x - HINT_SIZE, y),
                DVec2::new(x - HINT_SIZE * 2.0, y + HINT_SIZE),
            ),
        ])
    }

    pub fn paint(
        surface: &mut dyn DrawingSurface,
        layout: &ChartLayout,
        series: &Series,
        config: &ChartConfig,
    ) -> Result<AxisShapes> {
        let grid = Self::grid(layout, config);
        let mut builder = PathBuilder::new();
        for s in grid.segments() {
            builder.move_to(s.from).line_to(s.to);
        }
        let grid_id = surface.path(&builder.build());
        surface.set_attributes(grid_id, &Attributes::new().stroke(config.theme.grid_line).stroke_width(1.0))?;

        let mut labels = Vec::new();
        for label in Self::category_labels(layout, config)
            .into_iter()
            .chain(Self::value_labels(layout, config))
        {
            labels.push(Self::paint_label(surface, &label, config)?);
        }

        let mean_line = if config.mean_line {
            let s = Self::mean_line(layout, series);
            let mut b = PathBuilder::new();
            b.move_to(s.from).line_to(s.to);
            let id = surface.path(&b.build());
            surface.set_attributes(id, &Attributes::new().stroke(config.theme.mean_line).stroke_width(1.0))?;
            Some(id)
        } else {
            None
        };

        let hint = match Self::focus_hint(layout) {
            Some(strokes) if config.focus_hint => {
                let mut b = PathBuilder::new();
                for s in &strokes {
                    b.move_to(s.from).line_to(s.to);
                }
                let id = surface.path(&b.build());
                surface.set_attributes(id, &Attributes::new().stroke(config.theme.axis_label).stroke_width(2.0))?;
                Some(id)
            }
            _ => None,
        };

        Ok(AxisShapes {
            grid: grid_id,
            labels,
            mean_line,
            focus_hint: hint,
        })
    }

    fn paint_label(surface: &mut dyn DrawingSurface, label: &Label, config: &ChartConfig) -> Result<ShapeId> {
        let id = surface.text(label.anchor, &label.text);
        let attrs = Attributes::new()
            .font_size(config.font_size)
            .fill(config.theme.axis_label)
            .text_anchor(label.text_anchor);
        surface.set_attributes(id, &attrs)?;
        if let Some(deg) = label.rotation {
            surface.rotate(id, deg, label.anchor)?;
        }
        Ok(id)
    }
}

/// Handles of the decorations drawn by [`AxisRenderer::paint`].
#[derive(Clone, Debug, PartialEq)]
pub struct AxisShapes {
    pub grid: ShapeId,
    pub labels: Vec<ShapeId>,
    pub mean_line: Option<ShapeId>,
    pub focus_hint: Option<ShapeId>,
}

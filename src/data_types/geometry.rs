use super::Color;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels. Width and height are never negative.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn translated(&self, delta: DVec2) -> Self {
        Self::new(self.x + delta.x, self.y + delta.y, self.width, self.height)
    }

    pub fn inflate(&self, by: f64) -> Self {
        Self::new(self.x - by, self.y - by, self.width + 2.0 * by, self.height + 2.0 * by)
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect::new(x, y, self.right().max(other.right()) - x, self.bottom().max(other.bottom()) - y)
    }
}

/// Placement of a single bar.
///
/// `anchor` starts at the zero baseline and extends toward positive values
/// (up for vertical charts, right for horizontal ones). Negative bars keep the
/// same positive-magnitude anchor and carry a `translation` that moves it to
/// the negative side of the baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub index: usize,
    pub value: f64,
    pub anchor: Rect,
    pub translation: DVec2,
    pub fill: Color,
}

impl BarGeometry {
    /// Where the bar ends up on screen.
    pub fn bounds(&self) -> Rect {
        self.anchor.translated(self.translation)
    }

    pub fn is_negative(&self) -> bool {
        self.value < 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub anchor: DVec2,
    /// Degrees, clockwise.
    pub rotation: Option<f64>,
    pub text_anchor: TextAnchor,
}

pub type LabelSet = Vec<Label>;

/// A straight line segment, used for gridlines and the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: DVec2,
    pub to: DVec2,
}

impl Segment {
    pub fn new(from: DVec2, to: DVec2) -> Self {
        Self { from, to }
    }
}

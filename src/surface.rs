//! The vector drawing capabilities the chart needs, plus an in-memory
//! implementation that records every call and can serialize to SVG.

use crate::data_types::Rect;
use crate::error::{ChartError, Result};
use crate::style::{AttrValue, Attributes, StyleAttr};
use glam::DVec2;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::time::Duration;

/// Handle to a shape created on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    Close,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    pub commands: Vec<PathCommand>,
}

impl Path {
    pub fn points(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.commands.iter().filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::Close => None,
        })
    }

    /// SVG path data, e.g. `M0 0L10 0Z`.
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for cmd in &self.commands {
            let _ = match cmd {
                PathCommand::MoveTo(p) => write!(d, "M{} {}", p.x, p.y),
                PathCommand::LineTo(p) => write!(d, "L{} {}", p.x, p.y),
                PathCommand::Close => write!(d, "Z"),
            };
        }
        d
    }
}

#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    commands: Vec<PathCommand>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, p: DVec2) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(p));
        self
    }

    pub fn line_to(&mut self, p: DVec2) -> &mut Self {
        self.commands.push(PathCommand::LineTo(p));
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn build(&self) -> Path {
        Path {
            commands: self.commands.clone(),
        }
    }
}

/// Primitive operations of a retained-mode vector canvas.
///
/// Operations that take a [`ShapeId`] fail with [`ChartError::UnknownShape`]
/// when the handle does not belong to this surface. Operations on a group
/// apply to each of its members.
pub trait DrawingSurface {
    /// Canvas size in pixels.
    fn size(&self) -> DVec2;

    fn rect(&mut self, rect: Rect, corner_radius: f64) -> ShapeId;

    /// Text centered on `at`.
    fn text(&mut self, at: DVec2, content: &str) -> ShapeId;

    fn path(&mut self, path: &Path) -> ShapeId;

    fn group(&mut self, members: &[ShapeId]) -> Result<ShapeId>;

    fn set_attributes(&mut self, shape: ShapeId, attrs: &Attributes) -> Result<()>;

    fn translate(&mut self, shape: ShapeId, delta: DVec2) -> Result<()>;

    /// Rotates by `degrees` clockwise around `origin`.
    fn rotate(&mut self, shape: ShapeId, degrees: f64, origin: DVec2) -> Result<()>;

    /// Starts a transition toward `attrs`. A new request on the same shape
    /// replaces any transition still running.
    fn animate(&mut self, shape: ShapeId, attrs: &Attributes, duration: Duration) -> Result<()>;

    fn bbox(&self, shape: ShapeId) -> Result<Rect>;

    /// Moves a shape above everything drawn so far.
    fn to_front(&mut self, shape: ShapeId) -> Result<()>;
}

#[derive(Clone, Debug, PartialEq)]
pub enum ShapeKind {
    Rect { rect: Rect, radius: f64 },
    Text { at: DVec2, content: String },
    Path(Path),
    Group(Vec<ShapeId>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub attrs: Attributes,
    pub translation: DVec2,
    /// Rotations in the order applied, as (degrees, origin).
    pub rotations: Vec<(f64, DVec2)>,
}

impl Shape {
    fn new(kind: ShapeKind) -> Self {
        Self {
            kind,
            attrs: Attributes::new(),
            translation: DVec2::ZERO,
            rotations: Vec::new(),
        }
    }

    pub fn attr(&self, attr: &StyleAttr) -> Option<&AttrValue> {
        self.attrs.get(attr)
    }

    pub fn opacity(&self) -> f64 {
        self.attr(&StyleAttr::Opacity).and_then(AttrValue::as_number).unwrap_or(1.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Animation {
    pub target: Attributes,
    pub duration: Duration,
}

/// One recorded surface call, in the order it was made.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Create(ShapeId),
    SetAttributes(ShapeId, Attributes),
    Translate(ShapeId, DVec2),
    Rotate(ShapeId, f64),
    Animate(ShapeId, Animation),
    ToFront(ShapeId),
}

/// A surface that keeps shapes in memory.
///
/// Animations are recorded and their target attributes applied right away,
/// so the stored state is always the state a transition ends in.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    shapes: Vec<Shape>,
    /// Paint order, back to front.
    order: Vec<ShapeId>,
    calls: Vec<DrawCall>,
    animations: BTreeMap<ShapeId, Animation>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            shapes: Vec::new(),
            order: Vec::new(),
            calls: Vec::new(),
            animations: BTreeMap::new(),
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id.0)
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Shape ids back to front.
    pub fn paint_order(&self) -> &[ShapeId] {
        &self.order
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// The most recent transition requested on `id`.
    pub fn animation(&self, id: ShapeId) -> Option<&Animation> {
        self.animations.get(&id)
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    fn push(&mut self, kind: ShapeKind) -> ShapeId {
        let id = ShapeId(self.shapes.len());
        self.shapes.push(Shape::new(kind));
        self.order.push(id);
        self.calls.push(DrawCall::Create(id));
        id
    }

    fn check(&self, id: ShapeId) -> Result<&Shape> {
        self.shapes.get(id.0).ok_or(ChartError::UnknownShape(id))
    }

    /// The shape itself, or every leaf of a group.
    fn leaves(&self, id: ShapeId) -> Result<Vec<ShapeId>> {
        match &self.check(id)?.kind {
            ShapeKind::Group(members) => {
                let mut out = Vec::with_capacity(members.len());
                for m in members {
                    out.extend(self.leaves(*m)?);
                }
                Ok(out)
            }
            _ => Ok(vec![id]),
        }
    }

    fn apply(&mut self, id: ShapeId, attrs: &Attributes) -> Result<()> {
        for leaf in self.leaves(id)? {
            let shape = &mut self.shapes[leaf.0];
            shape.attrs = std::mem::take(&mut shape.attrs).merge(attrs);
        }
        Ok(())
    }

    fn font_size(shape: &Shape) -> f64 {
        shape.attr(&StyleAttr::FontSize).and_then(AttrValue::as_number).unwrap_or(10.0)
    }

    /// Serializes the shapes as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );
        for shape in self.order.iter().map(|id| &self.shapes[id.0]) {
            let (tag, geometry, body) = match &shape.kind {
                ShapeKind::Rect { rect, radius } => (
                    "rect",
                    format!(
                        r#"x="{}" y="{}" width="{}" height="{}" rx="{radius}" ry="{radius}""#,
                        rect.x, rect.y, rect.width, rect.height
                    ),
                    None,
                ),
                ShapeKind::Text { at, content } => {
                    ("text", format!(r#"x="{}" y="{}""#, at.x, at.y), Some(escape(content)))
                }
                ShapeKind::Path(path) => ("path", format!(r#"d="{}""#, path.to_svg_data()), None),
                ShapeKind::Group(_) => continue,
            };

            let _ = write!(out, "  <{tag} {geometry}");
            if matches!(shape.kind, ShapeKind::Text { .. }) && shape.attr(&StyleAttr::TextAnchor).is_none() {
                let _ = write!(out, r#" text-anchor="middle" dominant-baseline="middle""#);
            }
            for (k, v) in shape.attrs.iter() {
                let _ = write!(out, r#" {}="{}""#, escape(k.name()), escape(&v.to_string()));
            }
            let mut transform = String::new();
            if shape.translation != DVec2::ZERO {
                let _ = write!(transform, "translate({} {})", shape.translation.x, shape.translation.y);
            }
            for (deg, o) in &shape.rotations {
                if !transform.is_empty() {
                    transform.push(' ');
                }
                let _ = write!(transform, "rotate({deg} {} {})", o.x, o.y);
            }
            if !transform.is_empty() {
                let _ = write!(out, r#" transform="{transform}""#);
            }
            match body {
                Some(text) => {
                    let _ = writeln!(out, ">{text}</{tag}>");
                }
                None => {
                    let _ = writeln!(out, "/>");
                }
            }
        }
        out.push_str("</svg>\n");
        out
    }
}

impl DrawingSurface for RecordingSurface {
    fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    fn rect(&mut self, rect: Rect, corner_radius: f64) -> ShapeId {
        self.push(ShapeKind::Rect {
            rect,
            radius: corner_radius,
        })
    }

    fn text(&mut self, at: DVec2, content: &str) -> ShapeId {
        self.push(ShapeKind::Text {
            at,
            content: content.to_string(),
        })
    }

    fn path(&mut self, path: &Path) -> ShapeId {
        self.push(ShapeKind::Path(path.clone()))
    }

    fn group(&mut self, members: &[ShapeId]) -> Result<ShapeId> {
        for m in members {
            self.check(*m)?;
        }
        Ok(self.push(ShapeKind::Group(members.to_vec())))
    }

    fn set_attributes(&mut self, shape: ShapeId, attrs: &Attributes) -> Result<()> {
        self.apply(shape, attrs)?;
        self.calls.push(DrawCall::SetAttributes(shape, attrs.clone()));
        Ok(())
    }

    fn translate(&mut self, shape: ShapeId, delta: DVec2) -> Result<()> {
        for leaf in self.leaves(shape)? {
            self.shapes[leaf.0].translation += delta;
        }
        self.calls.push(DrawCall::Translate(shape, delta));
        Ok(())
    }

    fn rotate(&mut self, shape: ShapeId, degrees: f64, origin: DVec2) -> Result<()> {
        for leaf in self.leaves(shape)? {
            self.shapes[leaf.0].rotations.push((degrees, origin));
        }
        self.calls.push(DrawCall::Rotate(shape, degrees));
        Ok(())
    }

    fn animate(&mut self, shape: ShapeId, attrs: &Attributes, duration: Duration) -> Result<()> {
        self.apply(shape, attrs)?;
        let animation = Animation {
            target: attrs.clone(),
            duration,
        };
        self.animations.insert(shape, animation.clone());
        self.calls.push(DrawCall::Animate(shape, animation));
        Ok(())
    }

    fn bbox(&self, shape: ShapeId) -> Result<Rect> {
        let s = self.check(shape)?;
        let local = match &s.kind {
            ShapeKind::Rect { rect, .. } => *rect,
            ShapeKind::Text { at, content } => {
                let size = Self::font_size(s);
                let width = crate::utils::approx_text_width(content, size);
                let height = size * 1.2;
                let x = match s.attr(&StyleAttr::TextAnchor) {
                    Some(AttrValue::Text(a)) if a == "start" => at.x,
                    Some(AttrValue::Text(a)) if a == "end" => at.x - width,
                    _ => at.x - width / 2.0,
                };
                Rect::new(x, at.y - height / 2.0, width, height)
            }
            ShapeKind::Path(path) => {
                let mut points = path.points();
                let Some(first) = points.next() else {
                    return Ok(Rect::new(s.translation.x, s.translation.y, 0.0, 0.0));
                };
                let (min, max) = points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
                Rect::new(min.x, min.y, max.x - min.x, max.y - min.y)
            }
            ShapeKind::Group(members) => {
                let mut bounds: Option<Rect> = None;
                for m in members {
                    let b = self.bbox(*m)?;
                    bounds = Some(match bounds {
                        Some(acc) => acc.union(&b),
                        None => b,
                    });
                }
                return Ok(bounds.unwrap_or_default());
            }
        };
        Ok(local.translated(s.translation))
    }

    fn to_front(&mut self, shape: ShapeId) -> Result<()> {
        let leaves = self.leaves(shape)?;
        self.order.retain(|id| !leaves.contains(id));
        self.order.extend(leaves);
        self.calls.push(DrawCall::ToFront(shape));
        Ok(())
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

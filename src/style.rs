//! Style attributes understood by the drawing surface.
//!
//! Common attributes have typed builder methods. Anything else goes through
//! [`Attributes::named`], which checks the name against the attributes a vector
//! surface is known to support, or [`Attributes::raw`], which passes the name
//! through untouched.

use crate::data_types::{Color, TextAnchor};
use std::fmt;

/// Attribute names a vector surface is known to accept.
pub const KNOWN_ATTRIBUTES: &[&str] = &[
    "clip-rect",
    "cx",
    "cy",
    "fill",
    "fill-opacity",
    "font",
    "font-family",
    "font-size",
    "font-weight",
    "height",
    "opacity",
    "path",
    "r",
    "rotation",
    "rx",
    "ry",
    "scale",
    "src",
    "stroke",
    "stroke-dasharray",
    "stroke-linecap",
    "stroke-linejoin",
    "stroke-miterlimit",
    "stroke-opacity",
    "stroke-width",
    "text-anchor",
    "translation",
    "width",
    "x",
    "y",
];

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StyleAttr {
    Fill,
    Stroke,
    StrokeWidth,
    Opacity,
    FontSize,
    FontFamily,
    TextAnchor,
    /// Passed to the surface as-is.
    Raw(String),
}

impl StyleAttr {
    pub fn name(&self) -> &str {
        match self {
            Self::Fill => "fill",
            Self::Stroke => "stroke",
            Self::StrokeWidth => "stroke-width",
            Self::Opacity => "opacity",
            Self::FontSize => "font-size",
            Self::FontFamily => "font-family",
            Self::TextAnchor => "text-anchor",
            Self::Raw(name) => name,
        }
    }

    /// Resolves a user-supplied name. Returns `None` for names no surface knows.
    pub fn from_name(name: &str) -> Option<Self> {
        let name: String = name
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
            .collect();
        let attr = match name.as_str() {
            "fill" => Self::Fill,
            "stroke" => Self::Stroke,
            "stroke-width" => Self::StrokeWidth,
            "opacity" => Self::Opacity,
            "font-size" => Self::FontSize,
            "font-family" => Self::FontFamily,
            "text-anchor" => Self::TextAnchor,
            other if KNOWN_ATTRIBUTES.contains(&other) => Self::Raw(name),
            _ => return None,
        };
        Some(attr)
    }

    fn is_color(&self) -> bool {
        matches!(self, Self::Fill | Self::Stroke)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Number(f64),
    Text(String),
    Color(Color),
}

impl AttrValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            _ => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::Color(c) => write!(f, "{c}"),
        }
    }
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<Color> for AttrValue {
    fn from(c: Color) -> Self {
        Self::Color(c)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// An ordered attribute map. Setting a key twice keeps the last value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attributes {
    entries: Vec<(StyleAttr, AttrValue)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, attr: StyleAttr, value: impl Into<AttrValue>) -> Self {
        self.insert(attr, value.into());
        self
    }

    pub fn fill(self, color: Color) -> Self {
        self.set(StyleAttr::Fill, color)
    }

    pub fn stroke(self, color: Color) -> Self {
        self.set(StyleAttr::Stroke, color)
    }

    pub fn stroke_width(self, width: f64) -> Self {
        self.set(StyleAttr::StrokeWidth, width)
    }

    pub fn opacity(self, opacity: f64) -> Self {
        self.set(StyleAttr::Opacity, opacity)
    }

    pub fn font_size(self, size: f64) -> Self {
        self.set(StyleAttr::FontSize, size)
    }

    pub fn font_family(self, family: &str) -> Self {
        self.set(StyleAttr::FontFamily, family)
    }

    pub fn text_anchor(self, anchor: TextAnchor) -> Self {
        self.set(StyleAttr::TextAnchor, anchor.as_str())
    }

    /// Sets an attribute without checking its name.
    pub fn raw(self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.set(StyleAttr::Raw(name.to_string()), value)
    }

    /// Sets an attribute by name. Unknown names are reported and skipped.
    pub fn named(self, name: &str, value: impl Into<AttrValue>) -> Self {
        match StyleAttr::from_name(name) {
            Some(attr) => {
                let value = match (attr.is_color(), value.into()) {
                    (true, AttrValue::Text(text)) => match text.parse::<Color>() {
                        Ok(c) => AttrValue::Color(c),
                        Err(_) => AttrValue::Text(text),
                    },
                    (_, v) => v,
                };
                self.set(attr, value)
            }
            None => {
                tracing::warn!(attribute = name, "attribute not recognized, skipping");
                self
            }
        }
    }

    /// Converts a JSON attribute map, as found in chart configs.
    pub fn from_json<'a>(map: impl IntoIterator<Item = (&'a String, &'a serde_json::Value)>) -> Self {
        map.into_iter().fold(Self::new(), |attrs, (name, value)| match value {
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(n) => attrs.named(name, n),
                None => attrs,
            },
            serde_json::Value::String(s) => attrs.named(name, s.as_str()),
            serde_json::Value::Bool(b) => attrs.named(name, b.to_string()),
            other => {
                tracing::warn!(attribute = %name, value = %other, "unsupported attribute value, skipping");
                attrs
            }
        })
    }

    pub fn merge(mut self, other: &Attributes) -> Self {
        for (k, v) in &other.entries {
            self.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn get(&self, attr: &StyleAttr) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == attr).map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StyleAttr, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, attr: StyleAttr, value: AttrValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == attr) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((attr, value)),
        }
    }
}

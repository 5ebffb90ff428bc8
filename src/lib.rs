//! bar_chart crate: bar chart layout over an abstract vector drawing surface

pub mod axis_renderer;
pub mod chart;
pub mod data_types;
pub mod error;
pub mod logging;
pub mod overlay;
pub mod plot_types;
pub mod rendering;
pub mod scales;
pub mod style;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod utils;

pub use chart::{BarChart, RenderedChart};
pub use data_types::{BarGeometry, ChartConfig, Color, Orientation, Rect, Series};
pub use error::{ChartError, Result};
pub use logging::LogSink;
pub use surface::{DrawingSurface, RecordingSurface, ShapeId};

pub mod color;
pub mod geometry;
pub mod plot_configs;
pub mod series;

pub use color::*;
pub use geometry::*;
pub use plot_configs::*;
pub use series::*;

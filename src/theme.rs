use crate::data_types::Color;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub bar: Color,
    pub grid_line: Color,
    pub axis_label: Color,
    pub mean_line: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            bar: Color::rgb(0x4b, 0x80, 0xb6),
            grid_line: Color::rgb(0xcc, 0xcc, 0xcc),
            axis_label: Color::rgb(0x55, 0x55, 0x55),
            mean_line: Color::rgb(0xff, 0x88, 0x00),
            tooltip_background: Color::rgb(0x22, 0x22, 0x22),
            tooltip_text: Color::WHITE,
        }
    }
}

use d3rs::format::format;

/// Width of `text` estimated from its character count.
///
/// Layout happens before any text is measured, so every glyph is taken to be
/// half the font size wide.
pub fn approx_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size / 2.0
}

/// Formats a value for labels and readouts: integers without decimals,
/// everything else with at most two.
pub fn format_value(value: f64) -> String {
    let label = format(".2~f")(value);
    // Tiny negatives round to zero but keep their sign.
    if label == "-0" {
        "0".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(20.0), "20");
        assert_eq!(format_value(-5.0), "-5");
        assert_eq!(format_value(2.5), "2.5");
        assert_eq!(format_value(0.126), "0.13");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(-0.001), "0");
        assert_eq!(format_value(1234.5), "1234.5");
    }

    #[test]
    fn test_approx_text_width() {
        assert_eq!(approx_text_width("Developer", 10.0), 45.0);
        assert_eq!(approx_text_width("", 10.0), 0.0);
    }
}

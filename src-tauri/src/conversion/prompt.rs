//! Prompt text sent to the model for a conversion.

/// Render a value the way it appears in prompts and history entries.
///
/// Uses `f64` display, so whole numbers drop the fraction (`5.0` -> `5`).
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Build the natural-language prompt for converting `value` between two units.
pub fn build_conversion_prompt(value: f64, from_unit: &str, to_unit: &str) -> String {
    format!("Convert {} {} to {}", format_value(value), from_unit, to_unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_whole_number() {
        assert_eq!(
            build_conversion_prompt(5.0, "meters", "feet"),
            "Convert 5 meters to feet"
        );
    }

    #[test]
    fn test_prompt_fractional_value() {
        assert_eq!(
            build_conversion_prompt(2.5, "miles per hour", "knots"),
            "Convert 2.5 miles per hour to knots"
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(0.25), "0.25");
    }
}

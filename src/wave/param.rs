/// Parse a parameter from user text.
///
/// Surrounding whitespace is ignored. Anything that does not parse as a float
/// becomes NaN, which the generators carry through as a degenerate curve.
pub fn parse_param(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Values accepted by the generator setters.
///
/// Text goes through [`parse_param`]; numbers pass straight through.
pub trait ParamValue {
    fn to_param(self) -> f64;
}

impl ParamValue for &str {
    fn to_param(self) -> f64 {
        parse_param(self)
    }
}

impl ParamValue for &String {
    fn to_param(self) -> f64 {
        parse_param(self)
    }
}

impl ParamValue for String {
    fn to_param(self) -> f64 {
        parse_param(&self)
    }
}

impl ParamValue for f64 {
    fn to_param(self) -> f64 {
        self
    }
}

impl ParamValue for f32 {
    fn to_param(self) -> f64 {
        self as f64
    }
}

impl ParamValue for i32 {
    fn to_param(self) -> f64 {
        self as f64
    }
}

impl ParamValue for usize {
    fn to_param(self) -> f64 {
        self as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_param("12.5"), 12.5);
        assert_eq!(parse_param("  -3 "), -3.0);
        assert_eq!(parse_param("1e2"), 100.0);
    }

    #[test]
    fn malformed_text_is_nan() {
        assert!(parse_param("").is_nan());
        assert!(parse_param("loud").is_nan());
        assert!(parse_param("1.2.3").is_nan());
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(0.25f64.to_param(), 0.25);
        assert_eq!(7usize.to_param(), 7.0);
        assert_eq!("8".to_param(), 8.0);
        assert_eq!(String::from("9").to_param(), 9.0);
    }
}

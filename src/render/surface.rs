#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 24-bit color.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("color must look like #rrggbb, got {0:?}")]
    Format(String),
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

/// Parses `#rrggbb` (the leading `#` is optional).
impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Format(s.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ColorParseError::Digits(s.to_string()))
        };
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How a path is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    pub width: f64,
}

/// A fixed-size 2D drawing surface.
///
/// The coordinate system has x running `0..width` left to right and its
/// vertical origin pre-translated to the middle of the surface, so y runs
/// `-height/2..height/2` with positive y pointing down.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    /// Erase everything inside the rectangle.
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new subpath at `(x, y)`.
    fn move_to(&mut self, x: f64, y: f64);

    /// Extend the current subpath with a straight line to `(x, y)`.
    fn line_to(&mut self, x: f64, y: f64);

    /// Paint the current path. The path itself is kept until `begin_path`.
    fn stroke(&mut self, style: StrokeStyle);

    /// Clear the whole surface.
    fn clear(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.clear_rect(0.0, -height / 2.0, width, height);
    }
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        (**self).clear_rect(x, y, width, height)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, x: f64, y: f64) {
        (**self).move_to(x, y)
    }

    fn line_to(&mut self, x: f64, y: f64) {
        (**self).line_to(x, y)
    }

    fn stroke(&mut self, style: StrokeStyle) {
        (**self).stroke(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#86d530".parse::<Rgb>(), Ok(Rgb::new(0x86, 0xd5, 0x30)));
        assert_eq!("707070".parse::<Rgb>(), Ok(Rgb::new(0x70, 0x70, 0x70)));
        assert_eq!(" #FFFFFF ".parse::<Rgb>(), Ok(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(matches!("#fff".parse::<Rgb>(), Err(ColorParseError::Format(_))));
        assert!(matches!("#gg0000".parse::<Rgb>(), Err(ColorParseError::Digits(_))));
        assert!(matches!("#ééé".parse::<Rgb>(), Err(ColorParseError::Format(_))));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let color = Rgb::new(0x12, 0xab, 0x0f);
        assert_eq!(color.to_string(), "#12ab0f");
        assert_eq!(color.to_string().parse::<Rgb>(), Ok(color));
    }
}

//! Value categories and typed attribute values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which adapter family an attribute belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCategory {
    Number,
    Color,
    String,
    Bool,
    Enum,
    Unknown,
}

/// RGB color with channels in [0,1].
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("color must be 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digits in color {0:?}")]
    Digits(String),
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0x00RRGGBB` value.
    pub fn from_u32(rgb: u32) -> Self {
        let channel = |shift: u32| f64::from((rgb >> shift) & 0xff) / 255.0;
        Self::new(channel(16), channel(8), channel(0))
    }

    /// Pack into `0x00RRGGBB`, clamping each channel.
    pub fn to_u32(self) -> u32 {
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 16) | (channel(self.g) << 8) | channel(self.b)
    }

    /// Parse `"#rrggbb"` or `"rrggbb"`.
    pub fn from_hex(s: &str) -> Result<Self, ParseColorError> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 {
            return Err(ParseColorError::Length(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| ParseColorError::Digits(s.to_string()))
    }

    pub fn to_hex(self) -> String {
        format!("#{:06x}", self.to_u32())
    }

    /// HSL with hue in degrees [0,360), saturation and luminance in [0,1].
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        let h = (h.rem_euclid(360.0)) / 360.0;
        let s = s.clamp(0.0, 1.0);
        let l = l.clamp(0.0, 1.0);
        if s == 0.0 {
            return Self::new(l, l, l);
        }
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        Self::new(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }

    /// Inverse of [`Color::from_hsl`]; returns `(hue_degrees, saturation, luminance)`.
    pub fn to_hsl(self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta == 0.0 {
            return (0.0, 0.0, l);
        }
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == self.r {
            (self.g - self.b) / delta + if self.g < self.b { 6.0 } else { 0.0 }
        } else if max == self.g {
            (self.b - self.r) / delta + 2.0
        } else {
            (self.r - self.g) / delta + 4.0
        };
        (h * 60.0, s, l)
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// A value of one of the animatable categories.
///
/// Hosts hand these out as per-shape property defaults; the factory checks
/// the variant against the attribute's category before using it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum AttributeValue {
    Number(f64),
    Color(Color),
    String(String),
    Bool(bool),
    Enum(i16),
}

impl AttributeValue {
    #[inline]
    pub fn category(&self) -> ValueCategory {
        match self {
            AttributeValue::Number(_) => ValueCategory::Number,
            AttributeValue::Color(_) => ValueCategory::Color,
            AttributeValue::String(_) => ValueCategory::String,
            AttributeValue::Bool(_) => ValueCategory::Bool,
            AttributeValue::Enum(_) => ValueCategory::Enum,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Color> {
        match self {
            AttributeValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<i16> {
        match self {
            AttributeValue::Enum(e) => Some(*e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "left={a} right={b}");
    }

    #[test]
    fn hex_parsing() {
        let c = Color::from_hex("#ff8000").unwrap();
        approx(c.r, 1.0);
        approx(c.g, 128.0 / 255.0);
        approx(c.b, 0.0);
        assert_eq!(c.to_hex(), "#ff8000");
        assert_eq!(
            Color::from_hex("#fff"),
            Err(ParseColorError::Length("#fff".into()))
        );
        assert!(matches!(
            Color::from_hex("zzzzzz"),
            Err(ParseColorError::Digits(_))
        ));
    }

    #[test]
    fn hsl_primaries() {
        let red = Color::from_hsl(0.0, 1.0, 0.5);
        approx(red.r, 1.0);
        approx(red.g, 0.0);
        approx(red.b, 0.0);

        let (h, s, l) = Color::new(0.0, 0.0, 1.0).to_hsl();
        approx(h, 240.0);
        approx(s, 1.0);
        approx(l, 0.5);

        let grey = Color::from_hsl(123.0, 0.0, 0.25);
        assert_eq!(grey, Color::new(0.25, 0.25, 0.25));
    }

    #[test]
    fn attribute_value_categories() {
        assert_eq!(
            AttributeValue::Number(1.0).category(),
            ValueCategory::Number
        );
        assert_eq!(
            AttributeValue::String("Arial".into()).as_str(),
            Some("Arial")
        );
        assert_eq!(AttributeValue::Enum(3).as_number(), None);
    }
}

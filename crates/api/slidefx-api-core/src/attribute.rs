//! Animatable shape attributes and their SMIL-style names.
//!
//! Name lookup is case-insensitive: `"Rotate"`, `"rotate"` and `"ROTATE"`
//! all resolve to [`AttributeKind::Rotate`]. Anything unrecognized maps to
//! [`AttributeKind::Invalid`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    /// Shape center, x axis.
    #[serde(rename = "x")]
    PosX,
    /// Shape center, y axis.
    #[serde(rename = "y")]
    PosY,
    Width,
    Height,
    /// Rotation angle in degrees.
    Rotate,
    SkewX,
    SkewY,
    Opacity,
    /// Relative character scale (1.0 is the unscaled font).
    CharHeight,
    CharWeight,
    CharColor,
    FillColor,
    LineColor,
    DimColor,
    /// Composite color; drives the same layer slot as `FillColor`.
    Color,
    CharFontName,
    Visibility,
    FillStyle,
    LineStyle,
    CharPosture,
    CharUnderline,
    Invalid,
}

const NAME_TABLE: &[(&str, AttributeKind)] = &[
    ("x", AttributeKind::PosX),
    ("y", AttributeKind::PosY),
    ("width", AttributeKind::Width),
    ("height", AttributeKind::Height),
    ("rotate", AttributeKind::Rotate),
    ("skewx", AttributeKind::SkewX),
    ("skewy", AttributeKind::SkewY),
    ("opacity", AttributeKind::Opacity),
    ("charheight", AttributeKind::CharHeight),
    ("charweight", AttributeKind::CharWeight),
    ("charcolor", AttributeKind::CharColor),
    ("fillcolor", AttributeKind::FillColor),
    ("linecolor", AttributeKind::LineColor),
    ("dimcolor", AttributeKind::DimColor),
    ("color", AttributeKind::Color),
    ("charfontname", AttributeKind::CharFontName),
    ("visibility", AttributeKind::Visibility),
    ("fillstyle", AttributeKind::FillStyle),
    ("linestyle", AttributeKind::LineStyle),
    ("charposture", AttributeKind::CharPosture),
    ("charunderline", AttributeKind::CharUnderline),
];

impl AttributeKind {
    /// Every animatable kind, `Invalid` excluded.
    pub const ALL: [AttributeKind; 21] = [
        AttributeKind::PosX,
        AttributeKind::PosY,
        AttributeKind::Width,
        AttributeKind::Height,
        AttributeKind::Rotate,
        AttributeKind::SkewX,
        AttributeKind::SkewY,
        AttributeKind::Opacity,
        AttributeKind::CharHeight,
        AttributeKind::CharWeight,
        AttributeKind::CharColor,
        AttributeKind::FillColor,
        AttributeKind::LineColor,
        AttributeKind::DimColor,
        AttributeKind::Color,
        AttributeKind::CharFontName,
        AttributeKind::Visibility,
        AttributeKind::FillStyle,
        AttributeKind::LineStyle,
        AttributeKind::CharPosture,
        AttributeKind::CharUnderline,
    ];

    /// Resolve an attribute name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Self {
        let name = name.trim();
        NAME_TABLE
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, kind)| *kind)
            .unwrap_or(AttributeKind::Invalid)
    }

    /// Canonical lowercase name; `"invalid"` for [`AttributeKind::Invalid`].
    pub fn name(self) -> &'static str {
        NAME_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(key, _)| *key)
            .unwrap_or("invalid")
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self != AttributeKind::Invalid
    }

    /// True for the kinds that move the shape center.
    #[inline]
    pub fn is_position(self) -> bool {
        matches!(self, AttributeKind::PosX | AttributeKind::PosY)
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(AttributeKind::from_name("Rotate"), AttributeKind::Rotate);
        assert_eq!(AttributeKind::from_name("ROTATE"), AttributeKind::Rotate);
        assert_eq!(
            AttributeKind::from_name("CharFontName"),
            AttributeKind::CharFontName
        );
        assert_eq!(AttributeKind::from_name("X"), AttributeKind::PosX);
    }

    #[test]
    fn unknown_names_are_invalid() {
        assert_eq!(AttributeKind::from_name(""), AttributeKind::Invalid);
        assert_eq!(AttributeKind::from_name("bogus"), AttributeKind::Invalid);
        assert!(!AttributeKind::from_name("xy").is_valid());
    }

    #[test]
    fn every_kind_has_a_unique_name() {
        for kind in AttributeKind::ALL {
            assert_eq!(AttributeKind::from_name(kind.name()), kind);
        }
        let mut names: Vec<&str> = AttributeKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AttributeKind::ALL.len());
    }

    #[test]
    fn serde_uses_canonical_names() {
        let json = serde_json::to_string(&AttributeKind::PosX).unwrap();
        assert_eq!(json, "\"x\"");
        let kind: AttributeKind = serde_json::from_str("\"charunderline\"").unwrap();
        assert_eq!(kind, AttributeKind::CharUnderline);
    }
}

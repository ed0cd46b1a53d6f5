//! The one table that says, per attribute, which value category it belongs
//! to and how its adapter is wired. Classification and construction both
//! read from [`recipe`], so they cannot drift apart.

use slidefx_api_core::{AttributeKind, Color, ShapeAttributeLayer, ValueCategory};

use crate::generic::Accessor;

/// Where a number attribute's pre-animation value comes from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum NumberDefault {
    Fixed(f64),
    /// Document value of the shape property.
    ShapeProperty,
    BoundsWidth,
    BoundsHeight,
    CenterX,
    CenterY,
}

/// What the timeline value is relative to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Reference {
    Absolute,
    PageWidth,
    PageHeight,
}

#[derive(Copy, Clone, Debug)]
pub(crate) enum Recipe {
    Number {
        accessor: Accessor<f64>,
        default: NumberDefault,
        reference: Reference,
    },
    Color {
        accessor: Accessor<Color>,
        /// Property that supplies the default.
        default_from: AttributeKind,
    },
    String(Accessor<String>),
    Bool {
        accessor: Accessor<bool>,
        default: bool,
    },
    Enum(Accessor<i16>),
    Invalid,
}

impl Recipe {
    pub(crate) fn category(&self) -> ValueCategory {
        match self {
            Recipe::Number { .. } => ValueCategory::Number,
            Recipe::Color { .. } => ValueCategory::Color,
            Recipe::String(_) => ValueCategory::String,
            Recipe::Bool { .. } => ValueCategory::Bool,
            Recipe::Enum(_) => ValueCategory::Enum,
            Recipe::Invalid => ValueCategory::Unknown,
        }
    }
}

macro_rules! accessor {
    ($is_valid:ident, $get:ident, $set:ident) => {
        Accessor::new(
            |l: &dyn ShapeAttributeLayer| l.$is_valid(),
            |l: &dyn ShapeAttributeLayer| l.$get(),
            |l: &mut dyn ShapeAttributeLayer, v| l.$set(v),
        )
    };
}

fn number(accessor: Accessor<f64>, default: NumberDefault, reference: Reference) -> Recipe {
    Recipe::Number {
        accessor,
        default,
        reference,
    }
}

pub(crate) fn recipe(kind: AttributeKind) -> Recipe {
    use AttributeKind as K;
    use NumberDefault as D;
    use Reference as R;

    match kind {
        K::CharHeight => number(
            accessor!(is_char_scale_valid, char_scale, set_char_scale),
            D::Fixed(1.0),
            R::Absolute,
        ),
        K::CharWeight => number(
            accessor!(is_char_weight_valid, char_weight, set_char_weight),
            D::ShapeProperty,
            R::Absolute,
        ),
        K::Height => number(
            accessor!(is_height_valid, height, set_height),
            D::BoundsHeight,
            R::PageHeight,
        ),
        K::Width => number(
            accessor!(is_width_valid, width, set_width),
            D::BoundsWidth,
            R::PageWidth,
        ),
        K::Opacity => number(
            accessor!(is_alpha_valid, alpha, set_alpha),
            D::Fixed(1.0),
            R::Absolute,
        ),
        K::Rotate => number(
            accessor!(is_rotation_angle_valid, rotation_angle, set_rotation_angle),
            D::Fixed(0.0),
            R::Absolute,
        ),
        K::SkewX => number(
            accessor!(is_shear_x_angle_valid, shear_x_angle, set_shear_x_angle),
            D::ShapeProperty,
            R::Absolute,
        ),
        K::SkewY => number(
            accessor!(is_shear_y_angle_valid, shear_y_angle, set_shear_y_angle),
            D::ShapeProperty,
            R::Absolute,
        ),
        K::PosX => number(
            accessor!(is_pos_x_valid, pos_x, set_pos_x),
            D::CenterX,
            R::PageWidth,
        ),
        K::PosY => number(
            accessor!(is_pos_y_valid, pos_y, set_pos_y),
            D::CenterY,
            R::PageHeight,
        ),

        K::CharColor => Recipe::Color {
            accessor: accessor!(is_char_color_valid, char_color, set_char_color),
            default_from: K::CharColor,
        },
        // composite color animates the fill
        K::Color | K::FillColor => Recipe::Color {
            accessor: accessor!(is_fill_color_valid, fill_color, set_fill_color),
            default_from: K::FillColor,
        },
        K::LineColor => Recipe::Color {
            accessor: accessor!(is_line_color_valid, line_color, set_line_color),
            default_from: K::LineColor,
        },
        K::DimColor => Recipe::Color {
            accessor: accessor!(is_dim_color_valid, dim_color, set_dim_color),
            default_from: K::DimColor,
        },

        K::CharFontName => Recipe::String(Accessor::new(
            |l: &dyn ShapeAttributeLayer| l.is_font_family_valid(),
            |l: &dyn ShapeAttributeLayer| l.font_family(),
            |l: &mut dyn ShapeAttributeLayer, v: String| l.set_font_family(&v),
        )),

        K::Visibility => Recipe::Bool {
            accessor: accessor!(is_visibility_valid, visibility, set_visibility),
            default: true,
        },

        K::FillStyle => Recipe::Enum(accessor!(is_fill_style_valid, fill_style, set_fill_style)),
        K::LineStyle => Recipe::Enum(accessor!(is_line_style_valid, line_style, set_line_style)),
        K::CharPosture => {
            Recipe::Enum(accessor!(is_char_posture_valid, char_posture, set_char_posture))
        }
        K::CharUnderline => Recipe::Enum(accessor!(
            is_underline_mode_valid,
            underline_mode,
            set_underline_mode
        )),

        K::Invalid => Recipe::Invalid,
    }
}

/// Value category of an attribute name, `Unknown` for names that are not
/// animatable. Case-insensitive.
pub fn classify_attribute_name(name: &str) -> ValueCategory {
    recipe(AttributeKind::from_name(name)).category()
}

use slidefx_api_core::{Color, ShapeAttributeLayer};

/// Attribute layer backed by plain `Option`s. Every write bumps
/// [`TestAttributeLayer::state_id`], which [`crate::TestShape`] compares
/// against the last painted state.
#[derive(Debug, Default, Clone)]
pub struct TestAttributeLayer {
    width: Option<f64>,
    height: Option<f64>,
    pos_x: Option<f64>,
    pos_y: Option<f64>,
    rotation_angle: Option<f64>,
    shear_x_angle: Option<f64>,
    shear_y_angle: Option<f64>,
    alpha: Option<f64>,
    char_scale: Option<f64>,
    char_weight: Option<f64>,
    char_color: Option<Color>,
    fill_color: Option<Color>,
    line_color: Option<Color>,
    dim_color: Option<Color>,
    font_family: Option<String>,
    visibility: Option<bool>,
    fill_style: Option<i16>,
    line_style: Option<i16>,
    char_posture: Option<i16>,
    underline_mode: Option<i16>,
    state_id: u64,
    writes: usize,
}

impl TestAttributeLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Monotonic counter of content changes.
    pub fn state_id(&self) -> u64 {
        self.state_id
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }

    fn touch(&mut self) {
        self.state_id += 1;
        self.writes += 1;
    }
}

macro_rules! slot {
    ($is_valid:ident, $get:ident, $set:ident, $field:ident, $ty:ty) => {
        fn $is_valid(&self) -> bool {
            self.$field.is_some()
        }
        fn $get(&self) -> $ty {
            self.$field.unwrap_or_default()
        }
        fn $set(&mut self, value: $ty) {
            self.$field = Some(value);
            self.touch();
        }
    };
}

impl ShapeAttributeLayer for TestAttributeLayer {
    slot!(is_width_valid, width, set_width, width, f64);
    slot!(is_height_valid, height, set_height, height, f64);
    slot!(is_pos_x_valid, pos_x, set_pos_x, pos_x, f64);
    slot!(is_pos_y_valid, pos_y, set_pos_y, pos_y, f64);
    slot!(
        is_rotation_angle_valid,
        rotation_angle,
        set_rotation_angle,
        rotation_angle,
        f64
    );
    slot!(
        is_shear_x_angle_valid,
        shear_x_angle,
        set_shear_x_angle,
        shear_x_angle,
        f64
    );
    slot!(
        is_shear_y_angle_valid,
        shear_y_angle,
        set_shear_y_angle,
        shear_y_angle,
        f64
    );
    slot!(is_alpha_valid, alpha, set_alpha, alpha, f64);
    slot!(is_char_scale_valid, char_scale, set_char_scale, char_scale, f64);
    slot!(
        is_char_weight_valid,
        char_weight,
        set_char_weight,
        char_weight,
        f64
    );
    slot!(is_char_color_valid, char_color, set_char_color, char_color, Color);
    slot!(is_fill_color_valid, fill_color, set_fill_color, fill_color, Color);
    slot!(is_line_color_valid, line_color, set_line_color, line_color, Color);
    slot!(is_dim_color_valid, dim_color, set_dim_color, dim_color, Color);
    slot!(is_visibility_valid, visibility, set_visibility, visibility, bool);
    slot!(is_fill_style_valid, fill_style, set_fill_style, fill_style, i16);
    slot!(is_line_style_valid, line_style, set_line_style, line_style, i16);
    slot!(
        is_char_posture_valid,
        char_posture,
        set_char_posture,
        char_posture,
        i16
    );
    slot!(
        is_underline_mode_valid,
        underline_mode,
        set_underline_mode,
        underline_mode,
        i16
    );

    fn is_font_family_valid(&self) -> bool {
        self.font_family.is_some()
    }

    fn font_family(&self) -> String {
        self.font_family.clone().unwrap_or_default()
    }

    fn set_font_family(&mut self, family: &str) {
        self.font_family = Some(family.to_string());
        self.touch();
    }
}

//! Host-side collaborators: shapes, their attribute layers, and the shape
//! manager that owns sprite mode and repaint scheduling.
//!
//! All handles are single-threaded (`Rc`). Adapters never construct these;
//! the host passes them in when an effect starts.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeKind;
use crate::value::{AttributeValue, Color};

/// Opaque, stable identity of a shape on the page.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ShapeId(pub u64);

pub type ShapeRef = Rc<dyn Shape>;
pub type AttributeLayerRef = Rc<RefCell<dyn ShapeAttributeLayer>>;
pub type ShapeManagerRef = Rc<dyn ShapeManager>;

/// A shape as seen by the animation layer.
pub trait Shape {
    fn id(&self) -> ShapeId;

    /// Current bounds, including the effect of all active attribute layers.
    fn bounds(&self) -> Rect;

    /// Bounds as defined by the document, before any animation.
    fn dom_bounds(&self) -> Rect;

    /// True when the shape's rendered content differs from what was last
    /// painted. Adapters only request a repaint when this is set.
    fn is_content_changed(&self) -> bool;

    fn is_visible(&self) -> bool {
        true
    }

    /// Document value of an attribute, used as the animation baseline when
    /// the attribute layer has not overridden it.
    fn property_default(&self, _kind: AttributeKind) -> Option<AttributeValue> {
        None
    }
}

/// Per-shape override layer that animations write into.
///
/// Every attribute comes as an `is_*_valid` / getter / setter triple. An
/// attribute is valid once something has set it.
pub trait ShapeAttributeLayer {
    fn is_width_valid(&self) -> bool;
    fn width(&self) -> f64;
    fn set_width(&mut self, width: f64);

    fn is_height_valid(&self) -> bool;
    fn height(&self) -> f64;
    fn set_height(&mut self, height: f64);

    fn is_pos_x_valid(&self) -> bool;
    fn pos_x(&self) -> f64;
    fn set_pos_x(&mut self, x: f64);

    fn is_pos_y_valid(&self) -> bool;
    fn pos_y(&self) -> f64;
    fn set_pos_y(&mut self, y: f64);

    fn is_rotation_angle_valid(&self) -> bool;
    fn rotation_angle(&self) -> f64;
    fn set_rotation_angle(&mut self, degrees: f64);

    fn is_shear_x_angle_valid(&self) -> bool;
    fn shear_x_angle(&self) -> f64;
    fn set_shear_x_angle(&mut self, degrees: f64);

    fn is_shear_y_angle_valid(&self) -> bool;
    fn shear_y_angle(&self) -> f64;
    fn set_shear_y_angle(&mut self, degrees: f64);

    fn is_alpha_valid(&self) -> bool;
    fn alpha(&self) -> f64;
    fn set_alpha(&mut self, alpha: f64);

    fn is_char_scale_valid(&self) -> bool;
    fn char_scale(&self) -> f64;
    fn set_char_scale(&mut self, scale: f64);

    fn is_char_weight_valid(&self) -> bool;
    fn char_weight(&self) -> f64;
    fn set_char_weight(&mut self, weight: f64);

    fn is_char_color_valid(&self) -> bool;
    fn char_color(&self) -> Color;
    fn set_char_color(&mut self, color: Color);

    fn is_fill_color_valid(&self) -> bool;
    fn fill_color(&self) -> Color;
    fn set_fill_color(&mut self, color: Color);

    fn is_line_color_valid(&self) -> bool;
    fn line_color(&self) -> Color;
    fn set_line_color(&mut self, color: Color);

    fn is_dim_color_valid(&self) -> bool;
    fn dim_color(&self) -> Color;
    fn set_dim_color(&mut self, color: Color);

    fn is_font_family_valid(&self) -> bool;
    fn font_family(&self) -> String;
    fn set_font_family(&mut self, family: &str);

    fn is_visibility_valid(&self) -> bool;
    fn visibility(&self) -> bool;
    fn set_visibility(&mut self, visible: bool);

    fn is_fill_style_valid(&self) -> bool;
    fn fill_style(&self) -> i16;
    fn set_fill_style(&mut self, style: i16);

    fn is_line_style_valid(&self) -> bool;
    fn line_style(&self) -> i16;
    fn set_line_style(&mut self, style: i16);

    fn is_char_posture_valid(&self) -> bool;
    fn char_posture(&self) -> i16;
    fn set_char_posture(&mut self, posture: i16);

    fn is_underline_mode_valid(&self) -> bool;
    fn underline_mode(&self) -> i16;
    fn set_underline_mode(&mut self, mode: i16);

    /// Shape center.
    fn position(&self) -> Point {
        Point::new(self.pos_x(), self.pos_y())
    }

    fn set_position(&mut self, center: Point) {
        self.set_pos_x(center.x);
        self.set_pos_y(center.y);
    }

    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    fn set_size(&mut self, size: Size) {
        self.set_width(size.width);
        self.set_height(size.height);
    }
}

/// Sprite mode and repaint scheduling for the shapes on one page.
pub trait ShapeManager {
    /// Move the shape into an animation sprite for the effect's duration.
    fn enter_animation_mode(&self, shape: &ShapeRef);

    fn leave_animation_mode(&self, shape: &ShapeRef);

    /// Schedule a repaint of the shape.
    fn notify_shape_update(&self, shape: &ShapeRef);

    /// Shapes on the page, used to seed static collision bodies.
    fn shapes(&self) -> Vec<ShapeRef> {
        Vec::new()
    }
}

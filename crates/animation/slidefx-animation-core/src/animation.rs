//! Adapter interfaces the timing engine drives, one per value category.
//!
//! The engine calls [`Animation::start`] once, then the category's `apply`
//! once per frame, then [`Animation::end`]. `apply` returns `false` when the
//! adapter is not bound to a shape.

use kurbo::Vec2;
use slidefx_api_core::{AttributeLayerRef, Color, ShapeRef};

use crate::error::AnimationError;

pub trait Animation {
    /// Bind to a shape and its attribute layer. Fails when already bound.
    fn start(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError>;

    /// Unbind. A no-op when not started.
    fn end(&mut self);

    fn is_started(&self) -> bool;
}

pub trait NumberAnimation: Animation {
    fn apply(&mut self, value: f64) -> bool;

    /// Pre-animation baseline in the adapter's normalized domain.
    fn underlying_value(&self) -> Result<f64, AnimationError>;
}

pub trait EnumAnimation: Animation {
    fn apply(&mut self, value: i16) -> bool;
    fn underlying_value(&self) -> Result<i16, AnimationError>;
}

pub trait BoolAnimation: Animation {
    fn apply(&mut self, value: bool) -> bool;
    fn underlying_value(&self) -> Result<bool, AnimationError>;
}

pub trait ColorAnimation: Animation {
    fn apply(&mut self, value: &Color) -> bool;
    fn underlying_value(&self) -> Result<Color, AnimationError>;
}

pub trait StringAnimation: Animation {
    fn apply(&mut self, value: &str) -> bool;
    fn underlying_value(&self) -> Result<String, AnimationError>;
}

/// Two-component values (size or position), normalized per axis.
pub trait PairAnimation: Animation {
    fn apply(&mut self, value: &Vec2) -> bool;
    fn underlying_value(&self) -> Result<Vec2, AnimationError>;
}

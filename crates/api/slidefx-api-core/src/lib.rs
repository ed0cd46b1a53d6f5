//! slidefx-api-core: shape, attribute and value vocabulary shared by the
//! animation adapters and the physics world.
//!
//! Nothing in here animates anything. The crate names the animatable
//! attributes, the value categories they fall into, and the traits a host
//! implements so adapters can read and write shape state.

pub mod attribute;
pub mod shape;
pub mod value;

pub use attribute::AttributeKind;
pub use shape::{
    AttributeLayerRef, Shape, ShapeAttributeLayer, ShapeId, ShapeManager, ShapeManagerRef,
    ShapeRef,
};
pub use value::{AttributeValue, Color, ParseColorError, ValueCategory};

// Geometry is expressed with kurbo throughout the workspace.
pub use kurbo::{Point, Rect, Size, Vec2};

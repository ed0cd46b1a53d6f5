//! slidefx-animation-core: adapters that let a timing engine animate shape
//! attributes.
//!
//! The engine hands each adapter a value per frame; the adapter converts it
//! into the attribute's native units, writes it into the shape's attribute
//! layer, mirrors it into the page's physics world when one is running, and
//! asks the shape manager for a repaint when the shape actually changed.
//!
//! Adapters come from [`AnimationFactory`], which looks every attribute up
//! in a single table. [`classify_attribute_name`] reads the same table.

pub mod animation;
mod binding;
pub mod config;
pub mod context;
pub mod error;
pub mod factory;
pub mod flags;
pub mod generic;
pub mod modifier;
pub mod motion_path;
pub mod path_animation;
pub mod physics;
mod table;
pub mod transform;
pub mod tuple;

pub use animation::{
    Animation, BoolAnimation, ColorAnimation, EnumAnimation, NumberAnimation, PairAnimation,
    StringAnimation,
};
pub use config::Config;
pub use context::AnimationContext;
pub use error::AnimationError;
pub use factory::AnimationFactory;
pub use flags::AnimationFlags;
pub use generic::{Accessor, GenericAnimation};
pub use modifier::{Identity, Modifier, Scaler};
pub use motion_path::MotionPath;
pub use path_animation::PathAnimation;
pub use physics::{PhysicsAnimation, PhysicsParams};
pub use table::classify_attribute_name;
pub use transform::{AdditiveMode, TransformType};
pub use tuple::TupleAnimation;

pub use slidefx_api_core::ValueCategory;

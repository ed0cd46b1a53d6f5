//! Entry points the effect builder uses to obtain adapters.

use std::fmt::Debug;

use log::debug;
use slidefx_api_core::{AttributeKind, AttributeValue, Color, ShapeRef, ValueCategory};

use crate::animation::{
    BoolAnimation, ColorAnimation, EnumAnimation, NumberAnimation, PairAnimation, StringAnimation,
};
use crate::config::Config;
use crate::context::AnimationContext;
use crate::error::AnimationError;
use crate::generic::GenericAnimation;
use crate::motion_path::MotionPath;
use crate::path_animation::PathAnimation;
use crate::physics::{PhysicsAnimation, PhysicsParams};
use crate::table::{self, NumberDefault, Recipe, Reference};
use crate::transform::{AdditiveMode, TransformType};
use crate::tuple::TupleAnimation;

/// Builds adapters for one presentation.
#[derive(Clone, Debug, Default)]
pub struct AnimationFactory {
    cfg: Config,
}

/// Resolve `name` to its kind and recipe, rejecting non-animatable names.
fn lookup(name: &str) -> Result<(AttributeKind, Recipe), AnimationError> {
    let kind = AttributeKind::from_name(name);
    match table::recipe(kind) {
        Recipe::Invalid => Err(AnimationError::UnknownAttribute {
            name: name.to_string(),
        }),
        recipe => Ok((kind, recipe)),
    }
}

fn mismatch(name: &str, expected: ValueCategory, recipe: &Recipe) -> AnimationError {
    AnimationError::CategoryMismatch {
        attribute: name.to_string(),
        expected,
        actual: recipe.category(),
    }
}

/// Document default of `kind` on `shape`, or `fallback` when the shape has
/// none or it is of another type.
fn property_default<T: Debug>(
    shape: &ShapeRef,
    kind: AttributeKind,
    extract: impl FnOnce(&AttributeValue) -> Option<T>,
    fallback: T,
) -> T {
    match shape.property_default(kind) {
        Some(value) => match extract(&value) {
            Some(v) => v,
            None => {
                debug!(
                    "{kind}: shape {:?} default {value:?} has the wrong type, using {fallback:?}",
                    shape.id()
                );
                fallback
            }
        },
        None => {
            debug!(
                "{kind}: shape {:?} has no default, using {fallback:?}",
                shape.id()
            );
            fallback
        }
    }
}

impl AnimationFactory {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn classify_attribute_name(&self, name: &str) -> ValueCategory {
        table::classify_attribute_name(name)
    }

    pub fn create_number_property_animation(
        &self,
        name: &str,
        shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn NumberAnimation>, AnimationError> {
        let (kind, recipe) = lookup(name)?;
        let Recipe::Number {
            accessor,
            default,
            reference,
        } = recipe
        else {
            return Err(mismatch(name, ValueCategory::Number, &recipe));
        };
        let shape_manager = ctx.require_shape_manager(kind.name())?;

        let bounds = shape.bounds();
        let default = match default {
            NumberDefault::Fixed(v) => v,
            NumberDefault::ShapeProperty => {
                property_default(shape, kind, AttributeValue::as_number, 0.0)
            }
            NumberDefault::BoundsWidth => bounds.width(),
            NumberDefault::BoundsHeight => bounds.height(),
            NumberDefault::CenterX => bounds.center().x,
            NumberDefault::CenterY => bounds.center().y,
        };
        let anim = GenericAnimation::new(shape_manager, ctx.flags, kind, accessor, default)
            .with_world(ctx.world.clone());

        let scale = match reference {
            Reference::Absolute => return Ok(Box::new(anim)),
            Reference::PageWidth => ctx.page_size.width,
            Reference::PageHeight => ctx.page_size.height,
        };
        Ok(Box::new(anim.scaled(scale)?))
    }

    pub fn create_color_property_animation(
        &self,
        name: &str,
        shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn ColorAnimation>, AnimationError> {
        let (kind, recipe) = lookup(name)?;
        let Recipe::Color {
            accessor,
            default_from,
        } = recipe
        else {
            return Err(mismatch(name, ValueCategory::Color, &recipe));
        };
        let shape_manager = ctx.require_shape_manager(kind.name())?;
        let default = property_default(shape, default_from, AttributeValue::as_color, Color::BLACK);
        Ok(Box::new(
            GenericAnimation::new(shape_manager, ctx.flags, kind, accessor, default)
                .with_world(ctx.world.clone()),
        ))
    }

    pub fn create_string_property_animation(
        &self,
        name: &str,
        shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn StringAnimation>, AnimationError> {
        let (kind, recipe) = lookup(name)?;
        let Recipe::String(accessor) = recipe else {
            return Err(mismatch(name, ValueCategory::String, &recipe));
        };
        let shape_manager = ctx.require_shape_manager(kind.name())?;
        let default = property_default(
            shape,
            kind,
            |v| v.as_str().map(str::to_string),
            String::new(),
        );
        Ok(Box::new(
            GenericAnimation::new(shape_manager, ctx.flags, kind, accessor, default)
                .with_world(ctx.world.clone()),
        ))
    }

    pub fn create_bool_property_animation(
        &self,
        name: &str,
        _shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn BoolAnimation>, AnimationError> {
        let (kind, recipe) = lookup(name)?;
        let Recipe::Bool { accessor, default } = recipe else {
            return Err(mismatch(name, ValueCategory::Bool, &recipe));
        };
        let shape_manager = ctx.require_shape_manager(kind.name())?;
        Ok(Box::new(
            GenericAnimation::new(shape_manager, ctx.flags, kind, accessor, default)
                .with_world(ctx.world.clone()),
        ))
    }

    pub fn create_enum_property_animation(
        &self,
        name: &str,
        shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn EnumAnimation>, AnimationError> {
        let (kind, recipe) = lookup(name)?;
        let Recipe::Enum(accessor) = recipe else {
            return Err(mismatch(name, ValueCategory::Enum, &recipe));
        };
        let shape_manager = ctx.require_shape_manager(kind.name())?;
        let default = property_default(shape, kind, AttributeValue::as_enum, 0);
        Ok(Box::new(
            GenericAnimation::new(shape_manager, ctx.flags, kind, accessor, default)
                .with_world(ctx.world.clone()),
        ))
    }

    /// SCALE or TRANSLATE of the whole shape.
    pub fn create_pair_property_animation(
        &self,
        transform: TransformType,
        shape: &ShapeRef,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn PairAnimation>, AnimationError> {
        if !matches!(transform, TransformType::Scale | TransformType::Translate) {
            return Err(AnimationError::UnsupportedTransform(transform));
        }
        let shape_manager = ctx.require_shape_manager("TupleAnimation")?;
        let anim = TupleAnimation::new(transform, shape, shape_manager, ctx.page_size, ctx.flags)?
            .with_world(ctx.world.clone());
        Ok(Box::new(anim))
    }

    /// Motion along SVG path data `d`, in page-relative coordinates.
    pub fn create_path_motion_animation(
        &self,
        d: &str,
        additive: AdditiveMode,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn NumberAnimation>, AnimationError> {
        let path = MotionPath::parse(d, self.cfg.path_accuracy)?;
        let shape_manager = ctx.require_shape_manager("PathAnimation")?;
        debug!(
            "path motion: {} units long, closed: {}",
            path.length(),
            path.is_closed()
        );
        Ok(Box::new(
            PathAnimation::new(path, additive, shape_manager, ctx.page_size, ctx.flags)
                .with_world(ctx.world.clone()),
        ))
    }

    pub fn create_physics_animation(
        &self,
        params: PhysicsParams,
        ctx: &AnimationContext,
    ) -> Result<Box<dyn NumberAnimation>, AnimationError> {
        let shape_manager = ctx.require_shape_manager("PhysicsAnimation")?;
        let world = ctx
            .world
            .clone()
            .ok_or(AnimationError::MissingPhysicsWorld)?;
        Ok(Box::new(PhysicsAnimation::new(
            world,
            params,
            shape_manager,
            ctx.page_size,
            ctx.flags,
        )))
    }
}

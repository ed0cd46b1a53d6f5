//! Single-value adapter: one attribute of the layer, reached through an
//! accessor triple, with optional conversion on the way in and out.

use std::fmt;

use slidefx_api_core::{
    AttributeKind, AttributeLayerRef, Color, ShapeAttributeLayer, ShapeManagerRef, ShapeRef,
};
use slidefx_physics_core::WorldHandle;

use crate::animation::{
    Animation, BoolAnimation, ColorAnimation, EnumAnimation, NumberAnimation, StringAnimation,
};
use crate::binding::{running_world, ShapeBinding};
use crate::error::AnimationError;
use crate::flags::AnimationFlags;
use crate::modifier::{Identity, Modifier, Scaler};

/// `is_valid` / `get` / `set` for one attribute of a [`ShapeAttributeLayer`].
pub struct Accessor<T> {
    pub is_valid: fn(&dyn ShapeAttributeLayer) -> bool,
    pub get: fn(&dyn ShapeAttributeLayer) -> T,
    pub set: fn(&mut dyn ShapeAttributeLayer, T),
}

impl<T> Accessor<T> {
    pub const fn new(
        is_valid: fn(&dyn ShapeAttributeLayer) -> bool,
        get: fn(&dyn ShapeAttributeLayer) -> T,
        set: fn(&mut dyn ShapeAttributeLayer, T),
    ) -> Self {
        Self { is_valid, get, set }
    }
}

impl<T> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Accessor<T> {}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor").finish_non_exhaustive()
    }
}

pub struct GenericAnimation<T, M = Identity> {
    binding: ShapeBinding,
    accessor: Accessor<T>,
    default: T,
    getter: M,
    setter: M,
    kind: AttributeKind,
    world: Option<WorldHandle>,
    first_update: bool,
}

impl<T> GenericAnimation<T, Identity> {
    pub fn new(
        shape_manager: ShapeManagerRef,
        flags: AnimationFlags,
        kind: AttributeKind,
        accessor: Accessor<T>,
        default: T,
    ) -> Self {
        Self {
            binding: ShapeBinding::new(kind.name(), shape_manager, flags),
            accessor,
            default,
            getter: Identity,
            setter: Identity,
            kind,
            world: None,
            first_update: true,
        }
    }

    /// Convert with `getter` when reading the layer and `setter` when writing.
    /// `default` must already be in the adapter's domain.
    pub fn with_modifiers<N>(self, getter: N, setter: N, default: T) -> GenericAnimation<T, N> {
        GenericAnimation {
            binding: self.binding_moved(),
            accessor: self.accessor,
            default,
            getter,
            setter,
            kind: self.kind,
            world: self.world.clone(),
            first_update: true,
        }
    }
}

impl GenericAnimation<f64, Identity> {
    /// Page-relative adapter: the timeline works in `[0, 1]` of `scale`,
    /// the layer in absolute units. The stored default is absolute and gets
    /// normalized here.
    pub fn scaled(self, scale: f64) -> Result<GenericAnimation<f64, Scaler>, AnimationError> {
        if !scale.is_finite() || scale == 0.0 {
            return Err(AnimationError::InvalidReferenceSize {
                what: self.kind.name().to_string(),
            });
        }
        let default = self.default / scale;
        Ok(self.with_modifiers(Scaler::divide(scale), Scaler::multiply(scale), default))
    }
}

impl<T, M> GenericAnimation<T, M> {
    pub fn with_world(mut self, world: Option<WorldHandle>) -> Self {
        self.world = world;
        self
    }

    pub fn kind(&self) -> AttributeKind {
        self.kind
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    fn binding_moved(&self) -> ShapeBinding {
        ShapeBinding::new(
            self.binding.label(),
            self.binding.shape_manager().clone(),
            self.binding.flags(),
        )
    }

    fn bind(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError> {
        self.binding.bind(shape, layer)?;
        self.first_update = true;
        Ok(())
    }

    fn finish(&mut self) {
        let Some(shape) = self.binding.shape().cloned() else {
            return;
        };
        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_animation_end_update(shape.id(), self.kind);
        }
        self.binding.unbind();
    }
}

impl<T: Clone, M: Modifier<T>> GenericAnimation<T, M> {
    fn write(&mut self, value: T) -> bool {
        let Some((shape, layer)) = self.binding.handles_or_warn() else {
            return false;
        };
        let value = self.setter.modify(value);
        (self.accessor.set)(&mut *layer.borrow_mut(), value);

        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_animation_update(
                shape.id(),
                &*layer.borrow(),
                self.kind,
                self.first_update,
            );
        }
        self.first_update = false;

        self.binding.notify_if_changed();
        true
    }

    fn read(&self) -> Result<T, AnimationError> {
        let (_, layer) = self.binding.require_bound()?;
        let guard = layer.borrow();
        if (self.accessor.is_valid)(&*guard) {
            Ok(self.getter.modify((self.accessor.get)(&*guard)))
        } else {
            Ok(self.default.clone())
        }
    }
}

impl<T, M> Animation for GenericAnimation<T, M> {
    fn start(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError> {
        self.bind(shape, layer)
    }

    fn end(&mut self) {
        self.finish();
    }

    fn is_started(&self) -> bool {
        self.binding.is_bound()
    }
}

impl<T, M> Drop for GenericAnimation<T, M> {
    fn drop(&mut self) {
        self.finish();
    }
}

impl<M: Modifier<f64>> NumberAnimation for GenericAnimation<f64, M> {
    fn apply(&mut self, value: f64) -> bool {
        self.write(value)
    }

    fn underlying_value(&self) -> Result<f64, AnimationError> {
        self.read()
    }
}

impl<M: Modifier<i16>> EnumAnimation for GenericAnimation<i16, M> {
    fn apply(&mut self, value: i16) -> bool {
        self.write(value)
    }

    fn underlying_value(&self) -> Result<i16, AnimationError> {
        self.read()
    }
}

impl<M: Modifier<bool>> BoolAnimation for GenericAnimation<bool, M> {
    fn apply(&mut self, value: bool) -> bool {
        self.write(value)
    }

    fn underlying_value(&self) -> Result<bool, AnimationError> {
        self.read()
    }
}

impl<M: Modifier<Color>> ColorAnimation for GenericAnimation<Color, M> {
    fn apply(&mut self, value: &Color) -> bool {
        self.write(*value)
    }

    fn underlying_value(&self) -> Result<Color, AnimationError> {
        self.read()
    }
}

impl<M: Modifier<String>> StringAnimation for GenericAnimation<String, M> {
    fn apply(&mut self, value: &str) -> bool {
        self.write(value.to_string())
    }

    fn underlying_value(&self) -> Result<String, AnimationError> {
        self.read()
    }
}

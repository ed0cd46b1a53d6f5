//! Shape binding shared by all adapters: which shape and layer an adapter
//! is currently attached to, and whether it put the shape into sprite mode.

use std::cell::RefMut;

use log::{debug, warn};
use slidefx_api_core::{AttributeLayerRef, ShapeManagerRef, ShapeRef};
use slidefx_physics_core::{PhysicsWorld, WorldHandle};

use crate::error::AnimationError;
use crate::flags::AnimationFlags;

struct Bound {
    shape: ShapeRef,
    layer: AttributeLayerRef,
    sprite: bool,
}

pub(crate) struct ShapeBinding {
    label: &'static str,
    shape_manager: ShapeManagerRef,
    flags: AnimationFlags,
    bound: Option<Bound>,
}

impl ShapeBinding {
    pub(crate) fn new(
        label: &'static str,
        shape_manager: ShapeManagerRef,
        flags: AnimationFlags,
    ) -> Self {
        Self {
            label,
            shape_manager,
            flags,
            bound: None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        self.label
    }

    pub(crate) fn shape_manager(&self) -> &ShapeManagerRef {
        &self.shape_manager
    }

    pub(crate) fn flags(&self) -> AnimationFlags {
        self.flags
    }

    /// Attach and enter sprite mode unless `NO_SPRITE` is set.
    pub(crate) fn bind(
        &mut self,
        shape: ShapeRef,
        layer: AttributeLayerRef,
    ) -> Result<(), AnimationError> {
        if self.bound.is_some() {
            warn!("{}: start() called on a started animation", self.label);
            return Err(AnimationError::AlreadyStarted {
                animation: self.label,
            });
        }
        let sprite = !self.flags.contains(AnimationFlags::NO_SPRITE);
        if sprite {
            self.shape_manager.enter_animation_mode(&shape);
        }
        debug!("{}: start on shape {:?}", self.label, shape.id());
        self.bound = Some(Bound {
            shape,
            layer,
            sprite,
        });
        Ok(())
    }

    #[inline]
    pub(crate) fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub(crate) fn shape(&self) -> Option<&ShapeRef> {
        self.bound.as_ref().map(|b| &b.shape)
    }

    /// Cloned handles, so callers can borrow the layer without holding `self`.
    pub(crate) fn handles(&self) -> Option<(ShapeRef, AttributeLayerRef)> {
        self.bound
            .as_ref()
            .map(|b| (b.shape.clone(), b.layer.clone()))
    }

    pub(crate) fn handles_or_warn(&self) -> Option<(ShapeRef, AttributeLayerRef)> {
        let handles = self.handles();
        if handles.is_none() {
            warn!("{}: value applied before start()", self.label);
        }
        handles
    }

    pub(crate) fn require_bound(&self) -> Result<(ShapeRef, AttributeLayerRef), AnimationError> {
        self.handles().ok_or(AnimationError::NotStarted {
            animation: self.label,
        })
    }

    /// Repaint only when the shape reports a visible change.
    pub(crate) fn notify_if_changed(&self) {
        if let Some(bound) = &self.bound {
            if bound.shape.is_content_changed() {
                self.shape_manager.notify_shape_update(&bound.shape);
            }
        }
    }

    /// Detach: leave sprite mode and flush the last value with one final
    /// repaint, so it survives the sprite teardown. Returns the shape that
    /// was bound, `None` when nothing was.
    pub(crate) fn unbind(&mut self) -> Option<ShapeRef> {
        let bound = self.bound.take()?;
        if bound.sprite {
            self.shape_manager.leave_animation_mode(&bound.shape);
        }
        if bound.shape.is_content_changed() {
            self.shape_manager.notify_shape_update(&bound.shape);
        }
        debug!("{}: end on shape {:?}", self.label, bound.shape.id());
        Some(bound.shape)
    }
}

/// The world, mutably borrowed, when a simulation is running on it.
pub(crate) fn running_world(world: Option<&WorldHandle>) -> Option<RefMut<'_, PhysicsWorld>> {
    let world = world?.borrow_mut();
    world.is_initialized().then_some(world)
}

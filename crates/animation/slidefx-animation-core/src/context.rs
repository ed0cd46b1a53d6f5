//! Collaborators shared by every adapter built for one effect.

use std::fmt;

use kurbo::Size;
use slidefx_api_core::ShapeManagerRef;
use slidefx_physics_core::WorldHandle;

use crate::error::AnimationError;
use crate::flags::AnimationFlags;

/// Shape manager, page size, physics world and flags, as handed to the
/// factory by the effect-node builder.
#[derive(Clone, Default)]
pub struct AnimationContext {
    pub shape_manager: Option<ShapeManagerRef>,
    pub page_size: Size,
    pub world: Option<WorldHandle>,
    pub flags: AnimationFlags,
}

impl AnimationContext {
    pub fn new(page_size: Size) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn with_shape_manager(mut self, shape_manager: ShapeManagerRef) -> Self {
        self.shape_manager = Some(shape_manager);
        self
    }

    pub fn with_world(mut self, world: WorldHandle) -> Self {
        self.world = Some(world);
        self
    }

    pub fn with_flags(mut self, flags: AnimationFlags) -> Self {
        self.flags = flags;
        self
    }

    pub(crate) fn require_shape_manager(
        &self,
        animation: &'static str,
    ) -> Result<ShapeManagerRef, AnimationError> {
        self.shape_manager
            .clone()
            .ok_or(AnimationError::MissingShapeManager { animation })
    }
}

impl fmt::Debug for AnimationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationContext")
            .field("shape_manager", &self.shape_manager.is_some())
            .field("page_size", &self.page_size)
            .field("world", &self.world.is_some())
            .field("flags", &self.flags)
            .finish()
    }
}

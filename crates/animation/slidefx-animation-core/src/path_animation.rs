//! Moves a shape along a motion path.

use kurbo::{Point, Size, Vec2};
use slidefx_api_core::{AttributeKind, AttributeLayerRef, ShapeManagerRef, ShapeRef};
use slidefx_physics_core::WorldHandle;

use crate::animation::{Animation, NumberAnimation};
use crate::binding::{running_world, ShapeBinding};
use crate::error::AnimationError;
use crate::flags::AnimationFlags;
use crate::motion_path::MotionPath;
use crate::transform::AdditiveMode;

/// Path coordinates are page-relative: `(1, 1)` spans the whole page. The
/// sampled offset is added to the shape center captured at `start`.
pub struct PathAnimation {
    binding: ShapeBinding,
    path: MotionPath,
    page_size: Size,
    additive: AdditiveMode,
    anchor: Point,
    world: Option<WorldHandle>,
    first_update: bool,
}

impl PathAnimation {
    pub fn new(
        path: MotionPath,
        additive: AdditiveMode,
        shape_manager: ShapeManagerRef,
        page_size: Size,
        flags: AnimationFlags,
    ) -> Self {
        Self {
            binding: ShapeBinding::new("PathAnimation", shape_manager, flags),
            path,
            page_size,
            additive,
            anchor: Point::ORIGIN,
            world: None,
            first_update: true,
        }
    }

    pub fn with_world(mut self, world: Option<WorldHandle>) -> Self {
        self.world = world;
        self
    }

    pub fn path(&self) -> &MotionPath {
        &self.path
    }

    /// Shape center the path is laid out from. Meaningful once started.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Absolute position for progress `t`.
    pub fn position_at(&self, t: f64) -> Point {
        let p = self.path.point_at(t);
        self.anchor + Vec2::new(p.x * self.page_size.width, p.y * self.page_size.height)
    }

    fn finish(&mut self) {
        let Some(shape) = self.binding.shape().cloned() else {
            return;
        };
        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_animation_end_update(shape.id(), AttributeKind::PosX);
        }
        self.binding.unbind();
    }
}

impl Animation for PathAnimation {
    fn start(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError> {
        // sum mode continues from wherever earlier effects left the shape
        let anchor = match self.additive {
            AdditiveMode::Sum => shape.bounds().center(),
            _ => shape.dom_bounds().center(),
        };
        self.binding.bind(shape, layer)?;
        self.anchor = anchor;
        self.first_update = true;
        Ok(())
    }

    fn end(&mut self) {
        self.finish();
    }

    fn is_started(&self) -> bool {
        self.binding.is_bound()
    }
}

impl Drop for PathAnimation {
    fn drop(&mut self) {
        self.finish();
    }
}

impl NumberAnimation for PathAnimation {
    fn apply(&mut self, value: f64) -> bool {
        let Some((shape, layer)) = self.binding.handles_or_warn() else {
            return false;
        };
        let position = self.position_at(value);
        layer.borrow_mut().set_position(position);

        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_path_animation_update(shape.id(), &*layer.borrow(), self.first_update);
        }
        self.first_update = false;

        self.binding.notify_if_changed();
        true
    }

    /// Always zero: the path itself carries the motion, there is no
    /// meaningful baseline to report.
    fn underlying_value(&self) -> Result<f64, AnimationError> {
        self.binding.require_bound()?;
        Ok(0.0)
    }
}

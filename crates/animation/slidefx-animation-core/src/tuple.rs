//! Two-component adapter for size and position.

use kurbo::{Size, Vec2};
use slidefx_api_core::{
    AttributeKind, AttributeLayerRef, ShapeAttributeLayer, ShapeManagerRef, ShapeRef,
};
use slidefx_physics_core::WorldHandle;

use crate::animation::{Animation, PairAnimation};
use crate::binding::{running_world, ShapeBinding};
use crate::error::AnimationError;
use crate::flags::AnimationFlags;
use crate::transform::TransformType;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Axes {
    Size,
    Position,
}

impl Axes {
    fn valid(self, layer: &dyn ShapeAttributeLayer) -> (bool, bool) {
        match self {
            Axes::Size => (layer.is_width_valid(), layer.is_height_valid()),
            Axes::Position => (layer.is_pos_x_valid(), layer.is_pos_y_valid()),
        }
    }

    fn get(self, layer: &dyn ShapeAttributeLayer) -> Vec2 {
        match self {
            Axes::Size => layer.size().to_vec2(),
            Axes::Position => layer.position().to_vec2(),
        }
    }

    fn set(self, layer: &mut dyn ShapeAttributeLayer, value: Vec2) {
        match self {
            Axes::Size => layer.set_size(value.to_size()),
            Axes::Position => layer.set_position(value.to_point()),
        }
    }

    fn kind(self) -> AttributeKind {
        match self {
            Axes::Size => AttributeKind::Width,
            Axes::Position => AttributeKind::PosX,
        }
    }
}

/// Scales a normalized pair by a reference size, component-wise.
///
/// SCALE works on width and height relative to the shape's document size;
/// TRANSLATE on the center position relative to the page.
pub struct TupleAnimation {
    binding: ShapeBinding,
    axes: Axes,
    default: Vec2,
    reference: Vec2,
    world: Option<WorldHandle>,
    first_update: bool,
}

impl TupleAnimation {
    pub fn new(
        transform: TransformType,
        shape: &ShapeRef,
        shape_manager: ShapeManagerRef,
        page_size: Size,
        flags: AnimationFlags,
    ) -> Result<Self, AnimationError> {
        let bounds = shape.bounds();
        let (axes, default, reference) = match transform {
            // current size as baseline, document size as unit
            TransformType::Scale => (
                Axes::Size,
                bounds.size().to_vec2(),
                shape.dom_bounds().size().to_vec2(),
            ),
            TransformType::Translate => (
                Axes::Position,
                bounds.center().to_vec2(),
                page_size.to_vec2(),
            ),
            other => return Err(AnimationError::UnsupportedTransform(other)),
        };
        let usable = |v: f64| v.is_finite() && v != 0.0;
        if !usable(reference.x) || !usable(reference.y) {
            return Err(AnimationError::InvalidReferenceSize {
                what: format!("{transform:?}"),
            });
        }
        let label = match axes {
            Axes::Size => "TupleAnimation(scale)",
            Axes::Position => "TupleAnimation(translate)",
        };
        Ok(Self {
            binding: ShapeBinding::new(label, shape_manager, flags),
            axes,
            default,
            reference,
            world: None,
            first_update: true,
        })
    }

    pub fn with_world(mut self, world: Option<WorldHandle>) -> Self {
        self.world = world;
        self
    }

    pub fn reference_size(&self) -> Size {
        self.reference.to_size()
    }

    fn finish(&mut self) {
        let Some(shape) = self.binding.shape().cloned() else {
            return;
        };
        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_animation_end_update(shape.id(), self.axes.kind());
        }
        self.binding.unbind();
    }
}

impl Animation for TupleAnimation {
    fn start(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError> {
        self.binding.bind(shape, layer)?;
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

impl Drop for TupleAnimation {
    fn drop(&mut self) {
        self.finish();
    }
}

impl PairAnimation for TupleAnimation {
    fn apply(&mut self, value: &Vec2) -> bool {
        let Some((shape, layer)) = self.binding.handles_or_warn() else {
            return false;
        };
        let absolute = Vec2::new(value.x * self.reference.x, value.y * self.reference.y);
        self.axes.set(&mut *layer.borrow_mut(), absolute);

        if let Some(mut world) = running_world(self.world.as_ref()) {
            world.queue_shape_animation_update(
                shape.id(),
                &*layer.borrow(),
                self.axes.kind(),
                self.first_update,
            );
        }
        self.first_update = false;

        self.binding.notify_if_changed();
        true
    }

    fn underlying_value(&self) -> Result<Vec2, AnimationError> {
        let (_, layer) = self.binding.require_bound()?;
        let guard = layer.borrow();
        let (x_valid, y_valid) = self.axes.valid(&*guard);
        let current = self.axes.get(&*guard);
        let x = if x_valid { current.x } else { self.default.x };
        let y = if y_valid { current.y } else { self.default.y };
        Ok(Vec2::new(x / self.reference.x, y / self.reference.y))
    }
}

//! Physics-driven motion: the shape becomes a dynamic body in the page's
//! shared world and follows whatever the simulation does to it.

use kurbo::{Size, Vec2};
use log::warn;
use serde::{Deserialize, Serialize};
use slidefx_api_core::{AttributeLayerRef, ShapeAttributeLayer, ShapeManagerRef, ShapeRef};
use slidefx_physics_core::{BodyHandle, StepperToken, WorldHandle};

use crate::animation::{Animation, NumberAnimation};
use crate::binding::ShapeBinding;
use crate::error::AnimationError;
use crate::flags::AnimationFlags;

/// Body parameters of one physics effect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    /// Effect duration in seconds; progress `1.0` maps to this much
    /// simulated time.
    pub duration: f64,
    /// Initial velocity, page units per second.
    pub start_velocity: Vec2,
    pub density: f64,
    pub bounciness: f64,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            duration: 1.0,
            start_velocity: Vec2::ZERO,
            density: 1.0,
            bounciness: 0.1,
        }
    }
}

fn layer_rotation(layer: &dyn ShapeAttributeLayer) -> Option<f64> {
    layer
        .is_rotation_angle_valid()
        .then(|| layer.rotation_angle())
}

pub struct PhysicsAnimation {
    binding: ShapeBinding,
    world: WorldHandle,
    page_size: Size,
    params: PhysicsParams,
    stepper: Option<StepperToken>,
    body: Option<BodyHandle>,
    /// Simulated time consumed so far.
    elapsed: f64,
}

impl PhysicsAnimation {
    pub fn new(
        world: WorldHandle,
        params: PhysicsParams,
        shape_manager: ShapeManagerRef,
        page_size: Size,
        flags: AnimationFlags,
    ) -> Self {
        Self {
            binding: ShapeBinding::new("PhysicsAnimation", shape_manager, flags),
            world,
            page_size,
            params,
            stepper: None,
            body: None,
            elapsed: 0.0,
        }
    }

    pub fn params(&self) -> &PhysicsParams {
        &self.params
    }

    /// True while this adapter advances world time.
    pub fn is_stepper(&self) -> bool {
        self.stepper.is_some()
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn body(&self) -> Option<&BodyHandle> {
        self.body.as_ref()
    }

    fn finish(&mut self) {
        let Some(shape) = self.binding.shape().cloned() else {
            return;
        };
        if let Some(token) = self.stepper.take() {
            self.world.borrow_mut().release_stepper(token);
        }
        self.binding.unbind();
        self.world
            .borrow_mut()
            .alert_physics_animation_end(shape.id());
        self.body = None;
    }
}

impl Animation for PhysicsAnimation {
    fn start(&mut self, shape: ShapeRef, layer: AttributeLayerRef) -> Result<(), AnimationError> {
        let rotation = layer_rotation(&*layer.borrow());
        self.binding.bind(shape.clone(), layer)?;
        self.elapsed = 0.0;

        let mut world = self.world.borrow_mut();
        if self.stepper.is_none() {
            self.stepper = world.claim_stepper();
        }
        world.alert_physics_animation_start(self.page_size, self.binding.shape_manager());
        self.body = world.make_shape_dynamic(
            &shape,
            self.params.start_velocity,
            self.params.density,
            self.params.bounciness,
        );
        match (&self.body, rotation) {
            // keep whatever rotation earlier effects left on the shape
            (Some(body), Some(degrees)) => body.borrow_mut().set_angle(degrees),
            (Some(_), None) => {}
            (None, _) => warn!("PhysicsAnimation: no body for shape {:?}", shape.id()),
        }
        Ok(())
    }

    fn end(&mut self) {
        self.finish();
    }

    fn is_started(&self) -> bool {
        self.binding.is_bound()
    }
}

impl Drop for PhysicsAnimation {
    fn drop(&mut self) {
        self.finish();
    }
}

impl NumberAnimation for PhysicsAnimation {
    fn apply(&mut self, value: f64) -> bool {
        let Some((_, layer)) = self.binding.handles_or_warn() else {
            return false;
        };
        let target = self.params.duration * value;
        {
            let mut world = self.world.borrow_mut();
            if self.stepper.is_none() {
                if let Some(token) = world.claim_stepper() {
                    // taking over mid-effect: time before now was already
                    // simulated by the previous stepper
                    self.stepper = Some(token);
                    self.elapsed = target;
                }
            }
            if self.stepper.is_some() {
                self.elapsed += world.step_amount(target - self.elapsed);
            }
        }

        if let Some(body) = &self.body {
            let body = body.borrow();
            let mut layer = layer.borrow_mut();
            layer.set_position(body.position());
            layer.set_rotation_angle(body.angle());
        }

        self.binding.notify_if_changed();
        true
    }

    fn underlying_value(&self) -> Result<f64, AnimationError> {
        self.binding.require_bound()?;
        Ok(0.0)
    }
}

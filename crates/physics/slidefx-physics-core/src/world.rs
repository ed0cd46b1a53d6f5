//! The shared physics world.
//!
//! One world exists per page and is shared by every adapter on it through a
//! [`WorldHandle`]. The simulation itself is created lazily when the first
//! physics effect starts and torn down when the last one ends; in between,
//! non-physics effects feed their attribute writes in through the update
//! queue.

use std::cell::RefCell;
use std::rc::Rc;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size, Vec2};
use log::{debug, warn};
use slidefx_api_core::{AttributeKind, ShapeAttributeLayer, ShapeId, ShapeManagerRef, ShapeRef};

use crate::body::{Body, BodyHandle};
use crate::collision::resolve_contact;
use crate::config::PhysicsConfig;
use crate::stepper::StepperToken;
use crate::update::{BodyUpdate, UpdateQueue};

pub type WorldHandle = Rc<RefCell<PhysicsWorld>>;

#[derive(Debug)]
struct Simulation {
    page_size: Size,
    /// World units per page unit.
    scale: f64,
    bodies: HashMap<ShapeId, BodyHandle>,
    frame: Vec<Body>,
    shapes_initialized: bool,
}

impl Simulation {
    fn new(cfg: &PhysicsConfig, page_size: Size) -> Self {
        let scale = if page_size.width > 0.0 {
            cfg.world_units_per_page_width / page_size.width
        } else {
            1.0
        };
        let mut sim = Self {
            page_size,
            scale,
            bodies: HashMap::new(),
            frame: Vec::with_capacity(4),
            shapes_initialized: false,
        };
        sim.build_frame(cfg);
        sim
    }

    /// Four walls just outside the page.
    fn build_frame(&mut self, cfg: &PhysicsConfig) {
        let w = self.page_size.width * self.scale;
        let h = self.page_size.height * self.scale;
        let t = cfg.frame_thickness;
        let walls = [
            Rect::new(-t, -t, w + t, 0.0),
            Rect::new(-t, h, w + t, h + t),
            Rect::new(-t, 0.0, 0.0, h),
            Rect::new(w, 0.0, w + t, h),
        ];
        self.frame = walls
            .into_iter()
            .map(|r| Body::wall(r, self.scale, cfg.frame_bounciness))
            .collect();
    }

    fn body_for(&mut self, shape: &ShapeRef, restitution: f64) -> BodyHandle {
        let scale = self.scale;
        self.bodies
            .entry(shape.id())
            .or_insert_with(|| {
                Rc::new(RefCell::new(Body::for_shape(
                    shape.id(),
                    shape.bounds(),
                    scale,
                    restitution,
                )))
            })
            .clone()
    }

    fn step(&mut self, dt: f64, gravity: Vec2) {
        let mut handles: Vec<(ShapeId, BodyHandle)> = self
            .bodies
            .iter()
            .map(|(id, body)| (*id, body.clone()))
            .collect();
        // deterministic contact order
        handles.sort_by_key(|(id, _)| *id);

        for (_, body) in &handles {
            body.borrow_mut().integrate(dt, gravity);
        }

        for (i, (_, a)) in handles.iter().enumerate() {
            if !a.borrow().is_dynamic() {
                continue;
            }
            for (_, b) in handles.iter().skip(i + 1) {
                resolve_contact(&mut a.borrow_mut(), &mut b.borrow_mut());
            }
            for (_, b) in handles.iter().take(i) {
                // earlier dynamic bodies already handled this pair
                if !b.borrow().is_dynamic() {
                    resolve_contact(&mut a.borrow_mut(), &mut b.borrow_mut());
                }
            }
            for wall in &mut self.frame {
                resolve_contact(&mut a.borrow_mut(), wall);
            }
        }
    }

    fn apply_update(&mut self, update: BodyUpdate, passed_time: f64) {
        let Some(body) = self.bodies.get(&update.shape()) else {
            debug!("physics: dropping update for unknown shape {:?}", update.shape());
            return;
        };
        let mut body = body.borrow_mut();
        match update {
            BodyUpdate::Teleport { position, .. } => body.set_position(position),
            BodyUpdate::DynamicPosition { position, .. } => {
                if passed_time > 0.0 {
                    let velocity = (position - body.position()) / passed_time;
                    body.set_linear_velocity(velocity);
                } else {
                    body.set_position(position);
                }
            }
            BodyUpdate::LinearVelocity { velocity, .. } => body.set_linear_velocity(velocity),
            BodyUpdate::Angle { degrees, .. } => body.set_angle(degrees),
            BodyUpdate::DynamicRotation { degrees, .. } => {
                if passed_time > 0.0 {
                    let rate = (degrees - body.angle()) / passed_time;
                    body.set_angular_velocity(rate);
                } else {
                    body.set_angle(degrees);
                }
            }
            BodyUpdate::AngularVelocity {
                degrees_per_second, ..
            } => body.set_angular_velocity(degrees_per_second),
            BodyUpdate::Collision { enabled, .. } => body.set_collision(enabled),
        }
    }
}

/// Shared rigid-body world for one page.
#[derive(Debug)]
pub struct PhysicsWorld {
    cfg: PhysicsConfig,
    sim: Option<Simulation>,
    stepper: Option<StepperToken>,
    active_effects: usize,
    queue: UpdateQueue,
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new(PhysicsConfig::default())
    }
}

impl PhysicsWorld {
    pub fn new(cfg: PhysicsConfig) -> Self {
        Self {
            cfg,
            sim: None,
            stepper: Some(StepperToken::mint()),
            active_effects: 0,
            queue: UpdateQueue::new(),
        }
    }

    /// Convenience for the usual `Rc<RefCell<_>>` sharing.
    pub fn shared(cfg: PhysicsConfig) -> WorldHandle {
        Rc::new(RefCell::new(Self::new(cfg)))
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.cfg
    }

    /// True while at least one physics effect keeps a simulation alive.
    pub fn is_initialized(&self) -> bool {
        self.sim.is_some()
    }

    pub fn shapes_initialized(&self) -> bool {
        self.sim.as_ref().is_some_and(|s| s.shapes_initialized)
    }

    pub fn active_physics_effects(&self) -> usize {
        self.active_effects
    }

    /// True while some adapter holds the stepper token.
    pub fn has_world_stepper(&self) -> bool {
        self.stepper.is_none()
    }

    /// Take the stepper token if nobody holds it.
    pub fn claim_stepper(&mut self) -> Option<StepperToken> {
        self.stepper.take()
    }

    pub fn release_stepper(&mut self, token: StepperToken) {
        if self.stepper.is_some() {
            warn!("physics: stepper token released twice");
        }
        self.stepper = Some(token);
    }

    pub fn body(&self, shape: ShapeId) -> Option<BodyHandle> {
        self.sim.as_ref()?.bodies.get(&shape).cloned()
    }

    pub fn body_count(&self) -> usize {
        self.sim.as_ref().map_or(0, |s| s.bodies.len())
    }

    pub fn pending_updates(&self) -> usize {
        self.queue.len()
    }

    fn initiate_world(&mut self, page_size: Size) {
        debug!(
            "physics: creating world for page {}x{}",
            page_size.width, page_size.height
        );
        self.sim = Some(Simulation::new(&self.cfg, page_size));
    }

    /// Register every visible shape on the page as an immovable body.
    pub fn initiate_all_shapes_as_static_bodies(&mut self, shape_manager: &ShapeManagerRef) {
        let restitution = self.cfg.shape_bounciness;
        let Some(sim) = self.sim.as_mut() else {
            return;
        };
        for shape in shape_manager.shapes() {
            if shape.is_visible() {
                sim.body_for(&shape, restitution);
            }
        }
        sim.shapes_initialized = true;
    }

    /// A physics effect is starting on this page.
    pub fn alert_physics_animation_start(
        &mut self,
        page_size: Size,
        shape_manager: &ShapeManagerRef,
    ) {
        if self.sim.is_none() {
            self.initiate_world(page_size);
        }
        if !self.shapes_initialized() {
            self.initiate_all_shapes_as_static_bodies(shape_manager);
        }
        self.active_effects += 1;
    }

    /// A physics effect ended. The last one to end tears the simulation down;
    /// body handles still held elsewhere stay valid but are detached.
    pub fn alert_physics_animation_end(&mut self, shape: ShapeId) {
        if let Some(body) = self.body(shape) {
            body.borrow_mut().make_static();
        }
        self.active_effects = self.active_effects.saturating_sub(1);
        if self.active_effects == 0 && self.sim.is_some() {
            debug!("physics: last physics effect ended, destroying world");
            self.sim = None;
            self.queue.clear();
        }
    }

    /// Turn the shape's body into a simulated one. `None` when no simulation
    /// is running.
    pub fn make_shape_dynamic(
        &mut self,
        shape: &ShapeRef,
        start_velocity: Vec2,
        density: f64,
        bounciness: f64,
    ) -> Option<BodyHandle> {
        let restitution = self.cfg.shape_bounciness;
        let sim = self.sim.as_mut()?;
        let handle = sim.body_for(shape, restitution);
        {
            let mut body = handle.borrow_mut();
            body.make_dynamic();
            body.set_linear_velocity(start_velocity);
            body.set_density_and_restitution(density, bounciness);
        }
        Some(handle)
    }

    /// Advance by as many whole steps as fit in `passed_time`; returns the
    /// time actually simulated so callers can carry the remainder.
    pub fn step_amount(&mut self, passed_time: f64) -> f64 {
        let Some(sim) = self.sim.as_mut() else {
            return 0.0;
        };
        let time_step = self.cfg.time_step;
        if time_step <= 0.0 || !passed_time.is_finite() || passed_time <= 0.0 {
            return 0.0;
        }
        let steps = (passed_time / time_step).round() as u32;
        let stepped = time_step * f64::from(steps);

        for update in self.queue.drain_due() {
            sim.apply_update(update, stepped);
        }
        for _ in 0..steps {
            sim.step(time_step, self.cfg.gravity);
        }
        stepped
    }

    /// Layer position, with axes the layer has not set taken from the body.
    fn layer_position(&self, shape: ShapeId, layer: &dyn ShapeAttributeLayer) -> Point {
        let body = self.body(shape);
        let fallback = body
            .as_ref()
            .map_or_else(|| layer.position(), |b| b.borrow().position());
        Point::new(
            if layer.is_pos_x_valid() {
                layer.pos_x()
            } else {
                fallback.x
            },
            if layer.is_pos_y_valid() {
                layer.pos_y()
            } else {
                fallback.y
            },
        )
    }

    fn queue_position(&mut self, shape: ShapeId, position: Point, first_update: bool) {
        let update = if first_update {
            BodyUpdate::Teleport { shape, position }
        } else {
            BodyUpdate::DynamicPosition { shape, position }
        };
        self.queue.push(update);
    }

    /// Mirror an attribute write of a non-physics effect into the world.
    pub fn queue_shape_animation_update(
        &mut self,
        shape: ShapeId,
        layer: &dyn ShapeAttributeLayer,
        kind: AttributeKind,
        first_update: bool,
    ) {
        if !self.is_initialized() {
            return;
        }
        match kind {
            AttributeKind::PosX | AttributeKind::PosY => {
                let position = self.layer_position(shape, layer);
                self.queue_position(shape, position, first_update);
            }
            AttributeKind::Rotate => {
                let degrees = layer.rotation_angle();
                self.queue.push(if first_update {
                    BodyUpdate::Angle { shape, degrees }
                } else {
                    BodyUpdate::DynamicRotation { shape, degrees }
                });
            }
            AttributeKind::Visibility => self.queue.push(BodyUpdate::Collision {
                shape,
                enabled: layer.visibility(),
            }),
            _ => {}
        }
    }

    pub fn queue_shape_path_animation_update(
        &mut self,
        shape: ShapeId,
        layer: &dyn ShapeAttributeLayer,
        first_update: bool,
    ) {
        if !self.is_initialized() {
            return;
        }
        let position = self.layer_position(shape, layer);
        self.queue_position(shape, position, first_update);
    }

    /// Stop the motion a finished effect imparted on the body.
    pub fn queue_shape_animation_end_update(&mut self, shape: ShapeId, kind: AttributeKind) {
        if !self.is_initialized() {
            return;
        }
        match kind {
            AttributeKind::PosX | AttributeKind::PosY => {
                self.queue_linear_velocity_update(shape, Vec2::ZERO, 1);
            }
            AttributeKind::Rotate => self.queue.push(BodyUpdate::AngularVelocity {
                shape,
                degrees_per_second: 0.0,
            }),
            _ => {}
        }
    }

    pub fn queue_linear_velocity_update(&mut self, shape: ShapeId, velocity: Vec2, delay_steps: u32) {
        if !self.is_initialized() {
            return;
        }
        self.queue.push(BodyUpdate::LinearVelocity {
            shape,
            velocity,
            delay_steps,
        });
    }
}

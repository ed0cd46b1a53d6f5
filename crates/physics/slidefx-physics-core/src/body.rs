//! Rigid bodies.
//!
//! A body is an axis-aligned box stored in world units. The accessors used
//! by adapters take and return page units and degrees; the conversion
//! factor is fixed when the body is created.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Vec2};
use slidefx_api_core::ShapeId;

pub type BodyHandle = Rc<RefCell<Body>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves (page frame).
    Static,
    /// Infinite mass, moved only by queued velocity or position updates.
    Kinematic,
    /// Moved by gravity, velocity and collisions.
    Dynamic,
}

#[derive(Clone, Debug)]
pub struct Body {
    shape: Option<ShapeId>,
    kind: BodyKind,
    center: Point,
    half_extents: Vec2,
    velocity: Vec2,
    /// Radians.
    angle: f64,
    angular_velocity: f64,
    density: f64,
    restitution: f64,
    collides: bool,
    /// World units per page unit.
    scale: f64,
}

impl Body {
    /// Body covering `bounds` (page units) for the given shape.
    pub fn for_shape(shape: ShapeId, bounds: Rect, scale: f64, restitution: f64) -> Self {
        let bounds = bounds.abs();
        Self {
            shape: Some(shape),
            kind: BodyKind::Kinematic,
            center: scale_point(bounds.center(), scale),
            half_extents: Vec2::new(bounds.width() * scale / 2.0, bounds.height() * scale / 2.0),
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            density: 1.0,
            restitution,
            collides: true,
            scale,
        }
    }

    /// Static wall given directly in world units.
    pub(crate) fn wall(world_rect: Rect, scale: f64, restitution: f64) -> Self {
        Self {
            shape: None,
            kind: BodyKind::Static,
            center: world_rect.center(),
            half_extents: Vec2::new(world_rect.width() / 2.0, world_rect.height() / 2.0),
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            density: 0.0,
            restitution,
            collides: true,
            scale,
        }
    }

    pub fn shape(&self) -> Option<ShapeId> {
        self.shape
    }

    pub fn kind(&self) -> BodyKind {
        self.kind
    }

    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    /// Center in page units.
    pub fn position(&self) -> Point {
        scale_point(self.center, self.scale.recip())
    }

    pub fn set_position(&mut self, page_center: Point) {
        self.center = scale_point(page_center, self.scale);
    }

    /// Rotation in degrees.
    pub fn angle(&self) -> f64 {
        self.angle.to_degrees()
    }

    pub fn set_angle(&mut self, degrees: f64) {
        self.angle = degrees.to_radians();
    }

    /// Velocity in page units per second.
    pub fn linear_velocity(&self) -> Vec2 {
        self.velocity / self.scale
    }

    pub fn set_linear_velocity(&mut self, page_velocity: Vec2) {
        self.velocity = page_velocity * self.scale;
    }

    /// Degrees per second.
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity.to_degrees()
    }

    pub fn set_angular_velocity(&mut self, degrees_per_second: f64) {
        self.angular_velocity = degrees_per_second.to_radians();
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn set_density_and_restitution(&mut self, density: f64, restitution: f64) {
        self.density = density.max(0.0);
        self.restitution = restitution.clamp(0.0, 1.0);
    }

    pub fn collides(&self) -> bool {
        self.collides
    }

    pub fn set_collision(&mut self, collides: bool) {
        self.collides = collides;
    }

    pub fn make_dynamic(&mut self) {
        self.kind = BodyKind::Dynamic;
    }

    /// Hand the body back to the page: it stops and stays where it is.
    pub fn make_static(&mut self) {
        self.kind = BodyKind::Kinematic;
        self.velocity = Vec2::ZERO;
        self.angular_velocity = 0.0;
    }

    /// Inverse mass; zero for anything that is not dynamic.
    pub(crate) fn inverse_mass(&self) -> f64 {
        if self.kind != BodyKind::Dynamic {
            return 0.0;
        }
        let mass = self.density * 4.0 * self.half_extents.x * self.half_extents.y;
        if mass > 0.0 {
            mass.recip()
        } else {
            // massless dynamic bodies still respond to contacts
            1.0
        }
    }

    /// World-space bounding box.
    pub(crate) fn aabb(&self) -> Rect {
        Rect::from_center_size(self.center, (self.half_extents * 2.0).to_size())
    }

    pub(crate) fn integrate(&mut self, dt: f64, gravity: Vec2) {
        match self.kind {
            BodyKind::Static => {}
            BodyKind::Kinematic => {
                self.center += self.velocity * dt;
                self.angle += self.angular_velocity * dt;
            }
            BodyKind::Dynamic => {
                self.velocity += gravity * dt;
                self.center += self.velocity * dt;
                self.angle += self.angular_velocity * dt;
            }
        }
    }

    pub(crate) fn center_mut(&mut self) -> &mut Point {
        &mut self.center
    }

    pub(crate) fn velocity_mut(&mut self) -> &mut Vec2 {
        &mut self.velocity
    }
}

fn scale_point(p: Point, scale: f64) -> Point {
    Point::new(p.x * scale, p.y * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_units_round_trip_through_world_scale() {
        let mut body = Body::for_shape(ShapeId(1), Rect::new(0.0, 0.0, 20.0, 10.0), 0.5, 0.2);
        assert_eq!(body.position(), Point::new(10.0, 5.0));
        assert_eq!(body.aabb(), Rect::new(0.0, 0.0, 10.0, 5.0));

        body.set_linear_velocity(Vec2::new(4.0, 0.0));
        assert_eq!(body.linear_velocity(), Vec2::new(4.0, 0.0));
        body.integrate(1.0, Vec2::new(0.0, 100.0));
        // kinematic bodies ignore gravity
        assert_eq!(body.position(), Point::new(14.0, 5.0));
    }

    #[test]
    fn make_static_stops_motion() {
        let mut body = Body::for_shape(ShapeId(1), Rect::new(0.0, 0.0, 2.0, 2.0), 1.0, 0.0);
        body.make_dynamic();
        body.set_linear_velocity(Vec2::new(1.0, 1.0));
        body.set_angular_velocity(90.0);
        body.make_static();
        assert_eq!(body.kind(), BodyKind::Kinematic);
        assert_eq!(body.linear_velocity(), Vec2::ZERO);
        assert_eq!(body.angular_velocity(), 0.0);
        assert_eq!(body.inverse_mass(), 0.0);
    }
}

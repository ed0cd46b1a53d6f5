//! Body updates queued by effects that run alongside a physics effect.
//!
//! Non-physics animations keep writing their attributes; the world turns
//! those writes into velocities so the simulated bodies follow the shapes
//! and still collide plausibly.

use std::collections::VecDeque;

use kurbo::{Point, Vec2};
use slidefx_api_core::ShapeId;

#[derive(Clone, Debug, PartialEq)]
pub enum BodyUpdate {
    /// Jump to a position without imparting velocity.
    Teleport { shape: ShapeId, position: Point },
    /// Move towards a position over the next processed interval.
    DynamicPosition { shape: ShapeId, position: Point },
    /// Set linear velocity once `delay_steps` queue passes have gone by.
    LinearVelocity {
        shape: ShapeId,
        velocity: Vec2,
        delay_steps: u32,
    },
    /// Jump to an angle in degrees.
    Angle { shape: ShapeId, degrees: f64 },
    /// Rotate towards an angle over the next processed interval.
    DynamicRotation { shape: ShapeId, degrees: f64 },
    AngularVelocity {
        shape: ShapeId,
        degrees_per_second: f64,
    },
    Collision { shape: ShapeId, enabled: bool },
}

impl BodyUpdate {
    pub fn shape(&self) -> ShapeId {
        match self {
            BodyUpdate::Teleport { shape, .. }
            | BodyUpdate::DynamicPosition { shape, .. }
            | BodyUpdate::LinearVelocity { shape, .. }
            | BodyUpdate::Angle { shape, .. }
            | BodyUpdate::DynamicRotation { shape, .. }
            | BodyUpdate::AngularVelocity { shape, .. }
            | BodyUpdate::Collision { shape, .. } => *shape,
        }
    }
}

/// FIFO of pending updates.
#[derive(Debug, Default)]
pub struct UpdateQueue {
    items: VecDeque<BodyUpdate>,
}

impl UpdateQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, update: BodyUpdate) {
        self.items.push_back(update);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Take everything that is due now. Delayed velocity updates count down
    /// and stay queued until their delay runs out.
    pub fn drain_due(&mut self) -> Vec<BodyUpdate> {
        let mut due = Vec::with_capacity(self.items.len());
        let mut deferred = VecDeque::new();
        for update in self.items.drain(..) {
            match update {
                BodyUpdate::LinearVelocity {
                    shape,
                    velocity,
                    delay_steps,
                } if delay_steps > 0 => deferred.push_back(BodyUpdate::LinearVelocity {
                    shape,
                    velocity,
                    delay_steps: delay_steps - 1,
                }),
                other => due.push(other),
            }
        }
        self.items = deferred;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delayed_velocity_waits_for_its_pass() {
        let mut queue = UpdateQueue::new();
        queue.push(BodyUpdate::LinearVelocity {
            shape: ShapeId(1),
            velocity: Vec2::ZERO,
            delay_steps: 1,
        });
        queue.push(BodyUpdate::Collision {
            shape: ShapeId(2),
            enabled: false,
        });

        let first = queue.drain_due();
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].shape(), ShapeId(2));
        assert_eq!(queue.len(), 1);

        let second = queue.drain_due();
        assert_eq!(
            second,
            vec![BodyUpdate::LinearVelocity {
                shape: ShapeId(1),
                velocity: Vec2::ZERO,
                delay_steps: 0,
            }]
        );
        assert!(queue.is_empty());
    }
}

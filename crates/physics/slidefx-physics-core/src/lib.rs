//! slidefx-physics-core: the rigid-body world shared by physics-driven
//! shape animations on a page.
//!
//! Bodies are axis-aligned boxes built from shape bounds. Exactly one
//! effect at a time holds the [`StepperToken`] and advances world time;
//! the others read their own body back every frame.

pub mod body;
mod collision;
pub mod config;
pub mod stepper;
pub mod update;
pub mod world;

pub use body::{Body, BodyHandle, BodyKind};
pub use config::PhysicsConfig;
pub use stepper::StepperToken;
pub use update::{BodyUpdate, UpdateQueue};
pub use world::{PhysicsWorld, WorldHandle};

//! Physics world configuration.

use kurbo::Vec2;
use serde::{Deserialize, Serialize};

/// Tunables for the shared world. World units are page units rescaled so
/// the page is `world_units_per_page_width` wide; y grows downwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Acceleration applied to dynamic bodies, in world units per second².
    pub gravity: Vec2,
    /// Fixed simulation step in seconds.
    pub time_step: f64,
    pub world_units_per_page_width: f64,
    /// Thickness of the static walls around the page, in world units.
    pub frame_thickness: f64,
    /// Restitution of the page walls.
    pub frame_bounciness: f64,
    /// Restitution of shapes that are not driven by a physics effect.
    pub shape_bounciness: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 30.0),
            time_step: 1.0 / 100.0,
            world_units_per_page_width: 100.0,
            frame_thickness: 10.0,
            frame_bounciness: 0.1,
            shape_bounciness: 0.1,
        }
    }
}

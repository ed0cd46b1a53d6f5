//! Core configuration for slidefx-animation-core.

use serde::{Deserialize, Serialize};
use slidefx_physics_core::{PhysicsConfig, PhysicsWorld, WorldHandle};

/// Settings the factory hands to the adapters it builds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arc length accuracy when sampling motion paths, in path units.
    pub path_accuracy: f64,
    pub physics: PhysicsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_accuracy: 1e-6,
            physics: PhysicsConfig::default(),
        }
    }
}

impl Config {
    /// A fresh, uninitialized world for one page.
    pub fn new_world(&self) -> WorldHandle {
        PhysicsWorld::shared(self.physics.clone())
    }
}

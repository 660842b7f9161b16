//! Tunables for the collision, motion and picking core

use serde::{Deserialize, Serialize};

use super::{Config, ConfigError};

/// Physics and picking configuration
///
/// Every field has a default, so a config file only needs to list the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Swept-path samples per world unit travelled
    pub samples_per_unit: f32,
    /// Height of the ground plane entities settle on
    pub ground_height: f32,
    /// Below this `|dot(ray, axis)|` a ray counts as parallel to a slab
    pub parallel_epsilon: f32,
    /// Initial far distance of the slab test
    pub ray_max_distance: f32,
}

impl PhysicsConfig {
    /// Default swept-path sampling density
    pub const DEFAULT_SAMPLES_PER_UNIT: f32 = 10.0;
    /// Default near-parallel threshold for the slab test
    pub const DEFAULT_PARALLEL_EPSILON: f32 = 0.001;
    /// Default far distance for the slab test
    pub const DEFAULT_RAY_MAX_DISTANCE: f32 = 100_000.0;

    /// Check that every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.samples_per_unit.is_finite() && self.samples_per_unit > 0.0) {
            return Err(ConfigError::Invalid {
                field: "samples_per_unit",
                reason: format!("must be a positive number, got {}", self.samples_per_unit),
            });
        }
        if !self.ground_height.is_finite() {
            return Err(ConfigError::Invalid {
                field: "ground_height",
                reason: format!("must be finite, got {}", self.ground_height),
            });
        }
        if !(self.parallel_epsilon.is_finite() && self.parallel_epsilon >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "parallel_epsilon",
                reason: format!("must be zero or positive, got {}", self.parallel_epsilon),
            });
        }
        if !self.ray_max_distance.is_finite() || self.ray_max_distance <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "ray_max_distance",
                reason: format!("must be finite and positive, got {}", self.ray_max_distance),
            });
        }
        Ok(())
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            samples_per_unit: Self::DEFAULT_SAMPLES_PER_UNIT,
            ground_height: 0.0,
            parallel_epsilon: Self::DEFAULT_PARALLEL_EPSILON,
            ray_max_distance: Self::DEFAULT_RAY_MAX_DISTANCE,
        }
    }
}

impl Config for PhysicsConfig {}

//! Point-mass agent used for both the predator and the prey.

use ndarray::{Array1, array};
use serde::{Deserialize, Serialize};

use super::geometric_utils::clamp_to_bounds_mut;

/// A point-mass agent with a fixed speed and collision probe radius.
///
/// Position is mutable, but only through [`Agent::apply_move`]; speed and
/// radius are fixed at construction. An agent is owned exclusively by the
/// environment that created it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Position in arena coordinates.
    pub pos: Array1<f32>,
    /// Advisory per-step displacement bound, consumed by controllers.
    /// The movement op itself does not enforce it.
    pub speed: f32,
    /// Collision probe radius used for obstacle tests.
    pub radius: f32,
}

impl Agent {
    /// Creates an agent at `(x, y)`.
    pub fn new(x: f32, y: f32, speed: f32, radius: f32) -> Self {
        Self {
            pos: array![x, y],
            speed,
            radius,
        }
    }

    /// Candidate position after applying a velocity, before any bounds
    /// clamping or collision test.
    pub fn candidate(&self, vx: f32, vy: f32) -> Array1<f32> {
        array![self.pos[0] + vx, self.pos[1] + vy]
    }

    /// Applies a velocity, clamping each coordinate independently into
    /// `[0, width]` / `[0, height]`.
    ///
    /// Pure and total: oversized velocities are silently clamped at the
    /// boundary, never rejected. Obstacle collision is the environment's
    /// concern and must be checked before calling this.
    pub fn apply_move(&mut self, vx: f32, vy: f32, width: f32, height: f32) {
        self.pos[0] += vx;
        self.pos[1] += vy;
        clamp_to_bounds_mut(&mut self.pos, width, height);
    }
}

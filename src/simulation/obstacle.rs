//! Circular obstacles agents must steer around.

use ndarray::{Array1, array};
use serde::{Deserialize, Serialize};

use super::geometric_utils::euclidean;

/// A circular obstacle, immutable after generation.
///
/// The obstacle set belongs to exactly one environment and is regenerated
/// on every reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Center position.
    pub pos: Array1<f32>,
    /// Obstacle radius.
    pub radius: f32,
}

impl Obstacle {
    /// Creates an obstacle centered at `(x, y)`.
    pub fn new(x: f32, y: f32, radius: f32) -> Self {
        Self {
            pos: array![x, y],
            radius,
        }
    }

    /// Whether a probe circle at `point` overlaps this obstacle.
    pub fn blocks(&self, point: &Array1<f32>, probe_radius: f32) -> bool {
        euclidean(&self.pos, point) < self.radius + probe_radius
    }
}

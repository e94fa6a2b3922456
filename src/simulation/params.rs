use serde::{Deserialize, Serialize};

/// Number of channels in an observation vector.
///
/// Layout: `[dir_x, dir_y, scaled_distance, bias, obstacle_dir_x, obstacle_dir_y]`.
/// Any external controller configuration (e.g. a neuroevolution library's
/// input size) must match this value.
pub const OBSERVATION_LEN: usize = 6;

/// Number of channels in an action vector: `(vx, vy)`.
pub const ACTION_LEN: usize = 2;

/// Divisor applied to the raw opponent distance in observations.
pub const DISTANCE_SCALE: f32 = 150.0;

/// Nominal collision probe radius used for agent/obstacle tests.
pub const PROBE_RADIUS: f32 = 1.0;

/// Maximum rejection-sampling attempts when placing an agent clear of
/// obstacles during reset. Exhaustion is a fatal configuration error.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Environment parameters that control the arena and its inhabitants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvParams {
    /// Arena width.
    pub width: f32,
    /// Arena height.
    pub height: f32,
    /// Predator-prey distance below which the prey counts as captured
    /// (strict less-than).
    pub capture_radius: f32,
    /// Number of circular obstacles regenerated on every reset.
    pub num_obstacles: usize,
    /// Minimum obstacle radius.
    pub min_obstacle_radius: f32,
    /// Maximum obstacle radius.
    pub max_obstacle_radius: f32,
    /// Advisory per-step speed for the predator.
    pub predator_speed: f32,
    /// Advisory per-step speed for the prey.
    pub prey_speed: f32,
}

impl Default for EnvParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            capture_radius: 5.0,
            num_obstacles: 3,
            min_obstacle_radius: 4.0,
            max_obstacle_radius: 12.0,
            predator_speed: 2.0,
            prey_speed: 1.8,
        }
    }
}

impl EnvParams {
    /// Returns an obstacle-free arena with the default dimensions.
    pub fn open_arena() -> Self {
        Self {
            num_obstacles: 0,
            ..Self::default()
        }
    }
}

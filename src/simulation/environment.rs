//! 2D world for the predator and prey: movement, observation encoding,
//! collision-aware transitions, and capture detection.
//!
//! The environment owns exactly one predator, one prey, and an obstacle
//! set, all recreated on every [`Environment::reset`]. All randomness
//! flows through a per-instance seeded RNG so that episodes are
//! reproducible given a fixed seed and deterministic controllers.

use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

use super::agent::Agent;
use super::error::SimError;
use super::geometric_utils::{euclidean, normalize_or_zero};
use super::obstacle::Obstacle;
use super::params::{DISTANCE_SCALE, EnvParams, MAX_PLACEMENT_ATTEMPTS, PROBE_RADIUS};

/// Per-step transition summary returned by [`Environment::step`].
#[derive(Debug, Clone)]
pub struct StepInfo {
    /// Predator-prey distance after the step.
    pub distance: f32,
    /// Whether the distance fell strictly below the capture radius.
    pub captured: bool,
    /// Predator position after the step.
    pub pred_pos: Array1<f32>,
    /// Prey position after the step.
    pub prey_pos: Array1<f32>,
    /// Displacement the predator actually committed this step
    /// (zero when a collision hard-stopped it).
    pub pred_vel: Array1<f32>,
    /// Displacement the prey actually committed this step.
    pub prey_vel: Array1<f32>,
}

/// The pursuit world: one predator, one prey, and an obstacle set inside
/// a bounded rectangle.
///
/// Both agents' positions always satisfy `0 <= x <= width` and
/// `0 <= y <= height` after any step, and immediately after a reset
/// neither agent overlaps an obstacle.
#[derive(Debug, Clone)]
pub struct Environment {
    params: EnvParams,
    rng: StdRng,
    /// The pursuing agent.
    pub predator: Agent,
    /// The fleeing agent.
    pub prey: Agent,
    /// Obstacles regenerated on every reset.
    pub obstacles: Vec<Obstacle>,
}

impl Environment {
    /// Creates an environment with an explicit RNG seed.
    ///
    /// Agents start at opposite corners; call [`Environment::reset`] to
    /// randomize placement and generate obstacles.
    pub fn new(params: EnvParams, seed: u64) -> Self {
        let predator = Agent::new(0.0, 0.0, params.predator_speed, PROBE_RADIUS);
        let prey = Agent::new(params.width, params.height, params.prey_speed, PROBE_RADIUS);
        Self {
            params,
            rng: StdRng::seed_from_u64(seed),
            predator,
            prey,
            obstacles: Vec::new(),
        }
    }

    /// The parameters this environment was built with.
    pub fn params(&self) -> &EnvParams {
        &self.params
    }

    /// Euclidean distance between predator and prey.
    pub fn distance(&self) -> f32 {
        euclidean(&self.predator.pos, &self.prey.pos)
    }

    /// Regenerates obstacles and places both agents clear of them,
    /// returning the initial observation pair.
    ///
    /// Obstacle radii are drawn uniformly from the configured range and
    /// centers from `[radius, bound - radius]` on each axis, so obstacles
    /// never overlap the arena boundary. Agents are placed by rejection
    /// sampling over the full rectangle; if no clear position is found
    /// within [`MAX_PLACEMENT_ATTEMPTS`] draws, the obstacle configuration
    /// is considered pathological and the reset fails.
    pub fn reset(&mut self) -> Result<(Array1<f32>, Array1<f32>), SimError> {
        let max_r = self.params.max_obstacle_radius;
        if self.params.num_obstacles > 0
            && 2.0 * max_r > self.params.width.min(self.params.height)
        {
            return Err(SimError::ObstacleTooLarge {
                radius: max_r,
                width: self.params.width,
                height: self.params.height,
            });
        }

        let obstacles = (0..self.params.num_obstacles)
            .map(|_| {
                let radius = self
                    .rng
                    .random_range(self.params.min_obstacle_radius..=self.params.max_obstacle_radius);
                let x = self.rng.random_range(radius..=self.params.width - radius);
                let y = self.rng.random_range(radius..=self.params.height - radius);
                Obstacle::new(x, y, radius)
            })
            .collect();
        self.obstacles = obstacles;

        let pred_pos = self.sample_clear_position()?;
        let prey_pos = self.sample_clear_position()?;
        self.predator = Agent::new(
            pred_pos[0],
            pred_pos[1],
            self.params.predator_speed,
            PROBE_RADIUS,
        );
        self.prey = Agent::new(prey_pos[0], prey_pos[1], self.params.prey_speed, PROBE_RADIUS);

        trace!(
            obstacles = self.obstacles.len(),
            distance = self.distance(),
            "environment reset"
        );

        Ok(self.observe())
    }

    /// Draws uniform positions until one clears every obstacle by the
    /// probe radius, up to the bounded retry count.
    fn sample_clear_position(&mut self) -> Result<Array1<f32>, SimError> {
        for attempt in 0..MAX_PLACEMENT_ATTEMPTS {
            let pos = array![
                self.rng.random_range(0.0..=self.params.width),
                self.rng.random_range(0.0..=self.params.height),
            ];
            if !self.collides(&pos, PROBE_RADIUS) {
                if attempt > 0 {
                    trace!(attempt, "agent placement needed retries");
                }
                return Ok(pos);
            }
        }
        debug!(
            attempts = MAX_PLACEMENT_ATTEMPTS,
            obstacles = self.obstacles.len(),
            "agent placement exhausted retries"
        );
        Err(SimError::PlacementFailed {
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Whether a probe circle at `point` overlaps any obstacle.
    fn collides(&self, point: &Array1<f32>, probe_radius: f32) -> bool {
        self.obstacles.iter().any(|ob| ob.blocks(point, probe_radius))
    }

    /// Builds the observation pair for the current state.
    ///
    /// Channels: normalized direction to the opponent (mirrored between
    /// species), opponent distance scaled by [`DISTANCE_SCALE`], a constant
    /// bias of 1.0, and the normalized direction to the agent's nearest
    /// obstacle. With no obstacles the obstacle channels are zero; the
    /// vector length never changes. Idempotent between steps.
    pub fn observe(&self) -> (Array1<f32>, Array1<f32>) {
        let rel = &self.prey.pos - &self.predator.pos;
        let dir = normalize_or_zero(&rel);
        let scaled_distance = self.distance() / DISTANCE_SCALE;

        let pred_ob = self.nearest_obstacle_dir(&self.predator);
        let prey_ob = self.nearest_obstacle_dir(&self.prey);

        let pred_obs = array![dir[0], dir[1], scaled_distance, 1.0, pred_ob[0], pred_ob[1]];
        let prey_obs = array![
            -dir[0],
            -dir[1],
            scaled_distance,
            1.0,
            prey_ob[0],
            prey_ob[1]
        ];

        (pred_obs, prey_obs)
    }

    /// Applies both agents' actions and reports the resulting state.
    ///
    /// Each agent is resolved independently: if its candidate position
    /// overlaps any obstacle the agent does not move this step (hard stop,
    /// no sliding); otherwise the move commits with boundary clamping.
    /// Capture uses strict less-than against the capture radius and is,
    /// together with the step budget, the only termination condition.
    pub fn step(
        &mut self,
        pred_action: &Array1<f32>,
        prey_action: &Array1<f32>,
    ) -> ((Array1<f32>, Array1<f32>), StepInfo) {
        debug_assert_eq!(pred_action.len(), 2);
        debug_assert_eq!(prey_action.len(), 2);

        let pred_before = self.predator.pos.clone();
        let prey_before = self.prey.pos.clone();

        let pred_candidate = self.predator.candidate(pred_action[0], pred_action[1]);
        if !self.collides(&pred_candidate, self.predator.radius) {
            self.predator.apply_move(
                pred_action[0],
                pred_action[1],
                self.params.width,
                self.params.height,
            );
        }

        let prey_candidate = self.prey.candidate(prey_action[0], prey_action[1]);
        if !self.collides(&prey_candidate, self.prey.radius) {
            self.prey.apply_move(
                prey_action[0],
                prey_action[1],
                self.params.width,
                self.params.height,
            );
        }

        let distance = self.distance();
        let captured = distance < self.params.capture_radius;

        let info = StepInfo {
            distance,
            captured,
            pred_pos: self.predator.pos.clone(),
            prey_pos: self.prey.pos.clone(),
            pred_vel: &self.predator.pos - &pred_before,
            prey_vel: &self.prey.pos - &prey_before,
        };

        (self.observe(), info)
    }

    /// Places both agents at explicit positions, keeping the current
    /// obstacle set. Supports scripted scenarios and tests; training
    /// episodes use [`Environment::reset`] instead.
    pub fn place_agents(&mut self, predator: (f32, f32), prey: (f32, f32)) {
        self.predator = Agent::new(
            predator.0,
            predator.1,
            self.params.predator_speed,
            PROBE_RADIUS,
        );
        self.prey = Agent::new(prey.0, prey.1, self.params.prey_speed, PROBE_RADIUS);
    }

    /// Normalized direction from an agent to its nearest obstacle center.
    ///
    /// Returns the zero vector when there are no obstacles or the agent
    /// sits exactly on an obstacle center. Used by the observation encoding
    /// and by scripted avoidance behaviors, never by the transition itself.
    pub fn nearest_obstacle_dir(&self, agent: &Agent) -> Array1<f32> {
        match self.nearest_obstacle_to(&agent.pos) {
            Some(ob) => normalize_or_zero(&(&ob.pos - &agent.pos)),
            None => Array1::zeros(2),
        }
    }

    /// Normalized direction from `hunter` toward the obstacle nearest to
    /// `agent`, or the zero vector on degeneracy.
    ///
    /// Lets a scripted prey put cover between itself and the predator by
    /// moving along the predator-to-cover axis.
    pub fn obstacle_hide_direction(&self, agent: &Agent, hunter: &Agent) -> Array1<f32> {
        match self.nearest_obstacle_to(&agent.pos) {
            Some(ob) => normalize_or_zero(&(&ob.pos - &hunter.pos)),
            None => Array1::zeros(2),
        }
    }

    fn nearest_obstacle_to(&self, point: &Array1<f32>) -> Option<&Obstacle> {
        self.obstacles.iter().min_by(|a, b| {
            euclidean(&a.pos, point)
                .total_cmp(&euclidean(&b.pos, point))
        })
    }
}

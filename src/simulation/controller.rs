//! Controllers map observations to velocities.
//!
//! The episode runner only ever sees the [`Controller`] trait, so any
//! scripted, neural, or learned decision procedure can be substituted
//! without the simulation core knowing its representation.

use ndarray::{Array1, array};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::brain::Brain;
use super::error::SimError;
use super::geometric_utils::normalize_or_zero;
use super::params::{ACTION_LEN, OBSERVATION_LEN};

/// A decision procedure: 6-channel observation in, 2-channel velocity out.
///
/// Implementations must return a finite velocity for any finite
/// observation; they must not panic. Stateful controllers (e.g. jittering
/// scripted prey) take `&mut self` so their randomness can be seeded per
/// instance.
pub trait Controller {
    /// Chooses a velocity for the current observation.
    fn act(&mut self, observation: &Array1<f32>) -> Array1<f32>;
}

impl<F> Controller for F
where
    F: FnMut(&Array1<f32>) -> Array1<f32>,
{
    fn act(&mut self, observation: &Array1<f32>) -> Array1<f32> {
        self(observation)
    }
}

/// Wraps a decision network as a controller.
///
/// The raw observation is fed unmodified (the environment already
/// normalizes and scales every channel). Each output channel is clipped
/// into `[-1, 1]` before scaling by the configured speed; network outputs
/// are not guaranteed bounded and must never be trusted to produce a safe
/// velocity magnitude.
#[derive(Debug, Clone)]
pub struct BrainController {
    brain: Brain,
    speed: f32,
}

impl BrainController {
    /// Wraps a network, validating its arity against the observation and
    /// action contracts. A mismatch is a configuration error surfaced at
    /// construction rather than at call time.
    pub fn new(brain: Brain, speed: f32) -> Result<Self, SimError> {
        if brain.input_len() != OBSERVATION_LEN {
            return Err(SimError::ObservationArity {
                expected: OBSERVATION_LEN,
                got: brain.input_len(),
            });
        }
        if brain.output_len() != ACTION_LEN {
            return Err(SimError::ActionArity {
                expected: ACTION_LEN,
                got: brain.output_len(),
            });
        }
        Ok(Self { brain, speed })
    }
}

impl Controller for BrainController {
    fn act(&mut self, observation: &Array1<f32>) -> Array1<f32> {
        let out = self.brain.think(observation);
        array![
            out[0].clamp(-1.0, 1.0) * self.speed,
            out[1].clamp(-1.0, 1.0) * self.speed,
        ]
    }
}

/// Scripted predator: chases the prey while steering away from the
/// nearest obstacle. Deterministic; useful as a fixed opponent in early
/// training stages and as a fitness-function sanity check.
#[derive(Debug, Clone)]
pub struct GreedyPredator {
    /// Velocity magnitude per step.
    pub speed: f32,
    /// Weight of the obstacle-avoidance term.
    pub avoid_weight: f32,
}

impl GreedyPredator {
    /// Creates a greedy predator with the default avoidance weight.
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            avoid_weight: 0.4,
        }
    }
}

impl Controller for GreedyPredator {
    fn act(&mut self, observation: &Array1<f32>) -> Array1<f32> {
        // chase toward the prey, lean away from the nearest obstacle
        let v = array![
            observation[0] - self.avoid_weight * observation[4],
            observation[1] - self.avoid_weight * observation[5],
        ];
        normalize_or_zero(&v) * self.speed
    }
}

/// Scripted prey: flees the predator, avoids obstacles, and adds seeded
/// uniform jitter so it does not run straight into a wall.
#[derive(Debug, Clone)]
pub struct FleeingPrey {
    /// Velocity magnitude per step.
    pub speed: f32,
    /// Weight of the obstacle-avoidance term.
    pub avoid_weight: f32,
    /// Half-width of the uniform jitter added to the flee vector.
    pub jitter: f32,
    rng: StdRng,
}

impl FleeingPrey {
    /// Creates a fleeing prey with its own seeded jitter source, keeping
    /// episodes reproducible.
    pub fn new(speed: f32, seed: u64) -> Self {
        Self {
            speed,
            avoid_weight: 0.8,
            jitter: 0.2,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Controller for FleeingPrey {
    fn act(&mut self, observation: &Array1<f32>) -> Array1<f32> {
        // the prey's opponent channels already point away from the predator
        let v = array![
            observation[0] - self.avoid_weight * observation[4]
                + self.rng.random_range(-self.jitter..=self.jitter),
            observation[1] - self.avoid_weight * observation[5]
                + self.rng.random_range(-self.jitter..=self.jitter),
        ];
        normalize_or_zero(&v) * self.speed
    }
}

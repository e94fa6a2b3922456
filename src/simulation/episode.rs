//! Runs one episode of predator and prey interaction and records the
//! full trace for fitness extraction and visualization.

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::controller::Controller;
use super::environment::Environment;
use super::error::SimError;
use super::params::ACTION_LEN;

/// One step of an episode, recorded in step order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    /// Predator position after the step.
    pub pred_pos: Array1<f32>,
    /// Prey position after the step.
    pub prey_pos: Array1<f32>,
    /// Displacement the predator committed this step.
    pub pred_vel: Array1<f32>,
    /// Displacement the prey committed this step.
    pub prey_vel: Array1<f32>,
    /// Predator-prey distance after the step.
    pub distance: f32,
}

/// Outcome of a completed episode, immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeResult {
    /// Steps executed; equals the horizon unless capture ended the episode
    /// early.
    pub steps: usize,
    /// Whether the predator captured the prey.
    pub captured: bool,
    /// Predator-prey distance when the episode ended.
    pub final_distance: f32,
    /// Full step-by-step trace.
    pub trace: Vec<TraceEntry>,
}

/// Resets the environment and runs one episode.
///
/// The loop is strictly sequential: both controllers act on their current
/// observations, both actions go into one transition, a trace entry is
/// appended, and the episode ends the instant capture is detected or after
/// exactly `horizon` steps. Given a fixed environment seed and
/// deterministic controllers the episode is bit-for-bit reproducible.
pub fn run_episode<P, Q>(
    pred_controller: &mut P,
    prey_controller: &mut Q,
    env: &mut Environment,
    horizon: usize,
) -> Result<EpisodeResult, SimError>
where
    P: Controller + ?Sized,
    Q: Controller + ?Sized,
{
    env.reset()?;
    run_episode_from(pred_controller, prey_controller, env, horizon)
}

/// Runs one episode from the environment's current state, without
/// resetting. Supports scripted scenarios where agents were placed
/// explicitly.
pub fn run_episode_from<P, Q>(
    pred_controller: &mut P,
    prey_controller: &mut Q,
    env: &mut Environment,
    horizon: usize,
) -> Result<EpisodeResult, SimError>
where
    P: Controller + ?Sized,
    Q: Controller + ?Sized,
{
    let mut trace = Vec::with_capacity(horizon);
    let (mut pred_obs, mut prey_obs) = env.observe();
    let mut last_distance = env.distance();

    for t in 0..horizon {
        let pred_action = checked_action(pred_controller.act(&pred_obs))?;
        let prey_action = checked_action(prey_controller.act(&prey_obs))?;

        let (obs, info) = env.step(&pred_action, &prey_action);
        (pred_obs, prey_obs) = obs;
        last_distance = info.distance;

        trace.push(TraceEntry {
            pred_pos: info.pred_pos,
            prey_pos: info.prey_pos,
            pred_vel: info.pred_vel,
            prey_vel: info.prey_vel,
            distance: info.distance,
        });

        if info.captured {
            debug!(steps = t + 1, distance = info.distance, "prey captured");
            return Ok(EpisodeResult {
                steps: t + 1,
                captured: true,
                final_distance: info.distance,
                trace,
            });
        }
    }

    debug!(
        steps = horizon,
        distance = last_distance,
        "prey survived the full horizon"
    );
    Ok(EpisodeResult {
        steps: horizon,
        captured: false,
        final_distance: last_distance,
        trace,
    })
}

/// Validates the controller contract: actions must have exactly
/// [`ACTION_LEN`] channels. Wrong lengths fail fast with a clear error
/// instead of being silently truncated.
fn checked_action(action: Array1<f32>) -> Result<Array1<f32>, SimError> {
    if action.len() == ACTION_LEN {
        Ok(action)
    } else {
        Err(SimError::ActionLength {
            expected: ACTION_LEN,
            got: action.len(),
        })
    }
}

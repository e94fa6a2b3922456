//! Separate reward signals for predator and prey so that evolution has a
//! clear optimization target.
//!
//! These are intentionally lightweight pure functions: a neuroevolution
//! loop calls them thousands of times across a population. Each species
//! has one current ("shaped") formula and the legacy formula it replaced;
//! the variant is selected by configuration and should stay fixed across
//! alternating training stages, because predator and prey train against
//! snapshots of each other and a moving reward compounds across stages.

use serde::{Deserialize, Serialize};

use super::episode::EpisodeResult;
use super::geometric_utils::{norm, normalize_or_zero};
use super::params::EnvParams;

/// Flat reward for a capture.
const CAPTURE_BONUS: f32 = 500.0;
/// Scale of the inverse-time capture bonus; faster captures score strictly
/// higher.
const CAPTURE_SPEED_SCALE: f32 = 30_000.0;
/// Weight of the summed per-step distance reduction.
const CLOSING_WEIGHT: f32 = 2.0;
/// Weight of the mean movement magnitude (anti-freezing).
const MOVE_BONUS_WEIGHT: f32 = 0.5;
/// Weight of the final heading-alignment dot product.
const HEADING_WEIGHT: f32 = 10.0;
/// Weight of the penalty for ending farther away than the episode started.
const FLEE_PENALTY_WEIGHT: f32 = 2.0;
/// Weight of the wall-proximity penalty on the final predator position.
const WALL_PENALTY_WEIGHT: f32 = 20.0;
/// Distance from a wall below which the wall penalty ramps in.
const WALL_MARGIN: f32 = 10.0;

/// Weight of survival steps in the shaped prey formula.
const SURVIVAL_WEIGHT: f32 = 1.0;
/// Weight of the mean predator distance in the shaped prey formula.
const DISTANCE_WEIGHT: f32 = 0.5;
/// Weight of total path length in the shaped prey formula (anti-freezing).
const PATH_WEIGHT: f32 = 0.2;
/// Flat penalty for getting caught.
const CAPTURE_PENALTY: f32 = 500.0;

/// Predator reward formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredatorFitness {
    /// Capture bonus plus inverse final distance. The first formula this
    /// project trained with; kept for comparing runs.
    Legacy,
    /// Capture bonus scaled inversely with time-to-capture, closing-speed
    /// integral, movement and heading bonuses, flee and wall penalties.
    Shaped,
}

/// Prey reward formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreyFitness {
    /// Survival steps plus half the final distance, minus a flat capture
    /// penalty.
    Legacy,
    /// Survival steps, mean predator distance, and path length, minus a
    /// flat capture penalty.
    Shaped,
}

/// Configuration for both evaluators.
///
/// Carries the arena dimensions so the wall penalty can be computed from
/// an episode result alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessParams {
    /// Arena width, for the wall penalty.
    pub width: f32,
    /// Arena height, for the wall penalty.
    pub height: f32,
    /// Selected predator formula.
    pub predator: PredatorFitness,
    /// Selected prey formula.
    pub prey: PreyFitness,
}

impl Default for FitnessParams {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            predator: PredatorFitness::Shaped,
            prey: PreyFitness::Shaped,
        }
    }
}

impl FitnessParams {
    /// Builds fitness parameters matching an environment configuration.
    pub fn for_env(env: &EnvParams) -> Self {
        Self {
            width: env.width,
            height: env.height,
            ..Self::default()
        }
    }
}

/// Scores an episode from the predator's perspective.
pub fn predator_fitness(ep: &EpisodeResult, params: &FitnessParams) -> f32 {
    match params.predator {
        PredatorFitness::Legacy => {
            if ep.captured {
                CAPTURE_BONUS + (300.0 - ep.steps as f32)
            } else {
                1.0 / (1e-6 + ep.final_distance)
            }
        }
        PredatorFitness::Shaped => shaped_predator_fitness(ep, params),
    }
}

fn shaped_predator_fitness(ep: &EpisodeResult, params: &FitnessParams) -> f32 {
    let mut score = 0.0;

    if ep.captured {
        score += CAPTURE_BONUS + CAPTURE_SPEED_SCALE / ep.steps.max(1) as f32;
    }

    // closing speed summed over every step, not merely start minus end:
    // a predator that closes and then drifts apart is scored on both.
    for pair in ep.trace.windows(2) {
        score += CLOSING_WEIGHT * (pair[0].distance - pair[1].distance);
    }

    if !ep.trace.is_empty() {
        let path: f32 = ep.trace.iter().map(|e| norm(&e.pred_vel)).sum();
        score += MOVE_BONUS_WEIGHT * path / ep.trace.len() as f32;
    }

    if let Some(last) = ep.trace.last() {
        let heading = normalize_or_zero(&last.pred_vel);
        let to_prey = normalize_or_zero(&(&last.prey_pos - &last.pred_pos));
        score += HEADING_WEIGHT * (heading[0] * to_prey[0] + heading[1] * to_prey[1]);

        let margin = (last.pred_pos[0])
            .min(params.width - last.pred_pos[0])
            .min(last.pred_pos[1])
            .min(params.height - last.pred_pos[1]);
        score -= WALL_PENALTY_WEIGHT * (1.0 - margin / WALL_MARGIN).max(0.0);
    }

    // discourage net fleeing across the whole episode
    if let (Some(first), Some(last)) = (ep.trace.first(), ep.trace.last()) {
        if last.distance > first.distance {
            score -= FLEE_PENALTY_WEIGHT * (last.distance - first.distance);
        }
    }

    score
}

/// Scores an episode from the prey's perspective.
pub fn prey_fitness(ep: &EpisodeResult, params: &FitnessParams) -> f32 {
    match params.prey {
        PreyFitness::Legacy => {
            let base = ep.steps as f32;
            let dist_bonus = 0.5 * ep.final_distance;
            let capture_penalty = if ep.captured { -CAPTURE_PENALTY } else { 0.0 };
            base + dist_bonus + capture_penalty
        }
        PreyFitness::Shaped => {
            let mut score = SURVIVAL_WEIGHT * ep.steps as f32;

            if ep.trace.is_empty() {
                score += DISTANCE_WEIGHT * ep.final_distance;
            } else {
                let mean_distance: f32 =
                    ep.trace.iter().map(|e| e.distance).sum::<f32>() / ep.trace.len() as f32;
                let path: f32 = ep.trace.iter().map(|e| norm(&e.prey_vel)).sum();
                score += DISTANCE_WEIGHT * mean_distance + PATH_WEIGHT * path;
            }

            if ep.captured {
                score -= CAPTURE_PENALTY;
            }
            score
        }
    }
}

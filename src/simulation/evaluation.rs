//! Population-level fitness evaluation.
//!
//! This is the crate's boundary toward an external neuroevolution loop:
//! the library hands over `(genome_id, genome)` pairs once per generation
//! and the core's only obligation is to run evaluation episodes and set a
//! fitness scalar per genome. Genomes are evaluated in parallel; each
//! episode owns an exclusive environment and trace buffer, so there is no
//! shared mutable state to lock.

use rayon::prelude::*;
use tracing::debug;

use super::controller::Controller;
use super::environment::Environment;
use super::episode::run_episode;
use super::error::SimError;
use super::fitness::{FitnessParams, predator_fitness, prey_fitness};
use super::params::EnvParams;

/// Opaque genome identifier assigned by the external evolution library.
pub type GenomeId = u64;

/// Which species a population is being evaluated as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Genomes control the predator; the opponent is the prey.
    Predator,
    /// Genomes control the prey; the opponent is the predator.
    Prey,
}

/// Implemented by genome types so evaluation can write the score back.
pub trait Evaluated {
    /// Stores the fitness assigned by evaluation.
    fn set_fitness(&mut self, fitness: f32);
}

/// Settings shared by every genome of one evaluation pass.
#[derive(Debug, Clone)]
pub struct EvalSettings {
    /// Environment configuration; a fresh environment is built per episode.
    pub env: EnvParams,
    /// Fitness formula selection.
    pub fitness: FitnessParams,
    /// Episodes run per genome; the mean score is assigned.
    pub episodes_per_genome: usize,
    /// Step budget per episode.
    pub horizon: usize,
    /// Base RNG seed; per-episode seeds derive from it, the genome id, and
    /// the episode index, so a full evaluation pass is reproducible.
    pub base_seed: u64,
}

impl Default for EvalSettings {
    fn default() -> Self {
        let env = EnvParams::default();
        let fitness = FitnessParams::for_env(&env);
        Self {
            env,
            fitness,
            episodes_per_genome: 5,
            horizon: 400,
            base_seed: 0,
        }
    }
}

impl EvalSettings {
    fn episode_seed(&self, id: GenomeId, episode: usize) -> u64 {
        self.base_seed
            .wrapping_add(id.wrapping_mul(0x9E37_79B9_7F4A_7C15))
            .wrapping_add(episode as u64)
    }
}

/// Evaluates a population, assigning each genome the mean fitness over its
/// episodes.
///
/// `make_controller` builds the genome's controller (e.g. a
/// [`super::controller::BrainController`] around reconstituted weights);
/// `make_opponent` builds the fixed opponent for one episode and receives
/// the episode seed so stochastic scripted opponents stay reproducible.
pub fn evaluate_genomes<G, C, O>(
    genomes: &mut [(GenomeId, G)],
    role: Role,
    settings: &EvalSettings,
    make_controller: impl Fn(&G) -> C + Sync,
    make_opponent: impl Fn(u64) -> O + Sync,
) -> Result<(), SimError>
where
    G: Evaluated + Send,
    C: Controller,
    O: Controller,
{
    genomes.par_iter_mut().try_for_each(|(id, genome)| {
        let mut total = 0.0;

        for episode in 0..settings.episodes_per_genome {
            let seed = settings.episode_seed(*id, episode);
            let mut env = Environment::new(settings.env.clone(), seed);
            let mut own = make_controller(genome);
            let mut opponent = make_opponent(seed);

            let score = match role {
                Role::Predator => {
                    let ep = run_episode(&mut own, &mut opponent, &mut env, settings.horizon)?;
                    predator_fitness(&ep, &settings.fitness)
                }
                Role::Prey => {
                    let ep = run_episode(&mut opponent, &mut own, &mut env, settings.horizon)?;
                    prey_fitness(&ep, &settings.fitness)
                }
            };
            total += score;
        }

        let mean = total / settings.episodes_per_genome.max(1) as f32;
        debug!(genome = *id, fitness = mean, "genome evaluated");
        genome.set_fitness(mean);
        Ok(())
    })
}

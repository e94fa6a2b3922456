//! # Pursuit - Predator/Prey Coevolution Substrate
//!
//! A continuous 2D pursuit simulation between a predator and a prey agent,
//! used as the evaluation substrate for evolving neural-network controllers.
//! The crate owns the world model (agents, circular obstacles, bounded arena),
//! the observation-encoding contract that turns raw positions into normalized
//! sensor vectors, the per-step transition function, and the fitness scoring
//! that converts an episode trace into a scalar reward per species.
//!
//! ## Features
//!
//! - Bounded point-mass agents with hard-stop obstacle collisions
//! - Mirror-symmetric 6-channel observation encoding for both species
//! - Seedable per-environment randomness for reproducible episodes
//! - Capture-terminated or fixed-horizon episode traces
//! - Versioned predator and prey fitness formulas
//! - Neural and scripted controllers behind one `Controller` trait
//! - Parallel population evaluation with rayon
//!
//! ## Core Modules
//!
//! - [`simulation::environment`] - World state, reset, observation, transition
//! - [`simulation::episode`] - Episode runner and trace recording
//! - [`simulation::controller`] - Controller trait, neural adapter, scripted agents
//! - [`simulation::fitness`] - Predator and prey fitness evaluators
//! - [`simulation::evaluation`] - Population-level parallel evaluation

/// Core simulation logic and data structures.
pub mod simulation {
    /// Point-mass agent with bounded movement.
    pub mod agent;
    /// Feed-forward decision network (MLP with tanh activation).
    pub mod brain;
    /// Controller trait and adapters for neural and scripted policies.
    pub mod controller;
    /// World state, observation encoding, and the step transition.
    pub mod environment;
    /// Episode loop, trace recording, and episode results.
    pub mod episode;
    /// Error taxonomy for placement and controller-contract failures.
    pub mod error;
    /// Parallel fitness evaluation over genome populations.
    pub mod evaluation;
    /// Fitness formulas mapping episode results to scalar rewards.
    pub mod fitness;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Immutable circular obstacles.
    pub mod obstacle;
    /// Simulation parameters.
    pub mod params;
}

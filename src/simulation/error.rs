//! Error taxonomy for the simulation core.
//!
//! Numeric degeneracy (zero-length vectors) is never an error: it is
//! recovered locally by returning a zero direction. Horizon exhaustion
//! without capture is a normal terminal state, not a failure.

use thiserror::Error;

/// Failures the simulation core can report.
#[derive(Debug, Error)]
pub enum SimError {
    /// Rejection sampling never found an obstacle-free agent position.
    /// This indicates a pathological obstacle configuration and is treated
    /// as a fatal configuration error rather than an infinite loop.
    #[error("failed to place an agent clear of obstacles after {attempts} attempts")]
    PlacementFailed {
        /// Number of placement attempts made before giving up.
        attempts: usize,
    },

    /// The configured obstacle radius cannot fit inside the arena while
    /// keeping the obstacle clear of the boundary.
    #[error("obstacle radius {radius} does not fit a {width}x{height} arena")]
    ObstacleTooLarge {
        /// Offending maximum obstacle radius.
        radius: f32,
        /// Arena width.
        width: f32,
        /// Arena height.
        height: f32,
    },

    /// A controller returned an action vector of the wrong length.
    #[error("controller returned an action of length {got}, expected {expected}")]
    ActionLength {
        /// Required action length.
        expected: usize,
        /// Length the controller actually produced.
        got: usize,
    },

    /// A decision network's input layer does not match the observation
    /// contract.
    #[error("network expects {got} inputs, observations have {expected} channels")]
    ObservationArity {
        /// Observation length produced by the environment.
        expected: usize,
        /// Input size the network was built with.
        got: usize,
    },

    /// A decision network's output layer does not match the action contract.
    #[error("network produces {got} outputs, actions have {expected} channels")]
    ActionArity {
        /// Action length consumed by the environment.
        expected: usize,
        /// Output size the network was built with.
        got: usize,
    },
}

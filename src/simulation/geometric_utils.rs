//! Geometric utility functions for distance calculations and vector
//! normalization.

use ndarray::Array1;

/// Euclidean distance between two points.
pub fn euclidean(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    (dx * dx + dy * dy).sqrt()
}

/// Euclidean length of a vector.
pub fn norm(v: &Array1<f32>) -> f32 {
    (v[0] * v[0] + v[1] * v[1]).sqrt()
}

/// Returns the unit vector in the direction of `v`, or the zero vector
/// when `v` has zero length.
///
/// Every normalization in the simulation goes through this guard so that
/// coincident positions never produce NaNs.
pub fn normalize_or_zero(v: &Array1<f32>) -> Array1<f32> {
    let n = norm(v);
    if n > 0.0 {
        v / n
    } else {
        Array1::zeros(2)
    }
}

/// Clamps a position vector into the arena rectangle `[0, width] x [0, height]`.
///
/// # Arguments
///
/// * `v` - Mutable position vector to clamp
/// * `width` - Width of the arena
/// * `height` - Height of the arena
pub fn clamp_to_bounds_mut(v: &mut Array1<f32>, width: f32, height: f32) {
    v[0] = v[0].clamp(0.0, width);
    v[1] = v[1].clamp(0.0, height);
}

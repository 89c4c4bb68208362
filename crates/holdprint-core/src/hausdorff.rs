//! Modified Hausdorff Distance between normalized point sets.
//!
//! Classic Hausdorff takes the *worst* nearest-neighbor distance, so one
//! stray tap dominates the result. The modified form averages the
//! nearest-neighbor distances in each direction and keeps the larger of the
//! two averages:
//!
//! ```text
//! forward = mean over a in A of min over b in B |a - b|
//! reverse = mean over b in B of min over a in A |a - b|
//! mhd     = max(forward, reverse)
//! ```
//!
//! Taking both directions keeps a strict subset from scoring as a perfect
//! match. Cost is `O(|A| * |B|)`.

use crate::geometry::{euclidean_distance, mean};
use crate::point::Point;

/// Mean distance from each point of `from` to its nearest neighbor in `to`.
///
/// `to` must be non-empty.
fn directed_mean_distance(from: &[Point], to: &[Point]) -> f64 {
    let minima: Vec<f64> = from
        .iter()
        .map(|a| {
            to.iter()
                .map(|b| euclidean_distance(a, b))
                .fold(f64::INFINITY, f64::min)
        })
        .collect();
    mean(&minima)
}

/// Modified Hausdorff Distance between two normalized point sets.
///
/// Returns `f64::INFINITY` when either set is empty; downstream scoring treats
/// that as "no match".
#[must_use]
pub fn set_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return f64::INFINITY;
    }
    let forward = directed_mean_distance(a, b);
    let reverse = directed_mean_distance(b, a);
    forward.max(reverse)
}

/// Converts a distance into a `0..=100` similarity by linear decay.
///
/// `similarity = round(100 * max(0, 1 - distance / max_distance))`.
/// Distances at or beyond `max_distance`, including infinity, score 0.
///
/// `max_distance` is the calibration knob for "unrelated"; see
/// [`crate::search::SearchOptions::max_distance`] for the default. A
/// non-positive `max_distance` only lets an exact match (distance 0) through.
#[must_use]
pub fn similarity_from_distance(distance: f64, max_distance: f64) -> u32 {
    if max_distance <= 0.0 {
        return if distance <= 0.0 { 100 } else { 0 };
    }
    if distance >= max_distance {
        return 0;
    }
    let ratio = (1.0 - distance / max_distance).max(0.0);
    (100.0 * ratio).round() as u32
}

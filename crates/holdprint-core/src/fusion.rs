//! Weighted fusion of the set and order similarity signals.

use serde::{Deserialize, Serialize};

/// Default weight of the set-distance similarity.
pub const DEFAULT_SET_WEIGHT: f64 = 0.6;

/// Default weight of the order-alignment similarity.
pub const DEFAULT_ORDER_WEIGHT: f64 = 0.4;

/// Weights applied by [`combined_score`].
///
/// The set signal is the primary discriminator; the order signal corrects for
/// arrangements the set distance cannot see. Weights are not required to sum
/// to 1 and are not range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight of the set similarity.
    pub set: f64,
    /// Weight of the order similarity.
    pub order: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            set: DEFAULT_SET_WEIGHT,
            order: DEFAULT_ORDER_WEIGHT,
        }
    }
}

impl ScoreWeights {
    /// Creates a weight pair.
    #[must_use]
    pub const fn new(set: f64, order: f64) -> Self {
        Self { set, order }
    }

    /// Sum of both weights.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.set + self.order
    }
}

/// Blends the two similarities: `round(set * set_similarity + order * order_similarity)`.
///
/// With weights summing to 1 the result stays within `0..=100`. Negative
/// blends floor at 0.
#[must_use]
pub fn combined_score(set_similarity: u32, order_similarity: u32, weights: &ScoreWeights) -> u32 {
    let blended =
        weights.set * f64::from(set_similarity) + weights.order * f64::from(order_similarity);
    blended.round().max(0.0) as u32
}

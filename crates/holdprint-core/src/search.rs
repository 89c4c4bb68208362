//! Search and ranking over a frozen route snapshot.
//!
//! Every image of every route is scored against the query:
//!
//! 1. set similarity from the MHD of the normalized sets
//! 2. order similarity from DTW over the raw sets
//! 3. a weighted blend of the two
//!
//! A route takes the score of its best image, so a route photographed from
//! several angles is matched by whichever angle is closest. Routes are then
//! stably sorted by score, descending, and truncated to `top_k`.

use serde::{Deserialize, Serialize};

use crate::dtw::order_similarity;
use crate::fusion::{combined_score, ScoreWeights, DEFAULT_ORDER_WEIGHT, DEFAULT_SET_WEIGHT};
use crate::geometry::normalize;
use crate::hausdorff::{set_distance, similarity_from_distance};
use crate::point::Point;
use crate::route::{LabeledImage, Route};

/// Default number of results returned by a search.
pub const DEFAULT_TOP_K: usize = 10;

/// Default MHD distance beyond which two fingerprints are unrelated.
///
/// Normalized sets have unit RMS radius, so a mean nearest-neighbor gap of a
/// full radius means the layouts share nothing.
pub const DEFAULT_MAX_DISTANCE: f64 = 1.0;

/// Tuning knobs for a search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Set distance at which set similarity reaches 0 (default 1.0).
    pub max_distance: f64,
    /// Weight of the set similarity (default 0.6).
    pub set_weight: f64,
    /// Weight of the order similarity (default 0.4).
    pub order_weight: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_distance: DEFAULT_MAX_DISTANCE,
            set_weight: DEFAULT_SET_WEIGHT,
            order_weight: DEFAULT_ORDER_WEIGHT,
        }
    }
}

impl SearchOptions {
    /// Combiner weights carried by these options.
    #[must_use]
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights::new(self.set_weight, self.order_weight)
    }
}

/// Score components of one query/image comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Similarity from the set distance, `0..=100`.
    pub set_similarity: u32,
    /// Similarity from the order alignment, `0..=100`.
    pub order_similarity: u32,
    /// Weighted blend of the two.
    pub combined: u32,
}

/// Breakdown for a single image of a route.
#[derive(Debug, Clone, Serialize)]
pub struct ImageScore<'a> {
    /// Image that was scored.
    pub image_id: &'a str,
    /// Its score components.
    pub breakdown: ScoreBreakdown,
}

/// A ranked route.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult<'a> {
    /// The matched route.
    pub route: &'a Route,
    /// Best combined score over the route's images, `0..=100`.
    pub score: u32,
    /// Image that produced `score`; `None` for a route without images.
    pub image_id: Option<&'a str>,
    /// Components of `score`; `None` for a route without images.
    pub breakdown: Option<ScoreBreakdown>,
}

/// Scores one stored image against a query.
///
/// `normalized_query` must be `normalize(query)`; it is passed in so a search
/// normalizes the query once.
#[must_use]
pub fn score_image(
    normalized_query: &[Point],
    query: &[Point],
    image: &LabeledImage,
    options: &SearchOptions,
) -> ScoreBreakdown {
    let distance = set_distance(normalized_query, &image.normalized_points);
    let set_similarity = similarity_from_distance(distance, options.max_distance);
    let order_similarity = order_similarity(query, &image.points);
    let combined = combined_score(set_similarity, order_similarity, &options.weights());

    ScoreBreakdown {
        set_similarity,
        order_similarity,
        combined,
    }
}

/// Best-image score for one route. The first image wins ties.
fn best_match<'a>(
    normalized_query: &[Point],
    query: &[Point],
    route: &'a Route,
    options: &SearchOptions,
) -> MatchResult<'a> {
    let mut best: Option<(&'a LabeledImage, ScoreBreakdown)> = None;

    for image in &route.images {
        let breakdown = score_image(normalized_query, query, image, options);
        if best.map_or(true, |(_, current)| breakdown.combined > current.combined) {
            best = Some((image, breakdown));
        }
    }

    tracing::trace!(
        route_id = %route.id,
        images = route.images.len(),
        score = best.map_or(0, |(_, b)| b.combined),
        "route scored"
    );

    match best {
        Some((image, breakdown)) => MatchResult {
            route,
            score: breakdown.combined,
            image_id: Some(image.id.as_str()),
            breakdown: Some(breakdown),
        },
        None => MatchResult {
            route,
            score: 0,
            image_id: None,
            breakdown: None,
        },
    }
}

/// Stable descending sort by score, then truncation.
fn rank(mut results: Vec<MatchResult<'_>>, top_k: usize) -> Vec<MatchResult<'_>> {
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results.truncate(top_k);

    tracing::debug!(
        returned = results.len(),
        top_score = results.first().map_or(0, |r| r.score),
        "route search ranked"
    );
    results
}

/// Ranks `routes` by similarity to `query` and returns the best `top_k`.
///
/// `query` is raw image-relative points. Ties keep input order. Routes
/// without images score 0 and never rank above a route with a positive score.
#[must_use]
pub fn search<'a>(
    query: &[Point],
    routes: &'a [Route],
    top_k: usize,
    options: &SearchOptions,
) -> Vec<MatchResult<'a>> {
    tracing::debug!(
        routes = routes.len(),
        query_points = query.len(),
        top_k,
        "route search started"
    );

    let normalized_query = normalize(query);
    let results = routes
        .iter()
        .map(|route| best_match(&normalized_query, query, route, options))
        .collect();

    rank(results, top_k)
}

/// Same contract and output as [`search`], with routes scored on the rayon
/// pool.
///
/// Per-route scoring only reads the query and the snapshot, so no locking is
/// involved; ranking runs after all routes are scored.
#[cfg(feature = "parallel")]
#[must_use]
pub fn search_parallel<'a>(
    query: &[Point],
    routes: &'a [Route],
    top_k: usize,
    options: &SearchOptions,
) -> Vec<MatchResult<'a>> {
    use rayon::prelude::*;

    tracing::debug!(
        routes = routes.len(),
        query_points = query.len(),
        top_k,
        "parallel route search started"
    );

    let normalized_query = normalize(query);
    let results = routes
        .par_iter()
        .map(|route| best_match(&normalized_query, query, route, options))
        .collect();

    rank(results, top_k)
}

/// Per-image breakdown of how `query` scores against each image of `route`.
#[must_use]
pub fn explain<'a>(query: &[Point], route: &'a Route, options: &SearchOptions) -> Vec<ImageScore<'a>> {
    let normalized_query = normalize(query);
    route
        .images
        .iter()
        .map(|image| ImageScore {
            image_id: image.id.as_str(),
            breakdown: score_image(&normalized_query, query, image, options),
        })
        .collect()
}

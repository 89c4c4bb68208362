//! Geometry primitives and fingerprint normalization.
//!
//! [`normalize`] makes a point set invariant to translation and uniform
//! scaling: the set is moved so its centroid sits at the origin, then divided
//! by its RMS radius. Rotation is left untouched.

use crate::error::{Error, Result};
use crate::point::Point;

/// Euclidean distance between two points.
#[must_use]
#[inline]
pub fn euclidean_distance(a: &Point, b: &Point) -> f64 {
    a.distance(b)
}

/// Arithmetic mean of `values`; `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Arithmetic mean of all coordinates, or `None` for an empty set.
#[must_use]
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(Point::new(sx / n, sy / n))
}

/// Root-mean-square distance of the points from the origin.
///
/// Returns `0.0` for an empty set.
#[must_use]
pub fn rms_radius(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = points.iter().map(|p| p.x * p.x + p.y * p.y).sum();
    (sum_sq / points.len() as f64).sqrt()
}

/// Normalizes a raw point set into fingerprint space.
///
/// - empty input yields an empty set
/// - a single point yields `[(0, 0)]`
/// - otherwise points are centered on their centroid and divided by the RMS
///   radius; coincident points (RMS of 0) stay centered and unscaled
///
/// For any translation `t` and positive scale `s`,
/// `normalize(P) == normalize(s·P + t)` within floating-point tolerance.
#[must_use]
pub fn normalize(points: &[Point]) -> Vec<Point> {
    if points.len() == 1 {
        return vec![Point::ORIGIN];
    }
    match centroid(points) {
        None => Vec::new(),
        Some(center) => {
            let centered: Vec<Point> = points
                .iter()
                .map(|p| p.translated(-center.x, -center.y))
                .collect();

            let rms = rms_radius(&centered);
            if rms == 0.0 {
                return centered;
            }
            centered
                .iter()
                .map(|p| Point::new(p.x / rms, p.y / rms))
                .collect()
        }
    }
}

/// Rejects point sets containing NaN or infinite coordinates.
///
/// The scorers assume finite input and do not call this themselves; it is
/// meant for collaborators accepting points from the outside world.
///
/// # Errors
///
/// Returns [`Error::InvalidPoint`] for the first non-finite point.
pub fn validate_points(points: &[Point]) -> Result<()> {
    match points.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(Error::InvalidPoint {
            index,
            x: points[index].x,
            y: points[index].y,
        }),
        None => Ok(()),
    }
}

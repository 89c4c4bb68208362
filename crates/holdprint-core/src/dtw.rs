//! Order-aware similarity via Dynamic Time Warping.
//!
//! The set distance ignores how holds are arranged relative to each other.
//! This module adds an order-sensitive signal: each point set is collapsed to
//! the sequence of its `x` coordinates read top to bottom, and the two
//! sequences are aligned with DTW, which copes with missed or extra taps.

use crate::point::Point;

/// Sorts points by `y` ascending (top of the photo first) and returns their
/// `x` coordinates in that order.
///
/// Points with equal `y` keep their tap order.
#[must_use]
pub fn ordered_projection(points: &[Point]) -> Vec<f64> {
    let mut sorted: Vec<&Point> = points.iter().collect();
    sorted.sort_by(|a, b| a.y.total_cmp(&b.y));
    sorted.into_iter().map(|p| p.x).collect()
}

/// Min-max scales a sequence into `[0, 1]`.
///
/// A constant sequence maps every value to `0.5`.
#[must_use]
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    let range = hi - lo;
    if range <= 0.0 {
        return vec![0.5; values.len()];
    }
    values.iter().map(|v| (v - lo) / range).collect()
}

/// DTW distance between two sequences, normalized by the longer length.
///
/// Cell `(i, j)` holds the cheapest cumulative absolute-difference cost of
/// aligning the first `i` elements of `a` with the first `j` of `b`; each step
/// may match, skip an element of `a`, or skip an element of `b`. The result is
/// `table[n][m] / max(n, m)`.
///
/// Returns `f64::INFINITY` when either sequence is empty.
#[must_use]
pub fn sequence_alignment_distance(a: &[f64], b: &[f64]) -> f64 {
    let (n, m) = (a.len(), b.len());
    if n == 0 || m == 0 {
        return f64::INFINITY;
    }

    // Two rolling rows of the (n+1) x (m+1) table.
    let mut prev = vec![f64::INFINITY; m + 1];
    let mut curr = vec![f64::INFINITY; m + 1];
    prev[0] = 0.0;

    for &ai in a {
        curr[0] = f64::INFINITY;
        for (j, &bj) in b.iter().enumerate() {
            let best = prev[j + 1].min(curr[j]).min(prev[j]);
            curr[j + 1] = (ai - bj).abs() + best;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[m] / n.max(m) as f64
}

/// Order similarity between two raw point sets, `0..=100`.
///
/// Each set is projected with [`ordered_projection`] and min-max scaled on
/// its own, then aligned with [`sequence_alignment_distance`]. Both sequences
/// live in `[0, 1]`, so the distance converts with a fixed scale of 1:
/// `round(100 * max(0, 1 - distance))`.
///
/// Either set empty scores 0; two single points score 100.
#[must_use]
pub fn order_similarity(a: &[Point], b: &[Point]) -> u32 {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    if a.len() == 1 && b.len() == 1 {
        return 100;
    }

    let seq_a = min_max_normalize(&ordered_projection(a));
    let seq_b = min_max_normalize(&ordered_projection(b));
    let distance = sequence_alignment_distance(&seq_a, &seq_b);

    (100.0 * (1.0 - distance).max(0.0)).round() as u32
}

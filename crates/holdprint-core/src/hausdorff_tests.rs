//! Tests for `hausdorff` module

use super::geometry::normalize;
use super::hausdorff::*;
use super::point::Point;

fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

#[test]
fn test_set_distance_identical_is_zero() {
    let a = normalize(&square());
    assert_eq!(set_distance(&a, &a), 0.0);
}

#[test]
fn test_set_distance_empty_is_infinite() {
    let a = square();
    assert!(set_distance(&a, &[]).is_infinite());
    assert!(set_distance(&[], &a).is_infinite());
    assert!(set_distance(&[], &[]).is_infinite());
}

#[test]
fn test_set_distance_is_symmetric() {
    let a = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    let b = vec![Point::new(0.0, 0.5), Point::new(2.0, 0.0), Point::new(3.0, 3.0)];
    assert_eq!(set_distance(&a, &b), set_distance(&b, &a));
}

#[test]
fn test_set_distance_takes_larger_direction() {
    // Arrange: A is a strict subset of B
    let a = vec![Point::new(0.0, 0.0)];
    let b = vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0)];

    // Act
    let d = set_distance(&a, &b);

    // Assert: forward = 0, reverse = (0 + 4) / 2 = 2
    assert!((d - 2.0).abs() < 1e-12);
}

#[test]
fn test_set_distance_uses_mean_not_max() {
    // One outlier among four points moves the distance by a quarter of its gap.
    let a = square();
    let mut b = square();
    b[3] = Point::new(0.0, 3.0);

    let d = set_distance(&a, &b);

    // forward: corner (0,1) -> nearest in B is (1,1), gap 1 => 1/4
    // reverse: (0,3) -> nearest in A is (0,1), gap 2 => 2/4
    assert!((d - 0.5).abs() < 1e-12);
}

#[test]
fn test_set_distance_grows_as_point_moves_away() {
    let a = square();
    let mut last = 0.0;
    for step in 1..=5 {
        let mut b = square();
        b[2] = Point::new(1.0 + 0.2 * f64::from(step), 1.0);
        let d = set_distance(&a, &b);
        assert!(d > last, "distance should grow: {d} <= {last}");
        last = d;
    }
}

#[test]
fn test_similarity_from_distance_bounds() {
    assert_eq!(similarity_from_distance(0.0, 1.0), 100);
    assert_eq!(similarity_from_distance(0.0, 0.25), 100);
    assert_eq!(similarity_from_distance(1.0, 1.0), 0);
    assert_eq!(similarity_from_distance(3.0, 1.0), 0);
    assert_eq!(similarity_from_distance(f64::INFINITY, 1.0), 0);
}

#[test]
fn test_similarity_from_distance_half_way() {
    assert_eq!(similarity_from_distance(0.5, 1.0), 50);
    assert_eq!(similarity_from_distance(0.75, 1.5), 50);
}

#[test]
fn test_similarity_from_distance_rounds() {
    assert_eq!(similarity_from_distance(0.123, 1.0), 88);
    assert_eq!(similarity_from_distance(0.996, 1.0), 0);
    assert_eq!(similarity_from_distance(0.994, 1.0), 1);
}

#[test]
fn test_similarity_from_distance_non_positive_threshold() {
    assert_eq!(similarity_from_distance(0.0, 0.0), 100);
    assert_eq!(similarity_from_distance(0.1, 0.0), 0);
    assert_eq!(similarity_from_distance(0.1, -1.0), 0);
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    fn point_set_strategy() -> impl Strategy<Value = Vec<Point>> {
        proptest::collection::vec((-2.0f64..2.0, -2.0f64..2.0), 1usize..=15)
            .prop_map(|raw| raw.into_iter().map(Point::from).collect())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: set_distance(A, B) == set_distance(B, A)
        #[test]
        fn prop_set_distance_symmetric(a in point_set_strategy(), b in point_set_strategy()) {
            prop_assert_eq!(set_distance(&a, &b), set_distance(&b, &a));
        }

        /// Property: set_distance(A, A) == 0
        #[test]
        fn prop_set_distance_self_is_zero(a in point_set_strategy()) {
            prop_assert_eq!(set_distance(&a, &a), 0.0);
        }

        /// Property: similarity stays within 0..=100
        #[test]
        fn prop_similarity_in_range(d in 0.0f64..10.0, m in 0.01f64..5.0) {
            prop_assert!(similarity_from_distance(d, m) <= 100);
        }
    }
}

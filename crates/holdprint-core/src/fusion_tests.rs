//! Tests for `fusion` module

use super::fusion::*;

#[test]
fn test_default_weights() {
    let w = ScoreWeights::default();
    assert_eq!(w.set, 0.6);
    assert_eq!(w.order, 0.4);
    assert!((w.total() - 1.0).abs() < 1e-12);
}

#[test]
fn test_combined_score_full_marks() {
    let w = ScoreWeights::new(0.6, 0.4);
    assert_eq!(combined_score(100, 100, &w), 100);
}

#[test]
fn test_combined_score_single_signal() {
    let w = ScoreWeights::new(0.6, 0.4);
    assert_eq!(combined_score(100, 0, &w), 60);
    assert_eq!(combined_score(0, 100, &w), 40);
    assert_eq!(combined_score(0, 0, &w), 0);
}

#[test]
fn test_combined_score_rounds() {
    let w = ScoreWeights::new(0.6, 0.4);
    // 0.6 * 51 + 0.4 * 79 = 30.6 + 31.6 = 62.2
    assert_eq!(combined_score(51, 79, &w), 62);
    // 0.6 * 50 + 0.4 * 88 = 30 + 35.2 = 65.2
    assert_eq!(combined_score(50, 88, &w), 65);
}

#[test]
fn test_combined_score_weights_need_not_sum_to_one() {
    // round(100 * (w1 + w2))
    assert_eq!(combined_score(100, 100, &ScoreWeights::new(0.5, 0.25)), 75);
    assert_eq!(combined_score(100, 100, &ScoreWeights::new(1.0, 0.5)), 150);
}

#[test]
fn test_combined_score_negative_blend_floors_at_zero() {
    assert_eq!(combined_score(10, 100, &ScoreWeights::new(1.0, -1.0)), 0);
}

#[test]
fn test_weights_serialization() {
    let w = ScoreWeights::new(0.7, 0.3);
    let json = serde_json::to_string(&w).expect("serialize");
    let back: ScoreWeights = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, w);
}

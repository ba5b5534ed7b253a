#![cfg(feature = "dev")]
//! Tests for joint count tables and joint distributions.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use wordprob_rs::internals::algorithms::joint::{joint_counts, joint_distribution};
use wordprob_rs::internals::primitives::errors::ProbError;
use wordprob_rs::internals::primitives::table::JointTable;

fn sample_corpus() -> Vec<Vec<&'static str>> {
    vec![vec!["a", "b", "a"], vec!["a"], vec!["b", "b"]]
}

// ============================================================================
// Count Table Tests
// ============================================================================

#[test]
fn test_joint_counts_sample_corpus() {
    let counts: JointTable<f64> = joint_counts(&sample_corpus(), "a", "b").unwrap();

    assert_eq!(counts.shape(), (3, 3));
    assert_eq!(counts[(2, 1)], 1.0);
    assert_eq!(counts[(1, 0)], 1.0);
    assert_eq!(counts[(0, 2)], 1.0);
    assert_eq!(counts.total(), 3.0);
}

#[test]
fn test_joint_counts_accumulates_repeated_cells() {
    let texts = vec![vec!["a"], vec!["a"], vec!["b"]];
    let counts: JointTable<f64> = joint_counts(&texts, "a", "b").unwrap();

    assert_eq!(counts.shape(), (2, 2));
    assert_eq!(counts[(1, 0)], 2.0);
    assert_eq!(counts[(0, 1)], 1.0);
    assert_eq!(counts[(0, 0)], 0.0);
    assert_eq!(counts[(1, 1)], 0.0);
}

// ============================================================================
// Joint Distribution Tests
// ============================================================================

#[test]
fn test_joint_distribution_sample_corpus() {
    let p: JointTable<f64> = joint_distribution(&sample_corpus(), "a", "b").unwrap();

    assert_eq!(p.shape(), (3, 3));
    for ((m, n), v) in p.iter_indexed() {
        let expected = match (m, n) {
            (2, 1) | (1, 0) | (0, 2) => 1.0 / 3.0,
            _ => 0.0,
        };
        assert_abs_diff_eq!(v, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_joint_distribution_sums_to_one() {
    let texts = vec![
        vec!["the", "cat", "the", "dog"],
        vec!["a", "cat"],
        vec!["the", "the", "the"],
        vec![],
        vec!["cat", "cat", "cat", "cat", "the"],
        vec!["dog"],
        vec!["the", "cat"],
    ];
    let p: JointTable<f64> = joint_distribution(&texts, "the", "cat").unwrap();

    assert_eq!(p.shape(), (4, 5));
    assert_abs_diff_eq!(p.total(), 1.0, epsilon = 1e-9);
    assert!(p.as_slice().iter().all(|&v| v >= 0.0));
}

#[test]
fn test_joint_distribution_absent_words() {
    let texts = vec![vec!["x", "y"], vec!["z"]];
    let p: JointTable<f64> = joint_distribution(&texts, "a", "b").unwrap();

    assert_eq!(p.shape(), (1, 1));
    assert_relative_eq!(p[(0, 0)], 1.0);
}

#[test]
fn test_joint_distribution_same_word_is_diagonal() {
    let texts = vec![vec!["a"], vec!["a", "a"], vec![]];
    let p: JointTable<f64> = joint_distribution(&texts, "a", "a").unwrap();

    assert_eq!(p.shape(), (3, 3));
    for ((m, n), v) in p.iter_indexed() {
        if m == n {
            assert_relative_eq!(v, 1.0 / 3.0);
        } else {
            assert_eq!(v, 0.0);
        }
    }
}

#[test]
fn test_joint_distribution_owned_strings() {
    let texts: Vec<Vec<String>> = vec![
        vec!["Word".to_string(), "word".to_string()],
        vec!["word".to_string()],
    ];
    let p: JointTable<f64> = joint_distribution(&texts, "word", "Word").unwrap();

    // (1, 1) and (1, 0)
    assert_eq!(p.shape(), (2, 2));
    assert_relative_eq!(p[(1, 1)], 0.5);
    assert_relative_eq!(p[(1, 0)], 0.5);
}

#[test]
fn test_joint_distribution_f32() {
    let p: JointTable<f32> = joint_distribution(&sample_corpus(), "a", "b").unwrap();
    assert_abs_diff_eq!(p.total(), 1.0f32, epsilon = 1e-6);
}

#[test]
fn test_joint_distribution_empty_corpus() {
    let texts: Vec<Vec<&str>> = Vec::new();
    let err = joint_distribution::<f64, _, _>(&texts, "a", "b").unwrap_err();
    assert_eq!(err, ProbError::EmptyInput);
}

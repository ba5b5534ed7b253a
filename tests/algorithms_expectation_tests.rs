#![cfg(feature = "dev")]

use approx::{assert_abs_diff_eq, assert_relative_eq};
use wordprob_rs::internals::algorithms::expectation::{expectation, expectation_grid};
use wordprob_rs::internals::algorithms::joint::joint_distribution;
use wordprob_rs::internals::primitives::table::JointTable;

#[test]
fn test_expectation_sum_uniform() {
    let p = JointTable::from_rows(&[[0.25, 0.25], [0.25, 0.25]]).unwrap();
    assert_relative_eq!(expectation(&p, |x0, x1| x0 + x1), 1.0);
}

#[test]
fn test_expectation_constant_is_total_mass() {
    let p = JointTable::from_rows(&[[0.1, 0.2], [0.3, 0.4]]).unwrap();
    assert_relative_eq!(expectation(&p, |_, _| 1.0), 1.0, epsilon = 1e-12);
}

#[test]
fn test_expectation_product_matches_covariance_identity() {
    // E[X0 X1] = Cov + E[X0] E[X1] = 0.25 + 0.25
    let p = JointTable::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap();
    assert_relative_eq!(expectation(&p, |x0, x1| x0 * x1), 0.5);
}

#[test]
fn test_expectation_ignores_undefined_values_at_zero_mass() {
    // f is undefined (NaN) off the diagonal, where P has no mass
    let p = JointTable::from_rows(&[[0.5, 0.0], [0.0, 0.5]]).unwrap();
    let e = expectation(&p, |x0: f64, x1: f64| if x0 == x1 { x0 + x1 } else { f64::NAN });
    assert_relative_eq!(e, 1.0);

    // 0 / 0 at (0, 0)
    let q = JointTable::from_rows(&[[0.0, 1.0]]).unwrap();
    assert_abs_diff_eq!(expectation(&q, |x0: f64, x1: f64| x0 / x1), 0.0);
}

#[test]
fn test_expectation_sample_corpus() {
    let texts = vec![vec!["a", "b", "a"], vec!["a"], vec!["b", "b"]];
    let p: JointTable<f64> = joint_distribution(&texts, "a", "b").unwrap();

    // Totals per text: 3, 1, 2
    assert_relative_eq!(expectation(&p, |x0, x1| x0 + x1), 2.0, epsilon = 1e-12);
}

#[test]
fn test_expectation_grid_covers_full_index_grid() {
    let p: JointTable<f64> = JointTable::zeros(2, 3);
    let mut calls = 0;
    let grid = expectation_grid(&p, |x0, x1| {
        calls += 1;
        10.0 * x0 + x1
    });

    assert_eq!(calls, 6);
    assert_eq!(grid.shape(), (2, 3));
    assert_eq!(grid.as_slice(), &[0.0, 1.0, 2.0, 10.0, 11.0, 12.0]);
}

use approx::assert_relative_eq;
use wordprob_rs::prelude::*;

fn corpus() -> Vec<Vec<&'static str>> {
    vec![vec!["a", "b", "a"], vec!["a"], vec!["b", "b"]]
}

// ============================================================================
// Builder Tests
// ============================================================================

#[test]
fn test_builder_defaults() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .build()
        .unwrap();

    let config = model.config();
    assert_eq!(config.word0, "a");
    assert_eq!(config.word1, "b");
    assert!(!config.return_conditional);
    assert!(config.return_marginals);
}

#[test]
fn test_builder_drops_marginals() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .return_marginals(false)
        .build()
        .unwrap();
    assert!(!model.config().return_marginals);

    let result: WordPairResult<f64> = model.fit(&corpus()).unwrap();
    assert!(result.marginal0.is_none());
    assert!(result.marginal1.is_none());
    assert_relative_eq!(result.moments0.mean, 1.0, epsilon = 1e-12);
}

#[test]
fn test_builder_missing_word() {
    let err = WordPair::new().first_word("a").build().unwrap_err();
    assert_eq!(
        err,
        ProbError::MissingParameter {
            parameter: "second_word"
        }
    );

    let err = WordPair::new().second_word("b").build().unwrap_err();
    assert_eq!(
        err,
        ProbError::MissingParameter {
            parameter: "first_word"
        }
    );
}

#[test]
fn test_builder_duplicate_parameter() {
    let err = WordPair::new()
        .first_word("a")
        .first_word("c")
        .second_word("b")
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ProbError::DuplicateParameter {
            parameter: "first_word"
        }
    );
}

#[test]
fn test_builder_empty_word() {
    let err = WordPair::new()
        .first_word("")
        .second_word("b")
        .build()
        .unwrap_err();
    assert!(matches!(err, ProbError::InvalidInput(_)));
}

// ============================================================================
// Fit Tests
// ============================================================================

#[test]
fn test_fit_end_to_end() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .return_conditional()
        .build()
        .unwrap();
    let result: WordPairResult<f64> = model.fit(&corpus()).unwrap();

    assert_eq!(result.word0, "a");
    assert_eq!(result.word1, "b");
    assert_eq!(result.shape(), (3, 3));
    assert_relative_eq!(result.joint[(2, 1)], 1.0 / 3.0);
    assert_relative_eq!(result.joint[(1, 0)], 1.0 / 3.0);
    assert_relative_eq!(result.joint[(0, 2)], 1.0 / 3.0);
    assert_eq!(result.joint.get(3, 0), None);

    let cond = result.conditional.as_ref().unwrap();
    assert_relative_eq!(cond[(0, 2)], 1.0, epsilon = 1e-12);

    assert_relative_eq!(result.expectation(|x0, x1| x0 + x1), 2.0, epsilon = 1e-12);
}

#[test]
fn test_fit_reuses_model() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .build()
        .unwrap();

    let first: WordPairResult<f64> = model.fit(&corpus()).unwrap();
    let second: WordPairResult<f32> = model.fit(&[vec!["a", "a"]]).unwrap();

    assert_eq!(first.n_texts, 3);
    assert_eq!(second.shape(), (3, 1));
    assert_relative_eq!(second.moments0.mean, 2.0f32);
}

#[test]
fn test_fit_empty_corpus() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .build()
        .unwrap();
    let texts: Vec<Vec<&str>> = vec![];

    let result: Result<WordPairResult<f64>, ProbError> = model.fit(&texts);
    assert_eq!(result.unwrap_err(), ProbError::EmptyInput);
}

#[test]
fn test_result_display() {
    let model = WordPair::new()
        .first_word("a")
        .second_word("b")
        .build()
        .unwrap();
    let result: WordPairResult<f64> = model.fit(&corpus()).unwrap();
    let text = format!("{}", result);

    assert!(text.contains("Summary:"));
    assert!(text.contains("Texts: 3"));
    assert!(text.contains("Table shape: 3x3"));
    assert!(text.contains("Cov(X0,X1): -0.333333"));
    assert!(text.contains("0.33333"));
}

// ============================================================================
// Free Function Composition
// ============================================================================

#[test]
fn test_free_functions_compose() {
    let joint: JointTable<f64> = joint_distribution(&corpus(), "a", "b").unwrap();
    let p0 = marginal_distribution(&joint, Axis::Rows);
    let p1 = marginal_distribution(&joint, Axis::try_from(1usize).unwrap());
    let cond = conditional_distribution(&joint, &p0).unwrap();

    assert_relative_eq!(p0.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(p1.iter().sum::<f64>(), 1.0, epsilon = 1e-12);
    assert_relative_eq!(mean(&p1), 1.0, epsilon = 1e-12);
    assert_relative_eq!(variance(&p1), 2.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(std_dev(&p1), (2.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(covariance(&joint), -1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(correlation(&joint), -0.5, epsilon = 1e-12);
    assert_eq!(cond.shape(), joint.shape());

    let counts: JointTable<f64> = joint_counts(&corpus(), "a", "b").unwrap();
    assert_eq!(counts.total(), 3.0);
    assert_eq!(expectation_grid(&joint, |x0, _| x0).row(2), &[2.0, 2.0, 2.0]);
}

//! Integration tests for the sequence MCTS library public API

use sequence_mcts::{
    problems::SumProblem, run, Mcts, MctsConfig, MctsError, Result, DESCRIPTION, INVALID_FITNESS,
    NAME, VERSION,
};
use std::io::Write;

#[test]
fn test_library_metadata() {
    assert!(!VERSION.is_empty());
    assert_eq!(NAME, "sequence_mcts");
    assert!(!DESCRIPTION.is_empty());
}

#[test]
fn test_error_types() {
    let config_error = MctsError::Config("test config error".to_string());
    assert!(matches!(config_error, MctsError::Config(_)));
    assert!(config_error.to_string().contains("test config error"));

    let io_error: MctsError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
    assert!(matches!(io_error, MctsError::Io(_)));
}

#[test]
fn test_result_type_alias() {
    let success: Result<i32> = Ok(42);
    assert!(success.is_ok());
    assert_eq!(success.unwrap(), 42);

    let failure: Result<i32> = Err(MctsError::Config("test".to_string()));
    assert!(failure.is_err());
}

#[test]
fn test_sentinel_is_max_float() {
    assert_eq!(INVALID_FITNESS, f64::MAX);
}

#[test]
fn test_search_from_json_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"exploration_constant": 2.0, "max_iterations": 300, "target_length": 4, "seed": 3}}"#
    )
    .unwrap();

    let config = MctsConfig::load(file.path()).unwrap();
    let problem = SumProblem::new(15, vec![1, 2, 3, 4, 5], 4);
    let best = run(
        Vec::new(),
        |s: &[u32]| problem.next_moves(s),
        |s: &[u32]| problem.fitness(s),
        &config,
    )
    .unwrap();

    assert_eq!(best.len(), 4);
    assert!(problem.uses_allowed_digits(&best));
}

#[test]
fn test_run_rejects_missing_termination() {
    let config = MctsConfig {
        target_length: None,
        ..MctsConfig::default()
    };
    let result = run(Vec::new(), |_: &[u32]| vec![1], |_: &[u32]| 0.0, &config);
    assert!(matches!(result, Err(MctsError::Config(_))));
}

#[test]
fn test_builder_with_initial_sequence() {
    let config = MctsConfig {
        max_iterations: 200,
        target_length: Some(4),
        ..MctsConfig::default()
    };
    let problem = SumProblem::new(15, vec![1, 2, 3, 4, 5], 4);
    let outcome = Mcts::new(config)
        .search(
            vec![5, 5],
            |s: &[u32]| problem.next_moves(s),
            |s: &[u32]| problem.fitness(s),
        )
        .unwrap();

    assert_eq!(&outcome.sequence[..2], &[5, 5]);
    assert_eq!(outcome.sequence.len(), 4);
    assert_eq!(outcome.fitness, problem.fitness(&outcome.sequence));
}

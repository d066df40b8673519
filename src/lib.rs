//! # Sequence MCTS
//!
//! Monte Carlo Tree Search over sequences of opaque moves. The caller provides
//! a move generator and a fitness function (lower is better); the engine grows
//! a search tree through selection, expansion, simulation and backpropagation
//! and returns the best complete sequence it observed.
//!
//! ## Features
//!
//! - **Search Engine**: arena tree, UCT minimization, lazy expansion, random playouts
//! - **Termination**: fixed target length or a caller-supplied predicate
//! - **Batch Runs**: independent seeded searches executed in parallel
//! - **Reference Problems**: number sums, monotonic sequences, tic-tac-toe
//!
//! ## Usage
//!
//! ```rust
//! use sequence_mcts::{run, MctsConfig, INVALID_FITNESS};
//!
//! let config = MctsConfig {
//!     exploration_constant: 2.0,
//!     max_iterations: 500,
//!     target_length: Some(3),
//!     ..MctsConfig::default()
//! };
//!
//! let best = run(
//!     Vec::new(),
//!     |seq: &[u32]| if seq.len() < 3 { vec![1, 2, 3] } else { Vec::new() },
//!     |seq: &[u32]| {
//!         if seq.len() != 3 {
//!             return INVALID_FITNESS;
//!         }
//!         let sum: u32 = seq.iter().sum();
//!         (f64::from(sum) - 6.0).powi(2)
//!     },
//!     &config,
//! )
//! .unwrap();
//! assert_eq!(best.len(), 3);
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Monte Carlo Tree Search engine
pub mod mcts;

/// Parallel execution of independent searches
pub mod batch;

/// Reference problems used to exercise the engine
pub mod problems;

/// Logger initialisation for binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// MCTS engine exports
pub use mcts::*;

pub use batch::{run_attempts, AttemptResult, BatchSummary};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the sequence MCTS library
#[derive(Debug, thiserror::Error)]
pub enum MctsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MctsError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

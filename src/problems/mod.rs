//! Reference problems.
//!
//! Small move generators and fitness functions used by the demo binary and
//! the test suites to exercise the search engine.
//!
//! # Components
//!
//! - `sum`: fixed-length digit sequences hitting a target sum
//! - `monotonic`: the same puzzle restricted to ordered sequences
//! - `tictactoe`: one-move tic-tac-toe lookahead

pub mod monotonic;
pub mod sum;
pub mod tictactoe;

pub use monotonic::{MonotonicProblem, Monotonicity};
pub use sum::SumProblem;
pub use tictactoe::{Player, TicTacToeProblem, TicTacToeState};

/// Sum of a sequence of digits
pub fn sequence_sum(sequence: &[u32]) -> u32 {
    sequence.iter().sum()
}

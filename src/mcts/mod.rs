pub mod algorithm;
pub mod backpropagation;
pub mod config;
pub mod expansion;
pub mod fallback;
pub mod mcts_result;
pub mod node;
pub mod progress;
pub mod selection;
pub mod simulation;
pub mod tree;

pub use algorithm::{run, Mcts};
pub use config::{MctsConfig, Termination, DEFAULT_EXPLORATION_CONSTANT};
pub use mcts_result::SearchOutcome;
pub use node::{Node, NodeId};
pub use progress::ProgressStats;
pub use tree::Tree;

/// Fitness value marking a sequence as invalid or unscored.
///
/// Never recorded as a best result.
pub const INVALID_FITNESS: f64 = f64::MAX;

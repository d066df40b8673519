//! Search configuration and termination model.

use crate::{MctsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Exploration constant used when the configuration supplies zero.
pub const DEFAULT_EXPLORATION_CONSTANT: f64 = 1.41;

/// MCTS configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Weight of the UCT exploration term. Zero selects
    /// [`DEFAULT_EXPLORATION_CONSTANT`].
    pub exploration_constant: f64,

    /// Number of select/expand/simulate/backpropagate cycles
    pub max_iterations: usize,

    /// Length at which a sequence is complete.
    /// `None` means completion is decided by a termination predicate.
    pub target_length: Option<usize>,

    /// Seed of the per-search random generator
    pub seed: u64,

    /// 0 = silent, 1 = periodic summary, 2 = summary plus tree size and best sequence
    pub debug_level: u8,

    /// Iterations between two progress reports (0 disables them)
    pub report_interval: usize,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            exploration_constant: DEFAULT_EXPLORATION_CONSTANT,
            max_iterations: 1000,
            target_length: None,
            seed: 0,
            debug_level: 0,
            report_interval: 100,
        }
    }
}

impl MctsConfig {
    /// Exploration constant actually used by the selector.
    pub fn effective_exploration_constant(&self) -> f64 {
        if self.exploration_constant == 0.0 {
            DEFAULT_EXPLORATION_CONSTANT
        } else {
            self.exploration_constant
        }
    }

    /// Parse a configuration from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Resolve the termination mode.
    ///
    /// Fixed length wins when `target_length` is set; otherwise `predicate`
    /// is required.
    ///
    /// # Errors
    /// [`MctsError::Config`] when `target_length` is unset and no predicate
    /// was supplied.
    pub fn termination<'a, M>(
        &self,
        predicate: Option<Box<dyn Fn(&[M]) -> bool + 'a>>,
    ) -> Result<Termination<'a, M>> {
        match (self.target_length, predicate) {
            (Some(length), _) => Ok(Termination::FixedLength(length)),
            (None, Some(predicate)) => Ok(Termination::Predicate(predicate)),
            (None, None) => Err(MctsError::Config(
                "target_length is unset, a termination predicate must be provided".to_string(),
            )),
        }
    }

    /// Create a configuration string for logging
    pub fn to_config_string(&self) -> String {
        let target = match self.target_length {
            Some(length) => length.to_string(),
            None => "predicate".to_string(),
        };
        format!(
            "c[{:.2}]_iter[{}]_target[{}]_seed[{}]_debug[{}]",
            self.effective_exploration_constant(),
            self.max_iterations,
            target,
            self.seed,
            self.debug_level
        )
    }
}

/// Decides when a sequence stops growing.
pub enum Termination<'a, M> {
    /// Complete once the sequence holds this many moves
    FixedLength(usize),
    /// Complete when the predicate returns true
    Predicate(Box<dyn Fn(&[M]) -> bool + 'a>),
}

impl<M> Termination<'_, M> {
    pub fn is_complete(&self, sequence: &[M]) -> bool {
        match self {
            // `>=` so a root longer than the target cannot grow forever
            Termination::FixedLength(length) => sequence.len() >= *length,
            Termination::Predicate(predicate) => predicate(sequence),
        }
    }

    /// Whether `sequence` may be reported as a search result: exactly the
    /// target length in fixed-length mode, the predicate otherwise.
    pub fn is_exact(&self, sequence: &[M]) -> bool {
        match self {
            Termination::FixedLength(length) => sequence.len() == *length,
            Termination::Predicate(predicate) => predicate(sequence),
        }
    }
}

impl<M> fmt::Debug for Termination<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::FixedLength(length) => f.debug_tuple("FixedLength").field(length).finish(),
            Termination::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

//! Periodic search diagnostics.
//!
//! Depth and node count need a pass over the whole arena, so the driver only
//! samples them every `report_interval` iterations.

use std::fmt::Debug;
use std::time::Duration;

/// Snapshot of a running search
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressStats<M> {
    /// Iterations started so far (1-based)
    pub iterations: usize,
    /// Best fitness recorded, [`INVALID_FITNESS`](crate::mcts::INVALID_FITNESS) if none yet
    pub best_fitness: f64,
    pub best_sequence: Option<Vec<M>>,
    /// Longest root-to-leaf chain
    pub tree_depth: usize,
    /// Nodes in the tree, root included
    pub total_nodes: usize,
    pub elapsed: Duration,
}

/// Renders a sequence with the caller's formatter, or `Debug` without one.
pub fn format_sequence<M: Debug>(
    sequence: Option<&[M]>,
    formatter: Option<&dyn Fn(&[M]) -> String>,
) -> String {
    match (sequence, formatter) {
        (None, _) => "none".to_string(),
        (Some(sequence), Some(formatter)) => formatter(sequence),
        (Some(sequence), None) => format!("{:?}", sequence),
    }
}

/// Logs a progress report at the requested verbosity.
///
/// Level 0 is silent, level 1 logs the iteration, best fitness and elapsed
/// time, level 2 adds tree depth, node count and the best sequence.
pub fn log_progress<M: Debug>(
    stats: &ProgressStats<M>,
    debug_level: u8,
    formatter: Option<&dyn Fn(&[M]) -> String>,
) {
    if debug_level == 0 {
        return;
    }

    log::info!(
        "📊 Iteration {} | best fitness {} | elapsed {:?}",
        stats.iterations,
        stats.best_fitness,
        stats.elapsed
    );

    if debug_level > 1 {
        log::info!(
            "   tree depth {} | nodes {} | best sequence {}",
            stats.tree_depth,
            stats.total_nodes,
            format_sequence(stats.best_sequence.as_deref(), formatter)
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sequence_debug() {
        assert_eq!(format_sequence(Some(&[1, 2, 3][..]), None), "[1, 2, 3]");
    }

    #[test]
    fn test_format_sequence_custom() {
        let join = |seq: &[u8]| {
            seq.iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join("-")
        };
        assert_eq!(format_sequence(Some(&[4u8, 5][..]), Some(&join)), "4-5");
    }

    #[test]
    fn test_format_sequence_missing() {
        assert_eq!(format_sequence::<u8>(None, None), "none");
    }
}

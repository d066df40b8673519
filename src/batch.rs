//! Independent searches run in parallel.
//!
//! Each attempt owns its tree and random generator; only the move generator
//! and fitness function are shared, by reference, across worker threads.

use crate::mcts::{Mcts, MctsConfig, SearchOutcome, INVALID_FITNESS};
use crate::Result;
use rayon::prelude::*;
use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// One finished attempt
#[derive(Debug, Clone)]
pub struct AttemptResult<M> {
    pub attempt: usize,
    pub seed: u64,
    pub outcome: SearchOutcome<M>,
    pub elapsed: Duration,
}

impl<M> AttemptResult<M> {
    /// True when the attempt produced a scored sequence
    pub fn is_valid(&self) -> bool {
        self.outcome.fitness < INVALID_FITNESS
    }
}

/// Runs `attempts` searches, attempt `i` seeded with `config.seed + i`.
///
/// Results come back in attempt order. Scheduling follows the current rayon
/// pool, so callers sizing the pool control the worker count.
///
/// # Errors
/// The first configuration error reported by any attempt.
pub fn run_attempts<M, G, F>(
    initial: &[M],
    next_moves: G,
    fitness: F,
    config: &MctsConfig,
    attempts: usize,
) -> Result<Vec<AttemptResult<M>>>
where
    M: Clone + Debug + Send + Sync,
    G: Fn(&[M]) -> Vec<M> + Sync,
    F: Fn(&[M]) -> f64 + Sync,
{
    let finished = AtomicUsize::new(0);

    (0..attempts)
        .into_par_iter()
        .map(|attempt| {
            let seed = config.seed.wrapping_add(attempt as u64);
            let attempt_config = MctsConfig {
                seed,
                ..config.clone()
            };

            let start = Instant::now();
            let outcome =
                Mcts::new(attempt_config).search(initial.to_vec(), &next_moves, &fitness)?;

            let count = finished.fetch_add(1, Ordering::Relaxed) + 1;
            if count % 100 == 0 {
                log::debug!("batch progress: {}/{} attempts", count, attempts);
            }

            Ok(AttemptResult {
                attempt,
                seed,
                outcome,
                elapsed: start.elapsed(),
            })
        })
        .collect()
}

/// Aggregate statistics over a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchSummary {
    pub attempts: usize,
    /// Attempts whose fitness is below [`INVALID_FITNESS`]
    pub valid: usize,
    pub successes: usize,
    pub best_fitness: f64,
    pub worst_fitness: f64,
    /// Mean over valid attempts, [`INVALID_FITNESS`] when there are none
    pub mean_fitness: f64,
    pub total_elapsed: Duration,
}

impl BatchSummary {
    /// Summarises `results`, counting the attempts accepted by `is_success`.
    pub fn from_results<M, S>(results: &[AttemptResult<M>], is_success: S) -> Self
    where
        S: Fn(&AttemptResult<M>) -> bool,
    {
        let valid_fitness: Vec<f64> = results
            .iter()
            .filter(|r| r.is_valid())
            .map(|r| r.outcome.fitness)
            .collect();

        let (best_fitness, worst_fitness, mean_fitness) = if valid_fitness.is_empty() {
            (INVALID_FITNESS, INVALID_FITNESS, INVALID_FITNESS)
        } else {
            let best = valid_fitness.iter().copied().fold(f64::INFINITY, f64::min);
            let worst = valid_fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = valid_fitness.iter().sum::<f64>() / valid_fitness.len() as f64;
            (best, worst, mean)
        };

        Self {
            attempts: results.len(),
            valid: valid_fitness.len(),
            successes: results.iter().filter(|r| is_success(r)).count(),
            best_fitness,
            worst_fitness,
            mean_fitness,
            total_elapsed: results.iter().map(|r| r.elapsed).sum(),
        }
    }

    /// Fraction of attempts counted as successes, 0 for an empty batch
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        self.successes as f64 / self.attempts as f64
    }

    pub fn log_summary(&self) {
        log::info!(
            "📊 {} attempts: {}/{} successful ({:.1}%), {} valid",
            self.attempts,
            self.successes,
            self.attempts,
            self.success_rate() * 100.0,
            self.valid
        );
        if self.valid > 0 {
            log::info!(
                "   fitness best {:.2} / mean {:.2} / worst {:.2}",
                self.best_fitness,
                self.mean_fitness,
                self.worst_fitness
            );
        }
    }
}

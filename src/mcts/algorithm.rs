//! Search driver.
//!
//! Each iteration runs the classic four MCTS phases over the arena tree:
//! 1. Selection: descend with UCT minimization to a frontier node
//! 2. Expansion: create one child from an untried move
//! 3. Simulation: random playout to a complete or dead-end sequence
//! 4. Backpropagation: add the playout fitness to every ancestor
//!
//! The best complete playout is tracked across iterations. When none is
//! found, a greedy construction guarantees a result.

use crate::mcts::backpropagation::backpropagate;
use crate::mcts::config::MctsConfig;
use crate::mcts::expansion::expand;
use crate::mcts::fallback::build_sequence;
use crate::mcts::mcts_result::SearchOutcome;
use crate::mcts::progress::{log_progress, ProgressStats};
use crate::mcts::selection::select;
use crate::mcts::simulation::simulate;
use crate::mcts::tree::Tree;
use crate::mcts::INVALID_FITNESS;
use crate::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::Debug;
use std::time::Instant;

type Predicate<'a, M> = Box<dyn Fn(&[M]) -> bool + 'a>;
type Formatter<'a, M> = Box<dyn Fn(&[M]) -> String + 'a>;
type ProgressCallback<'a, M> = Box<dyn FnMut(&ProgressStats<M>) + 'a>;

/// Sequence search engine
///
/// Holds the configuration and the optional collaborators of one search.
/// The tree and the random generator are created inside [`Mcts::search`]
/// and dropped when it returns, so every run starts from scratch.
pub struct Mcts<'a, M> {
    config: MctsConfig,
    predicate: Option<Predicate<'a, M>>,
    formatter: Option<Formatter<'a, M>>,
    on_progress: Option<ProgressCallback<'a, M>>,
}

impl<'a, M: Clone + Debug> Mcts<'a, M> {
    pub fn new(config: MctsConfig) -> Self {
        Self {
            config,
            predicate: None,
            formatter: None,
            on_progress: None,
        }
    }

    /// Completion predicate, used when `target_length` is `None`.
    pub fn with_termination<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&[M]) -> bool + 'a,
    {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Custom rendering of sequences in progress reports.
    pub fn with_formatter<S>(mut self, formatter: S) -> Self
    where
        S: Fn(&[M]) -> String + 'a,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Receives every sampled [`ProgressStats`], whatever the debug level.
    pub fn with_progress<C>(mut self, callback: C) -> Self
    where
        C: FnMut(&ProgressStats<M>) + 'a,
    {
        self.on_progress = Some(Box::new(callback));
        self
    }

    pub fn config(&self) -> &MctsConfig {
        &self.config
    }

    /// Runs `max_iterations` search iterations from `initial`.
    ///
    /// # Arguments
    /// * `initial` - Sequence held by the root
    /// * `next_moves` - Legal continuations of a sequence, empty for none
    /// * `fitness` - Score of a sequence, lower is better,
    ///   [`INVALID_FITNESS`] for unscored sequences
    ///
    /// # Errors
    /// [`MctsError::Config`](crate::MctsError::Config) when `target_length`
    /// is unset and no termination predicate was supplied. Nothing is
    /// evaluated in that case.
    pub fn search<G, F>(
        self,
        initial: Vec<M>,
        next_moves: G,
        fitness: F,
    ) -> Result<SearchOutcome<M>>
    where
        G: Fn(&[M]) -> Vec<M>,
        F: Fn(&[M]) -> f64,
    {
        let Mcts {
            config,
            predicate,
            formatter,
            mut on_progress,
        } = self;

        let termination = config.termination(predicate)?;
        let exploration_constant = config.effective_exploration_constant();
        let mut rng = StdRng::seed_from_u64(config.seed);
        let start_time = Instant::now();

        if config.debug_level > 0 {
            log::info!("🌲 MCTS search started: {}", config.to_config_string());
        }

        let mut tree = Tree::new(initial.clone());
        let mut best_sequence: Option<Vec<M>> = None;
        let mut best_fitness = INVALID_FITNESS;
        let mut expanded_iterations = 0;

        for iteration in 0..config.max_iterations {
            let selected = select(&tree, &termination, exploration_constant);

            // Complete nodes never grow, whatever the generator still offers
            let expansion = if termination.is_complete(tree.get(selected).sequence()) {
                None
            } else {
                expand(&mut tree, selected, &next_moves, &mut rng)
            };

            match expansion {
                Some(expanded) => {
                    let start = tree.get(expanded).sequence();
                    let simulated = simulate(start, &next_moves, &termination, &mut rng);
                    let value = fitness(&simulated);

                    backpropagate(&mut tree, expanded, value);
                    expanded_iterations += 1;

                    // Strict comparison: the first sequence reaching a fitness is kept
                    if termination.is_exact(&simulated) && value < best_fitness {
                        best_fitness = value;
                        best_sequence = Some(simulated);
                    }
                }
                None => log::trace!("iteration {}: no expansion possible", iteration),
            }

            // Sampled on abandoned iterations too
            let wants_report = config.debug_level > 0 || on_progress.is_some();
            let sampled = config.report_interval > 0 && iteration % config.report_interval == 0;
            if wants_report && sampled {
                let stats = ProgressStats {
                    iterations: iteration + 1,
                    best_fitness,
                    best_sequence: best_sequence.clone(),
                    tree_depth: tree.depth(),
                    total_nodes: tree.node_count(),
                    elapsed: start_time.elapsed(),
                };
                log_progress(&stats, config.debug_level, formatter.as_deref());
                if let Some(callback) = on_progress.as_mut() {
                    callback(&stats);
                }
            }
        }

        let (sequence, fitness_value, from_fallback) = match best_sequence {
            Some(sequence) => (sequence, best_fitness, false),
            None => {
                log::debug!("no complete sequence found, building greedy fallback");
                let sequence = build_sequence(&initial, &next_moves, &termination);
                let value = fitness(&sequence);
                (sequence, value, true)
            }
        };

        if config.debug_level > 0 {
            log::info!(
                "✅ MCTS search finished in {:?}: fitness {} over {} nodes",
                start_time.elapsed(),
                fitness_value,
                tree.node_count()
            );
        }

        Ok(SearchOutcome {
            sequence,
            fitness: fitness_value,
            from_fallback,
            expanded_iterations,
            root_visits: tree.root().visits(),
            total_nodes: tree.node_count(),
            tree_depth: tree.depth(),
        })
    }
}

/// Runs a fixed-length search and returns the best sequence.
///
/// # Errors
/// [`MctsError::Config`](crate::MctsError::Config) when
/// `config.target_length` is `None`: predicate termination needs
/// [`Mcts::with_termination`].
pub fn run<M, G, F>(
    initial: Vec<M>,
    next_moves: G,
    fitness: F,
    config: &MctsConfig,
) -> Result<Vec<M>>
where
    M: Clone + Debug,
    G: Fn(&[M]) -> Vec<M>,
    F: Fn(&[M]) -> f64,
{
    Mcts::new(config.clone())
        .search(initial, next_moves, fitness)
        .map(SearchOutcome::into_sequence)
}

use clap::Parser;
use std::error::Error;

use sequence_mcts::logging::{setup_file_logging, setup_logging};
use sequence_mcts::problems::{
    sequence_sum, MonotonicProblem, Monotonicity, Player, SumProblem, TicTacToeProblem,
    TicTacToeState,
};
use sequence_mcts::{run_attempts, BatchSummary, MctsConfig, MctsError};

#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
enum ProblemKind {
    /// Digits summing to a target
    Sum,
    /// Strictly increasing digits summing to a target
    Monotonic,
    /// Single tic-tac-toe move
    Tictactoe,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum PlayerCli {
    X,
    O,
}

impl From<PlayerCli> for Player {
    fn from(cli: PlayerCli) -> Self {
        match cli {
            PlayerCli::X => Player::X,
            PlayerCli::O => Player::O,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "sequence_mcts", version, about = "Monte Carlo Tree Search over move sequences")]
struct Args {
    /// Problem to solve
    #[arg(long, value_enum, default_value = "sum")]
    problem: ProblemKind,

    /// JSON search configuration; command-line search flags are ignored when set
    #[arg(long)]
    config: Option<String>,

    /// Search iterations per attempt
    #[arg(short = 'i', long, default_value_t = 1000)]
    iterations: usize,

    /// UCT exploration constant
    #[arg(short = 'c', long, default_value_t = 2.0)]
    exploration: f64,

    /// Seed of the first attempt
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Independent attempts
    #[arg(short = 'n', long, default_value_t = 100)]
    attempts: usize,

    /// Worker threads for the attempts
    #[arg(short = 'w', long, default_value_t = 8)]
    workers: usize,

    /// 0 silent, 1 progress summaries, 2 detailed progress
    #[arg(short = 'd', long, default_value_t = 0)]
    debug_level: u8,

    /// Target sum for the digit problems
    #[arg(long, default_value_t = 15)]
    target_sum: u32,

    /// Sequence length for the digit problems
    #[arg(long, default_value_t = 4)]
    length: usize,

    /// Allowed digits
    #[arg(long, value_delimiter = ',', default_value = "1,2,3,4,5")]
    digits: Vec<u32>,

    /// Maximum distance to the target counted as a success
    #[arg(long, default_value_t = 4)]
    tolerance: u32,

    /// Tic-tac-toe board, nine cells of X, O or '.'
    #[arg(long, default_value = "X.. XOO ...")]
    board: String,

    /// Tic-tac-toe player to move
    #[arg(long, value_enum, default_value = "x")]
    player: PlayerCli,

    /// Tic-tac-toe cells never played
    #[arg(long, value_delimiter = ',')]
    banned: Vec<usize>,

    /// Write rotated log files into this directory instead of stderr
    #[arg(long)]
    log_dir: Option<String>,
}

impl Args {
    fn search_config(&self, target_length: usize) -> Result<MctsConfig, MctsError> {
        if let Some(path) = &self.config {
            return MctsConfig::load(path);
        }
        Ok(MctsConfig {
            exploration_constant: self.exploration,
            max_iterations: self.iterations,
            target_length: Some(target_length),
            seed: self.seed,
            debug_level: self.debug_level,
            ..MctsConfig::default()
        })
    }
}

fn solve_digits(args: &Args) -> Result<BatchSummary, Box<dyn Error>> {
    let config = args.search_config(args.length)?;
    let within_tolerance =
        |seq: &[u32]| sequence_sum(seq).abs_diff(args.target_sum) <= args.tolerance;

    let results = match args.problem {
        ProblemKind::Monotonic => {
            let problem = MonotonicProblem::new(
                args.target_sum,
                args.digits.clone(),
                args.length,
                Monotonicity::StrictlyIncreasing,
            );
            run_attempts(
                &[],
                |s: &[u32]| problem.next_moves(s),
                |s: &[u32]| problem.fitness(s),
                &config,
                args.attempts,
            )?
        }
        _ => {
            let problem = SumProblem::new(args.target_sum, args.digits.clone(), args.length);
            run_attempts(
                &[],
                |s: &[u32]| problem.next_moves(s),
                |s: &[u32]| problem.fitness(s),
                &config,
                args.attempts,
            )?
        }
    };

    if let Some(best) = results
        .iter()
        .filter(|r| r.is_valid())
        .min_by(|a, b| a.outcome.fitness.total_cmp(&b.outcome.fitness))
    {
        log::info!(
            "🏆 best sequence {:?} (sum {}, seed {})",
            best.outcome.sequence,
            sequence_sum(&best.outcome.sequence),
            best.seed
        );
    }

    Ok(BatchSummary::from_results(&results, |r| {
        r.is_valid() && within_tolerance(&r.outcome.sequence)
    }))
}

fn solve_tictactoe(args: &Args) -> Result<BatchSummary, Box<dyn Error>> {
    let state = TicTacToeState::from_cells(&args.board, args.player.into())
        .ok_or_else(|| MctsError::Config(format!("invalid board: {}", args.board)))?;
    log::info!("♟️  position, {:?} to move:\n{}", state.next_player, state);

    let problem = TicTacToeProblem::new(state).with_banned_moves(args.banned.clone());
    let config = args.search_config(1)?;

    let results = run_attempts(
        &[],
        |s: &[usize]| problem.next_moves(s),
        |s: &[usize]| problem.fitness(s),
        &config,
        args.attempts,
    )?;

    let mut counts = [0usize; 9];
    for result in &results {
        if let Some(&first) = result.outcome.sequence.first() {
            counts[first] += 1;
        }
    }
    for (cell, &count) in counts.iter().enumerate() {
        if count > 0 {
            log::info!("   cell {}: chosen {} times", cell, count);
        }
    }

    Ok(BatchSummary::from_results(&results, |r| {
        r.outcome
            .sequence
            .first()
            .is_some_and(|m| !args.banned.contains(m))
    }))
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let log_level = args.debug_level.max(1);
    let _logger = match &args.log_dir {
        Some(directory) => setup_file_logging(log_level, directory)?,
        None => setup_logging(log_level)?,
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.workers)
        .build_global()?;

    log::info!(
        "🚀 {} v{}: {:?}, {} attempts on {} workers",
        sequence_mcts::NAME,
        sequence_mcts::VERSION,
        args.problem,
        args.attempts,
        args.workers
    );

    let summary = match args.problem {
        ProblemKind::Sum | ProblemKind::Monotonic => solve_digits(&args)?,
        ProblemKind::Tictactoe => solve_tictactoe(&args)?,
    };
    summary.log_summary();

    Ok(())
}

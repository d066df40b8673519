//! Tic-tac-toe as a sequence problem.
//!
//! A move is a board index 0-8 (row-major). A sequence is replayed from the
//! initial state with players alternating; its fitness is judged from the
//! optimised player's point of view, lower is better.

use crate::mcts::INVALID_FITNESS;
use std::fmt;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

const WIN_FITNESS: f64 = -10000.0;
const LOSS_FITNESS: f64 = 10000.0;
const DRAW_FITNESS: f64 = 0.0;
const BLOCK_FITNESS: f64 = -5000.0;
const CENTER_OPENING_FITNESS: f64 = -1000.0;
const OTHER_OPENING_FITNESS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Board position with the player to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeState {
    pub board: [Option<Player>; 9],
    pub next_player: Player,
    pub game_over: bool,
    /// Winner once the game is over, `None` for a draw or a running game
    pub winner: Option<Player>,
}

impl TicTacToeState {
    pub fn new(board: [Option<Player>; 9], next_player: Player) -> Self {
        let mut state = Self {
            board,
            next_player,
            game_over: false,
            winner: None,
        };
        state.check_game_over();
        state
    }

    pub fn empty(next_player: Player) -> Self {
        Self::new([None; 9], next_player)
    }

    /// Parses nine cells, `X`, `O` or `.` (whitespace ignored)
    pub fn from_cells(cells: &str, next_player: Player) -> Option<Self> {
        let mut board = [None; 9];
        let mut count = 0;
        for c in cells.chars().filter(|c| !c.is_whitespace()) {
            if count == 9 {
                return None;
            }
            board[count] = match c {
                'X' | 'x' => Some(Player::X),
                'O' | 'o' => Some(Player::O),
                '.' | '_' => None,
                _ => return None,
            };
            count += 1;
        }
        (count == 9).then(|| Self::new(board, next_player))
    }

    pub fn is_empty_board(&self) -> bool {
        self.board.iter().all(Option::is_none)
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.board[i].is_none()).collect()
    }

    /// Plays `position` for the player to move.
    ///
    /// Returns false, leaving the state untouched, for an occupied or
    /// out-of-range cell or a finished game.
    pub fn make_move(&mut self, position: usize) -> bool {
        if position > 8 || self.board[position].is_some() || self.game_over {
            return false;
        }

        self.board[position] = Some(self.next_player);
        self.next_player = self.next_player.opponent();
        self.check_game_over();
        true
    }

    /// Replays `moves` on a copy of this state, `None` if any move is illegal.
    pub fn replay(&self, moves: &[usize]) -> Option<Self> {
        let mut state = self.clone();
        moves.iter().all(|&m| state.make_move(m)).then_some(state)
    }

    pub fn has_line(&self, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.board[i] == Some(player)))
    }

    /// First empty cell completing a line for `player`.
    pub fn find_immediate_win(&self, player: Player) -> Option<usize> {
        self.empty_cells().into_iter().find(|&pos| {
            let mut probe = self.clone();
            probe.board[pos] = Some(player);
            probe.has_line(player)
        })
    }

    fn check_game_over(&mut self) {
        for player in [Player::X, Player::O] {
            if self.has_line(player) {
                self.game_over = true;
                self.winner = Some(player);
                return;
            }
        }
        if self.board.iter().all(Option::is_some) {
            self.game_over = true;
            self.winner = None;
        }
    }
}

impl fmt::Display for TicTacToeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.board.chunks(3) {
            let symbols: Vec<&str> = row
                .iter()
                .map(|cell| match cell {
                    Some(Player::X) => "X",
                    Some(Player::O) => "O",
                    None => ".",
                })
                .collect();
            writeln!(f, " {}", symbols.join(" "))?;
        }
        Ok(())
    }
}

/// Tic-tac-toe lookahead optimised for one player
#[derive(Debug, Clone)]
pub struct TicTacToeProblem {
    pub initial: TicTacToeState,
    pub player: Player,
    /// Cells never offered as candidates
    pub banned_moves: Vec<usize>,
    /// Offer only the winning or blocking move when one exists, and only the
    /// center on an empty board
    pub force_tactics: bool,
}

impl TicTacToeProblem {
    /// Problem for the player to move in `initial`, with forced tactics
    pub fn new(initial: TicTacToeState) -> Self {
        let player = initial.next_player;
        Self {
            initial,
            player,
            banned_moves: Vec::new(),
            force_tactics: true,
        }
    }

    pub fn with_banned_moves(mut self, banned_moves: Vec<usize>) -> Self {
        self.banned_moves = banned_moves;
        self
    }

    pub fn with_forced_tactics(mut self, force_tactics: bool) -> Self {
        self.force_tactics = force_tactics;
        self
    }

    fn is_allowed(&self, position: usize) -> bool {
        !self.banned_moves.contains(&position)
    }

    /// Legal continuations of `sequence`.
    pub fn next_moves(&self, sequence: &[usize]) -> Vec<usize> {
        let Some(state) = self.initial.replay(sequence) else {
            return Vec::new();
        };
        if state.game_over {
            return Vec::new();
        }

        if self.force_tactics {
            if sequence.is_empty() && state.is_empty_board() && self.is_allowed(CENTER) {
                return vec![CENTER];
            }
            let forced = state
                .find_immediate_win(state.next_player)
                .or_else(|| state.find_immediate_win(state.next_player.opponent()));
            if let Some(position) = forced.filter(|&p| self.is_allowed(p)) {
                return vec![position];
            }
        }

        state
            .empty_cells()
            .into_iter()
            .filter(|&p| self.is_allowed(p))
            .collect()
    }

    /// Fitness of `sequence` for the optimised player.
    ///
    /// Finished games score win/draw/loss; an opening move scores the center
    /// against the rest; a move blocking an opponent win scores as a block;
    /// anything else falls back to positional evaluation.
    pub fn fitness(&self, sequence: &[usize]) -> f64 {
        let Some((&last, before)) = sequence.split_last() else {
            return INVALID_FITNESS;
        };
        let Some(previous) = self.initial.replay(before) else {
            return INVALID_FITNESS;
        };
        let Some(state) = previous.replay(&[last]) else {
            return INVALID_FITNESS;
        };

        if state.game_over {
            return match state.winner {
                Some(winner) if winner == self.player => WIN_FITNESS,
                Some(_) => LOSS_FITNESS,
                None => DRAW_FITNESS,
            };
        }

        if sequence.len() == 1 && self.initial.is_empty_board() {
            return if last == CENTER {
                CENTER_OPENING_FITNESS
            } else {
                OTHER_OPENING_FITNESS
            };
        }

        let mover = previous.next_player;
        if mover == self.player && previous.find_immediate_win(mover.opponent()) == Some(last) {
            return BLOCK_FITNESS;
        }

        self.evaluate_position(&state)
    }

    /// Heuristic score of a running position, negative favours the player.
    pub fn evaluate_position(&self, state: &TicTacToeState) -> f64 {
        let mut score = 0.0;
        let own = Some(self.player);
        let theirs = Some(self.player.opponent());

        if state.board[CENTER] == own {
            score -= 100.0;
        }
        score -= 50.0 * CORNERS.iter().filter(|&&c| state.board[c] == own).count() as f64;

        for line in LINES {
            let mine = line.iter().filter(|&&i| state.board[i] == own).count();
            let other = line.iter().filter(|&&i| state.board[i] == theirs).count();
            let empty = 3 - mine - other;

            if other == 0 {
                if mine == 2 && empty == 1 {
                    score -= 300.0;
                } else if mine == 1 && empty == 2 {
                    score -= 30.0;
                }
            } else if mine == 0 && other == 2 && empty == 1 {
                score += 250.0;
            }
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn take_winning_move() -> TicTacToeState {
        TicTacToeState::from_cells("X.. XOO ...", Player::X).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let state = take_winning_move();
        assert_eq!(state.board[0], Some(Player::X));
        assert_eq!(state.board[5], Some(Player::O));
        assert_eq!(state.to_string(), " X . .\n X O O\n . . .\n");
        assert!(TicTacToeState::from_cells("XO", Player::X).is_none());
        assert!(TicTacToeState::from_cells("X........Z", Player::X).is_none());
    }

    #[test]
    fn test_make_move_and_win() {
        let mut state = take_winning_move();
        assert!(!state.make_move(0));
        assert!(state.make_move(6));
        assert!(state.game_over);
        assert_eq!(state.winner, Some(Player::X));
        assert!(!state.make_move(7));
    }

    #[test]
    fn test_draw_detection() {
        let state = TicTacToeState::from_cells("XOX XOO OXX", Player::X).unwrap();
        assert!(state.game_over);
        assert_eq!(state.winner, None);
    }

    #[test]
    fn test_find_immediate_win() {
        let state = take_winning_move();
        assert_eq!(state.find_immediate_win(Player::X), Some(6));
        assert_eq!(state.find_immediate_win(Player::O), None);
    }

    #[test]
    fn test_forced_moves() {
        let problem = TicTacToeProblem::new(take_winning_move());
        assert_eq!(problem.next_moves(&[]), vec![6]);

        let block = TicTacToeState::from_cells("XX. .O. ...", Player::O).unwrap();
        assert_eq!(TicTacToeProblem::new(block).next_moves(&[]), vec![2]);

        let empty = TicTacToeProblem::new(TicTacToeState::empty(Player::X));
        assert_eq!(empty.next_moves(&[]), vec![4]);
    }

    #[test]
    fn test_unforced_moves_respect_bans() {
        let problem = TicTacToeProblem::new(take_winning_move())
            .with_forced_tactics(false)
            .with_banned_moves(vec![1, 2]);
        assert_eq!(problem.next_moves(&[]), vec![6, 7, 8]);
    }

    #[test]
    fn test_illegal_or_finished_sequences_have_no_moves() {
        let problem = TicTacToeProblem::new(take_winning_move());
        assert!(problem.next_moves(&[0]).is_empty());
        assert!(problem.next_moves(&[6]).is_empty());
    }

    #[test]
    fn test_fitness_terminal_states() {
        let problem = TicTacToeProblem::new(take_winning_move());
        assert_eq!(problem.fitness(&[6]), WIN_FITNESS);
        assert_eq!(problem.fitness(&[]), INVALID_FITNESS);
        assert_eq!(problem.fitness(&[0]), INVALID_FITNESS);
        assert!(problem.fitness(&[7]) > WIN_FITNESS);
    }

    #[test]
    fn test_fitness_opening() {
        let problem = TicTacToeProblem::new(TicTacToeState::empty(Player::X));
        assert_eq!(problem.fitness(&[4]), CENTER_OPENING_FITNESS);
        assert_eq!(problem.fitness(&[0]), OTHER_OPENING_FITNESS);
    }

    #[test]
    fn test_fitness_block() {
        let block = TicTacToeState::from_cells("XX. .O. ...", Player::O).unwrap();
        let problem = TicTacToeProblem::new(block);
        assert_eq!(problem.fitness(&[2]), BLOCK_FITNESS);
        assert!(problem.fitness(&[8]) > BLOCK_FITNESS);
    }
}

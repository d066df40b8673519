use crate::mcts::INVALID_FITNESS;
use crate::problems::sequence_sum;

/// Ordering required between consecutive digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Monotonicity {
    /// Each digit greater than the previous one
    StrictlyIncreasing,
    /// Each digit at least the previous one
    NonDecreasing,
}

impl Monotonicity {
    fn allows(self, previous: u32, next: u32) -> bool {
        match self {
            Monotonicity::StrictlyIncreasing => next > previous,
            Monotonicity::NonDecreasing => next >= previous,
        }
    }
}

/// Digit-sum puzzle restricted to monotonic sequences
#[derive(Debug, Clone, PartialEq)]
pub struct MonotonicProblem {
    pub target_sum: u32,
    pub allowed_digits: Vec<u32>,
    pub length: usize,
    pub monotonicity: Monotonicity,
}

impl MonotonicProblem {
    pub fn new(
        target_sum: u32,
        allowed_digits: Vec<u32>,
        length: usize,
        monotonicity: Monotonicity,
    ) -> Self {
        Self {
            target_sum,
            allowed_digits,
            length,
            monotonicity,
        }
    }

    /// Allowed digits that keep the sequence ordered
    pub fn next_moves(&self, sequence: &[u32]) -> Vec<u32> {
        if sequence.len() >= self.length {
            return Vec::new();
        }

        match sequence.last() {
            None => self.allowed_digits.clone(),
            Some(&last) => self
                .allowed_digits
                .iter()
                .copied()
                .filter(|&digit| self.monotonicity.allows(last, digit))
                .collect(),
        }
    }

    pub fn is_ordered(&self, sequence: &[u32]) -> bool {
        sequence
            .windows(2)
            .all(|pair| self.monotonicity.allows(pair[0], pair[1]))
    }

    /// Squared distance to the target sum; invalid when the length is wrong
    /// or the ordering is broken
    pub fn fitness(&self, sequence: &[u32]) -> f64 {
        if sequence.len() != self.length || !self.is_ordered(sequence) {
            return INVALID_FITNESS;
        }
        let diff = f64::from(sequence_sum(sequence)) - f64::from(self.target_sum);
        diff * diff
    }
}

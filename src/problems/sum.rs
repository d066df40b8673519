use crate::mcts::INVALID_FITNESS;
use crate::problems::sequence_sum;

/// Fixed-length sequences of allowed digits whose sum should hit a target
#[derive(Debug, Clone, PartialEq)]
pub struct SumProblem {
    pub target_sum: u32,
    pub allowed_digits: Vec<u32>,
    pub length: usize,
}

impl SumProblem {
    pub fn new(target_sum: u32, allowed_digits: Vec<u32>, length: usize) -> Self {
        Self {
            target_sum,
            allowed_digits,
            length,
        }
    }

    /// Every allowed digit until the sequence reaches its length
    pub fn next_moves(&self, sequence: &[u32]) -> Vec<u32> {
        if sequence.len() >= self.length {
            return Vec::new();
        }
        self.allowed_digits.clone()
    }

    /// Squared distance to the target sum, invalid for any other length
    pub fn fitness(&self, sequence: &[u32]) -> f64 {
        if sequence.len() != self.length {
            return INVALID_FITNESS;
        }
        let diff = f64::from(sequence_sum(sequence)) - f64::from(self.target_sum);
        diff * diff
    }

    /// True when every element is an allowed digit
    pub fn uses_allowed_digits(&self, sequence: &[u32]) -> bool {
        sequence.iter().all(|d| self.allowed_digits.contains(d))
    }
}

/// Outcome of one search run
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<M> {
    /// Best complete sequence observed, or the fallback construction
    pub sequence: Vec<M>,
    /// Fitness of `sequence`
    pub fitness: f64,
    /// True when no iteration produced a complete sequence and the greedy
    /// fallback built the result
    pub from_fallback: bool,
    /// Iterations that created a child and backpropagated a playout
    pub expanded_iterations: usize,
    /// Simulations backpropagated through the root
    pub root_visits: usize,
    /// Nodes in the final tree, root included
    pub total_nodes: usize,
    /// Longest root-to-leaf chain of the final tree
    pub tree_depth: usize,
}

impl<M> SearchOutcome<M> {
    /// Consumes the outcome, keeping the sequence only
    pub fn into_sequence(self) -> Vec<M> {
        self.sequence
    }
}

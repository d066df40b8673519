//! Search tree nodes.
//!
//! A node stores the full move sequence leading to it from the root, the
//! statistics accumulated by backpropagation and the pool of moves that have
//! not been expanded yet. Parent and children are arena indices into the
//! owning [`Tree`](crate::mcts::tree::Tree), so the tree holds no reference
//! cycles.

/// Stable index of a node inside its tree arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root is always the first node of the arena.
    pub const ROOT: NodeId = NodeId(0);
}

/// A node in the sequence search tree
#[derive(Debug, Clone)]
pub struct Node<M> {
    /// Moves from the root to this node
    pub(crate) sequence: Vec<M>,

    /// Node that created this one (None for the root)
    pub(crate) parent: Option<NodeId>,

    /// Children in creation order
    pub(crate) children: Vec<NodeId>,

    /// Number of simulations backpropagated through this node
    pub(crate) visits: usize,

    /// Sum of every fitness value backpropagated through this node
    pub(crate) total_fitness: f64,

    /// Moves not yet expanded from this node, filled on first expansion
    pub(crate) untried_moves: Vec<M>,
}

impl<M> Node<M> {
    pub(crate) fn new(sequence: Vec<M>, parent: Option<NodeId>) -> Self {
        Node {
            sequence,
            parent,
            children: Vec::new(),
            visits: 0,
            total_fitness: 0.0,
            untried_moves: Vec::new(),
        }
    }

    pub fn sequence(&self) -> &[M] {
        &self.sequence
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn visits(&self) -> usize {
        self.visits
    }

    pub fn total_fitness(&self) -> f64 {
        self.total_fitness
    }

    /// Moves still waiting to be expanded from this node
    pub fn untried_moves(&self) -> &[M] {
        &self.untried_moves
    }

    /// Checks if this node is a leaf (no children)
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Adds one simulation outcome to the statistics.
    pub fn record_visit(&mut self, fitness: f64) {
        self.visits += 1;
        self.total_fitness += fitness;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_has_no_statistics() {
        let node: Node<u8> = Node::new(vec![1, 2], Some(NodeId::ROOT));

        assert_eq!(node.sequence(), &[1, 2]);
        assert_eq!(node.parent(), Some(NodeId::ROOT));
        assert_eq!(node.visits(), 0);
        assert_eq!(node.total_fitness(), 0.0);
        assert!(node.is_leaf());
        assert!(node.untried_moves().is_empty());
    }

    #[test]
    fn test_record_visit_accumulates() {
        let mut node: Node<u8> = Node::new(Vec::new(), None);

        node.record_visit(4.0);
        node.record_visit(2.0);

        assert_eq!(node.visits(), 2);
        assert_eq!(node.total_fitness(), 6.0);
    }
}

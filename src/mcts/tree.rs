//! Arena-allocated search tree.
//!
//! Nodes live in a `Vec<Node<M>>` and reference each other by [`NodeId`].
//! Nodes are never removed, so every id handed out stays valid for the
//! lifetime of the tree.
//!
//! A tree is owned by exactly one search and mutated from a single thread;
//! it carries no internal locking. Independent searches build independent
//! trees.

use crate::mcts::node::{Node, NodeId};

#[derive(Debug, Clone)]
pub struct Tree<M> {
    nodes: Vec<Node<M>>,
}

impl<M: Clone> Tree<M> {
    /// Create a tree whose root holds the initial sequence.
    pub fn new(initial_sequence: Vec<M>) -> Self {
        Self {
            nodes: vec![Node::new(initial_sequence, None)],
        }
    }

    /// Get a reference to a node by ID.
    ///
    /// # Panics
    /// Panics if the NodeId does not belong to this tree.
    pub fn get(&self, id: NodeId) -> &Node<M> {
        &self.nodes[id.0]
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<M> {
        &mut self.nodes[id.0]
    }

    pub fn root(&self) -> &Node<M> {
        self.get(NodeId::ROOT)
    }

    /// Total number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length of the longest root-to-leaf chain (0 for a lone root).
    ///
    /// Every edge appends exactly one move, so a node's depth is its sequence
    /// length minus the root's.
    pub fn depth(&self) -> usize {
        let root_len = self.root().sequence.len();
        self.nodes
            .iter()
            .map(|node| node.sequence.len() - root_len)
            .max()
            .unwrap_or(0)
    }

    /// Appends `mv` to the parent's sequence and registers the new node as
    /// the parent's last child.
    pub fn create_child(&mut self, parent: NodeId, mv: M) -> NodeId {
        let mut sequence = Vec::with_capacity(self.get(parent).sequence.len() + 1);
        sequence.extend_from_slice(&self.get(parent).sequence);
        sequence.push(mv);

        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(sequence, Some(parent)));
        self.get_mut(parent).children.push(id);
        id
    }

    /// Reports whether the node still has moves to expand.
    ///
    /// An empty pool is refilled from `next_moves` first, so a node whose
    /// pool was exhausted is offered a fresh set of candidates.
    pub fn is_expandable<G>(&mut self, id: NodeId, next_moves: &G) -> bool
    where
        G: Fn(&[M]) -> Vec<M>,
    {
        let node = self.get_mut(id);
        if node.untried_moves.is_empty() {
            node.untried_moves = next_moves(&node.sequence);
        }
        !node.untried_moves.is_empty()
    }

    pub fn record_visit(&mut self, id: NodeId, fitness: f64) {
        self.get_mut(id).record_visit(fitness);
    }

    /// Iterates from `id` up to the root, both included.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, M> {
        Ancestors {
            tree: self,
            next: Some(id),
        }
    }
}

/// Iterator over a node and its ancestors, see [`Tree::ancestors`].
pub struct Ancestors<'a, M> {
    tree: &'a Tree<M>,
    next: Option<NodeId>,
}

impl<M: Clone> Iterator for Ancestors<'_, M> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.get(current).parent;
        Some(current)
    }
}

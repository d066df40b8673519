//! UCT selection for fitness minimization.
//!
//! Lower fitness is better, so the confidence term is subtracted from the
//! mean instead of added:
//!
//! `score = total_fitness / visits - c × sqrt(ln(N_parent) / visits)`
//!
//! The child with the lowest score is followed.

use crate::mcts::config::Termination;
use crate::mcts::node::NodeId;
use crate::mcts::tree::Tree;
use crate::mcts::INVALID_FITNESS;

/// Scores a node for selection.
///
/// # Arguments
/// * `visits` - Visits of the node being scored
/// * `total_fitness` - Accumulated fitness of the node being scored
/// * `parent_visits` - Visits of its parent
/// * `exploration_constant` - Weight of the exploration term
///
/// # Returns
/// `f64::NEG_INFINITY` for an unvisited node, so it always wins against
/// visited siblings.
pub fn uct_score(
    visits: usize,
    total_fitness: f64,
    parent_visits: usize,
    exploration_constant: f64,
) -> f64 {
    if visits == 0 {
        return f64::NEG_INFINITY;
    }

    let visits = visits as f64;
    let exploitation = total_fitness / visits;
    let exploration = exploration_constant * ((parent_visits as f64).ln() / visits).sqrt();
    exploitation - exploration
}

/// Picks the child with the strictly lowest UCT score.
///
/// The first child reaching the minimum wins ties. Children scoring at or
/// above [`INVALID_FITNESS`] are never picked.
pub fn select_best_child<M: Clone>(
    tree: &Tree<M>,
    id: NodeId,
    exploration_constant: f64,
) -> Option<NodeId> {
    let node = tree.get(id);
    let mut best_score = INVALID_FITNESS;
    let mut best = None;

    for &child_id in node.children() {
        let child = tree.get(child_id);
        let score = uct_score(
            child.visits(),
            child.total_fitness(),
            node.visits(),
            exploration_constant,
        );
        if score < best_score {
            best_score = score;
            best = Some(child_id);
        }
    }

    best
}

/// Descends from the root to the frontier node.
///
/// Stops at the first node that is complete, has no children, still holds
/// untried moves, or has no selectable child.
///
/// The untried-moves guard departs from the plain "descend while the node is
/// incomplete and has children" loop: with that loop the root's first child
/// is followed as soon as it exists and the tree grows as a single chain.
/// Here every candidate of a node is expanded before descending below it.
pub fn select<M: Clone>(
    tree: &Tree<M>,
    termination: &Termination<'_, M>,
    exploration_constant: f64,
) -> NodeId {
    let mut current = NodeId::ROOT;

    loop {
        let node = tree.get(current);
        if termination.is_complete(node.sequence())
            || node.is_leaf()
            || !node.untried_moves().is_empty()
        {
            break;
        }

        match select_best_child(tree, current, exploration_constant) {
            Some(child) => current = child,
            None => break,
        }
    }

    current
}

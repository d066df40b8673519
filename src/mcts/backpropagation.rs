use crate::mcts::node::NodeId;
use crate::mcts::tree::Tree;

/// Backpropagates a fitness value from a node to the root
///
/// Every node on the path, both ends included, receives the raw value:
/// no discounting, no decay.
pub fn backpropagate<M: Clone>(tree: &mut Tree<M>, from: NodeId, fitness: f64) {
    let path: Vec<NodeId> = tree.ancestors(from).collect();
    for id in path {
        tree.record_visit(id, fitness);
    }
}

//! Expansion: grows the tree by one child of the frontier node.

use crate::mcts::node::NodeId;
use crate::mcts::tree::Tree;
use rand::{Rng, RngExt};

/// Draws one untried move uniformly at random and creates the matching child.
///
/// The pool is refilled from `next_moves` when empty. The drawn move is
/// swap-removed, so the order of the remaining pool is not preserved.
///
/// # Returns
/// The new child, or `None` when the node has no legal continuation.
pub fn expand<M, G, R>(
    tree: &mut Tree<M>,
    id: NodeId,
    next_moves: &G,
    rng: &mut R,
) -> Option<NodeId>
where
    M: Clone,
    G: Fn(&[M]) -> Vec<M>,
    R: Rng,
{
    if !tree.is_expandable(id, next_moves) {
        return None;
    }

    let pool = &mut tree.get_mut(id).untried_moves;
    let move_index = rng.random_range(0..pool.len());
    let mv = pool.swap_remove(move_index);

    Some(tree.create_child(id, mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn digits(_: &[u8]) -> Vec<u8> {
        vec![1, 2, 3]
    }

    #[test]
    fn test_expand_creates_fresh_child() {
        let mut tree: Tree<u8> = Tree::new(vec![9]);
        let mut rng = StdRng::seed_from_u64(7);

        let child = expand(&mut tree, NodeId::ROOT, &digits, &mut rng).unwrap();
        let node = tree.get(child);

        assert_eq!(node.sequence().len(), 2);
        assert_eq!(node.sequence()[0], 9);
        assert!([1, 2, 3].contains(&node.sequence()[1]));
        assert_eq!(node.visits(), 0);
        assert_eq!(node.total_fitness(), 0.0);
        assert!(node.untried_moves().is_empty());
        assert_eq!(tree.root().untried_moves().len(), 2);
    }

    #[test]
    fn test_expand_exhausts_each_move_once() {
        let mut tree: Tree<u8> = Tree::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(1);

        let mut drawn: Vec<u8> = (0..3)
            .map(|_| {
                let child = expand(&mut tree, NodeId::ROOT, &digits, &mut rng).unwrap();
                tree.get(child).sequence()[0]
            })
            .collect();
        drawn.sort_unstable();

        assert_eq!(drawn, vec![1, 2, 3]);
        assert!(tree.root().untried_moves().is_empty());
    }

    #[test]
    fn test_expand_refills_exhausted_pool() {
        let mut tree: Tree<u8> = Tree::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..4 {
            assert!(expand(&mut tree, NodeId::ROOT, &digits, &mut rng).is_some());
        }
        assert_eq!(tree.root().children().len(), 4);
        assert_eq!(tree.root().untried_moves().len(), 2);
    }

    #[test]
    fn test_expand_dead_end() {
        let mut tree: Tree<u8> = Tree::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(0);

        let expanded = expand(&mut tree, NodeId::ROOT, &|_: &[u8]| Vec::new(), &mut rng);
        assert!(expanded.is_none());
        assert_eq!(tree.node_count(), 1);
    }
}

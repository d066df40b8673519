use crate::mcts::config::Termination;
use rand::{Rng, RngExt};

/// Random playout from `sequence` until it is complete or reaches a dead end.
///
/// Each step appends one candidate chosen uniformly at random. A dead end
/// returns a sequence shorter than completion requires.
pub fn simulate<M, G, R>(
    sequence: &[M],
    next_moves: &G,
    termination: &Termination<'_, M>,
    rng: &mut R,
) -> Vec<M>
where
    M: Clone,
    G: Fn(&[M]) -> Vec<M>,
    R: Rng,
{
    let mut simulated = sequence.to_vec();

    while !termination.is_complete(&simulated) {
        let mut moves = next_moves(&simulated);
        if moves.is_empty() {
            break;
        }
        let move_index = rng.random_range(0..moves.len());
        simulated.push(moves.swap_remove(move_index));
    }

    simulated
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_playout_reaches_target_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let termination = Termination::FixedLength(5);

        let played = simulate(&[4u8], &|_: &[u8]| vec![1, 2], &termination, &mut rng);

        assert_eq!(played.len(), 5);
        assert_eq!(played[0], 4);
        assert!(played[1..].iter().all(|m| *m == 1 || *m == 2));
    }

    #[test]
    fn test_playout_stops_at_dead_end() {
        let mut rng = StdRng::seed_from_u64(11);
        let termination = Termination::FixedLength(10);
        let limited = |seq: &[u8]| if seq.len() < 3 { vec![0] } else { Vec::new() };

        let played = simulate::<u8, _, _>(&[], &limited, &termination, &mut rng);
        assert_eq!(played, vec![0, 0, 0]);
    }

    #[test]
    fn test_playout_on_complete_sequence_is_identity() {
        let mut rng = StdRng::seed_from_u64(11);
        let termination = Termination::FixedLength(2);

        let played = simulate(&[1u8, 2], &|_: &[u8]| vec![9], &termination, &mut rng);
        assert_eq!(played, vec![1, 2]);
    }

    #[test]
    fn test_playout_with_predicate() {
        let mut rng = StdRng::seed_from_u64(5);
        let termination: Termination<'_, u8> = Termination::Predicate(Box::new(|seq: &[u8]| {
            seq.iter().map(|&m| u32::from(m)).sum::<u32>() >= 10
        }));

        let played = simulate::<u8, _, _>(&[], &|_: &[u8]| vec![1, 3], &termination, &mut rng);
        let sum: u32 = played.iter().map(|&m| u32::from(m)).sum();
        assert!(sum >= 10);
        assert!(sum <= 12);
    }

    #[test]
    fn test_same_seed_same_playout() {
        let termination = Termination::FixedLength(8);
        let moves = |_: &[u8]| vec![1, 2, 3, 4, 5];

        let mut first_rng = StdRng::seed_from_u64(99);
        let mut second_rng = StdRng::seed_from_u64(99);
        let first = simulate::<u8, _, _>(&[], &moves, &termination, &mut first_rng);
        let second = simulate::<u8, _, _>(&[], &moves, &termination, &mut second_rng);
        assert_eq!(first, second);
    }
}

use crate::mcts::config::Termination;

/// Greedy deterministic construction used when the search recorded no best
/// sequence: always appends the first candidate returned by `next_moves`.
///
/// Independent of any random state, so identical inputs give identical output.
pub fn build_sequence<M, G>(
    initial: &[M],
    next_moves: &G,
    termination: &Termination<'_, M>,
) -> Vec<M>
where
    M: Clone,
    G: Fn(&[M]) -> Vec<M>,
{
    let mut sequence = initial.to_vec();

    while !termination.is_complete(&sequence) {
        match next_moves(&sequence).into_iter().next() {
            Some(mv) => sequence.push(mv),
            None => break,
        }
    }

    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_first_candidate() {
        let termination = Termination::FixedLength(3);
        let moves = |seq: &[u8]| vec![seq.len() as u8 * 10, 1];
        let built = build_sequence(&[0u8], &moves, &termination);
        assert_eq!(built, vec![0, 10, 20]);
    }

    #[test]
    fn test_stops_at_dead_end() {
        let termination = Termination::FixedLength(4);
        let strictly_increasing = |seq: &[u8]| {
            let last = seq.last().copied().unwrap_or(0);
            [1u8, 2].into_iter().filter(|&d| d > last).collect::<Vec<_>>()
        };

        let built = build_sequence::<u8, _>(&[], &strictly_increasing, &termination);
        assert_eq!(built, vec![1, 2]);
    }

    #[test]
    fn test_is_deterministic() {
        let termination = Termination::FixedLength(6);
        let moves = |seq: &[u8]| vec![(seq.len() % 3) as u8, 7];

        let first = build_sequence::<u8, _>(&[], &moves, &termination);
        let second = build_sequence::<u8, _>(&[], &moves, &termination);
        assert_eq!(first, second);
        assert_eq!(first, vec![0, 1, 2, 0, 1, 2]);
    }
}

use crate::alphabet::{ALPHABET, AlphabetError};
use crate::iterator::{MAX_POOL_SIZE, PermutationIterator, PermutationState};

fn count_permutations(n: usize, k: usize) -> usize {
    (n - k + 1..=n).product()
}

#[test]
fn iterator_yields_lexicographic_order() {
    let perms: Vec<String> = PermutationIterator::over(vec!['a', 'b', 'c'], 2)
        .map(|iter| iter.map(|p| p.into_iter().collect()).collect())
        .unwrap_or_default();
    assert_eq!(perms, vec!["ab", "ac", "ba", "bc", "ca", "cb"]);
}

#[test]
fn iterator_full_length_over_small_pool() {
    let perms: Vec<String> = PermutationIterator::over(vec!['1', '2', '3'], 3)
        .map(|iter| iter.map(|p| p.into_iter().collect()).collect())
        .unwrap_or_default();
    assert_eq!(perms, vec!["123", "132", "213", "231", "312", "321"]);
}

#[test]
fn iterator_counts_match_falling_factorial() {
    for length in 1..=4 {
        let iter = PermutationIterator::new(length);
        assert!(iter.is_ok());
        if let Ok(iter) = iter {
            assert_eq!(iter.count(), count_permutations(14, length));
        }
    }
}

#[test]
fn iterator_starts_and_ends_with_alphabet_extremes() {
    let iter = PermutationIterator::new(3);
    assert!(iter.is_ok());
    if let Ok(iter) = iter {
        let perms: Vec<Vec<char>> = iter.collect();
        assert_eq!(perms.first(), Some(&vec!['0', '1', '2']));
        assert_eq!(perms.last(), Some(&vec!['/', '*', '-']));
    }
}

#[test]
fn iterator_never_repeats_symbols() {
    let iter = PermutationIterator::new(3);
    assert!(iter.is_ok());
    if let Ok(iter) = iter {
        for perm in iter {
            assert_eq!(perm.len(), 3);
            for (i, a) in perm.iter().enumerate() {
                assert!(!perm.iter().skip(i + 1).any(|b| b == a));
            }
        }
    }
}

#[test]
fn iterator_rejects_impossible_lengths() {
    assert!(PermutationIterator::new(0).is_err());
    assert!(PermutationIterator::new(15).is_err());
}

#[test]
fn iterator_is_restartable() {
    let first: Vec<Vec<char>> = PermutationIterator::over(vec!['x', 'y', 'z'], 2)
        .map(|iter| iter.collect())
        .unwrap_or_default();
    let second: Vec<Vec<char>> = PermutationIterator::over(vec!['x', 'y', 'z'], 2)
        .map(|iter| iter.collect())
        .unwrap_or_default();
    assert_eq!(first.len(), 6);
    assert_eq!(first, second);
}

#[test]
fn leading_slices_concatenate_to_full_sequence() {
    let full: Vec<Vec<char>> = PermutationIterator::new(3)
        .map(|iter| iter.collect())
        .unwrap_or_default();

    let mut sliced = Vec::new();
    for leading in 0..ALPHABET.len() {
        if let Ok(iter) = PermutationIterator::with_leading(3, leading) {
            sliced.extend(iter);
        }
    }

    assert!(!full.is_empty());
    assert_eq!(full, sliced);
}

#[test]
fn leading_slice_of_length_one_is_single_symbol() {
    let perms: Vec<Vec<char>> = PermutationIterator::with_leading(1, 10)
        .map(|iter| iter.collect())
        .unwrap_or_default();
    assert_eq!(perms, vec![vec!['+']]);
}

#[test]
fn state_with_invalid_prefix_is_exhausted() {
    let state = PermutationState::with_prefix(3, 2, &[1, 1]);
    assert!(state.exhausted);
    let state = PermutationState::with_prefix(3, 2, &[5]);
    assert!(state.exhausted);
}

#[test]
fn state_advance_reports_exhaustion() {
    let mut state = PermutationState::new(2, 2);
    state.fill();
    assert_eq!(state.chosen, vec![0, 1]);
    assert!(state.advance());
    assert_eq!(state.chosen, vec![1, 0]);
    assert!(!state.advance());
    assert!(state.exhausted);
}

fn wide_pool(size: u32) -> Vec<char> {
    (0..size).filter_map(|i| char::from_u32(0x100 + i)).collect()
}

#[test]
fn iterator_over_pool_wider_than_32_symbols() {
    let count = PermutationIterator::over(wide_pool(40), 1).map(|iter| iter.count());
    assert_eq!(count, Ok(40));

    let count = PermutationIterator::over(wide_pool(40), 2).map(|iter| iter.count());
    assert_eq!(count, Ok(40 * 39));
}

#[test]
fn iterator_over_reaches_high_pool_indices() {
    let last = PermutationIterator::over(wide_pool(MAX_POOL_SIZE as u32), 1)
        .ok()
        .and_then(|iter| iter.last());
    assert_eq!(last, wide_pool(MAX_POOL_SIZE as u32).last().map(|c| vec![*c]));
}

#[test]
fn iterator_over_rejects_oversized_pool() {
    let size = MAX_POOL_SIZE + 1;
    assert!(matches!(
        PermutationIterator::over(wide_pool(size as u32), 1),
        Err(AlphabetError::PoolTooLarge { size: s, max }) if s == size && max == MAX_POOL_SIZE
    ));
}

#[test]
fn state_with_prefix_over_wide_pool() {
    let mut state = PermutationState::with_prefix(40, 2, &[35]);
    assert!(!state.exhausted);
    state.fill();
    assert_eq!(state.chosen, vec![35, 0]);
    let mut count = 1;
    while state.advance() {
        count += 1;
    }
    assert_eq!(count, 39);
}

#[test]
fn state_with_prefix_on_untrackable_pool_is_exhausted() {
    let state = PermutationState::with_prefix(MAX_POOL_SIZE + 10, 2, &[MAX_POOL_SIZE + 5]);
    assert!(state.exhausted);
    assert!(state.chosen.is_empty());
}

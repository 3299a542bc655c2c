//! Concrete quadruple search scenarios.

use super::common::{as_arrays, canonical, DIGITS_TO_30};
use quadsift::{find_quadruples, find_quadruples_pruned, InvariantError, SearchBound};

#[test]
fn test_digits_to_30_in_order() {
    assert_eq!(as_arrays(find_quadruples(0, 9, 30)), DIGITS_TO_30.to_vec());
}

#[test]
fn test_canonical_forms_appear_exactly_once() {
    let found = as_arrays(find_quadruples(0, 9, 30));

    for unsorted in [[9, 9, 9, 3], [3, 9, 9, 9], [7, 8, 8, 7]] {
        let key = canonical(unsorted);
        let hits = found.iter().filter(|&&q| q == key).count();
        assert_eq!(hits, 1, "{:?} (canonical {:?}) found {} times", unsorted, key, hits);
    }
}

#[test]
fn test_unsorted_forms_never_emitted() {
    let found = as_arrays(find_quadruples(0, 9, 30));
    assert!(!found.contains(&[9, 9, 9, 3]));
    assert!(!found.contains(&[7, 8, 8, 7]));
}

#[test]
fn test_target_999_is_empty() {
    assert_eq!(find_quadruples(0, 9, 999).count(), 0);
}

#[test]
fn test_boundary_targets() {
    assert_eq!(as_arrays(find_quadruples(0, 9, 0)), vec![[0, 0, 0, 0]]);
    assert_eq!(as_arrays(find_quadruples(0, 9, 36)), vec![[9, 9, 9, 9]]);
    assert_eq!(find_quadruples(0, 9, 37).count(), 0);
}

#[test]
fn test_inverted_bounds_empty_or_error() {
    assert_eq!(find_quadruples(9, 0, 30).count(), 0);

    let bound = SearchBound::new(9, 0, 30);
    assert_eq!(bound.quadruples().count(), 0);
    assert_eq!(
        bound.validate(),
        Err(InvariantError::InvalidRange { low: 9, high: 0 })
    );
}

#[test]
fn test_repeated_calls_identical() {
    let first = as_arrays(find_quadruples(0, 9, 30));
    for _ in 0..5 {
        assert_eq!(as_arrays(find_quadruples(0, 9, 30)), first);
    }
}

#[test]
fn test_pruned_agrees_on_every_digit_target() {
    for target in -1..=40 {
        assert_eq!(
            as_arrays(find_quadruples_pruned(0, 9, target)),
            as_arrays(find_quadruples(0, 9, target)),
            "target {}",
            target
        );
    }
}

#[test]
fn test_lazy_take_does_not_need_whole_space() {
    let first_two = as_arrays(find_quadruples(0, 9, 30).take(2));
    assert_eq!(first_two, DIGITS_TO_30[..2].to_vec());
}

#[test]
fn test_total_count_over_all_digit_targets() {
    // Multisets of size 4 over 10 digits: C(13, 4)
    let total: usize = (0..=36).map(|t| find_quadruples(0, 9, t).count()).sum();
    assert_eq!(total, 715);
}

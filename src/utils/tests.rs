use crate::utils::{is_achievable, max_achievable_sum, min_achievable_sum};

#[test]
fn test_min_achievable_sum() {
    assert_eq!(min_achievable_sum(0), Some(0));
    assert_eq!(min_achievable_sum(1), Some(1));
    assert_eq!(min_achievable_sum(3), Some(6));
    assert_eq!(min_achievable_sum(4), Some(10));
    assert_eq!(min_achievable_sum(9), Some(45));
}

#[test]
fn test_max_achievable_sum() {
    assert_eq!(max_achievable_sum(0), Some(0));
    assert_eq!(max_achievable_sum(1), Some(9));
    assert_eq!(max_achievable_sum(2), Some(17));
    assert_eq!(max_achievable_sum(3), Some(24));
    assert_eq!(max_achievable_sum(9), Some(45));
}

#[test]
fn test_bounds_outside_universe() {
    assert_eq!(min_achievable_sum(-1), None);
    assert_eq!(min_achievable_sum(10), None);
    assert_eq!(max_achievable_sum(-3), None);
    assert_eq!(max_achievable_sum(10), None);
}

#[test]
fn test_bounds_are_ordered() {
    for count in 0..=9 {
        if let (Some(min), Some(max)) = (min_achievable_sum(count), max_achievable_sum(count)) {
            assert!(min <= max, "bounds inverted for count {}", count);
        } else {
            panic!("bounds missing for count {}", count);
        }
    }
}

#[test]
fn test_is_achievable() {
    assert!(is_achievable(3, 7));
    assert!(is_achievable(3, 6));
    assert!(is_achievable(3, 24));
    assert!(is_achievable(2, 17));
    assert!(is_achievable(9, 45));
    assert!(is_achievable(0, 0));

    assert!(!is_achievable(3, 5));
    assert!(!is_achievable(3, 25));
    assert!(!is_achievable(2, 18));
    assert!(!is_achievable(4, 1));
    assert!(!is_achievable(0, 3));
}

#[test]
fn test_is_achievable_outside_universe() {
    assert!(!is_achievable(-1, 5));
    assert!(!is_achievable(10, 20));
    assert!(!is_achievable(3, -4));
    assert!(!is_achievable(i32::MIN, i32::MIN));
    assert!(!is_achievable(i32::MAX, i32::MAX));
}

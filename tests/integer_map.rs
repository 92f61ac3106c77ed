use simstate::{IntegerMap, IntegerMapPair};

fn pairs(input: &[(u32, u32)]) -> Vec<IntegerMapPair> {
    input
        .iter()
        .map(|&(key, value)| IntegerMapPair { key, value })
        .collect()
}

#[test]
fn membership_matches_construction_input_exactly() {
    let map = IntegerMap::new(&pairs(&[(0, 10), (3, 11), (7, 12), (100, 13)]));

    assert_eq!(map.len(), 4);
    assert!(map.contains(0));
    assert!(map.contains(3));
    assert!(map.contains(7));
    assert!(map.contains(100));

    for absent in [1, 2, 4, 5, 6, 99, 101, 100_000] {
        assert!(!map.contains(absent), "key {absent} should be absent");
    }
}

#[test]
fn checked_lookup_returns_paired_values() {
    let map = IntegerMap::new(&pairs(&[(5, 50), (6, 60), (7, 70)]));

    assert_eq!(map.get(5), Some(50));
    assert_eq!(map.get(6), Some(60));
    assert_eq!(map.get(7), Some(70));
    assert_eq!(map.get(8), None);
}

#[test]
fn unchecked_lookup_agrees_with_checked_for_present_keys() {
    let input: Vec<(u32, u32)> = (0..64).map(|i| (i * 3, i)).collect();
    let map = IntegerMap::new(&pairs(&input));

    for &(key, value) in &input {
        assert!(map.contains(key));
        assert_eq!(map.get_unchecked(key), value);
        assert_eq!(map.get(key), Some(value));
    }
}

#[test]
fn construction_is_deterministic_for_identical_input() {
    let input = pairs(&[(1, 1), (9, 2), (17, 3), (33, 4), (65, 5)]);

    let a = IntegerMap::new(&input);
    let b = IntegerMap::new(&input);

    for key in 0..128 {
        assert_eq!(a.contains(key), b.contains(key));
        assert_eq!(a.get(key), b.get(key));
    }
}

#[test]
fn colliding_keys_all_remain_reachable() {
    // Keys spaced by large powers of two tend to collide under a
    // multiplicative hash once masked; all must still resolve.
    let input: Vec<(u32, u32)> = (0..32).map(|i| (i << 16, i)).collect();
    let map = IntegerMap::new(&pairs(&input));

    for &(key, value) in &input {
        assert_eq!(map.get(key), Some(value));
    }
}

#[test]
fn empty_map_reports_nothing() {
    let map = IntegerMap::new(&[]);

    assert!(map.is_empty());
    assert!(!map.contains(0));
    assert_eq!(map.get(0), None);
}

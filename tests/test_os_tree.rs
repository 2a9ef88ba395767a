use dynamic_order_statistics::counter::Tally;
use dynamic_order_statistics::datagen::{self, Order};
use dynamic_order_statistics::OsTree;
use rand::{Rng, SeedableRng, XorShiftRng};

const NUM_OF_OPERATIONS: usize = 10_000;

fn rng() -> XorShiftRng {
    SeedableRng::from_seed([1, 1, 1, 1])
}

#[test]
fn int_test_select_then_delete_eleven() {
    let mut tree = OsTree::build(11);
    assert_eq!(tree.select(5), Ok(5));

    assert_eq!(tree.delete(5), Ok(Some(5)));
    assert_eq!(tree.select(5), Ok(6));
    assert_eq!(tree.len(), 10);
    assert!(tree.check_invariants().is_ok());
}

#[test]
fn int_test_build_keys() {
    for n in 0..200 {
        let tree = OsTree::build(n);
        assert_eq!(tree.len(), n);
        assert!(tree.check_invariants().is_ok());
        assert_eq!(tree.iter().collect::<Vec<i64>>(), (1..=n as i64).collect::<Vec<i64>>());
        assert_eq!(tree.traverse().count(), n);
    }
}

#[test]
fn int_test_delete_then_reselect() {
    let n = 100;
    for rank in 1..=n {
        let mut tree = OsTree::build(n);
        assert_eq!(tree.delete(rank), Ok(Some(rank as i64)));
        assert_eq!(tree.len(), n - 1);
        assert!(tree.check_invariants().is_ok());

        let expected = (1..=n as i64)
            .filter(|key| *key != rank as i64)
            .collect::<Vec<i64>>();
        for (index, key) in expected.iter().enumerate() {
            assert_eq!(tree.select(index + 1), Ok(*key));
        }
    }
}

#[test]
fn int_test_random_select_delete() {
    let mut rng = rng();
    let mut tree = OsTree::build(NUM_OF_OPERATIONS);
    let mut expected = (1..=NUM_OF_OPERATIONS as i64).collect::<Vec<i64>>();

    for i in (0..NUM_OF_OPERATIONS).rev() {
        let rank = rng.gen_range(1, i + 2);
        assert_eq!(tree.select(rank), Ok(expected[rank - 1]));
        assert_eq!(tree.delete(rank), Ok(Some(expected.remove(rank - 1))));
        assert_eq!(tree.len(), expected.len());
        if i % 97 == 0 {
            assert!(tree.check_invariants().is_ok());
        }
    }

    assert!(tree.is_empty());
    assert_eq!(tree.delete(1), Ok(None));
}

#[test]
fn int_test_random_select_delete_small() {
    let mut rng = rng();
    for n in 1..40 {
        let mut tree = OsTree::build(n);
        while !tree.is_empty() {
            let rank = rng.gen_range(1, tree.len() + 1);
            let key = tree.select(rank).unwrap();
            assert_eq!(tree.delete(rank), Ok(Some(key)));
            assert!(tree.check_invariants().is_ok());
        }
    }
}

#[test]
fn int_test_arbitrary_keys() {
    let mut rng = rng();
    let keys =
        datagen::fill(&mut rng, 2_000, -1_000_000, 1_000_000, true, Order::Ascending).unwrap();
    let mut tree = OsTree::from_sorted(&keys).unwrap();
    let mut expected = keys.clone();

    assert_eq!(tree.min(), expected.first().cloned());
    assert_eq!(tree.max(), expected.last().cloned());

    while !expected.is_empty() {
        let rank = rng.gen_range(1, expected.len() + 1);
        assert_eq!(tree.delete(rank), Ok(Some(expected.remove(rank - 1))));
    }
    assert!(tree.check_invariants().is_ok());
    assert!(tree.is_empty());
}

#[test]
fn int_test_select_idempotent() {
    let mut rng = rng();
    let tree = OsTree::build(1_000);
    let before = tree.to_string();
    for _ in 0..NUM_OF_OPERATIONS {
        let rank = rng.gen_range(1, 1_001);
        assert_eq!(tree.select(rank), Ok(rank as i64));
    }
    assert_eq!(tree.to_string(), before);
}

#[test]
fn int_test_counted_operations_match_plain() {
    let mut rng = rng();
    let mut counted = OsTree::build(500);
    let mut plain = OsTree::build(500);
    let mut tally = Tally::new();

    while !plain.is_empty() {
        let rank = rng.gen_range(1, plain.len() + 1);
        assert_eq!(counted.select_with(rank, &mut tally), plain.select(rank));
        assert_eq!(counted.delete_with(rank, &mut tally), plain.delete(rank));
    }
    assert!(counted.is_empty());
    assert!(tally.total() > 0);
}

#[test]
fn int_test_repeated_min_deletes() {
    let mut tree = OsTree::build(1_023);
    assert_eq!(tree.height(), 10);
    for _ in 0..511 {
        tree.delete(1).unwrap();
    }
    assert_eq!(tree.len(), 512);
    assert!(tree.check_invariants().is_ok());
    assert_eq!(tree.iter().next(), Some(512));
}

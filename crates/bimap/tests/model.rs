#![forbid(unsafe_code)]

use bimap::index::KeyIndex;
use bimap::{BiMap, HashedIndex, OrderedIndex, Side};
use proptest::collection::vec;
use proptest::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    Insert(u8, u8),
    EraseFirst(u8),
    EraseSecond(u8),
    EraseNth(usize),
    EraseRange(usize, usize),
    RetainEven,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..16u8, 0..16u8).prop_map(|(a, b)| Op::Insert(a, b)),
        2 => (0..16u8).prop_map(Op::EraseFirst),
        2 => (0..16u8).prop_map(Op::EraseSecond),
        2 => (0..20usize).prop_map(Op::EraseNth),
        1 => (0..20usize, 0..20usize).prop_map(|(i, j)| Op::EraseRange(i.min(j), i.max(j))),
        1 => Just(Op::RetainEven),
        1 => Just(Op::Clear),
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Order {
    Sorted,
    Insertion,
}

/// Plain two-map model plus the first keys in insertion order.
#[derive(Debug, Default)]
struct Model {
    forward: HashMap<u8, u8>,
    reverse: HashMap<u8, u8>,
    inserted: Vec<u8>,
}

impl Model {
    fn remove_first(&mut self, first: u8) -> Option<u8> {
        let second = self.forward.remove(&first)?;
        self.reverse.remove(&second);
        self.inserted.retain(|key| *key != first);
        Some(second)
    }

    fn expected_order(&self, order: Order) -> Vec<u8> {
        let mut firsts = self.inserted.clone();
        if order == Order::Sorted {
            firsts.sort_unstable();
        }
        firsts
    }
}

fn firsts<F, R>(map: &BiMap<u8, u8, F, R>) -> Vec<u8>
where
    F: KeyIndex<u8>,
    R: KeyIndex<u8>,
{
    map.iter().map(|(first, _)| *first).collect()
}

fn apply<F, R>(map: &mut BiMap<u8, u8, F, R>, model: &mut Model, op: &Op)
where
    F: KeyIndex<u8>,
    R: KeyIndex<u8>,
{
    match *op {
        Op::Insert(a, b) => {
            let first_taken = model.forward.contains_key(&a);
            let second_taken = model.reverse.contains_key(&b);
            let outcome = map.insert(a, b);
            match outcome.conflict() {
                None => {
                    assert!(!first_taken && !second_taken);
                    model.forward.insert(a, b);
                    model.reverse.insert(b, a);
                    model.inserted.push(a);
                    assert_eq!(outcome.locator().and_then(|l| map.get(l)), Some((&a, &b)));
                }
                Some(conflict) => {
                    assert_eq!(conflict.involves(Side::First), first_taken);
                    assert_eq!(conflict.involves(Side::Second), second_taken);
                }
            }
        }
        Op::EraseFirst(a) => {
            let expected = usize::from(model.remove_first(a).is_some());
            assert_eq!(map.erase_by_first(&a), expected);
        }
        Op::EraseSecond(b) => {
            let expected = match model.reverse.get(&b).copied() {
                Some(a) => usize::from(model.remove_first(a).is_some()),
                None => 0,
            };
            assert_eq!(map.erase_by_second(&b), expected);
        }
        Op::EraseNth(n) => {
            let keys = firsts(map);
            let Some(&victim) = keys.get(n) else {
                return;
            };
            let locator = map.find_by_first(&victim).unwrap();
            let next = map.erase(locator);
            model.remove_first(victim);
            assert_eq!(
                next.and_then(|l| map.get(l)).map(|(first, _)| *first),
                keys.get(n + 1).copied()
            );
        }
        Op::EraseRange(i, j) => {
            let keys = firsts(map);
            let Some(&start) = keys.get(i) else {
                return;
            };
            let first = map.find_by_first(&start).unwrap();
            let last = keys.get(j).and_then(|key| map.find_by_first(key));
            assert_eq!(map.erase_range(first, last), last);
            for key in &keys[i..j.min(keys.len())] {
                model.remove_first(*key);
            }
        }
        Op::RetainEven => {
            map.retain(|first, _| first % 2 == 0);
            let odd: Vec<u8> = model.forward.keys().copied().filter(|a| a % 2 == 1).collect();
            for a in odd {
                model.remove_first(a);
            }
        }
        Op::Clear => {
            map.clear();
            *model = Model::default();
        }
    }
}

fn check<F, R>(map: &BiMap<u8, u8, F, R>, model: &Model, order: Order)
where
    F: KeyIndex<u8>,
    R: KeyIndex<u8>,
{
    assert_eq!(map.validate(), Ok(()));
    assert_eq!(map.len(), model.forward.len());
    for (a, b) in &model.forward {
        assert_eq!(map.get_by_first(a), Some(b));
        assert_eq!(map.get_by_second(b), Some(a));
        assert_eq!(map.find_by_first(a), map.find_by_second(b));
    }
    for key in 0..16u8 {
        assert_eq!(map.contains_first(&key), model.forward.contains_key(&key));
        assert_eq!(map.contains_second(&key), model.reverse.contains_key(&key));
    }
    assert_eq!(firsts(map), model.expected_order(order));
}

fn run<F, R>(ops: &[Op], order: Order)
where
    F: KeyIndex<u8>,
    R: KeyIndex<u8>,
{
    let mut map = BiMap::<u8, u8, F, R>::new();
    let mut model = Model::default();
    for op in ops {
        apply(&mut map, &mut model, op);
        check(&map, &model, order);
    }
}

proptest! {
    #[test]
    fn ordered_matches_model(ops in vec(op(), 0..200)) {
        run::<OrderedIndex<u8>, OrderedIndex<u8>>(&ops, Order::Sorted);
    }

    #[test]
    fn hashed_matches_model(ops in vec(op(), 0..200)) {
        run::<HashedIndex<u8>, HashedIndex<u8>>(&ops, Order::Insertion);
    }

    #[test]
    fn mixed_matches_model(ops in vec(op(), 0..200)) {
        run::<OrderedIndex<u8>, HashedIndex<u8>>(&ops, Order::Sorted);
        run::<HashedIndex<u8>, OrderedIndex<u8>>(&ops, Order::Insertion);
    }

    #[test]
    fn ordered_iteration_ignores_insertion_order(
        pairs in proptest::sample::subsequence((0..32u8).collect::<Vec<_>>(), 0..32)
            .prop_shuffle()
    ) {
        let map: BiMap<u8, String> = pairs.iter().map(|n| (*n, n.to_string())).collect();
        let mut sorted = pairs.clone();
        sorted.sort_unstable();

        let firsts: Vec<u8> = map.iter().map(|(first, _)| *first).collect();
        prop_assert_eq!(firsts, sorted);
    }
}

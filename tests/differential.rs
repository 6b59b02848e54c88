//! Replays random operation sequences against std reference models and
//! checks the containers agree at every step.

use std::collections::{HashMap, VecDeque};

use linked_containers::{HashTable, LinkedList};
use rand::prelude::*;

#[derive(Debug)]
enum ListOp {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Remove(i32),
    IndexOf(i32),
    Get(usize),
}

impl ListOp {
    fn gen(rng: &mut impl Rng) -> Self {
        let v = rng.gen_range(-20..20);
        match rng.gen_range(0..7) {
            0 => ListOp::PushFront(v),
            1 => ListOp::PushBack(v),
            2 => ListOp::PopFront,
            3 => ListOp::PopBack,
            4 => ListOp::Remove(v),
            5 => ListOp::IndexOf(v),
            _ => ListOp::Get(rng.gen_range(0..32)),
        }
    }
}

#[test]
fn list_agrees_with_vecdeque() {
    let mut rng = StdRng::seed_from_u64(0x11570b5);
    let mut list = LinkedList::new();
    let mut model: VecDeque<i32> = VecDeque::new();

    for step in 0..5000 {
        let op = ListOp::gen(&mut rng);
        match op {
            ListOp::PushFront(v) => {
                list.push_front(v);
                model.push_front(v);
            }
            ListOp::PushBack(v) => {
                list.push_back(v);
                model.push_back(v);
            }
            ListOp::PopFront => assert_eq!(list.pop_front(), model.pop_front(), "step {step}"),
            ListOp::PopBack => assert_eq!(list.pop_back(), model.pop_back(), "step {step}"),
            ListOp::Remove(v) => {
                let expect = model
                    .iter()
                    .position(|&x| x == v)
                    .map(|i| model.remove(i).unwrap());
                assert_eq!(list.remove(&v), expect, "step {step}");
            }
            ListOp::IndexOf(v) => {
                assert_eq!(list.index_of(&v), model.iter().position(|&x| x == v));
                assert_eq!(list.contains(&v), model.contains(&v));
            }
            ListOp::Get(i) => assert_eq!(list.get(i), model.get(i)),
        }
        assert_eq!(list.len(), model.len());
    }

    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        model.into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn sorted_list_stays_sorted_under_churn() {
    let mut rng = StdRng::seed_from_u64(0xca5cade);
    let mut list = LinkedList::new();

    for _ in 0..2000 {
        if rng.gen_bool(0.7) || list.is_empty() {
            list.insert_sorted(rng.gen_range(-100..100));
        } else {
            let victim = rng.gen_range(-100..100);
            list.remove(&victim);
        }
        let items: Vec<i32> = list.iter().copied().collect();
        assert!(items.windows(2).all(|w| w[0] <= w[1]), "out of order: {items:?}");
    }
}

#[test]
fn table_agrees_with_hashmap() {
    let mut rng = StdRng::seed_from_u64(0x7ab1e);
    let mut table = HashTable::new(13);
    let mut model: HashMap<i64, i32> = HashMap::new();

    for step in 0..5000 {
        let key = rng.gen_range(-40..40);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let val = rng.gen();
                assert_eq!(table.insert(key, val), model.insert(key, val), "step {step}");
            }
            2 => assert_eq!(table.remove(key), model.remove(&key), "step {step}"),
            _ => {
                assert_eq!(table.lookup(key), model.get(&key), "step {step}");
                assert_eq!(table.contains_key(key), model.contains_key(&key));
            }
        }
        assert_eq!(table.len(), model.len());
    }

    let mut drained: Vec<(i64, i32)> = table.iter().map(|(k, &v)| (k, v)).collect();
    let mut expect: Vec<(i64, i32)> = model.into_iter().collect();
    drained.sort();
    expect.sort();
    assert_eq!(drained, expect);
}

#[test]
fn cursor_full_pass_matches_iterator() {
    let mut rng = StdRng::seed_from_u64(0xc0c0);
    let mut list = LinkedList::new();
    for _ in 0..100 {
        list.push_back(rng.gen_range(0..1000));
    }

    let mut cur = list.cursor();
    let mut forward = Vec::new();
    while let Some(&v) = cur.next() {
        forward.push(v);
    }
    assert_eq!(forward, list.iter().copied().collect::<Vec<_>>());

    cur.reset_back();
    let mut backward = Vec::new();
    while let Some(&v) = cur.prev() {
        backward.push(v);
    }
    backward.reverse();
    assert_eq!(backward, forward);
}

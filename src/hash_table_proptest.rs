#![cfg(test)]

// Property tests for HashTable kept inside the crate so bucket placement
// can be checked after every operation.

use crate::hash_table::HashTable;
use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};

// Pool-indexed operations: indices shrink to earlier keys and the pool
// shrinks in length, which keeps counterexamples small.
#[derive(Clone, Debug)]
enum OpI {
    Set(usize, i32),
    Get(usize),
    Has(String),
    Remove(usize),
    Take(usize),
    Clear(Option<usize>),
    Enumerate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,6}", 1..=40).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            10 => (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Set(i, v)),
            3 => idx.clone().prop_map(OpI::Get),
            2 => "[a-z]{0,6}".prop_map(OpI::Has),
            3 => idx.clone().prop_map(OpI::Remove),
            2 => idx.clone().prop_map(OpI::Take),
            1 => proptest::option::of(0usize..20).prop_map(OpI::Clear),
            1 => Just(OpI::Enumerate),
        ];
        proptest::collection::vec(op, 1..150).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `set` returns the previous value and never duplicates a key.
// - `get`/`has` parity with the model, including across capacity growth.
// - `remove`/`take` report presence and drop empty buckets.
// - `clear` empties the table and applies the requested capacity.
// - occupancy stays below the load factor; entries sit in their home bucket.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let mut sut: HashTable<String, i32> = HashTable::with_capacity(2);
        let mut model: HashMap<String, i32> = HashMap::new();

        for op in ops {
            match op {
                OpI::Set(i, v) => {
                    let k = pool[i].clone();
                    prop_assert_eq!(sut.set(k.clone(), v), model.insert(k, v));
                }
                OpI::Get(i) => {
                    let k = pool[i].as_str();
                    prop_assert_eq!(sut.get(k), model.get(k));
                }
                OpI::Has(s) => {
                    prop_assert_eq!(sut.has(s.as_str()), model.contains_key(&s));
                }
                OpI::Remove(i) => {
                    let k = pool[i].as_str();
                    prop_assert_eq!(sut.remove(k), model.remove(k).is_some());
                    prop_assert!(sut.get(k).is_none());
                }
                OpI::Take(i) => {
                    let k = pool[i].as_str();
                    prop_assert_eq!(sut.take(k), model.remove(k));
                }
                OpI::Clear(cap) => {
                    let before = sut.capacity();
                    sut.clear(cap);
                    model.clear();
                    prop_assert_eq!(sut.capacity(), cap.map_or(before, |c| c.max(1)));
                }
                OpI::Enumerate => {
                    let s_keys: BTreeSet<String> = sut.keys().into_iter().cloned().collect();
                    let m_keys: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(s_keys, m_keys);
                    let mut s_vals: Vec<i32> = sut.values().into_iter().copied().collect();
                    let mut m_vals: Vec<i32> = model.values().copied().collect();
                    s_vals.sort_unstable();
                    m_vals.sort_unstable();
                    prop_assert_eq!(s_vals, m_vals);
                }
            }

            sut.assert_invariants();
            prop_assert_eq!(sut.length(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            if !sut.is_empty() {
                prop_assert!((sut.length() as f64) < sut.capacity() as f64 * crate::LOAD_FACTOR);
            }
        }
    }
}

#![cfg(test)]

// Property tests for OrderedTree kept inside the crate so they can check
// arena-level invariants after every operation.

use crate::ordered_tree::OrderedTree;
use proptest::prelude::*;
use std::collections::BTreeSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(i16),
    Delete(i16),
    Find(i16),
    Depth(i16),
    Height(i16),
    Rebalance,
    Build(Vec<i16>),
}

// Narrow key range so inserts, deletes and lookups hit existing keys often.
fn key() -> impl Strategy<Value = i16> {
    -64i16..64
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        8 => key().prop_map(Op::Insert),
        5 => key().prop_map(Op::Delete),
        3 => key().prop_map(Op::Find),
        2 => key().prop_map(Op::Depth),
        2 => key().prop_map(Op::Height),
        1 => Just(Op::Rebalance),
        1 => proptest::collection::vec(key(), 0..40).prop_map(Op::Build),
    ]
}

fn keys_in_order(t: &OrderedTree<i16>) -> Vec<i16> {
    let mut out = Vec::new();
    t.in_order(|k| out.push(*k));
    out
}

// Property: State-machine equivalence against std::collections::BTreeSet.
// Invariants exercised across random operation sequences:
// - insert/delete report whether the key set changed, matching the model.
// - find/depth/height agree with presence in the model.
// - in-order traversal equals the model's sorted keys after every op.
// - build and rebalance always leave a balanced tree.
// - the arena holds exactly the reachable nodes, all correctly ordered.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine(ops in proptest::collection::vec(op(), 1..120)) {
        let mut sut: OrderedTree<i16> = OrderedTree::new();
        let mut model: BTreeSet<i16> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(k) => {
                    prop_assert_eq!(sut.insert(k), model.insert(k), "insert({})", k);
                    prop_assert!(sut.find(&k));
                }
                Op::Delete(k) => {
                    prop_assert_eq!(sut.delete(&k), model.remove(&k), "delete({})", k);
                    prop_assert!(!sut.find(&k));
                }
                Op::Find(k) => {
                    prop_assert_eq!(sut.find(&k), model.contains(&k));
                }
                Op::Depth(k) => {
                    prop_assert_eq!(sut.depth(&k).is_some(), model.contains(&k));
                }
                Op::Height(k) => {
                    let h = sut.height(&k);
                    prop_assert_eq!(h.is_some(), model.contains(&k));
                    if let (Some(h), Some(d)) = (h, sut.depth(&k)) {
                        let root_height = sut.root().and_then(|r| sut.height(r));
                        prop_assert!(d + h <= root_height.unwrap_or(0));
                    }
                }
                Op::Rebalance => {
                    sut.rebalance();
                    prop_assert!(sut.is_balanced());
                }
                Op::Build(values) => {
                    sut.build(values.iter().copied());
                    model = values.into_iter().collect();
                    prop_assert!(sut.is_balanced());
                }
            }

            sut.assert_invariants();
            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(sut.is_empty(), model.is_empty());
            let expected: Vec<i16> = model.iter().copied().collect();
            prop_assert_eq!(keys_in_order(&sut), expected);
        }
    }
}

// Property: every traversal visits each key exactly once, and pre-order
// starts at the root while post-order ends there.
proptest! {
    #[test]
    fn prop_traversals_cover_all_keys(values in proptest::collection::vec(key(), 0..60)) {
        let mut sut = OrderedTree::new();
        for v in &values {
            sut.insert(*v);
        }
        let model: BTreeSet<i16> = values.into_iter().collect();

        let mut level = Vec::new();
        sut.level_order(|k| level.push(*k));
        let mut pre = Vec::new();
        sut.pre_order(|k| pre.push(*k));
        let mut post = Vec::new();
        sut.post_order(|k| post.push(*k));

        for seq in [&level, &pre, &post] {
            let as_set: BTreeSet<i16> = seq.iter().copied().collect();
            prop_assert_eq!(seq.len(), model.len());
            prop_assert_eq!(&as_set, &model);
        }
        prop_assert_eq!(pre.first(), sut.root());
        prop_assert_eq!(post.last(), sut.root());
        prop_assert_eq!(level.first(), sut.root());
    }
}

//! OrderedTree: binary search tree over unique keys, stored in a
//! generational arena.
//!
//! Each node holds its children as arena keys; a parent is the only holder
//! of a child's key, so ownership stays strictly hierarchical even though
//! the nodes themselves live side by side in one `SlotMap`.

use crate::error::TraversalError;
use core::cmp::Ordering;
use core::fmt;
use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;
use tracing::{debug, trace};

new_key_type! {
    struct NodeKey;
}

#[derive(Debug)]
struct Node<T> {
    key: T,
    left: Option<NodeKey>,
    right: Option<NodeKey>,
}

impl<T> Node<T> {
    fn leaf(key: T) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Side {
    Left,
    Right,
}

/// Visiting order used by [`OrderedTree::traverse`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Traversal {
    /// Breadth first, left before right on each level.
    LevelOrder,
    /// Left subtree, node, right subtree. Yields keys in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

pub struct OrderedTree<T> {
    nodes: SlotMap<NodeKey, Node<T>>,
    root: Option<NodeKey>,
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            root: None,
        }
    }

    /// Build a height-balanced tree from `values`, replacing any current
    /// content. Duplicates are dropped.
    pub fn build<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut sorted: Vec<T> = values.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();
        self.rebuild_from_sorted(sorted);
    }

    fn rebuild_from_sorted(&mut self, sorted: Vec<T>) {
        trace!(len = sorted.len(), "rebuilding tree from sorted keys");
        self.nodes.clear();
        let mut slots: Vec<Option<T>> = sorted.into_iter().map(Some).collect();
        self.root = self.build_rec(&mut slots);
    }

    // Median of the slice becomes the subtree root.
    fn build_rec(&mut self, slice: &mut [Option<T>]) -> Option<NodeKey> {
        if slice.is_empty() {
            return None;
        }
        let mid = slice.len() / 2;
        let (left, rest) = slice.split_at_mut(mid);
        let (median, right) = rest.split_first_mut()?;
        let key = median.take()?;
        let left = self.build_rec(left);
        let right = self.build_rec(right);
        Some(self.nodes.insert(Node { key, left, right }))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Key stored at the root, if any.
    pub fn root(&self) -> Option<&T> {
        self.root.map(|k| &self.nodes[k].key)
    }

    /// Insert `value`. Returns `false` and leaves the tree untouched if an
    /// equal key is already present.
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.insert(Node::leaf(value)));
            return true;
        };
        loop {
            let node = &self.nodes[current];
            let order = value.cmp(&node.key);
            let next = match order {
                Ordering::Equal => return false,
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
            if let Some(child) = next {
                current = child;
                continue;
            }
            let child = Some(self.nodes.insert(Node::leaf(value)));
            let parent = &mut self.nodes[current];
            if order == Ordering::Greater {
                parent.right = child;
            } else {
                parent.left = child;
            }
            return true;
        }
    }

    /// Remove `value` if present. Returns whether a node was removed.
    pub fn delete(&mut self, value: &T) -> bool {
        let mut parent: Option<(NodeKey, Side)> = None;
        let mut current = self.root;
        let at = loop {
            let Some(at) = current else {
                return false;
            };
            let node = &self.nodes[at];
            match value.cmp(&node.key) {
                Ordering::Equal => break at,
                Ordering::Less => {
                    parent = Some((at, Side::Left));
                    current = node.left;
                }
                Ordering::Greater => {
                    parent = Some((at, Side::Right));
                    current = node.right;
                }
            }
        };

        let (left, right) = {
            let node = &self.nodes[at];
            (node.left, node.right)
        };
        match (left, right) {
            (Some(_), Some(right)) => {
                // The in-order successor has no left child. Unlink it, then
                // move its key into this node, which keeps its place.
                let mut succ_parent = (at, Side::Right);
                let mut successor = right;
                while let Some(next) = self.nodes[successor].left {
                    succ_parent = (successor, Side::Left);
                    successor = next;
                }
                let succ_right = self.nodes[successor].right;
                self.relink(Some(succ_parent), succ_right);
                if let Some(succ) = self.nodes.remove(successor) {
                    self.nodes[at].key = succ.key;
                }
            }
            (only, None) | (None, only) => {
                self.nodes.remove(at);
                self.relink(parent, only);
            }
        }
        true
    }

    // Point the link at `parent`'s `side` (or the root link) to `child`.
    fn relink(&mut self, parent: Option<(NodeKey, Side)>, child: Option<NodeKey>) {
        match parent {
            None => self.root = child,
            Some((p, Side::Left)) => self.nodes[p].left = child,
            Some((p, Side::Right)) => self.nodes[p].right = child,
        }
    }

    fn min_node(&self, mut at: NodeKey) -> NodeKey {
        while let Some(left) = self.nodes[at].left {
            at = left;
        }
        at
    }

    fn max_node(&self, mut at: NodeKey) -> NodeKey {
        while let Some(right) = self.nodes[at].right {
            at = right;
        }
        at
    }

    fn find_node(&self, value: &T) -> Option<NodeKey> {
        let mut current = self.root;
        while let Some(at) = current {
            let node = &self.nodes[at];
            current = match value.cmp(&node.key) {
                Ordering::Equal => return Some(at),
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
        }
        None
    }

    pub fn find(&self, value: &T) -> bool {
        self.find_node(value).is_some()
    }

    pub fn min(&self) -> Option<&T> {
        self.root.map(|r| &self.nodes[self.min_node(r)].key)
    }

    pub fn max(&self) -> Option<&T> {
        self.root.map(|r| &self.nodes[self.max_node(r)].key)
    }

    /// Number of edges from the root to `value`; the root has depth 0.
    pub fn depth(&self, value: &T) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.root;
        while let Some(at) = current {
            let node = &self.nodes[at];
            current = match value.cmp(&node.key) {
                Ordering::Equal => return Some(depth),
                Ordering::Greater => node.right,
                Ordering::Less => node.left,
            };
            depth += 1;
        }
        None
    }

    /// Height in edges of the subtree rooted at `value`; a leaf has height 0.
    pub fn height(&self, value: &T) -> Option<usize> {
        let at = self.find_node(value)?;
        self.levels(Some(at), false).map(|levels| levels - 1)
    }

    pub fn is_balanced(&self) -> bool {
        self.levels(self.root, true).is_some()
    }

    /// Rebuild into a minimum-height tree unless already balanced.
    pub fn rebalance(&mut self) {
        if self.root.is_none() || self.is_balanced() {
            return;
        }
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut it = self.iter();
        while let Some(at) = it.next_node() {
            order.push(at);
        }
        let sorted: Vec<T> = order
            .into_iter()
            .filter_map(|k| self.nodes.remove(k).map(|n| n.key))
            .collect();
        debug!(len = sorted.len(), "rebalancing tree");
        self.rebuild_from_sorted(sorted);
    }
}

impl<T> OrderedTree<T> {
    // Node count on the longest downward path from `at` (0 when empty),
    // measured bottom-up with an explicit stack. With `require_balance`, the
    // first node whose subtrees differ by more than one level stops the walk
    // and yields `None`.
    fn levels(&self, at: Option<NodeKey>, require_balance: bool) -> Option<usize> {
        let Some(at) = at else {
            return Some(0);
        };
        let mut pending: Vec<(NodeKey, bool)> = vec![(at, false)];
        let mut measured: Vec<usize> = Vec::new();
        while let Some((at, expanded)) = pending.pop() {
            let node = &self.nodes[at];
            if !expanded {
                pending.push((at, true));
                pending.extend(node.right.map(|r| (r, false)));
                pending.extend(node.left.map(|l| (l, false)));
                continue;
            }
            // Left finished before right, so right sits on top.
            let right = if node.right.is_some() { measured.pop()? } else { 0 };
            let left = if node.left.is_some() { measured.pop()? } else { 0 };
            if require_balance && left.abs_diff(right) > 1 {
                return None;
            }
            measured.push(left.max(right) + 1);
        }
        measured.pop()
    }

    /// Visit keys breadth first, starting at the root.
    pub fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue: VecDeque<NodeKey> = self.root.into_iter().collect();
        while let Some(at) = queue.pop_front() {
            let node = &self.nodes[at];
            visit(&node.key);
            queue.extend(node.left);
            queue.extend(node.right);
        }
    }

    /// Visit keys in ascending order.
    pub fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for key in self.iter() {
            visit(key);
        }
    }

    pub fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut stack: Vec<NodeKey> = self.root.into_iter().collect();
        while let Some(at) = stack.pop() {
            let node = &self.nodes[at];
            visit(&node.key);
            stack.extend(node.right);
            stack.extend(node.left);
        }
    }

    pub fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // `true` marks a node whose subtrees have already been visited.
        let mut stack: Vec<(NodeKey, bool)> = self.root.map(|r| (r, false)).into_iter().collect();
        while let Some((at, expanded)) = stack.pop() {
            let node = &self.nodes[at];
            if expanded {
                visit(&node.key);
                continue;
            }
            stack.push((at, true));
            stack.extend(node.right.map(|r| (r, false)));
            stack.extend(node.left.map(|l| (l, false)));
        }
    }

    /// Visit every key in `order`. Fails before visiting anything when no
    /// visitor is supplied.
    pub fn traverse(
        &self,
        order: Traversal,
        visit: Option<&mut dyn FnMut(&T)>,
    ) -> Result<(), TraversalError> {
        let visit = visit.ok_or(TraversalError::MissingVisitor)?;
        match order {
            Traversal::LevelOrder => self.level_order(visit),
            Traversal::InOrder => self.in_order(visit),
            Traversal::PreOrder => self.pre_order(visit),
            Traversal::PostOrder => self.post_order(visit),
        }
        Ok(())
    }

    /// Iterator over keys in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut it = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        it.push_left_spine(self.root);
        it
    }
}

/// In-order iterator over an `OrderedTree`, driven by an explicit stack.
pub struct Iter<'a, T> {
    nodes: &'a SlotMap<NodeKey, Node<T>>,
    stack: Vec<NodeKey>,
}

impl<'a, T> Iter<'a, T> {
    fn push_left_spine(&mut self, mut at: Option<NodeKey>) {
        while let Some(k) = at {
            self.stack.push(k);
            at = self.nodes[k].left;
        }
    }

    fn next_node(&mut self) -> Option<NodeKey> {
        let at = self.stack.pop()?;
        self.push_left_spine(self.nodes[at].right);
        Some(at)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let at = self.next_node()?;
        Some(&self.nodes[at].key)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.build(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
impl<T: Ord + fmt::Debug> OrderedTree<T> {
    /// Panics if the ordering or arena ownership invariants are violated.
    pub(crate) fn assert_invariants(&self) {
        let mut reached = 0;
        let mut stack: Vec<(NodeKey, Option<&T>, Option<&T>)> =
            self.root.into_iter().map(|r| (r, None, None)).collect();
        while let Some((at, lo, hi)) = stack.pop() {
            let node = self.nodes.get(at).expect("link to a freed node");
            reached += 1;
            if let Some(lo) = lo {
                assert!(lo < &node.key, "{:?} not above {:?}", node.key, lo);
            }
            if let Some(hi) = hi {
                assert!(&node.key < hi, "{:?} not below {:?}", node.key, hi);
            }
            stack.extend(node.left.map(|l| (l, lo, Some(&node.key))));
            stack.extend(node.right.map(|r| (r, Some(&node.key), hi)));
        }
        assert_eq!(reached, self.nodes.len(), "arena holds unreachable nodes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_order_keys<T: Clone>(t: &OrderedTree<T>) -> Vec<T> {
        let mut out = Vec::new();
        t.in_order(|k| out.push(k.clone()));
        out
    }

    fn pre_order_keys<T: Clone>(t: &OrderedTree<T>) -> Vec<T> {
        let mut out = Vec::new();
        t.pre_order(|k| out.push(k.clone()));
        out
    }

    /// Invariant: the median of each sorted slice becomes the subtree root.
    #[test]
    fn build_picks_medians() {
        let mut t = OrderedTree::new();
        t.build([3, 7, 4, 9, 1, 2, 5, 8, 0, 10]);
        // sorted: 0 1 2 3 4 5 7 8 9 10 -> mid index 5 -> 5
        assert_eq!(t.root(), Some(&5));
        assert_eq!(pre_order_keys(&t), vec![5, 2, 1, 0, 4, 3, 9, 8, 7, 10]);
        assert_eq!(t.len(), 10);
        assert!(t.is_balanced());
    }

    /// Invariant: building replaces the previous content and frees its nodes.
    #[test]
    fn build_replaces_content() {
        let mut t = OrderedTree::new();
        t.build([1, 2, 3]);
        t.build([10, 20]);
        assert_eq!(in_order_keys(&t), vec![10, 20]);
        assert_eq!(t.len(), 2);

        t.build(Vec::<i32>::new());
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert_eq!(t.root(), None);
    }

    /// Invariant: duplicate inserts are rejected and leave the tree unchanged.
    #[test]
    fn insert_rejects_duplicates() {
        let mut t = OrderedTree::new();
        assert!(t.insert(5));
        assert!(t.insert(3));
        assert!(t.insert(8));
        assert!(!t.insert(3));
        assert_eq!(t.len(), 3);
        assert_eq!(in_order_keys(&t), vec![3, 5, 8]);
        assert_eq!(t.depth(&3), Some(1));
        assert_eq!(t.depth(&8), Some(1));
    }

    /// Invariant: a leaf is unlinked from its parent.
    #[test]
    fn delete_leaf() {
        let mut t: OrderedTree<i32> = [1, 2, 3].into_iter().collect();
        assert!(t.delete(&3));
        assert_eq!(in_order_keys(&t), vec![1, 2]);
        assert_eq!(t.height(&2), Some(1));
        assert_eq!(t.len(), 2);
    }

    /// Invariant: a node with one child is replaced by that child's subtree.
    #[test]
    fn delete_one_child() {
        let mut t = OrderedTree::new();
        for k in [10, 5, 3, 4] {
            t.insert(k);
        }
        assert!(t.delete(&5));
        assert_eq!(in_order_keys(&t), vec![3, 4, 10]);
        assert_eq!(t.depth(&3), Some(1));
        assert_eq!(t.depth(&4), Some(2));
    }

    /// Invariant: a two-child node takes its successor's key in place and the
    /// successor node is unlinked.
    #[test]
    fn delete_two_children_promotes_successor() {
        let mut t = OrderedTree::new();
        for k in [50, 30, 70, 60, 80, 65] {
            t.insert(k);
        }
        assert!(t.delete(&50));
        assert_eq!(t.root(), Some(&60));
        assert_eq!(pre_order_keys(&t), vec![60, 30, 70, 65, 80]);
        assert_eq!(t.len(), 5);
        assert!(!t.find(&50));
    }

    /// Invariant: the root can be deleted down to an empty tree.
    #[test]
    fn delete_until_empty() {
        let mut t: OrderedTree<i32> = (0..7).collect();
        for k in 0..7 {
            assert!(t.delete(&k));
        }
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
        assert!(!t.delete(&0));
    }

    /// Invariant: deleting an absent key is a no-op.
    #[test]
    fn delete_absent_is_noop() {
        let mut t: OrderedTree<i32> = [1, 2, 3].into_iter().collect();
        assert!(!t.delete(&42));
        assert_eq!(in_order_keys(&t), vec![1, 2, 3]);
        let mut empty: OrderedTree<i32> = OrderedTree::new();
        assert!(!empty.delete(&1));
    }

    /// Invariant: depth counts edges from the root; height counts edges to the
    /// deepest leaf; both are `None` for absent keys.
    #[test]
    fn depth_and_height() {
        let mut t = OrderedTree::new();
        for k in [4, 2, 6, 1, 3, 7, 8] {
            t.insert(k);
        }
        assert_eq!(t.depth(&4), Some(0));
        assert_eq!(t.depth(&8), Some(3));
        assert_eq!(t.depth(&5), None);
        assert_eq!(t.height(&4), Some(3));
        assert_eq!(t.height(&6), Some(2));
        assert_eq!(t.height(&1), Some(0));
        assert_eq!(t.height(&5), None);

        let empty: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(empty.depth(&1), None);
        assert_eq!(empty.height(&1), None);
    }

    /// Invariant: a subtree whose heights differ by two is reported unbalanced.
    #[test]
    fn balance_detection() {
        let mut t = OrderedTree::new();
        assert!(t.is_balanced());
        t.insert(1);
        t.insert(2);
        assert!(t.is_balanced());
        t.insert(3);
        assert!(!t.is_balanced());
    }

    /// Invariant: rebalance keeps the key set and yields a balanced tree.
    #[test]
    fn rebalance_degenerate_chain() {
        let mut t = OrderedTree::new();
        for k in 0..32 {
            t.insert(k);
        }
        assert!(!t.is_balanced());
        assert_eq!(t.height(&0), Some(31));

        t.rebalance();
        assert!(t.is_balanced());
        assert_eq!(in_order_keys(&t), (0..32).collect::<Vec<_>>());
        assert_eq!(t.len(), 32);
        assert_eq!(t.root(), Some(&16));
    }

    /// Invariant: rebalancing a balanced tree leaves its shape alone.
    #[test]
    fn rebalance_balanced_is_noop() {
        let mut t = OrderedTree::new();
        for k in [2, 1, 3] {
            t.insert(k);
        }
        let before = pre_order_keys(&t);
        t.rebalance();
        assert_eq!(pre_order_keys(&t), before);
    }

    /// Invariant: every traversal visits every node exactly once, in its order.
    #[test]
    fn traversal_orders() {
        let t: OrderedTree<i32> = (1..=7).collect();
        let mut level = Vec::new();
        t.level_order(|k| level.push(*k));
        let mut post = Vec::new();
        t.post_order(|k| post.push(*k));

        assert_eq!(level, vec![4, 2, 6, 1, 3, 5, 7]);
        assert_eq!(in_order_keys(&t), vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(pre_order_keys(&t), vec![4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(post, vec![1, 3, 2, 5, 7, 6, 4]);
    }

    /// Invariant: `traverse` without a visitor fails and visits nothing.
    #[test]
    fn traverse_requires_visitor() {
        let t: OrderedTree<i32> = (1..=3).collect();
        for order in [
            Traversal::LevelOrder,
            Traversal::InOrder,
            Traversal::PreOrder,
            Traversal::PostOrder,
        ] {
            assert_eq!(
                t.traverse(order, None),
                Err(TraversalError::MissingVisitor)
            );
        }

        let mut seen = Vec::new();
        let mut visit = |k: &i32| seen.push(*k);
        t.traverse(Traversal::PostOrder, Some(&mut visit)).unwrap();
        assert_eq!(seen, vec![1, 3, 2]);
    }

    /// Invariant: the borrowing iterator agrees with the in-order traversal.
    #[test]
    fn iter_matches_in_order() {
        let mut t = OrderedTree::new();
        for k in [8, 3, 10, 1, 6, 14, 4, 7, 13] {
            t.insert(k);
        }
        let via_iter: Vec<i32> = t.iter().copied().collect();
        assert_eq!(via_iter, in_order_keys(&t));
        assert_eq!(t.min(), Some(&1));
        assert_eq!(t.max(), Some(&14));
        assert_eq!(format!("{:?}", t), "{1, 3, 4, 6, 7, 8, 10, 13, 14}");
    }

    /// Invariant: `extend` inserts one key at a time and skips duplicates.
    #[test]
    fn extend_inserts_individually() {
        let mut t = OrderedTree::new();
        t.extend([1, 2, 2, 3]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.height(&1), Some(2));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.min(), None);
    }

    // Same shape as inserting 0..n in ascending order, without the quadratic
    // insert cost.
    fn right_spine(n: u32) -> OrderedTree<u32> {
        let mut t = OrderedTree::new();
        let mut below = None;
        for key in (0..n).rev() {
            below = Some(t.nodes.insert(Node {
                key,
                left: None,
                right: below,
            }));
        }
        t.root = below;
        t
    }

    /// Invariant: a degenerate 100k-deep tree is walked without recursion.
    #[test]
    fn degenerate_tree_is_walked_iteratively() {
        const N: u32 = 100_000;
        let mut t = right_spine(N);
        assert_eq!(t.height(&0), Some(N as usize - 1));
        assert_eq!(t.depth(&(N - 1)), Some(N as usize - 1));
        assert!(!t.is_balanced());

        assert!(t.delete(&(N - 1)));
        assert!(t.delete(&(N / 2)));
        assert!(t.delete(&0));
        assert_eq!(t.len(), N as usize - 3);
        assert_eq!(t.root(), Some(&1));

        let mut count = 0;
        t.in_order(|_| count += 1);
        assert_eq!(count, N as usize - 3);
        let pre = pre_order_keys(&t);
        assert_eq!(pre.first(), Some(&1));
        let mut post = Vec::new();
        t.post_order(|k| post.push(*k));
        assert_eq!(post.first(), Some(&(N - 2)));
        assert_eq!(post.last(), Some(&1));

        t.rebalance();
        assert!(t.is_balanced());
        assert_eq!(t.height(t.root().unwrap()), Some(16));
        assert_eq!(t.len(), N as usize - 3);
        t.assert_invariants();

        // Two-child delete on the rebuilt root.
        let root = *t.root().unwrap();
        assert!(t.delete(&root));
        assert!(!t.find(&root));
        t.assert_invariants();
    }

    /// Invariant: the successor is unlinked from deep in the right subtree.
    #[test]
    fn delete_two_children_deep_successor() {
        let mut t = OrderedTree::new();
        for k in [50, 30, 90, 70, 60, 65, 80] {
            t.insert(k);
        }
        assert!(t.delete(&50));
        assert_eq!(pre_order_keys(&t), vec![60, 30, 90, 70, 65, 80]);
        t.assert_invariants();
    }
}

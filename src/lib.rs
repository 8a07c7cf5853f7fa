//! bst-hashmap: two single-threaded in-memory collections, an ordered
//! binary search tree that can rebuild itself to minimum height and a
//! separate-chaining hash map that doubles its bucket count as it fills.
//!
//! Internal Design:
//!
//! Summary
//! - Layers:
//!   - OrderedTree<T>: unbalanced BST over unique `T: Ord` keys. Nodes live
//!     in a generational arena (`slotmap`); a parent holds the only arena
//!     key of each child, so ownership is a tree without back references.
//!     Balance is not maintained on insert/delete; `rebalance()` rebuilds
//!     from the sorted keys when `is_balanced()` fails.
//!   - HashTable<K, V>: chained hash map. The bucket index is a sparse
//!     `hashbrown::HashMap<usize, Chain<(K, V)>>`; only non-empty chains
//!     are stored.
//!   - Chain<T>: singly linked list of owned boxes, the bucket storage.
//!
//! Constraints
//! - Single-threaded, synchronous; no internal locking.
//! - Duplicate tree keys are rejected; duplicate map keys overwrite.
//! - Absent keys are a normal outcome (`Option`/`bool`), never an error.
//!
//! Hashing
//! - Keys implement [`HashUnits`] instead of `Hash`: the table folds the
//!   key's units with `acc = (acc * 31 + unit) % capacity`. The bucket of a
//!   key therefore depends on the capacity, and growth rehashes every entry.
//! - Growth happens when inserting a new key would bring occupancy
//!   (`len / capacity`) to [`LOAD_FACTOR`] or beyond.
//!
//! Deletion
//! - A tree node with two children takes the key of its in-order successor
//!   in place; the successor node is then unlinked. Node identity of the
//!   deleted position is preserved.
//!
//! Logging
//! - `tracing` events at `debug` for table growth and tree rebalancing, at
//!   `trace` for full rebuilds. No subscriber is installed by the crate.

mod chain;
mod error;
mod hash_table;
mod hash_table_proptest;
mod hash_units;
mod ordered_tree;
mod ordered_tree_proptest;

// Public surface
pub use chain::Chain;
pub use error::TraversalError;
pub use hash_table::{HashTable, DEFAULT_CAPACITY, LOAD_FACTOR};
pub use hash_units::{bucket_index, HashUnits, HASH_MULTIPLIER};
pub use ordered_tree::{OrderedTree, Traversal};

pub mod iter {
    //! Iterator types returned by the collections.
    pub use crate::chain::{IntoIter as ChainIntoIter, Iter as ChainIter, IterMut as ChainIterMut};
    pub use crate::ordered_tree::Iter as TreeIter;
}

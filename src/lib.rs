//! This crate is a small collection of classic abstract data types,
//! mostly for educational purposes.
//!
//! ## Ordered multiset
//!
//! The centerpiece is [`multiset::OrderedMultiSet`], a Binary Search Tree
//! (BST) that supports duplicate values. A BST is defined recursively using
//! the notion of a `Node`. Each node here owns one distinct key together with
//! every stored occurrence of that key, plus up to two child nodes. The most
//! important invariants are:
//!
//! 1. For every node, all the nodes in its left subtree have a key less than
//!    its own key.
//! 2. For every node, all the nodes in its right subtree have a key greater
//!    than its own key.
//! 3. A node exists exactly as long as at least one occurrence of its key is
//!    stored.
//!
//! These invariants give `O(height)` insertion, lookup, and removal, and make
//! sorted iteration natural: visit the left subtree, then the node's
//! occurrences, then the right subtree. The tree does not rebalance itself,
//! so inserting already-sorted input degrades `height` to `O(n)`.
//!
//! ## Lists and sorts
//!
//! The [`list`] module has three sequence types behind one [`list::Sequence`]
//! trait: a growable array, a singly linked list, and a list that keeps
//! itself sorted. The [`sort`] module has four in-place slice sorts. Both are
//! straightforward textbook implementations; the interesting invariants all
//! live in the multiset.

#![deny(missing_docs)]

pub mod list;
pub mod multiset;
pub mod sort;

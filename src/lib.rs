//! This crate provides a deliberately simple, *unbalanced* Binary Search
//! Tree (BST) along with the FIFO queue it uses internally for breadth-first
//! work.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one value
//! and sometimes has child `Node`s. The most important invariants of a
//! BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! On top of that, the tree in this crate keeps its values unique: inserting
//! a value that is already present leaves the tree untouched.
//!
//! The benefits of these invariants are many. Searching for a value takes
//! `O(height)` (where `height` is defined as the longest path from the root
//! `Node` to a leaf `Node`), and visiting the left subtree, then the subtree
//! root, then the right subtree yields every value in ascending order. The
//! [`tree::Tree`] here exposes that in-order walk along with pre-order,
//! post-order, and level-order (breadth-first) walks, each driven by a
//! caller-supplied closure.
//!
//! Because no rebalancing is performed, the height is *not* kept at
//! `O(lg N)`: inserting values in sorted order produces a chain of `N`
//! nodes. That trade-off is the point of this crate - the structure stays
//! small and easy to reason about, and the cost is documented rather than
//! hidden.
//!
//! ## Queue
//!
//! [`queue::Queue`] is a singly linked FIFO queue. The tree uses it as the
//! frontier for level-order traversal and for tearing itself down level by
//! level (so that dropping a badly skewed tree never recurses to its
//! height), but it is an ordinary container and usable on its own.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod queue;
pub mod tree;

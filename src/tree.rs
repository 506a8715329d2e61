//! An unbalanced Binary Search Tree storing a set of unique values.
//!
//! Every structural operation walks down from the root comparing against the
//! stored values, so everything runs in `O(height)`. No rebalancing is ever
//! performed: the height of the tree is decided entirely by insertion order,
//! and inserting values in sorted order degrades the tree into a chain. That
//! is a documented property of this design, not a bug.
//!
//! Besides insertion, removal, and lookups, the tree offers four read-only
//! traversals - pre-order, in-order, post-order, and level-order - that feed
//! every stored value to a caller-supplied closure. The in-order traversal
//! visits values in strictly ascending order, which is the defining property
//! of the whole structure.
//!
//! # Examples
//!
//! ```
//! use naive_bst::tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! tree.insert(2);
//! tree.insert(1);
//! tree.insert(3);
//!
//! assert_eq!(tree.search(&1), Some(&1));
//! assert_eq!(tree.minimum(), Some(&1));
//! assert_eq!(tree.maximum(), Some(&3));
//!
//! // In-order visits the values in ascending order.
//! let mut sorted = Vec::new();
//! tree.inorder(|value| sorted.push(*value));
//! assert_eq!(sorted, [1, 2, 3]);
//!
//! // Removing a value returns it; removing it again is a no-op.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.remove(&2), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::queue::Queue;

/// A link either owns the subtree it points at or is empty. Rewiring a link
/// moves ownership from one slot to another, never duplicates it.
type Link<T> = Option<Box<Node<T>>>;

#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Node {
            value,
            left: None,
            right: None,
        }
    }

    fn preorder<F>(&self, action: &mut F)
    where
        F: FnMut(&T),
    {
        action(&self.value);
        if let Some(left) = self.left.as_deref() {
            left.preorder(action);
        }
        if let Some(right) = self.right.as_deref() {
            right.preorder(action);
        }
    }

    fn inorder<F>(&self, action: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left.as_deref() {
            left.inorder(action);
        }
        action(&self.value);
        if let Some(right) = self.right.as_deref() {
            right.inorder(action);
        }
    }

    fn postorder<F>(&self, action: &mut F)
    where
        F: FnMut(&T),
    {
        if let Some(left) = self.left.as_deref() {
            left.postorder(action);
        }
        if let Some(right) = self.right.as_deref() {
            right.postorder(action);
        }
        action(&self.value);
    }
}

/// An unbalanced Binary Search Tree holding a set of unique values.
///
/// The tree owns its root node and every node exclusively owns its children,
/// so the whole structure is a strict ownership tree with no back references.
/// Ancestry is rediscovered by walking down from the root whenever a mutation
/// needs it.
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    // TODO drive this through a queue like `drop` does so that cloning a
    // badly skewed tree doesn't recurse to its height.
    fn clone(&self) -> Self {
        Tree {
            root: self.root.clone(),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Tree { root: None }
    }

    /// Returns `true` if the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts a value into the tree. Inserting a value that is already
    /// present is a no-op, not an error: the tree keeps its values unique
    /// and silently ignores the duplicate.
    ///
    /// Runs in `O(height)` and creates exactly one new node when the value
    /// was absent, none when it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// let mut visited = Vec::new();
    /// tree.inorder(|value| visited.push(*value));
    ///
    /// // The duplicate insert changed nothing.
    /// assert_eq!(visited, [1]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link {
                // Found the empty slot the value belongs in.
                None => {
                    *link = Some(Box::new(Node::new(value)));
                    return;
                }
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => link = &mut node.left,
                    Ordering::Greater => link = &mut node.right,
                    Ordering::Equal => return,
                },
            }
        }
    }

    /// Removes a value from the tree and returns it. Removing a value that
    /// isn't present is a no-op returning `None`, not an error.
    ///
    /// Runs in `O(height)` and destroys exactly one node when the value was
    /// present. When the doomed node has two children its value is replaced
    /// by its in-order successor (the minimum of its right subtree) and the
    /// successor's node is spliced out instead, which keeps both ordering
    /// and uniqueness intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [2, 1, 3] {
    ///     tree.insert(value);
    /// }
    ///
    /// // Removing the root promotes its in-order successor.
    /// assert_eq!(tree.remove(&2), Some(2));
    /// assert_eq!(tree.search(&2), None);
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&3), Some(&3));
    ///
    /// assert_eq!(tree.remove(&2), None);
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        Self::remove_from(&mut self.root, value)
    }

    /// Recursive part of `remove`: walks to the link owning the doomed node
    /// and rewires that link. Recursion depth is bounded by tree height.
    fn remove_from(link: &mut Link<T>, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let node = link.as_mut()?;
        match value.cmp(&node.value) {
            Ordering::Less => Self::remove_from(&mut node.left, value),
            Ordering::Greater => Self::remove_from(&mut node.right, value),
            Ordering::Equal => {
                if node.left.is_some() && node.right.is_some() {
                    // Two children: overwrite with the in-order successor and
                    // destroy the successor's node instead. The successor is
                    // greater than everything in the left subtree and no
                    // greater than anything left in the right subtree, so the
                    // ordering invariant survives.
                    let successor = Self::detach_min(&mut node.right)
                        .expect("two-child node has a right subtree");
                    Some(mem::replace(&mut node.value, successor.value))
                } else {
                    // At most one child: the child (possibly absent) takes
                    // over the doomed node's slot.
                    let target = link.take().expect("equal comparison implies a node");
                    let Node { value: removed, left, right } = *target;
                    *link = left.or(right);
                    Some(removed)
                }
            }
        }
    }

    /// Splices the minimum node out of the subtree owned by `link` and
    /// returns it. The minimum has no left child by construction, so its
    /// right child (possibly absent) takes over its slot.
    fn detach_min(link: &mut Link<T>) -> Option<Box<Node<T>>> {
        match link {
            None => None,
            Some(node) if node.left.is_some() => Self::detach_min(&mut node.left),
            Some(_) => {
                let mut min = link.take().expect("matched a node above");
                *link = min.right.take();
                Some(min)
            }
        }
    }

    /// Searches for a value in the tree and returns a reference to the
    /// stored value on an exact match, or `None` if it isn't present.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut link = self.root.as_deref();
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = node.left.as_deref(),
                Ordering::Greater => link = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Returns the smallest value in the tree, or `None` if the tree is
    /// empty. The minimum is the leftmost node by the ordering invariant.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.minimum(), None);
    ///
    /// for value in [5, 3, 7, 1, 9] {
    ///     tree.insert(value);
    /// }
    ///
    /// assert_eq!(tree.minimum(), Some(&1));
    /// assert_eq!(tree.maximum(), Some(&9));
    /// ```
    pub fn minimum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.value)
    }

    /// Returns the greatest value in the tree, or `None` if the tree is
    /// empty. The maximum is the rightmost node by the ordering invariant.
    pub fn maximum(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Visits every value in pre-order (node, then left subtree, then right
    /// subtree), feeding each one to `action`. A no-op on an empty tree.
    ///
    /// Recursion depth is bounded by tree height, which for this unbalanced
    /// design can reach the number of stored values.
    pub fn preorder<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.preorder(&mut action);
        }
    }

    /// Visits every value in in-order (left subtree, then node, then right
    /// subtree), feeding each one to `action`. The values arrive in strictly
    /// ascending order. A no-op on an empty tree.
    ///
    /// Recursion depth is bounded by tree height, which for this unbalanced
    /// design can reach the number of stored values.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 4, 7, 6] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut sorted = Vec::new();
    /// tree.inorder(|value| sorted.push(*value));
    ///
    /// assert_eq!(sorted, [3, 4, 5, 6, 7]);
    /// ```
    pub fn inorder<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.inorder(&mut action);
        }
    }

    /// Visits every value in post-order (left subtree, then right subtree,
    /// then node), feeding each one to `action`. A no-op on an empty tree.
    ///
    /// Recursion depth is bounded by tree height, which for this unbalanced
    /// design can reach the number of stored values.
    pub fn postorder<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        if let Some(root) = self.root.as_deref() {
            root.postorder(&mut action);
        }
    }

    /// Visits every value level by level from the top, left to right within
    /// each level, feeding each one to `action`. A no-op on an empty tree.
    ///
    /// This is the one iterative traversal: a FIFO [`Queue`] holds the
    /// frontier, so no recursion happens and a skewed tree costs nothing
    /// extra in stack.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for value in [5, 3, 4, 7, 6] {
    ///     tree.insert(value);
    /// }
    ///
    /// let mut by_level = Vec::new();
    /// tree.level_order(|value| by_level.push(*value));
    ///
    /// assert_eq!(by_level, [5, 3, 7, 4, 6]);
    /// ```
    pub fn level_order<F>(&self, mut action: F)
    where
        F: FnMut(&T),
    {
        let mut frontier = Queue::new();
        if let Some(root) = self.root.as_deref() {
            frontier.enqueue(root);
        }

        while let Some(node) = frontier.dequeue() {
            action(&node.value);
            if let Some(left) = node.left.as_deref() {
                frontier.enqueue(left);
            }
            if let Some(right) = node.right.as_deref() {
                frontier.enqueue(right);
            }
        }
    }
}

impl<T> Drop for Tree<T> {
    // Release the nodes level by level instead of letting the `Box` chain
    // drop recursively: a fully skewed tree is as deep as it is large, and
    // recursing over that depth would blow the stack.
    fn drop(&mut self) {
        let mut frontier = Queue::new();
        if let Some(root) = self.root.take() {
            frontier.enqueue(root);
        }

        while let Some(mut node) = frontier.dequeue() {
            if let Some(left) = node.left.take() {
                frontier.enqueue(left);
            }
            if let Some(right) = node.right.take() {
                frontier.enqueue(right);
            }
            // `node` drops here with both children already detached.
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    /// Renders the tree as its in-order (ascending) sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        self.inorder(|value| {
            list.entry(value);
        });
        list.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::cmp::Ordering;
    use std::rc::Rc;

    use super::*;

    fn tree_of(values: &[i32]) -> Tree<i32> {
        let mut tree = Tree::new();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    fn collect_inorder(tree: &Tree<i32>) -> Vec<i32> {
        let mut visited = Vec::new();
        tree.inorder(|value| visited.push(*value));
        visited
    }

    #[test]
    fn traversal_orders() {
        let tree = tree_of(&[5, 3, 4, 7, 6]);

        let mut preorder = Vec::new();
        tree.preorder(|value| preorder.push(*value));
        assert_eq!(preorder, [5, 3, 4, 7, 6]);

        assert_eq!(collect_inorder(&tree), [3, 4, 5, 6, 7]);

        let mut postorder = Vec::new();
        tree.postorder(|value| postorder.push(*value));
        assert_eq!(postorder, [4, 3, 6, 7, 5]);

        let mut level_order = Vec::new();
        tree.level_order(|value| level_order.push(*value));
        assert_eq!(level_order, [5, 3, 7, 4, 6]);
    }

    #[test]
    fn traversals_on_empty_tree() {
        let tree: Tree<i32> = Tree::new();

        tree.preorder(|_| panic!("visited a value in an empty tree"));
        tree.inorder(|_| panic!("visited a value in an empty tree"));
        tree.postorder(|_| panic!("visited a value in an empty tree"));
        tree.level_order(|_| panic!("visited a value in an empty tree"));
    }

    #[test]
    fn remove_two_children_promotes_successor() {
        let mut tree = tree_of(&[5, 3, 4, 7, 6]);

        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(collect_inorder(&tree), [3, 4, 6, 7]);

        // The root node survived with the successor's value.
        let mut preorder = Vec::new();
        tree.preorder(|value| preorder.push(*value));
        assert_eq!(preorder[0], 6);

        // 3 is a leaf at this point.
        assert_eq!(tree.remove(&3), Some(3));
        assert_eq!(collect_inorder(&tree), [4, 6, 7]);
    }

    #[test]
    fn remove_leaf() {
        let mut tree = tree_of(&[5, 3, 7]);

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(tree.search(&7), None);
        assert_eq!(collect_inorder(&tree), [3, 5]);
    }

    #[test]
    fn remove_with_only_left_child() {
        let mut tree = tree_of(&[5, 3, 7, 6]);

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(collect_inorder(&tree), [3, 5, 6]);
    }

    #[test]
    fn remove_with_only_right_child() {
        let mut tree = tree_of(&[5, 3, 7, 9]);

        assert_eq!(tree.remove(&7), Some(7));
        assert_eq!(collect_inorder(&tree), [3, 5, 9]);
    }

    #[test]
    fn remove_root_with_one_child() {
        let mut tree = tree_of(&[5, 3]);

        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(collect_inorder(&tree), [3]);

        let mut tree = tree_of(&[5, 7]);

        assert_eq!(tree.remove(&5), Some(5));
        assert_eq!(collect_inorder(&tree), [7]);
    }

    #[test]
    fn remove_root_leaf() {
        let mut tree = tree_of(&[5]);

        assert_eq!(tree.remove(&5), Some(5));
        assert!(tree.is_empty());
        assert_eq!(tree.minimum(), None);
    }

    #[test]
    fn remove_with_deep_successor() {
        // 8's successor is 10, two levels down in the right subtree, and it
        // has a right child of its own (11) that must be spliced into its
        // place.
        let mut tree = tree_of(&[8, 3, 12, 10, 14, 11]);

        assert_eq!(tree.remove(&8), Some(8));
        assert_eq!(collect_inorder(&tree), [3, 10, 11, 12, 14]);

        let mut preorder = Vec::new();
        tree.preorder(|value| preorder.push(*value));
        assert_eq!(preorder[0], 10);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut tree = tree_of(&[5, 3, 7]);

        assert_eq!(tree.remove(&3), Some(3));
        assert_eq!(tree.remove(&3), None);
        assert_eq!(collect_inorder(&tree), [5, 7]);
    }

    #[test]
    fn remove_absent_value_is_a_noop() {
        let mut tree = tree_of(&[5, 3, 7]);

        assert_eq!(tree.remove(&42), None);
        assert_eq!(collect_inorder(&tree), [3, 5, 7]);

        let mut empty: Tree<i32> = Tree::new();
        assert_eq!(empty.remove(&42), None);
    }

    #[test]
    fn duplicate_insert_is_a_noop() {
        let mut tree = tree_of(&[5, 3, 7]);

        tree.insert(3);
        tree.insert(5);

        assert_eq!(collect_inorder(&tree), [3, 5, 7]);
    }

    #[test]
    fn search_hits_and_misses() {
        let tree = tree_of(&[5, 3, 7, 1, 9]);

        for present in [1, 3, 5, 7, 9] {
            assert_eq!(tree.search(&present), Some(&present));
        }
        for absent in [0, 2, 4, 6, 8, 10] {
            assert_eq!(tree.search(&absent), None);
        }
    }

    #[test]
    fn minimum_and_maximum() {
        let empty: Tree<i32> = Tree::new();
        assert_eq!(empty.minimum(), None);
        assert_eq!(empty.maximum(), None);

        let tree = tree_of(&[5, 3, 7, 1, 9]);
        assert_eq!(tree.minimum(), Some(&1));
        assert_eq!(tree.maximum(), Some(&9));
    }

    #[test]
    fn clone_is_independent() {
        let mut tree = tree_of(&[5, 3, 7]);
        let snapshot = tree.clone();

        assert_eq!(tree.remove(&3), Some(3));

        assert_eq!(collect_inorder(&tree), [5, 7]);
        assert_eq!(collect_inorder(&snapshot), [3, 5, 7]);
    }

    #[test]
    fn debug_renders_inorder() {
        let tree = tree_of(&[2, 1, 3]);
        assert_eq!(format!("{:?}", tree), "[1, 2, 3]");
    }

    /// A value that bumps a shared counter when dropped, ordered by `id`
    /// only, for checking exactly how many nodes an operation destroys.
    struct Counted {
        id: u32,
        drops: Rc<Cell<usize>>,
    }

    impl Counted {
        fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
            Counted {
                id,
                drops: Rc::clone(drops),
            }
        }
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.drops.set(self.drops.get() + 1);
        }
    }

    impl PartialEq for Counted {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl Eq for Counted {}

    impl PartialOrd for Counted {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Counted {
        fn cmp(&self, other: &Self) -> Ordering {
            self.id.cmp(&other.id)
        }
    }

    #[test]
    fn drop_releases_every_node_of_a_skewed_tree() {
        let drops = Rc::new(Cell::new(0));
        let count = 2_000;

        let mut tree = Tree::new();
        // Ascending insertion order produces a fully skewed (linear) tree.
        for id in 0..count {
            tree.insert(Counted::new(id, &drops));
        }

        drop(tree);
        assert_eq!(drops.get(), count as usize);
    }

    #[test]
    fn two_child_removal_destroys_exactly_one_node() {
        let drops = Rc::new(Cell::new(0));

        let mut tree = Tree::new();
        for id in [5, 3, 4, 7, 6] {
            tree.insert(Counted::new(id, &drops));
        }

        // The root has two children. Its old value comes back to us and the
        // successor's node is the one destroyed, so nothing has dropped yet.
        let probe = Counted::new(5, &drops);
        let removed = tree.remove(&probe);
        assert_eq!(drops.get(), 0);
        assert_eq!(removed.as_ref().map(|v| v.id), Some(5));

        drop(removed);
        assert_eq!(drops.get(), 1);

        drop(probe);
        drop(tree);
        // The probe plus the four values still in the tree.
        assert_eq!(drops.get(), 6);
    }
}

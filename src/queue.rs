//! A singly linked FIFO queue.
//!
//! This is the queue the [`tree`](crate::tree) module leans on for its
//! level-order traversal and its level-by-level teardown, but nothing about
//! it is tree specific. Elements come out in the order they went in, and
//! capacity is bounded only by the allocator.
//!
//! The queue owns its nodes through a chain of `Box`es starting at the head
//! and keeps a raw cursor to the last node so that pushing onto the back is
//! `O(1)` without walking the chain.
//!
//! # Examples
//!
//! ```
//! use naive_bst::queue::Queue;
//!
//! let mut queue = Queue::new();
//!
//! queue.enqueue("first");
//! queue.enqueue("second");
//!
//! assert_eq!(queue.dequeue(), Some("first"));
//! assert_eq!(queue.dequeue(), Some("second"));
//!
//! // Dequeueing an empty queue is not an error, there is just nothing there.
//! assert_eq!(queue.dequeue(), None);
//! ```

use std::fmt;
use std::ptr::NonNull;

/// An unbounded first-in-first-out queue.
pub struct Queue<T> {
    /// Owns the whole chain of nodes.
    head: Option<Box<ListNode<T>>>,
    /// Cursor to the last node of the chain for `O(1)` enqueue. `None`
    /// exactly when `head` is `None`.
    tail: Option<NonNull<ListNode<T>>>,
}

struct ListNode<T> {
    item: T,
    next: Option<Box<ListNode<T>>>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
        }
    }

    /// Returns `true` if the queue holds no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.is_empty());
    ///
    /// queue.enqueue(1);
    /// assert!(!queue.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes an element onto the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        let mut node = Box::new(ListNode { item, next: None });
        let new_tail = NonNull::from(&mut *node);

        match self.tail {
            // SAFETY: `tail` is only `Some` while it points at the last node
            // of the chain owned by `head`. Moving the `Box`es around never
            // moves the nodes themselves, so the pointee is alive and this is
            // the only reference to it right now (we hold `&mut self`).
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(new_tail);
    }

    /// Pops the element at the front of the queue, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.dequeue(), Some(1));
    /// assert_eq!(queue.dequeue(), Some(2));
    /// assert_eq!(queue.dequeue(), None);
    /// ```
    pub fn dequeue(&mut self) -> Option<T> {
        let node = self.head.take()?;
        let ListNode { item, next } = *node;

        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }

        Some(item)
    }

    /// Peeks at the element at the front of the queue without removing it.
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.item)
    }

    /// Peeks at the element at the back of the queue without removing it.
    ///
    /// # Examples
    ///
    /// ```
    /// use naive_bst::queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.enqueue(1);
    /// queue.enqueue(2);
    ///
    /// assert_eq!(queue.front(), Some(&1));
    /// assert_eq!(queue.back(), Some(&2));
    /// ```
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is only `Some` while it points at the last node of
        // the chain owned by `head`, so the node is alive. We hold `&self`,
        // so no one is mutating the chain during this borrow.
        self.tail.as_ref().map(|tail| unsafe { &tail.as_ref().item })
    }
}

impl<T> Drop for Queue<T> {
    // Unlink the chain iteratively. Letting the `Box`es drop on their own
    // would recurse once per node and a long queue would blow the stack.
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.tail = None;
    }
}

impl<T> fmt::Debug for Queue<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut link = self.head.as_deref();
        while let Some(node) = link {
            list.entry(&node.item);
            link = node.next.as_deref();
        }
        list.finish()
    }
}

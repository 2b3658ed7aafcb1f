//! Lazily-sorted priority queue
//!
//! A growable sequence paired with a comparator and a dirty flag. Pushes
//! only append; the sequence is re-sorted on the next `pop` or `peek`. The
//! comparator orders ascending, so `pop` removes the largest element.
//!
//! The queue is a single-owner structure: the dirty flag is an internal
//! optimization, not a synchronization mechanism.

use std::cmp::Ordering;

/// Priority queue with on-demand sorting and a pluggable comparator
pub struct PQueue<'a, T> {
    items: Vec<T>,
    comparator: Box<dyn Fn(&T, &T) -> Ordering + 'a>,
    sorted: bool,
}

impl<'a, T> PQueue<'a, T> {
    /// Create an empty queue ordered by the given ascending comparator
    pub fn new<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'a,
    {
        Self {
            items: Vec::new(),
            comparator: Box::new(comparator),
            sorted: true,
        }
    }

    /// Append an item, invalidating the sort order
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sorted = false;
    }

    /// Remove and return the comparator-largest item
    pub fn pop(&mut self) -> Option<T> {
        self.ensure_sorted();
        self.items.pop()
    }

    /// Borrow the comparator-largest item without removing it
    pub fn peek(&mut self) -> Option<&T> {
        self.ensure_sorted();
        self.items.last()
    }

    /// Number of items in the queue
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate items in their current storage order (insertion order while
    /// no `pop`/`peek` has forced a sort)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// View the items in their current storage order
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Mutable access to an item by position, invalidating the sort order
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.sorted = false;
        self.items.get_mut(index)
    }

    fn ensure_sorted(&mut self) {
        if !self.sorted {
            let cmp = &self.comparator;
            self.items.sort_by(|a, b| cmp(a, b));
            self.sorted = true;
        }
    }
}

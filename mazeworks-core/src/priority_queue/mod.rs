//! Indexed binary min-heap with priority mutation.
//!
//! The heap keeps its nodes in a contiguous vector addressed by logical
//! 1-based positions, so the parent of position `i` is `i / 2` and its
//! children are `2i` and `2i + 1`. A side table maps every item to its current
//! position, which lets [`IndexedMinPriorityQueue::contains`] answer in O(1)
//! and lets [`IndexedMinPriorityQueue::change_priority`] locate an item
//! without scanning.
//!
//! The node vector and the position table must agree after every operation.
//! Only [`IndexedMinPriorityQueue::swap`] moves nodes, and it updates both
//! sides in one place.

use std::{cmp::Ordering, collections::HashMap, hash::Hash};

use crate::error::{CollectionError, Result};

const STRUCTURE: &str = "priority queue";
const ROOT: usize = 1;

#[derive(Clone, Debug)]
struct PriorityNode<T> {
    item: T,
    priority: f64,
}

/// A min-priority queue keyed by item identity.
///
/// Items must be unique while present. Priorities are `f64` values compared
/// with `<`; NaN priorities are rejected. No ordering is guaranteed between
/// items of equal priority.
///
/// # Examples
/// ```
/// use mazeworks_core::IndexedMinPriorityQueue;
///
/// let mut queue = IndexedMinPriorityQueue::new();
/// queue.add("a", 5.0)?;
/// queue.add("b", 2.0)?;
/// queue.add("c", 8.0)?;
/// assert_eq!(queue.remove_min()?, "b");
/// queue.change_priority(&"a", 9.0)?;
/// assert_eq!(queue.remove_min()?, "c");
/// assert_eq!(queue.remove_min()?, "a");
/// assert!(queue.is_empty());
/// # Ok::<(), mazeworks_core::CollectionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct IndexedMinPriorityQueue<T> {
    nodes: Vec<PriorityNode<T>>,
    positions: HashMap<T, usize>,
}

impl<T> Default for IndexedMinPriorityQueue<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> IndexedMinPriorityQueue<T>
where
    T: Clone + Eq + Hash,
{
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty queue able to hold `capacity` items without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            positions: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts `item` with the given `priority`.
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateItem`] when the item is already
    /// queued and [`CollectionError::InvalidPriority`] when `priority` is NaN.
    pub fn add(&mut self, item: T, priority: f64) -> Result<()> {
        if self.contains(&item) {
            return Err(CollectionError::DuplicateItem {
                structure: STRUCTURE,
            });
        }
        validate_priority(priority)?;

        self.nodes.push(PriorityNode {
            item: item.clone(),
            priority,
        });
        let position = self.nodes.len();
        self.positions.insert(item, position);
        self.percolate_up(position);
        Ok(())
    }

    /// Returns `true` when `item` is currently queued.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Returns the item with the smallest priority without removing it.
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyQueue`] when the queue is empty.
    pub fn peek_min(&self) -> Result<&T> {
        self.nodes
            .first()
            .map(|node| &node.item)
            .ok_or(CollectionError::EmptyQueue {
                structure: STRUCTURE,
            })
    }

    /// Removes and returns the item with the smallest priority.
    ///
    /// # Errors
    /// Returns [`CollectionError::EmptyQueue`] when the queue is empty.
    pub fn remove_min(&mut self) -> Result<T> {
        if self.nodes.is_empty() {
            return Err(CollectionError::EmptyQueue {
                structure: STRUCTURE,
            });
        }

        // `swap_remove` moves the last node into the root slot.
        let min = self.nodes.swap_remove(ROOT - 1);
        self.positions.remove(&min.item);
        if let Some(moved) = self.nodes.first() {
            self.positions.insert(moved.item.clone(), ROOT);
        }
        if self.nodes.len() > 1 {
            self.percolate_down(ROOT);
        }
        Ok(min.item)
    }

    /// Replaces the priority of a queued item and restores heap order.
    ///
    /// # Errors
    /// Returns [`CollectionError::ItemNotFound`] when the item is not queued
    /// and [`CollectionError::InvalidPriority`] when `priority` is NaN.
    pub fn change_priority(&mut self, item: &T, priority: f64) -> Result<()> {
        let position = *self
            .positions
            .get(item)
            .ok_or(CollectionError::ItemNotFound {
                structure: STRUCTURE,
            })?;
        validate_priority(priority)?;

        let node = self
            .nodes
            .get_mut(position - 1)
            .ok_or(CollectionError::ItemNotFound {
                structure: STRUCTURE,
            })?;
        let previous = node.priority;
        node.priority = priority;

        match priority.partial_cmp(&previous) {
            Some(Ordering::Less) => self.percolate_up(position),
            Some(Ordering::Greater) => self.percolate_down(position),
            _ => {}
        }
        Ok(())
    }

    /// Returns the current priority of `item`, if it is queued.
    #[must_use]
    pub fn priority_of(&self, item: &T) -> Option<f64> {
        self.positions
            .get(item)
            .and_then(|&position| self.nodes.get(position - 1))
            .map(|node| node.priority)
    }

    /// Returns the number of queued items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` when no items are queued.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "callers pass positions in 1..=len"
    )]
    fn priority_at(&self, position: usize) -> f64 {
        self.nodes[position - 1].priority
    }

    fn is_smaller(&self, left: usize, right: usize) -> bool {
        self.priority_at(left) < self.priority_at(right)
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "callers pass positions in 1..=len"
    )]
    fn swap(&mut self, left: usize, right: usize) {
        self.nodes.swap(left - 1, right - 1);
        for position in [left, right] {
            let item = &self.nodes[position - 1].item;
            if let Some(slot) = self.positions.get_mut(item) {
                *slot = position;
            }
        }
    }

    fn percolate_up(&mut self, mut position: usize) {
        while position > ROOT {
            let parent = parent_of(position);
            if !self.is_smaller(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn percolate_down(&mut self, mut position: usize) {
        let len = self.len();
        loop {
            let left = position * 2;
            if left > len {
                break;
            }
            let right = left + 1;
            let smaller = if right <= len && self.is_smaller(right, left) {
                right
            } else {
                left
            };
            if !self.is_smaller(smaller, position) {
                break;
            }
            self.swap(position, smaller);
            position = smaller;
        }
    }

    /// Checks the heap order and the position table against each other.
    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        let ordered = (ROOT + 1..=self.len())
            .all(|position| self.priority_at(position) >= self.priority_at(parent_of(position)));
        let indexed = self.positions.len() == self.nodes.len()
            && self.nodes.iter().enumerate().all(|(offset, node)| {
                self.positions.get(&node.item) == Some(&(offset + ROOT))
            });
        ordered && indexed
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "heap parents round down"
)]
const fn parent_of(position: usize) -> usize {
    position / 2
}

const fn validate_priority(priority: f64) -> Result<()> {
    if priority.is_nan() {
        return Err(CollectionError::InvalidPriority {
            structure: STRUCTURE,
        });
    }
    Ok(())
}

//! Union-by-size disjoint sets with path compression.
//!
//! Items are assigned sequential slot indices as they are registered. Each
//! slot is either the root of a set, carrying the set's size, or a child
//! pointing at another slot. Lookups compress the walked chain so every
//! visited slot points straight at its root afterwards.

use std::{collections::HashMap, hash::Hash};

use crate::error::{CollectionError, Result};

const STRUCTURE: &str = "disjoint sets";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Root { size: usize },
    Child { parent: usize },
}

/// Disjoint sets over arbitrary hashable items.
///
/// # Examples
/// ```
/// use mazeworks_core::DisjointSets;
///
/// let mut sets = DisjointSets::new();
/// for item in 1..=4 {
///     sets.make_set(item)?;
/// }
/// assert!(sets.union(&1, &2)?);
/// assert!(sets.union(&3, &4)?);
/// assert_eq!(sets.find_set(&1)?, sets.find_set(&2)?);
/// assert_ne!(sets.find_set(&1)?, sets.find_set(&3)?);
/// assert!(sets.union(&2, &3)?);
/// assert_eq!(sets.set_count(), 1);
/// # Ok::<(), mazeworks_core::CollectionError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSets<T> {
    slots: Vec<Slot>,
    indices: HashMap<T, usize>,
    set_count: usize,
}

impl<T> Default for DisjointSets<T> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            indices: HashMap::new(),
            set_count: 0,
        }
    }
}

impl<T> DisjointSets<T>
where
    T: Eq + Hash,
{
    /// Creates an empty structure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty structure with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
            set_count: 0,
        }
    }

    /// Registers `item` as a new singleton set.
    ///
    /// # Errors
    /// Returns [`CollectionError::DuplicateItem`] if `item` was registered
    /// before.
    pub fn make_set(&mut self, item: T) -> Result<()> {
        if self.indices.contains_key(&item) {
            return Err(CollectionError::DuplicateItem {
                structure: STRUCTURE,
            });
        }
        self.indices.insert(item, self.slots.len());
        self.slots.push(Slot::Root { size: 1 });
        self.set_count += 1;
        Ok(())
    }

    /// Returns the index of the root of the set containing `item`.
    ///
    /// Two items are in the same set exactly when their roots are equal.
    /// Every slot visited on the way up is repointed at the root.
    ///
    /// # Errors
    /// Returns [`CollectionError::ItemNotFound`] if `item` is unknown.
    pub fn find_set(&mut self, item: &T) -> Result<usize> {
        let start = self.index_of(item)?;
        Ok(self.find_root(start))
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The root of the smaller set is attached under the root of the larger
    /// one; on equal sizes `left`'s root goes under `right`'s. Returns `false`
    /// when both items already share a set.
    ///
    /// # Errors
    /// Returns [`CollectionError::ItemNotFound`] if either item is unknown.
    #[expect(
        clippy::indexing_slicing,
        reason = "roots come from find_root and stay below len"
    )]
    pub fn union(&mut self, left: &T, right: &T) -> Result<bool> {
        let left_root = self.find_set(left)?;
        let right_root = self.find_set(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_size = self.root_size(left_root);
        let right_size = self.root_size(right_root);
        let (child, parent) = if left_size <= right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.slots[child] = Slot::Child { parent };
        self.slots[parent] = Slot::Root {
            size: left_size + right_size,
        };
        self.set_count -= 1;
        Ok(true)
    }

    /// Returns the number of items in the set containing `item`.
    ///
    /// # Errors
    /// Returns [`CollectionError::ItemNotFound`] if `item` is unknown.
    pub fn set_size(&mut self, item: &T) -> Result<usize> {
        let root = self.find_set(item)?;
        Ok(self.root_size(root))
    }

    /// Returns `true` if `item` has been registered.
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.indices.contains_key(item)
    }

    /// Returns the number of registered items.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` when no items have been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.set_count
    }

    fn index_of(&self, item: &T) -> Result<usize> {
        self.indices
            .get(item)
            .copied()
            .ok_or(CollectionError::ItemNotFound {
                structure: STRUCTURE,
            })
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "slot indices and parent links stay below len"
    )]
    fn find_root(&mut self, start: usize) -> usize {
        let mut root = start;
        while let Slot::Child { parent } = self.slots[root] {
            root = parent;
        }

        let mut node = start;
        while let Slot::Child { parent } = self.slots[node] {
            self.slots[node] = Slot::Child { parent: root };
            node = parent;
        }
        root
    }

    #[expect(
        clippy::indexing_slicing,
        reason = "roots come from find_root and stay below len"
    )]
    fn root_size(&self, root: usize) -> usize {
        match self.slots[root] {
            Slot::Root { size } => size,
            Slot::Child { .. } => 0,
        }
    }

    /// Depth of the chain from `item` to its root, without compressing.
    #[cfg(test)]
    #[expect(
        clippy::indexing_slicing,
        reason = "slot indices and parent links stay below len"
    )]
    pub(crate) fn depth_of(&self, item: &T) -> Option<usize> {
        let mut node = *self.indices.get(item)?;
        let mut depth = 0;
        while let Slot::Child { parent } = self.slots[node] {
            node = parent;
            depth += 1;
        }
        Some(depth)
    }

    /// Sum of root sizes must equal the number of items.
    #[cfg(test)]
    pub(crate) fn sizes_are_consistent(&self) -> bool {
        let total: usize = self
            .slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Root { size } => Some(*size),
                Slot::Child { .. } => None,
            })
            .sum();
        let roots = self
            .slots
            .iter()
            .filter(|slot| matches!(slot, Slot::Root { .. }))
            .count();
        total == self.slots.len() && roots == self.set_count
    }
}

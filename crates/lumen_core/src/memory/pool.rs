//! # Free-List Pool
//!
//! Fixed-capacity slot allocator for objects that are frequently allocated and
//! freed while other code holds on to their index.
//!
//! Every slot is either live (holds a `T`) or free (holds the index of the next
//! free slot). The free slots form a singly linked chain threaded through the
//! storage itself, so allocation and release are O(1) with no side tables.

use std::ops::{Index, IndexMut};

/// One storage cell of a [`FreeListPool`].
#[derive(Debug, Clone)]
enum Slot<T> {
    /// Holds a value owned by the caller of `alloc`.
    Live(T),
    /// Unused; links to the next free slot, `None` at the end of the chain.
    Free { next: Option<usize> },
}

/// A pool allocator with a free list embedded in its slots.
///
/// Indices returned by [`alloc`](Self::alloc) stay valid until they are passed
/// to [`free`](Self::free); no other operation moves a live value. This is the
/// pool to use when something outside the pool stores slot indices.
///
/// # Thread Safety
///
/// This pool is NOT thread-safe. One frame loop owns it.
///
/// # Example
///
/// ```rust
/// use lumen_core::FreeListPool;
///
/// let mut pool: FreeListPool<u32> = FreeListPool::new(3);
/// assert_eq!(pool.insert(7), Some(0));
/// assert_eq!(pool.insert(8), Some(1));
/// assert_eq!(pool.insert(9), Some(2));
/// assert_eq!(pool.insert(10), None);
///
/// pool.free(1);
/// assert_eq!(pool.insert(11), Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct FreeListPool<T> {
    /// The storage array. Never reallocated after `new`.
    slots: Box<[Slot<T>]>,
    /// First free slot, `None` when every slot is live.
    free_head: Option<usize>,
    /// Number of live slots.
    live_count: usize,
}

impl<T> FreeListPool<T> {
    /// Creates a pool with `capacity` free slots.
    ///
    /// The free list is initialized in ascending order, so a fresh pool hands
    /// out `0, 1, 2, ...`.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        let slots: Vec<Slot<T>> = (0..capacity)
            .map(|i| Slot::Free {
                next: (i + 1 < capacity).then_some(i + 1),
            })
            .collect();

        Self {
            slots: slots.into_boxed_slice(),
            free_head: Some(0),
            live_count: 0,
        }
    }

    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live slots.
    #[inline]
    #[must_use]
    pub const fn live_count(&self) -> usize {
        self.live_count
    }

    /// Returns the number of free slots.
    #[inline]
    #[must_use]
    pub fn free_count(&self) -> usize {
        self.capacity() - self.live_count
    }

    /// Returns true if no slot is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.live_count == 0
    }

    /// Returns true if every slot is live.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.live_count == self.capacity()
    }

    /// Pops the head of the free list and stores `value` there.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**.
    ///
    /// # Returns
    ///
    /// The slot index, or `None` if every slot is live. The value is dropped
    /// in that case.
    pub fn insert(&mut self, value: T) -> Option<usize> {
        // Exhaustion is decided by the count, never by walking the chain.
        if self.is_full() {
            return None;
        }
        let index = self.free_head?;
        let Slot::Free { next } = self.slots[index] else {
            return None;
        };

        self.slots[index] = Slot::Live(value);
        self.free_head = next;
        self.live_count += 1;
        Some(index)
    }

    /// Pushes `index` onto the free list and returns the value it held.
    ///
    /// Freeing a slot that is already free, or an index past the capacity,
    /// leaves the pool untouched and returns `None`.
    pub fn free(&mut self, index: usize) -> Option<T> {
        debug_assert!(index < self.capacity(), "free of out-of-range index {index}");
        let slot = self.slots.get_mut(index)?;
        if matches!(slot, Slot::Free { .. }) {
            return None;
        }

        let old = std::mem::replace(
            slot,
            Slot::Free {
                next: self.free_head,
            },
        );
        self.free_head = Some(index);
        self.live_count -= 1;

        match old {
            Slot::Live(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Returns true if `index` refers to a live slot.
    #[inline]
    #[must_use]
    pub fn is_live(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(Slot::Live(_)))
    }

    /// Gets a reference to a live value.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Live(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Gets a mutable reference to a live value.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Live(value) => Some(value),
            Slot::Free { .. } => None,
        }
    }

    /// Frees every slot and rebuilds the ascending free list.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        for (i, slot) in self.slots.iter_mut().enumerate() {
            *slot = Slot::Free {
                next: (i + 1 < capacity).then_some(i + 1),
            };
        }
        self.free_head = Some(0);
        self.live_count = 0;
    }

    /// Iterates over all live values with their indices.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Live(value) => Some((index, value)),
                Slot::Free { .. } => None,
            })
    }

    /// Iterates mutably over all live values with their indices.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(index, slot)| match slot {
                Slot::Live(value) => Some((index, value)),
                Slot::Free { .. } => None,
            })
    }

    /// Length of the free chain, walked from the head.
    ///
    /// Diagnostic only: O(capacity).
    #[must_use]
    pub fn free_chain_len(&self) -> usize {
        let mut len = 0;
        let mut cursor = self.free_head;
        while let Some(index) = cursor {
            len += 1;
            cursor = match self.slots[index] {
                Slot::Free { next } => next,
                Slot::Live(_) => break,
            };
            if len > self.capacity() {
                break;
            }
        }
        len
    }
}

impl<T: Default> FreeListPool<T> {
    /// Allocates a slot holding `T::default()`.
    ///
    /// The caller overwrites the value through `pool[index]`.
    pub fn alloc(&mut self) -> Option<usize> {
        self.insert(T::default())
    }
}

impl<T> Index<usize> for FreeListPool<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if the slot is free. Reading a free slot is a caller bug.
    #[inline]
    fn index(&self, index: usize) -> &T {
        match &self.slots[index] {
            Slot::Live(value) => value,
            Slot::Free { .. } => panic!("pool slot {index} is not live"),
        }
    }
}

impl<T> IndexMut<usize> for FreeListPool<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match &mut self.slots[index] {
            Slot::Live(value) => value,
            Slot::Free { .. } => panic!("pool slot {index} is not live"),
        }
    }
}

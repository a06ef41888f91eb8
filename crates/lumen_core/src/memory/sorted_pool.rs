//! # Sorted Pool
//!
//! Swap-compaction allocator: live elements are kept packed in the prefix
//! `[0, size)` and the free slots form the suffix `[size, capacity)`.
//!
//! Freeing swaps the freed element with the last live one, so the live prefix
//! never has holes and iteration is a plain slice walk. The price is that a
//! free can relocate a different element. Store values (or back-pointers) in
//! this pool, never long-lived slot indices; use
//! [`FreeListPool`](super::FreeListPool) when indices must stay stable.

use std::ops::{Index, IndexMut};

/// A fixed-capacity pool partitioned into a live prefix and a free suffix.
///
/// # Example
///
/// ```rust
/// use lumen_core::SortedPool;
///
/// let mut pool: SortedPool<char> = SortedPool::new(3);
/// for c in ['a', 'b', 'c'] {
///     let i = pool.alloc().unwrap();
///     pool[i] = c;
/// }
///
/// // 'c' moves from the boundary into slot 0.
/// assert_eq!(pool.free(0), Some(2));
/// assert_eq!(pool.as_slice(), &['c', 'b']);
/// ```
#[derive(Debug, Clone)]
pub struct SortedPool<T> {
    /// Backing storage. Slots past `active_count` hold stale values.
    slots: Box<[T]>,
    /// Partition point between the live prefix and the free suffix.
    active_count: usize,
}

impl<T: Default> SortedPool<T> {
    /// Creates a pool with every slot free.
    ///
    /// # Panics
    ///
    /// Panics if capacity is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        let slots: Vec<T> = (0..capacity).map(|_| T::default()).collect();
        Self {
            slots: slots.into_boxed_slice(),
            active_count: 0,
        }
    }
}

impl<T> SortedPool<T> {
    /// Returns the number of live elements.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.active_count
    }

    /// Returns the maximum number of elements.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no element is live.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.active_count == 0
    }

    /// Returns true if the live prefix covers the whole storage.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.active_count == self.slots.len()
    }

    /// Grows the live prefix by one and returns the new slot's index.
    ///
    /// The slot still holds whatever was last stored there; the caller must
    /// overwrite it.
    ///
    /// # Returns
    ///
    /// The first inactive index, or `None` if the pool is full.
    #[inline]
    pub fn alloc(&mut self) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        let index = self.active_count;
        self.active_count += 1;
        Some(index)
    }

    /// Stores `value` in a newly allocated slot.
    #[inline]
    pub fn push(&mut self, value: T) -> Option<usize> {
        let index = self.alloc()?;
        self.slots[index] = value;
        Some(index)
    }

    /// Moves the element at `index` into the free region.
    ///
    /// The last live element is swapped into `index`, then the live prefix
    /// shrinks by one. This is a **O(1)** operation.
    ///
    /// # Returns
    ///
    /// The old index of the element that now lives at `index`, or `None` when
    /// `index` was the last live slot and nothing moved. An `index` outside
    /// the live prefix is a caller bug and leaves the pool unchanged.
    pub fn free(&mut self, index: usize) -> Option<usize> {
        debug_assert!(
            index < self.active_count,
            "free of inactive index {index} (size {})",
            self.active_count
        );
        if index >= self.active_count {
            return None;
        }

        self.active_count -= 1;
        let last = self.active_count;
        self.slots.swap(index, last);
        (index != last).then_some(last)
    }

    /// Gets a reference to a live element.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Gets a mutable reference to a live element.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// The live prefix.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.slots[..self.active_count]
    }

    /// The live prefix, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots[..self.active_count]
    }

    /// Iterates over the live prefix.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Marks every slot free. Stored values are left in place.
    #[inline]
    pub fn clear(&mut self) {
        self.active_count = 0;
    }
}

impl<T> Index<usize> for SortedPool<T> {
    type Output = T;

    /// Raw slot access. Indices past `size()` read stale values; only the
    /// live prefix is meaningful.
    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.slots[index]
    }
}

impl<T> IndexMut<usize> for SortedPool<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.slots[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_until_full() {
        let mut pool: SortedPool<u32> = SortedPool::new(3);

        assert_eq!(pool.alloc(), Some(0));
        assert_eq!(pool.alloc(), Some(1));
        assert_eq!(pool.alloc(), Some(2));
        assert_eq!(pool.alloc(), None);
        assert_eq!(pool.size(), 3);
        assert_eq!(pool.capacity(), 3);
    }

    #[test]
    fn test_free_relocates_boundary_element() {
        let mut pool: SortedPool<u32> = SortedPool::new(3);
        for v in [10, 20, 30] {
            pool.push(v).unwrap();
        }

        assert_eq!(pool.free(1), Some(2));
        assert_eq!(pool[1], 30);
        assert_eq!(pool.size(), 2);

        // The freed slot is the next one handed out, with the stale value.
        assert_eq!(pool.alloc(), Some(2));
        assert_eq!(pool[2], 20);
    }

    #[test]
    fn test_free_last_moves_nothing() {
        let mut pool: SortedPool<u32> = SortedPool::new(2);
        pool.push(1).unwrap();
        pool.push(2).unwrap();

        assert_eq!(pool.free(1), None);
        assert_eq!(pool.as_slice(), &[1]);
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "free of inactive index"))]
    fn test_free_inactive_index_is_noop() {
        let mut pool: SortedPool<u32> = SortedPool::new(2);
        pool.push(1).unwrap();

        assert_eq!(pool.free(1), None);
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn test_get_respects_live_prefix() {
        let mut pool: SortedPool<u32> = SortedPool::new(4);
        pool.push(7).unwrap();

        assert_eq!(pool.get(0), Some(&7));
        assert_eq!(pool.get(1), None);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut pool: SortedPool<u8> = SortedPool::new(2);
        pool.push(1).unwrap();
        pool.push(2).unwrap();
        pool.clear();

        assert!(pool.is_empty());
        assert_eq!(pool.alloc(), Some(0));
    }
}

//! # Pool Law Tests
//!
//! Drives both pools through long random alloc/free sequences and checks the
//! bookkeeping laws after every step.

use lumen_core::{FreeListPool, SortedPool};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const STEPS: usize = 10_000;

/// Test: a fresh free-list pool of any capacity allocates exactly N times.
#[test]
fn test_free_list_allocates_exactly_capacity() {
    for capacity in [1, 2, 3, 17, 100] {
        let mut pool: FreeListPool<u64> = FreeListPool::new(capacity);
        for expected in 0..capacity {
            assert_eq!(pool.alloc(), Some(expected));
        }
        assert_eq!(pool.alloc(), None, "capacity {capacity}");
    }
}

/// Test: live count always equals allocs minus frees and never exceeds N.
#[test]
fn test_free_list_live_count_tracks_operations() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let capacity = 64;
    let mut pool: FreeListPool<usize> = FreeListPool::new(capacity);
    let mut held: Vec<usize> = Vec::new();
    let mut allocs = 0usize;
    let mut frees = 0usize;

    for step in 0..STEPS {
        if rng.gen_bool(0.55) {
            if let Some(index) = pool.insert(step) {
                assert!(!held.contains(&index), "index {index} handed out twice");
                held.push(index);
                allocs += 1;
            } else {
                assert_eq!(held.len(), capacity);
            }
        } else if !held.is_empty() {
            let pick = rng.gen_range(0..held.len());
            let index = held.swap_remove(pick);
            assert!(pool.free(index).is_some());
            frees += 1;
        }

        assert_eq!(pool.live_count(), allocs - frees);
        assert!(pool.live_count() <= capacity);
        assert_eq!(pool.live_count() + pool.free_chain_len(), capacity);
    }
}

/// Test: values stay at their index across unrelated frees.
#[test]
fn test_free_list_indices_are_stable() {
    let mut pool: FreeListPool<u32> = FreeListPool::new(8);
    let a = pool.insert(1).unwrap();
    let b = pool.insert(2).unwrap();
    let c = pool.insert(3).unwrap();

    pool.free(b);
    assert_eq!(pool[a], 1);
    assert_eq!(pool[c], 3);
}

/// Test: sorted pool size stays in range and obeys the relocation law.
#[test]
fn test_sorted_pool_relocation_law() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let capacity = 32;
    let mut pool: SortedPool<u32> = SortedPool::new(capacity);
    let mut next_value = 0u32;

    for _ in 0..STEPS {
        if rng.gen_bool(0.5) {
            if let Some(index) = pool.alloc() {
                pool[index] = next_value;
                next_value += 1;
            } else {
                assert!(pool.is_full());
            }
        } else if !pool.is_empty() {
            let index = rng.gen_range(0..pool.size());
            let boundary = pool[pool.size() - 1];
            let moved = pool.free(index);

            if index == pool.size() {
                assert_eq!(moved, None);
            } else {
                assert_eq!(moved, Some(pool.size()));
                assert_eq!(pool[index], boundary);
            }
        }

        assert!(pool.size() <= capacity);
        assert_eq!(pool.as_slice().len(), pool.size());
    }
}

/// Test: the concrete capacity-3 scenario for both pools.
#[test]
fn test_capacity_three_scenario() {
    let mut free_list: FreeListPool<char> = FreeListPool::new(3);
    assert_eq!(free_list.insert('a'), Some(0));
    assert_eq!(free_list.insert('b'), Some(1));
    assert_eq!(free_list.insert('c'), Some(2));
    assert_eq!(free_list.insert('d'), None);
    free_list.free(1);
    assert_eq!(free_list.insert('e'), Some(1));

    let mut sorted: SortedPool<char> = SortedPool::new(3);
    assert_eq!(sorted.push('a'), Some(0));
    assert_eq!(sorted.push('b'), Some(1));
    assert_eq!(sorted.push('c'), Some(2));
    assert_eq!(sorted.push('d'), None);
    assert_eq!(sorted.free(1), Some(2));
    assert_eq!(sorted[1], 'c');
    assert_eq!(sorted.alloc(), Some(2));
}

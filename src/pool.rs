/*! A small bounded object pool for recyclable iterator cursors

# About
spec.md §5 describes each container as owning "a small pool of iterator
objects" to avoid a fresh heap allocation on every call to `iterator()`.
None of the teacher's own structures need this (their iterators borrow
`std::slice::Iter` directly, which is already a stack value with no
allocation to amortize), so this module has no direct teacher precursor.
It is grounded instead in the general free-list/object-pool shape used
elsewhere in the example pack (see `bc78c73_CppCXY-lua-rs` object pool,
and `47fe086_estokes-poolshark`) — trimmed down from their arena/GC
machinery to the one behavior spec.md actually asks for: a bounded LIFO
of reusable cursors whose buffer reference is cleared on release so it
cannot keep the container's backing storage reachable after the cursor
is done with it.

This crate's own iterators (`crate::sets::*::Iter`, `crate::heap::Iter`)
are themselves just borrowed-slice wrappers with no heap allocation, so
pooling them buys nothing over the teacher's direct-borrow style — this
module exists to satisfy spec.md §5's explicit contract, and callers that
don't need it can ignore it entirely.
*/

/// A bounded LIFO pool of recyclable cursor values.
///
/// `T` is typically a reusable iteration-state struct (e.g. "current
/// slot index + direction") rather than the iterator itself, since Rust
/// iterators borrow their source and can't outlive it in a pool. See
/// [IteratorPool::acquire]/[IteratorPool::release].
#[derive(Debug)]
pub struct IteratorPool<T> {
    free: Vec<T>,
    capacity: usize,
}

impl<T> IteratorPool<T> {
    /// Creates a pool that retains at most `capacity` released cursors;
    /// anything released beyond that is simply dropped ("overflow
    /// releases the excess", spec.md §5).
    pub fn new(capacity: usize) -> Self {
        IteratorPool {
            free: Vec::with_capacity(capacity.min(16)),
            capacity,
        }
    }

    /// Takes a cursor out of the pool if one is free, otherwise asks
    /// `make` to build a fresh one.
    pub fn acquire<F: FnOnce() -> T>(&mut self, make: F) -> T {
        self.free.pop().unwrap_or_else(make)
    }

    /// Returns a cursor to the pool after resetting it with `reset`
    /// (the hook callers use to clear any buffer reference the cursor
    /// held, so the pool can't extend the backing buffer's reachable
    /// lifetime). Drops the cursor instead if the pool is already full.
    pub fn release<F: FnOnce(&mut T)>(&mut self, mut cursor: T, reset: F) {
        if self.free.len() < self.capacity {
            reset(&mut cursor);
            self.free.push(cursor);
        }
        // else: dropped, overflow is expected and silent (spec.md §5).
    }

    /// Number of cursors currently held in reserve.
    pub fn len(&self) -> usize {
        self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.free.is_empty()
    }
}

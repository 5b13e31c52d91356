/*! Capacity and growth policy shared by every set layout and the heap

# About
Separating "how big should the next buffer be" from the probing/shifting
logic keeps the set layouts in `crate::sets` free of arithmetic duplication
and gives the set and the heap two deliberately different growth curves,
as spec.md §2 calls out:

- Sets grow by doubling (power-of-two capacities are required so that
  `hash & mask` replaces `hash % capacity`).
- The heap's backing buffer grows by a bounded proportional factor (no
  power-of-two requirement applies to a flat array with no probing), the
  same way the teacher's `Vec`-backed structures rely on amortized
  geometric growth — made explicit here instead of left to `Vec::push`,
  because spec.md §3 models the heap as holding an explicit "resizer
  (sizing-policy strategy)".
*/

/// The smallest capacity a set may have (spec.md §3, invariant 1).
pub const MIN_CAPACITY: usize = 4;

/// Rounds `minimum` up to the next power of two no smaller than
/// [MIN_CAPACITY].
///
/// ```
/// use scatter_collections::sizing::round_up_capacity;
/// assert_eq!(round_up_capacity(0), 4);
/// assert_eq!(round_up_capacity(5), 8);
/// assert_eq!(round_up_capacity(1024), 1024);
/// ```
pub fn round_up_capacity(minimum: usize) -> usize {
    let minimum = minimum.max(MIN_CAPACITY);
    minimum.next_power_of_two()
}

/// The next capacity a set should grow to once `resize_at` is reached.
/// Sets always double — this keeps `capacity` a power of two and keeps
/// the expected number of rehashes over `n` insertions at `O(log n)`.
///
/// ```
/// use scatter_collections::sizing::next_set_capacity;
/// assert_eq!(next_set_capacity(4), 8);
/// assert_eq!(next_set_capacity(2048), 4096);
/// ```
pub fn next_set_capacity(current: usize) -> usize {
    debug_assert!(current.is_power_of_two());
    current
        .checked_mul(2)
        .expect("set capacity overflowed usize::MAX during growth")
}

/// The slot count at which a table of the given `capacity` and
/// `load_factor` must trigger a rehash (spec.md §3, invariant 2). The
/// `max(3, ...) - 2` shape guarantees at least one slot stays
/// unallocated so every probe loop is guaranteed to terminate, even at
/// the smallest capacity.
///
/// ```
/// use scatter_collections::sizing::resize_at;
/// assert_eq!(resize_at(4, 0.75), 1);
/// assert_eq!(resize_at(2048, 0.75), 1534);
/// ```
pub fn resize_at(capacity: usize, load_factor: f64) -> usize {
    debug_assert!(load_factor > 0.0 && load_factor <= 1.0);
    let threshold = (capacity as f64 * load_factor).floor() as usize;
    threshold.max(3) - 2
}

/// Validates a load factor is in the required `(0, 1]` range, panicking
/// (a precondition violation, spec.md §7) otherwise.
pub fn validate_load_factor(load_factor: f64) -> f64 {
    assert!(
        load_factor > 0.0 && load_factor <= 1.0,
        "load factor must be in (0, 1], got {load_factor}"
    );
    load_factor
}

/// Bounded-proportional growth for the heap's flat buffer: roughly 1.5x
/// plus one slot, distinct from the set's strict doubling. `minimum` is
/// honored even if the proportional step would undershoot it (e.g. after
/// a bulk `add_all`).
///
/// ```
/// use scatter_collections::sizing::next_heap_capacity;
/// assert_eq!(next_heap_capacity(0, 1), 4);
/// assert_eq!(next_heap_capacity(4, 0), 7);
/// assert_eq!(next_heap_capacity(4, 20), 20);
/// ```
pub fn next_heap_capacity(current: usize, minimum: usize) -> usize {
    let grown = if current == 0 {
        4
    } else {
        current + (current >> 1) + 1
    };
    grown.max(minimum)
}

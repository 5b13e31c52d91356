/*! # About
A primitive-specialized collections engine: an open-addressing hash set
with three storage layouts, and a binary-heap priority queue, sharing a
small hash-mixing and capacity-sizing substrate.

The point of the library is not its public surface — which looks like any
other set/heap — but the memory layout and probing discipline that let a
set keyed on a machine-sized primitive avoid a per-entry allocation bitmap
and the pointer-chasing a generic hash table pays for.

# Hash mixer and sizing
- [mix]: 32-bit (MurmurHash3 finalizer) and 64-bit avalanche mixers used to
  disperse a key's low-order bits before masking against table capacity.
- [sizing]: power-of-two capacity rounding, the doubling growth curve sets
  use, and the distinct bounded-proportional curve the heap uses.

# Sets
Three layouts share one probing/shift-back discipline
([sets] has the shared helpers); pick whichever fits the key type:

- [sets::plain]: generic keys, `Option<T>` per slot. Also carries
  union/intersection/difference/symmetric-difference set-algebra views.
- [sets::robin_hood]: generic keys, reordered by probe distance on insert,
  for tightly bounded worst-case probe lengths.
- [sets::sentinel] (with [sets::primitive]): primitive keys, no side array
  — the type's default value marks "empty".

# Heap
- [heap]: an array-backed binary min-heap with swim/sink, Floyd bottom-up
  heapify, bulk-fixup removal, and a pluggable comparator.

# Iterator pool
- [pool]: the bounded object-pool contract described for container
  iterators. None of this crate's own iterators need it (they are
  zero-allocation slice wrappers), but the type is provided so a consumer
  building a heavier iterator on top of these containers has it available.
*/

pub mod heap;
pub mod mix;
pub mod pool;
pub mod sets;
pub mod sizing;

/*! Avalanche bit mixers for hash-table key dispersal

# About
Open-addressing probe sequences are only as good as the low-order bits of
the hash they mask against the table's capacity (`hash & mask`). A
raw `Hash::hash` digest (or a small integer key used directly) can leave
those low bits poorly distributed, which clusters probe chains. This
module finalizes a key's digest through a small, fast, invertible
avalanche mixer before it is ever masked, the same role
`com.carrotsearch.hppc.BitMixer` plays for this engine's inspiration.

Two mixers are provided:
- [mix32]: the MurmurHash3 32-bit finalizer.
- [mix64]: a 64-bit avalanche mixer in the style of David Stafford's
  published "better bit mixing" constant search (his best-performing
  64-bit finalizer in that family uses the `0xbf58476d1ce4e5b9` /
  `0x94d049bb133111eb` multiplier pair with 30/27/31-bit shifts; this is
  the constant table used here — see DESIGN.md for why the exact
  "variant 9" label could not be independently verified offline).

Seeded variants XOR the seed into the key before mixing, which is how
this module's callers (the table specializations) vary iteration order
run-to-run without touching the probe algorithm itself.
*/

/// MurmurHash3's 32-bit finalizer.
///
/// ```
/// use scatter_collections::mix::mix32;
/// assert_eq!(mix32(0), 0);
/// assert_eq!(mix32(1), 1364076727);
/// ```
#[inline]
pub fn mix32(key: u32) -> u32 {
    let mut h = key;
    h ^= h >> 16;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    h = h.wrapping_mul(0xc2b2_ae35);
    h ^= h >> 16;
    h
}

/// Seeded variant of [mix32]: XORs `seed` into `key` before mixing.
#[inline]
pub fn mix32_seeded(key: u32, seed: u32) -> u32 {
    mix32(key ^ seed)
}

/// A 64-bit avalanche mixer (Stafford-family constants; see module docs).
///
/// ```
/// use scatter_collections::mix::mix64;
/// assert_eq!(mix64(0), 0);
/// assert_eq!(mix64(mix64(7)) , mix64(mix64(7))); // deterministic
/// ```
#[inline]
pub fn mix64(key: u64) -> u64 {
    let mut h = key;
    h ^= h >> 30;
    h = h.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    h ^= h >> 27;
    h = h.wrapping_mul(0x94d0_49bb_1331_11eb);
    h ^= h >> 31;
    h
}

/// Seeded variant of [mix64]: XORs `seed` into `key` before mixing.
#[inline]
pub fn mix64_seeded(key: u64, seed: u64) -> u64 {
    mix64(key ^ seed)
}

/// Mixes a value that can be losslessly widened/reinterpreted into the
/// mixer's native word size. Implemented for every primitive type the
/// sentinel-layout set (§4.1(C)) can specialize over.
///
/// Floating-point inputs are mixed by their raw IEEE-754 bit pattern, not
/// their numeric value: `+0.0` and `-0.0` therefore hash differently even
/// though they compare equal, and every NaN payload hashes independently.
/// This is a deliberately preserved quirk (spec.md §4.5, §9) rather than a
/// bug — a reimplementation that wants canonicalized float hashing should
/// normalize the bit pattern before calling [PrimitiveMix::mix_key].
pub trait PrimitiveMix: Copy {
    fn mix_key(self) -> u64;
}

macro_rules! impl_mix_32 {
    ($t:ty) => {
        impl PrimitiveMix for $t {
            #[inline]
            fn mix_key(self) -> u64 {
                mix32(self as u32) as u64
            }
        }
    };
}

macro_rules! impl_mix_64 {
    ($t:ty) => {
        impl PrimitiveMix for $t {
            #[inline]
            fn mix_key(self) -> u64 {
                mix64(self as u64)
            }
        }
    };
}

impl_mix_32!(i8);
impl_mix_32!(u8);
impl_mix_32!(i16);
impl_mix_32!(u16);
impl_mix_32!(i32);
impl_mix_32!(u32);
impl_mix_64!(i64);
impl_mix_64!(u64);
impl_mix_64!(isize);
impl_mix_64!(usize);

impl PrimitiveMix for char {
    #[inline]
    fn mix_key(self) -> u64 {
        mix32(self as u32) as u64
    }
}

impl PrimitiveMix for f32 {
    #[inline]
    fn mix_key(self) -> u64 {
        mix32(self.to_bits()) as u64
    }
}

impl PrimitiveMix for f64 {
    #[inline]
    fn mix_key(self) -> u64 {
        mix64(self.to_bits())
    }
}

/// Hashes an arbitrary `Hash` key (used by the generic-key set layouts,
/// §4.1(A)/(B)) by finalizing `std::hash::Hash`'s digest through [mix64].
/// A raw `DefaultHasher` digest is already well mixed, but re-mixing is
/// cheap and guards against hasher implementations that aren't (the
/// teacher's `probing_hash_table::HashMap::hash` takes the raw digest
/// as-is; this module adds the avalanche pass spec.md §4.5 calls for).
pub fn hash_generic<T: std::hash::Hash + ?Sized>(key: &T) -> u64 {
    use std::hash::{Hash, Hasher};
    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    key.hash(&mut hasher);
    mix64(hasher.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix32_known_values() {
        assert_eq!(mix32(0), 0);
        assert_eq!(mix32(1), 1364076727);
    }

    #[test]
    fn mix32_deterministic() {
        assert_eq!(mix32(42), mix32(42));
        assert_ne!(mix32(42), mix32(43));
    }

    #[test]
    fn mix64_known_values() {
        assert_eq!(mix64(0), 0);
        assert_eq!(mix64(1), mix64(1));
    }

    #[test]
    fn seeded_variants_differ_by_seed() {
        assert_ne!(mix32_seeded(10, 1), mix32_seeded(10, 2));
        assert_ne!(mix64_seeded(10, 1), mix64_seeded(10, 2));
    }

    #[test]
    fn float_zero_sign_bit_changes_hash() {
        let pos = 0.0_f64;
        let neg = -0.0_f64;
        assert_eq!(pos, neg); // IEEE-754 equality
        assert_ne!(pos.mix_key(), neg.mix_key()); // but distinct bit patterns
    }

    #[test]
    fn hash_generic_matches_for_equal_keys() {
        let a = "peter".to_string();
        let b = "peter".to_string();
        assert_eq!(hash_generic(&a), hash_generic(&b));
    }
}

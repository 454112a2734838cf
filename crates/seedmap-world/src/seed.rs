//! Deterministic seed handling.
//!
//! World seeds cross the render boundary as two 32-bit halves. Every noise layer
//! of a generator gets its own 32-bit seed derived from the world seed, the
//! dimension, and a layer index, through a ChaCha8 stream so the derivation is
//! identical on every platform.

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::Dimension;

/// Reassemble a 64-bit seed from its low and high 32-bit halves.
#[inline]
pub fn seed_from_parts(lo: u32, hi: u32) -> u64 {
    ((hi as u64) << 32) | lo as u64
}

/// Split a 64-bit seed into `(lo, hi)` halves.
#[inline]
pub fn split_seed(seed: u64) -> (u32, u32) {
    (seed as u32, (seed >> 32) as u32)
}

/// Derive the seed of one noise layer.
///
/// The returned value is identical for the same `(world_seed, dimension, layer)`
/// triple, regardless of thread or platform.
pub fn derive_layer_seed(world_seed: u64, dimension: Dimension, layer: u32) -> u32 {
    let mut rng = ChaCha8Rng::seed_from_u64(world_seed);
    rng.set_stream(((dimension.id() as u32 as u64) << 32) | layer as u64);
    rng.next_u32()
}

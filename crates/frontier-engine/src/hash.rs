//! FNV-1a hashing of evolver state.
//!
//! Used to compare runs bit for bit: two runs from the same input with the
//! same policies must end with the same hash. Not cryptographically
//! secure.

use frontier_core::{LabelField, ScalarField};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Hash of a label field. The length is folded in first.
pub fn labels_hash(labels: &LabelField) -> u64 {
    let mut hash = fnv1a_u64(FNV_OFFSET, labels.len() as u64);
    for &l in labels.as_slice() {
        hash = fnv1a_byte(hash, l);
    }
    hash
}

/// Hash of labels followed by every time value's bit pattern.
pub fn state_hash(labels: &LabelField, time: &ScalarField) -> u64 {
    let mut hash = labels_hash(labels);
    hash = fnv1a_u64(hash, time.len() as u64);
    for &t in time.as_slice() {
        hash = fnv1a_u64(hash, t.to_bits());
    }
    hash
}

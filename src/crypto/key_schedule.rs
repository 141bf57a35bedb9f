use crate::crypto::permutation::{PC1, PC2};

/// Left-rotation amounts for the 28-bit key halves, one per round.
pub const ROTATIONS: [u32; 16] = [1, 1, 2, 2, 2, 2, 2, 2, 1, 2, 2, 2, 2, 2, 2, 1];

const HALF_MASK: u32 = 0x0FFF_FFFF;

/// Derive the sixteen 48-bit round subkeys from a 64-bit key.
///
/// PC-1 drops the parity bits (the low bit of each key byte), so keys
/// differing only in parity produce identical schedules. The remaining
/// 56 bits are split into two 28-bit halves which rotate left by the
/// [`ROTATIONS`] amount before PC-2 compresses them into each subkey.
pub fn derive_subkeys(key: u64) -> [u64; 16] {
    let permuted = PC1.permute(key);
    let mut c = ((permuted >> 28) as u32) & HALF_MASK;
    let mut d = (permuted as u32) & HALF_MASK;

    let mut subkeys = [0u64; 16];
    for (subkey, &rotation) in subkeys.iter_mut().zip(ROTATIONS.iter()) {
        c = ((c << rotation) & HALF_MASK) | (c >> (28 - rotation));
        d = ((d << rotation) & HALF_MASK) | (d >> (28 - rotation));

        let halves = (u64::from(c) << 28) | u64::from(d);
        *subkey = PC2.permute(halves);
    }
    subkeys
}

// src/crypto/f_function.rs

use crate::crypto::permutation::{E, P};
use crate::crypto::sboxes::substitute;

/// The DES round function applied to the right half-block.
///
/// Expands 32 bits to 48, mixes in the subkey, substitutes each 6-bit
/// group through its S-box, and permutes the 32-bit result.
pub fn round_function(right: u32, subkey: u64) -> u32 {
    let expanded = E.permute(u64::from(right));
    let mixed = expanded ^ subkey;

    let mut substituted = 0u32;
    for box_index in 0..8 {
        let group = ((mixed >> (42 - 6 * box_index)) & 0x3F) as u8;
        substituted = (substituted << 4) | u32::from(substitute(box_index, group));
    }

    P.permute(u64::from(substituted)) as u32
}

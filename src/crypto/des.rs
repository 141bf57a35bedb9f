// src/crypto/des.rs

use crate::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use crate::crypto::errors::DesError;
use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::derive_subkeys;
use crate::crypto::permutation::{FP, IP};
use crate::crypto::trace::RoundTrace;

/// DES block cipher with a precomputed key schedule.
#[derive(Clone)]
pub struct Des {
    /// Exactly 16 round subkeys, 48 significant bits each.
    subkeys: [u64; 16],
}

impl Des {
    /// Create a cipher from a 64-bit key, deriving all subkeys up front.
    pub fn new(key: u64) -> Self {
        Des {
            subkeys: derive_subkeys(key),
        }
    }

    /// Encrypt one 64-bit block.
    pub fn encrypt_block(&self, block: u64) -> u64 {
        feistel_rounds(block, self.subkeys.into_iter())
    }

    /// Decrypt one 64-bit block by consuming the subkeys in reverse order.
    pub fn decrypt_block(&self, block: u64) -> u64 {
        feistel_rounds(block, self.subkeys.into_iter().rev())
    }
}

impl CipherAlgorithm for Des {
    fn encrypt(&self, message: &[u8]) -> Result<Vec<u8>, DesError> {
        map_blocks(message, |block| self.encrypt_block(block))
    }

    fn decrypt(&self, message: &[u8]) -> Result<Vec<u8>, DesError> {
        map_blocks(message, |block| self.decrypt_block(block))
    }

    fn block_size(&self) -> usize {
        8
    }
}

impl SymmetricCipher for Des {
    fn set_key(&mut self, key: &[u8]) -> Result<(), DesError> {
        self.subkeys = derive_subkeys(key_from_bytes(key)?);
        Ok(())
    }
}

/// Encrypt one 64-bit block under `key`.
pub fn encrypt_block(plaintext: u64, key: u64) -> u64 {
    feistel_rounds(plaintext, derive_subkeys(key).into_iter())
}

/// Decrypt one 64-bit block under `key`.
///
/// Identical to encryption except that the subkeys are applied in
/// reverse round order.
pub fn decrypt_block(ciphertext: u64, key: u64) -> u64 {
    feistel_rounds(ciphertext, derive_subkeys(key).into_iter().rev())
}

/// Encrypt a single block or a 16-byte challenge under an 8-byte key.
///
/// A 16-byte message is treated as two independent blocks encrypted
/// under the same key, the shape used by VNC challenge-response.
pub fn encrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>, DesError> {
    let subkeys = derive_subkeys(key_from_bytes(key)?);
    map_blocks(message, |block| feistel_rounds(block, subkeys.into_iter()))
}

/// Decrypt a single block or a 16-byte challenge under an 8-byte key.
pub fn decrypt(message: &[u8], key: &[u8]) -> Result<Vec<u8>, DesError> {
    let subkeys = derive_subkeys(key_from_bytes(key)?);
    map_blocks(message, |block| {
        feistel_rounds(block, subkeys.into_iter().rev())
    })
}

/// Encrypt one block while reporting every intermediate state to `observer`.
pub fn encrypt_block_traced(plaintext: u64, key: u64, observer: &dyn RoundTrace) -> u64 {
    let subkeys = derive_subkeys(key);
    let permuted = IP.permute(plaintext);
    observer.initial_permutation(plaintext, permuted);

    let mut left = (permuted >> 32) as u32;
    let mut right = permuted as u32;
    for (round, &subkey) in subkeys.iter().enumerate() {
        let f_out = round_function(right, subkey);
        let next_right = left ^ f_out;
        left = right;
        right = next_right;
        observer.round(round + 1, left, right, subkey, f_out);
    }

    let preoutput = (u64::from(right) << 32) | u64::from(left);
    let ciphertext = FP.permute(preoutput);
    observer.final_permutation(preoutput, ciphertext);
    ciphertext
}

/// Run the 16-round Feistel network over one block.
///
/// The halves swap after every round; the last swap is undone by
/// assembling the preoutput from R16 and L16 before the final permutation.
fn feistel_rounds(block: u64, subkeys: impl Iterator<Item = u64>) -> u64 {
    let permuted = IP.permute(block);
    let mut left = (permuted >> 32) as u32;
    let mut right = permuted as u32;

    for subkey in subkeys {
        let f_out = round_function(right, subkey);
        let next_right = left ^ f_out;
        left = right;
        right = next_right;
    }

    let preoutput = (u64::from(right) << 32) | u64::from(left);
    FP.permute(preoutput)
}

fn map_blocks(message: &[u8], transform: impl Fn(u64) -> u64) -> Result<Vec<u8>, DesError> {
    if message.len() != 8 && message.len() != 16 {
        return Err(DesError::InvalidInputLength { len: message.len() });
    }

    Ok(message
        .chunks_exact(8)
        .flat_map(|chunk| {
            let block = u64::from_be_bytes(chunk.try_into().unwrap());
            transform(block).to_be_bytes()
        })
        .collect())
}

fn key_from_bytes(key: &[u8]) -> Result<u64, DesError> {
    let bytes: [u8; 8] = key
        .try_into()
        .map_err(|_| DesError::InvalidKeyLength { len: key.len() })?;
    Ok(u64::from_be_bytes(bytes))
}

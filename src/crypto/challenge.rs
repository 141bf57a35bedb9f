//! VNC-style password handling and challenge-response.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::crypto::des::{decrypt, encrypt};
use crate::crypto::errors::DesError;

/// Derive a DES key from a password the way VNC authentication does.
///
/// The first eight UTF-8 bytes of the password are taken, zero-padded
/// if shorter and truncated if longer, and the bits of each byte are
/// mirrored. VNC reads key bytes with the low bit first, so the mirror
/// is what makes standard DES implementations interoperate with it.
pub fn password_to_key(password: &str) -> [u8; 8] {
    let mut key = [0u8; 8];
    for (slot, byte) in key.iter_mut().zip(password.bytes()) {
        *slot = byte.reverse_bits();
    }
    key
}

/// Encrypt a challenge under a key derived from `password`.
pub fn encrypt_with_password(message: &[u8], password: &str) -> Result<Vec<u8>, DesError> {
    encrypt(message, &password_to_key(password))
}

/// Decrypt a response under a key derived from `password`.
pub fn decrypt_with_password(message: &[u8], password: &str) -> Result<Vec<u8>, DesError> {
    decrypt(message, &password_to_key(password))
}

/// Draw a fresh 16-byte challenge from the OS RNG.
pub fn random_challenge() -> [u8; 16] {
    let mut rng = OsRng;
    let mut challenge = [0u8; 16];
    rng.try_fill_bytes(&mut challenge)
        .expect("Failed to read the OS RNG");
    challenge
}

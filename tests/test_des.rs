use hex_literal::hex;
use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use des_cipher::crypto::cipher_traits::{CipherAlgorithm, SymmetricCipher};
use des_cipher::crypto::des::{Des, decrypt, decrypt_block, encrypt, encrypt_block};
use des_cipher::crypto::errors::DesError;

#[test]
fn test_known_answer_block() {
    assert_eq!(
        encrypt_block(0x0123456789ABCDEF, 0x133457799BBCDFF1),
        0x85E813540F0AB405
    );
}

#[test]
fn test_known_answer_bytes() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex!("01 23 45 67 89 AB CD EF");

    let ciphertext = encrypt(&plaintext, &key).unwrap();
    assert_eq!(ciphertext, hex!("85 E8 13 54 0F 0A B4 05"));
    assert_eq!(decrypt(&ciphertext, &key).unwrap(), plaintext);
}

#[test]
fn test_decrypt_block_inverts_encrypt_block() {
    let ciphertext = encrypt_block(0x0123456789ABCDEF, 0x133457799BBCDFF1);
    assert_eq!(
        decrypt_block(ciphertext, 0x133457799BBCDFF1),
        0x0123456789ABCDEF
    );
}

#[test]
fn test_two_block_message_encrypts_halves_independently() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let message = hex!("01 23 45 67 89 AB CD EF 01 23 45 67 89 AB CD EF");

    let ciphertext = encrypt(&message, &key).unwrap();
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(ciphertext[..8], ciphertext[8..]);
    assert_eq!(ciphertext[..8], hex!("85 E8 13 54 0F 0A B4 05"));
}

#[test]
fn test_rejects_bad_message_lengths() {
    let key = [0u8; 8];
    for len in [0usize, 1, 7, 9, 15, 17] {
        let message = vec![0u8; len];
        assert_eq!(
            encrypt(&message, &key),
            Err(DesError::InvalidInputLength { len })
        );
        assert_eq!(
            decrypt(&message, &key),
            Err(DesError::InvalidInputLength { len })
        );
    }
}

#[test]
fn test_rejects_bad_key_lengths() {
    let block = [0u8; 8];
    for len in [0usize, 7, 9, 16] {
        let key = vec![0u8; len];
        assert_eq!(
            encrypt(&block, &key),
            Err(DesError::InvalidKeyLength { len })
        );
    }
}

#[test]
fn test_cipher_struct_matches_free_functions() {
    let des = Des::new(0x133457799BBCDFF1);
    assert_eq!(des.encrypt_block(0x0123456789ABCDEF), 0x85E813540F0AB405);
    assert_eq!(des.decrypt_block(0x85E813540F0AB405), 0x0123456789ABCDEF);
    assert_eq!(des.block_size(), 8);

    let via_trait = des.encrypt(&hex!("01 23 45 67 89 AB CD EF")).unwrap();
    assert_eq!(via_trait, hex!("85 E8 13 54 0F 0A B4 05"));
}

#[test]
fn test_set_key_replaces_the_schedule() {
    let mut des = Des::new(0);
    des.set_key(&hex!("13 34 57 79 9B BC DF F1")).unwrap();
    assert_eq!(des.encrypt_block(0x0123456789ABCDEF), 0x85E813540F0AB405);

    assert_eq!(
        des.set_key(&[0u8; 7]),
        Err(DesError::InvalidKeyLength { len: 7 })
    );
}

#[test]
fn test_avalanche_on_key_bits() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..8 {
        let message = rng.next_u64();
        let key = rng.next_u64();
        let base = encrypt_block(message, key);

        for bit in 0..64 {
            if bit % 8 == 0 {
                continue; // parity bits never reach the schedule
            }
            let flipped = encrypt_block(message, key ^ (1u64 << bit));
            let changed = (base ^ flipped).count_ones();
            assert!(
                changed > 10,
                "key bit {} changed only {} ciphertext bits",
                bit,
                changed
            );
        }
    }
}

quickcheck! {
    fn prop_encrypt_is_deterministic(message: u64, key: u64) -> bool {
        encrypt_block(message, key) == encrypt_block(message, key)
    }

    fn prop_decrypt_inverts_encrypt(message: u64, key: u64) -> bool {
        decrypt_block(encrypt_block(message, key), key) == message
    }
}

use rand::SeedableRng;
use rand::{RngCore, rngs::StdRng};

use des_cipher::crypto::challenge::{
    decrypt_with_password, encrypt_with_password, password_to_key, random_challenge,
};
use des_cipher::crypto::des::{decrypt_block, encrypt_block, encrypt_block_traced};
use des_cipher::crypto::key_schedule::derive_subkeys;
use des_cipher::crypto::trace::LogTrace;
use des_cipher::crypto::utils::parse_hex;

fn main() {
    env_logger::init();

    // --------------------------------------------------------
    // 0) Key schedule & single-block known-answer demo
    // --------------------------------------------------------
    println!("=== Key schedule & single-block demo ===");
    let key = 0x133457799BBCDFF1u64;
    let subkeys = derive_subkeys(key);
    println!(" First subkey: {:012X}", subkeys[0]);
    println!(" Last subkey:  {:012X}", subkeys[15]);

    let plaintext = 0x0123456789ABCDEFu64;
    let ciphertext = encrypt_block(plaintext, key);
    let decrypted = decrypt_block(ciphertext, key);
    println!(" Plaintext:  {:016X}", plaintext);
    println!(" Ciphertext: {:016X}", ciphertext);
    println!(" Decrypted:  {:016X}", decrypted);
    assert_eq!(ciphertext, 0x85E813540F0AB405);
    assert_eq!(decrypted, plaintext);

    // --------------------------------------------------------
    // 1) Traced encryption (run with RUST_LOG=trace to see rounds)
    // --------------------------------------------------------
    println!("\n=== Traced block demo ===");
    let traced = encrypt_block_traced(plaintext, key, &LogTrace);
    println!(" Traced ciphertext: {:016X}", traced);
    assert_eq!(traced, ciphertext);

    // --------------------------------------------------------
    // 2) VNC challenge-response fixtures
    // --------------------------------------------------------
    println!("\n=== VNC challenge-response demo ===");
    println!(" Key for \"mypass\": {:02x?}", password_to_key("mypass"));

    let fixtures = [
        (
            "a4 b2 c9 ef 08 76 c1 ce 43 8d e2 82 38 20 db de",
            "fa 60 69 b9 85 fa 1c f7 0b ea a0 41 91 37 a6 d3",
        ),
        (
            "f3 ed a6 dc f8 b7 9d d6 5b e0 db 8b 1e 7b a5 51",
            "b6 69 d0 33 6c 3f 42 b7 68 e8 e9 37 b4 a5 75 46",
        ),
    ];
    for (challenge_hex, response_hex) in fixtures {
        let challenge = parse_hex(challenge_hex);
        let expected = parse_hex(response_hex);
        let response = encrypt_with_password(&challenge, "mypass").unwrap();
        println!(
            " challenge {:02x?} -> {}",
            challenge,
            if response == expected { "OK" } else { "MISMATCH" }
        );
        assert_eq!(response, expected);
    }

    // --------------------------------------------------------
    // 3) Fresh challenge flow
    // --------------------------------------------------------
    println!("\n=== Fresh challenge demo ===");
    let challenge = random_challenge();
    let response = encrypt_with_password(&challenge, "hunter2").unwrap();
    let verified = decrypt_with_password(&response, "hunter2").unwrap();
    println!(" Challenge: {:02x?}", challenge);
    println!(" Response:  {:02x?}", response);
    assert_eq!(verified, challenge);
    println!(" Verified OK");

    // --------------------------------------------------------
    // 4) Random block roundtrips
    // --------------------------------------------------------
    println!("\n=== Random roundtrip demo ===");
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    for _ in 0..5 {
        let message = rng.next_u64();
        let key = rng.next_u64();
        let roundtrip = decrypt_block(encrypt_block(message, key), key);
        assert_eq!(roundtrip, message);
        println!(" key={:016X} message={:016X} OK", key, message);
    }
}

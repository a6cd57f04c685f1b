#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

use num_bigint_dig::BigUint;
use textbook_rsa::{Decrypt, Encrypt, KeyPair};

static KEYPAIR: OnceLock<KeyPair> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let keypair = KEYPAIR.get_or_init(|| KeyPair::generate().expect("key generation failed"));
    let n = keypair.public_key().n();

    // Keep only characters the scheme can invert under this modulus.
    let text: String = String::from_utf8_lossy(data)
        .chars()
        .filter(|&ch| &BigUint::from(ch as u32) < n)
        .collect();

    let ciphertext = keypair.encrypt(&text);
    let recovered = keypair
        .decrypt(&ciphertext)
        .expect("in-range round trip must decode");
    assert_eq!(recovered, text);
});

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Character-wise encryption and decryption.

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::ciphertext::Ciphertext;
use crate::error::{Error, Result};
use crate::keypair::{KeyPair, PrivateKey, PublicKey};

/// Character-wise encryption under a public key.
pub trait Encrypt {
    /// Encrypt `plaintext` one character at a time, in order, computing
    /// `codepoint^e mod n` for each.
    ///
    /// Pure transform with no side effects. Only invertible when every
    /// code point in the plaintext is strictly smaller than the modulus
    /// `n`; a larger code point wraps around mod `n` and the original
    /// character is lost.
    fn encrypt(&self, plaintext: &str) -> Ciphertext;
}

/// Character-wise decryption under a private key.
pub trait Decrypt {
    /// Recover the plaintext from `ciphertext`, computing `value^d mod n`
    /// for each value in order.
    ///
    /// Fails with [`Error::DecodingError`] if any recovered value is not a
    /// valid character code point. The whole operation fails; no partial
    /// plaintext is ever returned.
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String>;
}

impl Encrypt for PublicKey {
    fn encrypt(&self, plaintext: &str) -> Ciphertext {
        plaintext
            .chars()
            .map(|ch| BigUint::from(ch as u32).modpow(&self.e, &self.n))
            .collect()
    }
}

impl Encrypt for KeyPair {
    fn encrypt(&self, plaintext: &str) -> Ciphertext {
        self.public_key().encrypt(plaintext)
    }
}

impl Decrypt for PrivateKey {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        ciphertext
            .values()
            .iter()
            .map(|value| self.decode(value))
            .collect()
    }
}

impl Decrypt for KeyPair {
    fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String> {
        self.private_key().decrypt(ciphertext)
    }
}

impl PrivateKey {
    /// Decrypt a single value back into the character it encodes.
    fn decode(&self, value: &BigUint) -> Result<char> {
        let m = value.modpow(&self.d, &self.n);
        m.to_u32()
            .and_then(char::from_u32)
            .ok_or(Error::DecodingError { value: m })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key_pair_5_11() -> (PublicKey, PrivateKey) {
        // p = 5, q = 11: n = 55, phi = 40, e = 7, d = 23.
        let n = BigUint::from(55u32);
        (
            PublicKey::new(BigUint::from(7u32), n.clone()),
            PrivateKey::new(BigUint::from(23u32), n),
        )
    }

    fn key_pair_223_449() -> (PublicKey, PrivateKey) {
        // p = 223, q = 449: n = 100127, phi = 99456, e = 29815, d = 64327.
        let n = BigUint::from(100127u32);
        (
            PublicKey::new(BigUint::from(29815u32), n.clone()),
            PrivateKey::new(BigUint::from(64327u32), n),
        )
    }

    #[test]
    fn exclamation_mark_under_tiny_key() {
        let (public, secret) = key_pair_5_11();

        // '!' is code point 33; 33^7 mod 55 = 22.
        let ciphertext = public.encrypt("!");
        assert_eq!(ciphertext.values(), &[BigUint::from(22u32)]);

        assert_eq!(secret.decrypt(&ciphertext).unwrap(), "!");
    }

    #[test]
    fn ascii_round_trip() {
        let (public, secret) = key_pair_223_449();
        let message = "The Magic Words are Squeamish Ossifrage!";

        let ciphertext = public.encrypt(message);
        assert_eq!(ciphertext.len(), message.chars().count());
        assert_eq!(secret.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn non_ascii_round_trip() {
        let (public, secret) = key_pair_223_449();

        // U+00E9 and U+2603 are both below n = 100127.
        let message = "caf\u{e9} \u{2603}";
        let ciphertext = public.encrypt(message);
        assert_eq!(secret.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn empty_message_round_trip() {
        let (public, secret) = key_pair_223_449();
        let ciphertext = public.encrypt("");
        assert!(ciphertext.is_empty());
        assert_eq!(secret.decrypt(&ciphertext).unwrap(), "");
    }

    #[test]
    fn equal_characters_leak_equal_values() {
        // No padding: the transform is deterministic per character.
        let (public, _) = key_pair_223_449();
        let ciphertext = public.encrypt("aa");
        assert_eq!(ciphertext.values()[0], ciphertext.values()[1]);
    }

    #[test]
    fn code_point_at_or_above_modulus_does_not_round_trip() {
        let (public, secret) = key_pair_5_11();

        // 'z' is code point 122 >= n = 55; the value wraps to 122 mod 55 = 12
        // and decrypts to U+000C instead.
        let ciphertext = public.encrypt("z");
        let recovered = secret.decrypt(&ciphertext).unwrap();
        assert_ne!(recovered, "z");
        assert_eq!(recovered, "\u{c}");
    }

    #[test]
    fn surrogate_value_fails_decoding() {
        // With d = 1 the "decryption" is the identity, so a ciphertext
        // carrying a surrogate code point must be rejected.
        let secret = PrivateKey::new(BigUint::from(1u32), BigUint::from(0x110000u32));
        let ciphertext = Ciphertext::new(vec![BigUint::from(0xD800u32)]);

        assert_eq!(
            secret.decrypt(&ciphertext),
            Err(Error::DecodingError {
                value: BigUint::from(0xD800u32),
            })
        );
    }

    #[test]
    fn failed_decryption_returns_no_partial_output() {
        let secret = PrivateKey::new(BigUint::from(1u32), BigUint::from(0x110000u32));

        // Two perfectly decodable values around one bad one.
        let ciphertext = Ciphertext::new(vec![
            BigUint::from('h' as u32),
            BigUint::from(0xD800u32),
            BigUint::from('i' as u32),
        ]);

        assert!(matches!(
            secret.decrypt(&ciphertext),
            Err(Error::DecodingError { .. })
        ));
    }

    #[test]
    fn generated_key_pairs_round_trip() {
        for seed in 0..8 {
            let keypair = KeyPair::generate_with(&mut StdRng::seed_from_u64(seed)).unwrap();
            let n = keypair.public_key().n();

            // Keep only characters the modulus can represent.
            let message: String = "Hello, textbook RSA!"
                .chars()
                .filter(|&ch| &BigUint::from(ch as u32) < n)
                .collect();

            let ciphertext = keypair.encrypt(&message);
            assert_eq!(keypair.decrypt(&ciphertext).unwrap(), message);
        }
    }
}

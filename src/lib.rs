// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Textbook RSA
//!
//! RSA-style key pairs from small primes, with character-wise encryption
//! and decryption by modular exponentiation. A teaching implementation of
//! the schoolbook scheme: trial-division prime generation, the extended
//! Euclidean algorithm for the private exponent, and nothing else.
//!
//! ## Security
//!
//! This crate is **not** a secure RSA implementation and must never
//! protect real data. There is no padding scheme: each character is
//! encrypted on its own, so equal characters produce equal ciphertext
//! values and the ciphertext leaks letter frequencies. The moduli are
//! products of small primes and fall to trial division immediately —
//! [`recover_private_key`] demonstrates exactly that attack.
//!
//! ## Example
//!
//! ```rust,no_run
//! use textbook_rsa::{Decrypt, Encrypt, KeyPair};
//!
//! let keypair = KeyPair::generate().expect("key generation failed");
//! let message = "hello world";
//!
//! let ciphertext = keypair.encrypt(message);
//! let recovered = keypair.decrypt(&ciphertext).expect("decryption failed");
//! assert_eq!(recovered, message);
//! ```

mod arith;
mod cipher;
mod ciphertext;
mod error;
mod keypair;
mod primes;
mod recover;

pub use arith::*;
pub use cipher::*;
pub use ciphertext::*;
pub use error::*;
pub use keypair::*;
pub use primes::*;
pub use recover::*;

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use num_bigint_dig::BigUint;

/// Errors that can occur during prime generation, key handling and
/// decryption.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("prime count must be at least 1")]
    InvalidCount,

    #[error("{a} has no multiplicative inverse modulo {b}")]
    InvalidInverse { a: BigUint, b: BigUint },

    #[error("key generation gave up while {stage} after {max_attempts} attempts")]
    KeyGenerationTimeout {
        stage: &'static str,
        max_attempts: usize,
    },

    #[error("decrypted value {value} is not a valid character code point")]
    DecodingError { value: BigUint },

    #[error("key recovery failed: {0}")]
    KeyRecoveryFailed(String),
}

pub type Result<T> = std::result::Result<T, Error>;

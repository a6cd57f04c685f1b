// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt;

use num_bigint_dig::BigUint;

/// An ordered sequence of encrypted values, one per plaintext character.
///
/// Each value lies in `[0, n)` for the modulus `n` of the key that produced
/// it. The sequence prints as space-separated decimal integers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ciphertext {
    values: Vec<BigUint>,
}

impl Ciphertext {
    pub fn new(values: Vec<BigUint>) -> Self {
        Self { values }
    }

    /// The encrypted values, in plaintext order.
    pub fn values(&self) -> &[BigUint] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl FromIterator<BigUint> for Ciphertext {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<&[u64]> for Ciphertext {
    fn from(values: &[u64]) -> Self {
        values.iter().copied().map(BigUint::from).collect()
    }
}

// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Private-key recovery from a public key with a small modulus.
//!
//! This is the attack the crate-level documentation warns about: moduli
//! built from small primes fall to trial division, so anyone holding the
//! public key can reconstruct the private exponent.

use num_bigint_dig::BigUint;
use num_traits::ToPrimitive;

use crate::arith;
use crate::error::{Error, Result};
use crate::keypair::{KeyMaterial, PrivateKey};
use crate::primes;

/// Recover the private key matching the public key `(e, n)` by factoring
/// the modulus.
///
/// The factor search walks the primes up to `isqrt(n)` and takes the
/// cofactor `n / p`, so the larger factor of a semiprime is found even
/// when it lies beyond the square root. Trial division only reaches
/// moduli that fit in a `u64`; anything larger fails with
/// [`Error::KeyRecoveryFailed`], as does a modulus that is not a product
/// of two primes.
pub fn recover_private_key(e: &BigUint, n: &BigUint) -> Result<PrivateKey> {
    let modulus = n.to_u64().ok_or_else(|| {
        Error::KeyRecoveryFailed("modulus is too large for trial-division factoring".into())
    })?;

    let (p, q) = factor_semiprime(modulus)?;
    let material = KeyMaterial::derive(p, q);
    let d = arith::mod_inverse(e, &material.phi)?;

    Ok(PrivateKey::new(d, n.clone()))
}

/// Split `n` into two primes `(p, q)` with `p <= q`.
pub(crate) fn factor_semiprime(n: u64) -> Result<(u64, u64)> {
    let bound = BigUint::from(n).sqrt().to_u64().unwrap_or(u64::MAX);

    for p in primes::primes_up_to(bound) {
        if n % p == 0 {
            let q = n / p;
            if primes::is_prime(q) {
                return Ok((p, q));
            }
        }
    }

    Err(Error::KeyRecoveryFailed(format!(
        "{n} is not a product of two primes"
    )))
}

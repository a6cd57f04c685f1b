// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Euclidean and extended-Euclidean arithmetic.

use num_bigint_dig::{BigInt, BigUint, Sign};
use num_traits::{One, Signed, Zero};

use crate::error::{Error, Result};

/// Greatest common divisor by the iterative Euclidean algorithm.
///
/// Replaces `(a, b)` with `(b, a mod b)` until `b` reaches zero.
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// Modular multiplicative inverse of `a` modulo `b`.
///
/// Runs the extended Euclidean algorithm, tracking the Bézout coefficient
/// pairs `(x, lx)` and `(y, ly)`, and normalizes the coefficient of `a`
/// into `[0, b)` by adding `b` when it comes out negative. Inputs that are
/// not coprime have no inverse and fail with [`Error::InvalidInverse`].
pub fn mod_inverse(a: &BigUint, b: &BigUint) -> Result<BigUint> {
    if !gcd(a, b).is_one() {
        return Err(Error::InvalidInverse {
            a: a.clone(),
            b: b.clone(),
        });
    }

    let mut ra = BigInt::from_biguint(Sign::Plus, a.clone());
    let mut rb = BigInt::from_biguint(Sign::Plus, b.clone());
    let modulus = rb.clone();

    let (mut x, mut lx) = (BigInt::zero(), BigInt::one());
    let (mut y, mut ly) = (BigInt::one(), BigInt::zero());

    while !rb.is_zero() {
        let q = &ra / &rb;
        let r = &ra % &rb;
        ra = std::mem::replace(&mut rb, r);

        let next_x = &lx - &q * &x;
        lx = std::mem::replace(&mut x, next_x);

        let next_y = &ly - &q * &y;
        ly = std::mem::replace(&mut y, next_y);
    }

    if lx.is_negative() {
        lx += &modulus;
    }

    // Coprimality was checked above, so the normalized coefficient is a
    // non-negative inverse.
    lx.to_biguint().ok_or_else(|| Error::InvalidInverse {
        a: a.clone(),
        b: b.clone(),
    })
}

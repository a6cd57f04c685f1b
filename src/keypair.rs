// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key material and key-pair generation.

use std::fmt;

use num_bigint_dig::{BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::arith;
use crate::error::{Error, Result};
use crate::primes;

/// Number of primes in the default selection pool.
const DEFAULT_POOL_SIZE: usize = 100;

/// Default cap on the two retry loops in key generation.
const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Public half of a key pair: the exponent `e` and modulus `n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) e: BigUint,
    pub(crate) n: BigUint,
}

impl PublicKey {
    /// Construct a public key from an exponent and modulus.
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    /// Return the public exponent `e`.
    #[inline]
    pub fn e(&self) -> &BigUint {
        &self.e
    }

    /// Return the modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.e, self.n)
    }
}

/// Private half of a key pair: the exponent `d` and modulus `n`.
///
/// The exponent is wiped from memory on drop via the `zeroize` crate;
/// `num-bigint-dig` zeroes the underlying heap-allocated digit vector.
/// This is a teaching tool, so the key is still deliberately printable.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey {
    pub(crate) d: BigUint,

    #[zeroize(skip)]
    pub(crate) n: BigUint,
}

impl PrivateKey {
    /// Construct a private key from an exponent and modulus.
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    /// Return the private exponent `d`.
    #[inline]
    pub fn d(&self) -> &BigUint {
        &self.d
    }

    /// Return the modulus `n`.
    #[inline]
    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

impl fmt::Display for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.d, self.n)
    }
}

/// Intermediate values derived from the two chosen primes.
///
/// Derived once from `p` and `q`, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct KeyMaterial {
    pub(crate) p: u64,
    pub(crate) q: u64,
    pub(crate) n: BigUint,
    pub(crate) phi: BigUint,
}

impl KeyMaterial {
    /// Derive `n = p·q` and `phi = (p−1)(q−1)` from two primes.
    pub(crate) fn derive(p: u64, q: u64) -> Self {
        let n = BigUint::from(p) * BigUint::from(q);
        let phi = BigUint::from(p - 1) * BigUint::from(q - 1);
        Self { p, q, n, phi }
    }
}

/// A complete key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPair {
    public: PublicKey,
    secret: PrivateKey,
}

impl KeyPair {
    /// Generate a key pair with default parameters and an entropy-seeded
    /// generator.
    pub fn generate() -> Result<Self> {
        KeyPairBuilder::new().build(&mut StdRng::from_entropy())
    }

    /// Generate a key pair with default parameters, drawing all randomness
    /// from `rng`.
    ///
    /// A seeded generator makes the result reproducible.
    pub fn generate_with<R: Rng>(rng: &mut R) -> Result<Self> {
        KeyPairBuilder::new().build(rng)
    }

    /// Return the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Return the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.secret
    }
}

/// Builder for key pairs with configurable parameters.
#[derive(Debug, Clone)]
pub struct KeyPairBuilder {
    pool_size: usize,
    max_attempts: usize,
}

impl KeyPairBuilder {
    /// Create a builder with default parameters.
    pub fn new() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set how many primes the selection pool holds.
    pub fn pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Set the cap on the retry loops.
    ///
    /// Both the distinct-prime draw and the coprime-exponent search give up
    /// with [`Error::KeyGenerationTimeout`] once the cap is reached, so a
    /// degenerate pool cannot loop forever.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Generate the key pair, drawing all randomness from `rng`.
    pub fn build<R: Rng>(self, rng: &mut R) -> Result<KeyPair> {
        let pool = primes::first_primes(self.pool_size)?;

        let (p, q) = self.select_primes(&pool, rng)?;
        let material = KeyMaterial::derive(p, q);
        debug_assert_ne!(material.p, material.q);

        let e = self.select_exponent(&material.phi, rng)?;
        let d = arith::mod_inverse(&e, &material.phi)?;

        Ok(KeyPair {
            public: PublicKey::new(e, material.n.clone()),
            secret: PrivateKey::new(d, material.n),
        })
    }

    /// Draw two primes independently at random until they differ.
    fn select_primes<R: Rng>(&self, pool: &[u64], rng: &mut R) -> Result<(u64, u64)> {
        for _ in 0..self.max_attempts {
            let p = pool[rng.gen_range(0..pool.len())];
            let q = pool[rng.gen_range(0..pool.len())];
            if p != q {
                return Ok((p, q));
            }
        }
        Err(Error::KeyGenerationTimeout {
            stage: "selecting distinct primes",
            max_attempts: self.max_attempts,
        })
    }

    /// Draw random exponents in `[1, phi)` until one is coprime to `phi`.
    fn select_exponent<R: Rng>(&self, phi: &BigUint, rng: &mut R) -> Result<BigUint> {
        for _ in 0..self.max_attempts {
            let e = rng.gen_biguint_range(&BigUint::one(), phi);
            if arith::gcd(&e, phi).is_one() {
                return Ok(e);
            }
        }
        Err(Error::KeyGenerationTimeout {
            stage: "searching for a coprime exponent",
            max_attempts: self.max_attempts,
        })
    }
}

impl Default for KeyPairBuilder {
    fn default() -> Self {
        Self::new()
    }
}

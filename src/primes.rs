// Copyright 2025 Nelson Dominguez
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prime generation by trial division.

use crate::error::{Error, Result};

/// The primes in increasing order, starting at 2.
///
/// Each candidate is tested by dividing it by every integer in
/// `[2, candidate)`. Quadratic, no sieve; entirely adequate for the small
/// pools this crate works with.
#[derive(Debug, Clone)]
struct Primes {
    next: u64,
}

impl Primes {
    fn new() -> Self {
        Self { next: 2 }
    }
}

impl Iterator for Primes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let candidate = self.next;
            self.next += 1;
            if is_prime(candidate) {
                return Some(candidate);
            }
        }
    }
}

pub(crate) fn is_prime(candidate: u64) -> bool {
    candidate >= 2 && (2..candidate).all(|divisor| candidate % divisor != 0)
}

/// Return the first `count` primes in increasing order.
///
/// The argument is a number of primes to produce, never an upper bound on
/// their values; for the bound contract use [`primes_up_to`]. Fails with
/// [`Error::InvalidCount`] when `count` is zero.
pub fn first_primes(count: usize) -> Result<Vec<u64>> {
    if count == 0 {
        return Err(Error::InvalidCount);
    }
    Ok(Primes::new().take(count).collect())
}

/// Return every prime `<= bound` in increasing order.
///
/// Empty when `bound < 2`.
pub fn primes_up_to(bound: u64) -> Vec<u64> {
    Primes::new().take_while(|&p| p <= bound).collect()
}

//! Deterministic hash-to-prime.
//!
//! A member `x` maps to the first probable prime among
//! `hash_to_length(x + nonce)` for `nonce = 0, 1, 2, ...`. The nonce that
//! succeeded is returned alongside the prime so callers can re-derive the same
//! prime later without searching.
use digest::Digest;
use log::trace;
use rug::integer::{IsPrime, Order};
use rug::Integer;

use crate::error::Error;

// How sure do we want to be that our primes are actually prime?
// 40 Miller-Rabin rounds bounds the error by 2^-40 (really 4^-40).
pub const PRIME_CERTAINTY: u32 = 40;

/// Give up after this many consecutive composite candidates.
///
/// A 128-bit candidate is prime with probability about 1/89, so hitting this
/// means something other than bad luck is going on.
pub const MAX_NONCE_SEARCH: u64 = 1 << 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedPrime {
    pub prime: Integer,
    pub nonce: Integer,
}

/// Hash `x` to an integer `bits` bits wide.
///
/// Block `i` is `D` applied to the decimal string of `x + i`; the blocks are
/// concatenated big-endian and the low `bits` bits are kept.
pub fn hash_to_length<D: Digest>(x: &Integer, bits: u32) -> Integer {
    let block_bytes = <D as Digest>::output_size();
    let block_bits = u32::try_from(block_bytes * 8).expect("digest fits in u32");
    let blocks = bits.div_ceil(block_bits);
    let mut digits: Vec<u8> = Vec::with_capacity(blocks as usize * block_bytes);
    for i in 0..blocks {
        let block_input = Integer::from(x + i);
        digits.extend_from_slice(&<D as Digest>::digest(block_input.to_string().as_bytes()));
    }
    Integer::from_digits(&digits, Order::Msf).keep_bits(bits)
}

/// Find the smallest nonce `>= init_nonce` for which `hash_to_length(x +
/// nonce, bits)` is a probable prime.
pub fn hash_to_prime<D: Digest>(
    x: &Integer,
    bits: u32,
    init_nonce: &Integer,
) -> Result<HashedPrime, Error> {
    let mut nonce = init_nonce.clone();
    for _ in 0..MAX_NONCE_SEARCH {
        let candidate = hash_to_length::<D>(&Integer::from(x + &nonce), bits);
        if candidate.is_probably_prime(PRIME_CERTAINTY) != IsPrime::No {
            trace!("hash_to_prime({x}) settled on nonce {nonce}");
            return Ok(HashedPrime {
                prime: candidate,
                nonce,
            });
        }
        nonce += 1u8;
    }
    Err(Error::PrimeSearchExhausted {
        bits,
        tries: MAX_NONCE_SEARCH,
    })
}

/// Re-derive the prime for `x` from a nonce previously returned by
/// [`hash_to_prime`].
///
/// Skips the primality test: the search already established it.
pub fn prime_at<D: Digest>(x: &Integer, nonce: &Integer, bits: u32) -> Integer {
    let prime = hash_to_length::<D>(&Integer::from(x + nonce), bits);
    debug_assert_ne!(prime.is_probably_prime(PRIME_CERTAINTY), IsPrime::No);
    prime
}

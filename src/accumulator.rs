//! Dynamic RSA accumulator.
//!
//! The commitment is `A = A0 ^ (p_1 * ... * p_k) mod n`, where `p_i` is the
//! prime member `i` hashes to and `A0` is drawn at random when the accumulator
//! is created. A witness for member `i` is `A0` raised to every *other* prime,
//! together with `p_i`; raising the one to the other gives back `A`.
use std::collections::BTreeMap;

use digest::Digest;
use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use rayon::prelude::*;
use rug::Integer;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::error::Error;
use crate::hash_to_prime::{hash_to_prime, prime_at, HashedPrime};
use crate::member::Member;
use crate::params::Params;
use crate::random::random_below;

pub type Commitment = Integer;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Witness {
    /// `A0` raised to the primes of every other member.
    pub base: Integer,
    /// The prime of the member this witness is for.
    pub exponent: Integer,
}

/// Check a witness against a commitment under the default RSA-2048
/// parameters.
#[must_use]
pub fn verify_membership(commitment: &Commitment, witness: &Witness) -> bool {
    Params::<Sha256>::rsa2048().verify_membership(commitment, witness)
}

/// An accumulator over a set of [`Member`]s.
///
/// Mutation takes `&mut self`; share one across threads behind a lock.
#[derive(Debug, Clone)]
pub struct Accumulator<D = Sha256> {
    params: Params<D>,
    a0: Integer,
    value: Commitment,
    /// Member -> the nonce its prime was found at.
    members: BTreeMap<Member, Integer>,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator {
    /// An empty accumulator over RSA-2048, seeded from the OS.
    pub fn new() -> Self {
        Self::with_params(Params::rsa2048(), &mut OsRng)
    }
}

impl<D: Digest> Accumulator<D> {
    pub fn with_params<R>(params: Params<D>, rng: &mut R) -> Self
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let a0 = random_below(rng, params.modulus()).expect("modulus is at least 3");
        debug!("new accumulator over {params:?}");
        Self {
            params,
            value: a0.clone(),
            a0,
            members: BTreeMap::new(),
        }
    }

    pub fn params(&self) -> &Params<D> {
        &self.params
    }

    /// The starting value; also the witness base when only one member is
    /// present.
    pub fn a0(&self) -> &Integer {
        &self.a0
    }

    pub fn commitment(&self) -> &Commitment {
        &self.value
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, member: &Member) -> bool {
        self.members.contains_key(member)
    }

    /// Add `member`, returning the new commitment. Adding a current member is a
    /// no-op.
    pub fn add(&mut self, member: Member) -> Result<Commitment, Error> {
        if self.members.contains_key(&member) {
            return Ok(self.value.clone());
        }
        let HashedPrime { prime, nonce } =
            hash_to_prime::<D>(member.as_ref(), self.params.prime_bits(), &Integer::ZERO)?;
        self.value
            .pow_mod_mut(&prime, self.params.modulus())
            .expect("prime > 0, modulus > 0");
        debug!("added {member} (nonce {nonce}), size now {}", self.size() + 1);
        self.members.insert(member, nonce);
        Ok(self.value.clone())
    }

    /// Remove `member`, returning the new commitment. Removing a non-member is
    /// a no-op.
    ///
    /// Without the factorization of `n` there is no way to take a root of the
    /// current value, so this rebuilds the commitment from `A0`.
    pub fn delete(&mut self, member: &Member) -> Commitment {
        if self.members.remove(member).is_none() {
            return self.value.clone();
        }
        self.value = self.a0_raised_to_all_but(None);
        debug!("deleted {member}, size now {}", self.size());
        self.value.clone()
    }

    /// A witness for `member`, or `None` if it isn't in the set.
    pub fn witness_for(&self, member: &Member) -> Option<Witness> {
        let nonce = self.members.get(member)?;
        Some(Witness {
            base: self.a0_raised_to_all_but(Some(member)),
            exponent: prime_at::<D>(member.as_ref(), nonce, self.params.prime_bits()),
        })
    }

    pub fn prove_membership(&self, member: &Member) -> Result<Witness, Error> {
        self.witness_for(member)
            .ok_or_else(|| Error::NotFound(member.clone().into()))
    }

    // TODO: cache member primes if prove/delete on large sets gets hot
    fn a0_raised_to_all_but(&self, excluded: Option<&Member>) -> Integer {
        let bits = self.params.prime_bits();
        let product = self
            .members
            .par_iter()
            .filter(|(member, _)| Some(*member) != excluded)
            .map(|(member, nonce)| prime_at::<D>(member.as_ref(), nonce, bits))
            .reduce(|| Integer::from(1u8), |a, b| a * b);
        self.a0
            .clone()
            .pow_mod(&product, self.params.modulus())
            .expect("product > 0, modulus > 0")
    }
}

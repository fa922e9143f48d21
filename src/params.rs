//! Public parameters every participant must agree on.
use std::fmt;
use std::marker::PhantomData;

use digest::Digest;
use once_cell::sync::Lazy;
use rug::Integer;
use sha2::Sha256;

use crate::accumulator::{Commitment, Witness};
use crate::error::Error;
use crate::hash_to_prime::hash_to_prime;
use crate::member::Member;

/// Bit width of the primes members hash to.
///
/// From LLX, "Universal accumulators with efficient nonmembership proofs",
/// construction 1.
pub const DEFAULT_PRIME_BITS: u32 = 128;

// RSA modulus from https://en.wikipedia.org/wiki/RSA_numbers#RSA-2048
// Nobody is believed to know its factors.
static RSA2048_MODULUS: Lazy<Integer> = Lazy::new(|| {
    Integer::parse(
        "2519590847565789349402718324004839857142928212620403202777713783604366202070\
           7595556264018525880784406918290641249515082189298559149176184502808489120072\
           8449926873928072877767359714183472702618963750149718246911650776133798590957\
           0009733045974880842840179742910064245869181719511874612151517265463228221686\
           9987549182422433637259085141865462043576798423387184774447920739934236584823\
           8242811981638150106748104516603773060562016196762561338441436038339044149526\
           3443219011465754445417842402092461651572335077870774981712577246796292638635\
           6373289912154831438167899885040445364023527381951378636564391212010397122822\
           120720357",
    )
    .expect("valid decimal literal")
    .into()
});

/// Modulus, hash function `D`, and prime width.
///
/// Accumulators built with different parameters are silently incompatible:
/// witnesses from one never verify against commitments from the other.
pub struct Params<D = Sha256> {
    modulus: Integer,
    prime_bits: u32,
    _hash: PhantomData<fn() -> D>,
}

impl<D> Clone for Params<D> {
    fn clone(&self) -> Self {
        Self {
            modulus: self.modulus.clone(),
            prime_bits: self.prime_bits,
            _hash: PhantomData,
        }
    }
}

impl<D> fmt::Debug for Params<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Params")
            .field("modulus_bits", &self.modulus.significant_bits())
            .field("prime_bits", &self.prime_bits)
            .finish()
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::rsa2048()
    }
}

impl<D: Digest> Params<D> {
    /// The RSA-2048 challenge modulus with 128-bit primes.
    pub fn rsa2048() -> Self {
        Self {
            modulus: RSA2048_MODULUS.clone(),
            prime_bits: DEFAULT_PRIME_BITS,
            _hash: PhantomData,
        }
    }

    /// Custom parameters, e.g. a smaller modulus for tests.
    pub fn new(modulus: Integer, prime_bits: u32) -> Result<Self, Error> {
        if modulus < 3 || modulus.is_even() {
            return Err(Error::InvalidModulus(modulus));
        }
        if prime_bits < 2 {
            return Err(Error::InvalidPrimeBits(prime_bits));
        }
        Ok(Self {
            modulus,
            prime_bits,
            _hash: PhantomData,
        })
    }

    pub fn modulus(&self) -> &Integer {
        &self.modulus
    }

    pub fn prime_bits(&self) -> u32 {
        self.prime_bits
    }

    /// Check `witness.base ^ witness.exponent == commitment (mod n)`.
    ///
    /// Needs no private state. Note that this does not tie the witness to any
    /// particular member; see [`Params::verify_member`].
    #[must_use]
    pub fn verify_membership(&self, commitment: &Commitment, witness: &Witness) -> bool {
        match witness.base.pow_mod_ref(&witness.exponent, &self.modulus) {
            Some(value) => Integer::from(value) == *commitment,
            None => false,
        }
    }

    /// Like [`Params::verify_membership`], but also checks that the witness
    /// exponent is the prime `member` hashes to.
    #[must_use]
    pub fn verify_member(
        &self,
        commitment: &Commitment,
        member: &Member,
        witness: &Witness,
    ) -> bool {
        match hash_to_prime::<D>(member.as_ref(), self.prime_bits, &Integer::ZERO) {
            Ok(hashed) if hashed.prime == witness.exponent => {
                self.verify_membership(commitment, witness)
            }
            _ => false,
        }
    }
}

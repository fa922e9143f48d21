#![cfg_attr(feature = "strict", deny(warnings))]
//! A dynamic RSA accumulator.
//!
//! Members are hashed to 128-bit primes and folded into a single commitment
//! modulo RSA-2048. Anyone holding the commitment can check a membership
//! witness without seeing the rest of the set.
//!
//! ```no_run
//! use rsacc::{verify_membership, Accumulator, Member};
//!
//! let mut acc = Accumulator::new();
//! let commitment = acc.add(Member::from(7u32))?;
//! let witness = acc.prove_membership(&Member::from(7u32))?;
//! assert!(verify_membership(&commitment, &witness));
//! # Ok::<(), rsacc::Error>(())
//! ```
pub mod accumulator;
pub mod error;
pub mod hash_to_prime;
pub mod member;
pub mod params;
pub mod random;

pub use accumulator::{verify_membership, Accumulator, Commitment, Witness};
pub use error::Error;
pub use member::Member;
pub use params::Params;

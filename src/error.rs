use rug::integer::ParseIntegerError;
use rug::Integer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} is not a member of the accumulator")]
    NotFound(Integer),
    #[error("empty range: {from} must be less than {until}")]
    InvalidRange { from: Integer, until: Integer },
    #[error("members must be non-negative, got {0}")]
    NegativeMember(Integer),
    #[error("modulus must be an odd integer greater than 2, got {0}")]
    InvalidModulus(Integer),
    #[error("prime width must be at least 2 bits, got {0}")]
    InvalidPrimeBits(u32),
    #[error("no {bits}-bit prime found after {tries} nonces")]
    PrimeSearchExhausted { bits: u32, tries: u64 },
    #[error(transparent)]
    Parse(#[from] ParseIntegerError),
}

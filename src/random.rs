//! Uniform sampling of big integers.
use rand::{CryptoRng, RngCore};
use rug::integer::Order;
use rug::Integer;

use crate::error::Error;
use crate::member::Member;

/// Default width of [`random_member`] values.
pub const MEMBER_BITS: u32 = 256;

/// Sample uniformly from `[from, until)`.
///
/// Rejection sampling over the smallest power of two covering the range, so
/// each draw succeeds with probability at least 1/2.
pub fn random_between<R>(rng: &mut R, from: &Integer, until: &Integer) -> Result<Integer, Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    if from >= until {
        return Err(Error::InvalidRange {
            from: from.clone(),
            until: until.clone(),
        });
    }
    let span = Integer::from(until - from);
    let bits = span.significant_bits();
    let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
    loop {
        rng.fill_bytes(&mut bytes);
        let candidate = Integer::from_digits(&bytes, Order::Lsf).keep_bits(bits);
        if candidate < span {
            return Ok(candidate + from);
        }
    }
}

/// Sample uniformly from `[0, until)`.
pub fn random_below<R>(rng: &mut R, until: &Integer) -> Result<Integer, Error>
where
    R: RngCore + CryptoRng + ?Sized,
{
    random_between(rng, &Integer::ZERO, until)
}

/// A uniformly random [`MEMBER_BITS`]-bit member.
pub fn random_member<R>(rng: &mut R) -> Member
where
    R: RngCore + CryptoRng + ?Sized,
{
    let until = Integer::from(1u8) << MEMBER_BITS;
    Member(random_below(rng, &until).expect("2^MEMBER_BITS > 0"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_range() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            random_between(&mut rng, &5.into(), &5.into()),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            random_between(&mut rng, &6.into(), &5.into()),
            Err(Error::InvalidRange { .. })
        ));
        assert!(matches!(
            random_below(&mut rng, &Integer::ZERO),
            Err(Error::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_singleton_range() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..10 {
            assert_eq!(random_between(&mut rng, &41.into(), &42.into()).unwrap(), 41);
        }
    }

    #[test]
    fn test_hits_whole_small_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let value = random_between(&mut rng, &10.into(), &15.into()).unwrap();
            seen[(value - 10u8).to_usize().unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_random_member() {
        let mut rng = StdRng::seed_from_u64(2);
        let a = random_member(&mut rng);
        let b = random_member(&mut rng);
        assert_ne!(a, b);
        assert!(a.as_ref().significant_bits() <= MEMBER_BITS);
    }

    proptest! {
        #[test]
        fn test_in_range(seed: u64, from: i64, len in 1u64..u64::MAX) {
            let mut rng = StdRng::seed_from_u64(seed);
            let from = Integer::from(from);
            let until = Integer::from(&from + len);
            let value = random_between(&mut rng, &from, &until)?;
            prop_assert!(value >= from);
            prop_assert!(value < until);
        }
    }
}

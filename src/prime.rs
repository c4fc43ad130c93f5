use bc_crypto::memzero;
use bc_rand::RandomNumberGenerator;
use log::debug;
use num_bigint_dig::{BigUint, prime::probably_prime};

use crate::{
    Error, Result,
    constants::{DEFAULT_PRIME_CERTAINTY, MIN_MODULUS_BITS, PRIME_ATTEMPTS_PER_BIT},
    random::random_bytes,
};

/// Miller-Rabin rounds giving a false-positive rate of at most
/// `2^-certainty` (each round errs with probability at most 1/4).
fn rounds_for(certainty: u32) -> usize {
    (certainty as usize).div_ceil(2).max(1)
}

/// Probabilistic primality check at the given certainty.
pub fn is_probable_prime(candidate: &BigUint, certainty: u32) -> bool {
    probably_prime(candidate, rounds_for(certainty))
}

/// Find a modulus large enough to hold `secret` as a field element: a
/// probable prime of exactly `secret.len() * 8 + 1` bits.
pub fn find_modulus(secret: &[u8], rng: &mut impl RandomNumberGenerator) -> Result<BigUint> {
    find_modulus_with_certainty(secret, DEFAULT_PRIME_CERTAINTY, rng)
}

pub fn find_modulus_with_certainty(
    secret: &[u8],
    certainty: u32,
    rng: &mut impl RandomNumberGenerator,
) -> Result<BigUint> {
    let bits = (secret.len() * 8 + 1).max(MIN_MODULUS_BITS);
    generate_prime(bits, certainty, rng)
}

/// Generate a probable prime with exactly `bits` bits.
///
/// Candidates are drawn at random with the top and bottom bits set and kept
/// only if they pass the primality test.
pub fn generate_prime(
    bits: usize,
    certainty: u32,
    rng: &mut impl RandomNumberGenerator,
) -> Result<BigUint> {
    let mut fill = |buf: &mut [u8]| rng.fill_random_data(buf);
    search_prime(bits, certainty, &mut fill)
}

fn search_prime(
    bits: usize,
    certainty: u32,
    fill: &mut impl FnMut(&mut [u8]),
) -> Result<BigUint> {
    if bits < MIN_MODULUS_BITS {
        return Err(Error::InvalidArgument("a prime needs at least two bits"));
    }
    let max_attempts = bits.saturating_mul(PRIME_ATTEMPTS_PER_BIT);
    for attempt in 1..=max_attempts {
        let mut buf = random_bytes(bits, fill);
        buf[0] |= 1 << ((bits - 1) % 8);
        let last = buf.len() - 1;
        buf[last] |= 1;
        let candidate = BigUint::from_bytes_be(&buf);
        memzero(&mut buf);

        if is_probable_prime(&candidate, certainty) {
            debug!("found {}-bit probable prime after {} candidates", bits, attempt);
            return Ok(candidate);
        }
    }
    Err(Error::EntropySourceFailure("random source never produced a prime candidate"))
}

#[cfg(test)]
mod tests {
    use bc_rand::make_fake_random_number_generator;

    use super::*;

    #[test]
    fn test_known_primes() {
        for p in [2u32, 3, 5, 1613, 65537] {
            assert!(is_probable_prime(&BigUint::from(p), DEFAULT_PRIME_CERTAINTY));
        }
        for c in [1u32, 4, 561, 1615, 65535] {
            assert!(!is_probable_prime(&BigUint::from(c), DEFAULT_PRIME_CERTAINTY));
        }
        let fixture: BigUint = "3802326154978466566103".parse().unwrap();
        assert!(is_probable_prime(&fixture, DEFAULT_PRIME_CERTAINTY));
    }

    #[test]
    fn test_generated_prime_has_requested_width() {
        let mut rng = make_fake_random_number_generator();
        for bits in [2usize, 3, 8, 17, 64, 129] {
            let p = generate_prime(bits, 40, &mut rng).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(is_probable_prime(&p, DEFAULT_PRIME_CERTAINTY));
        }
    }

    #[test]
    fn test_find_modulus_sizing() {
        let mut rng = make_fake_random_number_generator();
        let secret = "x".repeat(16);
        let p = find_modulus(secret.as_bytes(), &mut rng).unwrap();
        assert!(p.bits() >= 16 * 8 + 1);
        assert!(BigUint::from_bytes_be(secret.as_bytes()) < p);

        let p = find_modulus(&[], &mut rng).unwrap();
        assert_eq!(p.bits(), MIN_MODULUS_BITS);
    }

    #[test]
    fn test_rejects_one_bit() {
        let mut rng = make_fake_random_number_generator();
        assert!(matches!(generate_prime(1, 40, &mut rng), Err(Error::InvalidArgument(_))));
        assert!(matches!(generate_prime(0, 40, &mut rng), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_stuck_source_is_reported() {
        // Always yields 0b1001 = 9 once the top and bottom bits are forced.
        let mut zeros = |buf: &mut [u8]| buf.fill(0);
        assert!(matches!(
            search_prime(4, 40, &mut zeros),
            Err(Error::EntropySourceFailure(_))
        ));
    }
}

use bc_crypto::memzero;
use log::trace;
use num_bigint_dig::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::{
    Error, Result,
    constants::MAX_SAMPLE_REJECTIONS,
    field::PrimeField,
};

/// Mask for the leading byte of a `bits`-wide big-endian buffer.
fn leading_mask(bits: usize) -> u8 {
    match bits % 8 {
        0 => 0xff,
        r => 0xffu8 >> (8 - r),
    }
}

/// Fill a fresh buffer of `bits` random bits (big-endian, excess high bits
/// cleared). The caller owns wiping it.
pub(crate) fn random_bytes(bits: usize, fill: &mut impl FnMut(&mut [u8])) -> Vec<u8> {
    let mut buf = vec![0u8; bits.div_ceil(8)];
    if !buf.is_empty() {
        fill(&mut buf);
        buf[0] &= leading_mask(bits);
    }
    buf
}

/// A uniformly random integer in `[0, 2^bits)`.
pub(crate) fn random_bits(bits: usize, fill: &mut impl FnMut(&mut [u8])) -> BigUint {
    let mut buf = random_bytes(bits, fill);
    let value = BigUint::from_bytes_be(&buf);
    memzero(&mut buf);
    value
}

/// A uniformly random element of `(0, p)`: sample `bits(p)` bits and reject
/// anything outside the open interval.
pub(crate) fn random_nonzero_element(
    field: &PrimeField,
    fill: &mut impl FnMut(&mut [u8]),
) -> Result<BigUint> {
    let bits = field.modulus().bits();
    for rejected in 0..MAX_SAMPLE_REJECTIONS {
        let candidate = random_bits(bits, fill);
        if !candidate.is_zero() && field.contains(&candidate) {
            return Ok(candidate);
        }
        trace!("rejected field sample {}", rejected + 1);
    }
    Err(Error::EntropySourceFailure("random source never produced an in-range field element"))
}

/// The `threshold - 1` random coefficients `a_1..a_{T-1}` of the sharing
/// polynomial, lowest degree first. The constant term is the secret and is
/// not part of the result.
pub(crate) fn sample_coefficients(
    threshold: usize,
    field: &PrimeField,
    fill: &mut impl FnMut(&mut [u8]),
) -> Result<Zeroizing<Vec<BigUint>>> {
    let mut coefficients = Zeroizing::new(Vec::with_capacity(threshold.saturating_sub(1)));
    for _ in 1..threshold {
        coefficients.push(random_nonzero_element(field, fill)?);
    }
    Ok(coefficients)
}

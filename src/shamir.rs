use bc_rand::RandomNumberGenerator;
use log::debug;
use num_bigint_dig::BigUint;
use rayon::prelude::*;
use zeroize::Zeroizing;

use crate::{
    Error, Result,
    constants::MODULUS_CHECK_CERTAINTY,
    field::PrimeField,
    interpolate::{evaluate, interpolate_at_zero},
    prime::{find_modulus, is_probable_prime},
    random::sample_coefficients,
    share::{Share, ShareSet, SplitResult},
};

fn validate_parameters(threshold: usize, share_count: usize) -> Result<()> {
    if threshold < 1 {
        return Err(Error::InvalidArgument("threshold must be positive"));
    } else if share_count < 1 {
        return Err(Error::InvalidArgument("number of shares must be positive"));
    } else if threshold > share_count {
        return Err(Error::InvalidArgument("threshold must be less or equal to number of shares"));
    } else if u32::try_from(share_count).is_err() {
        return Err(Error::InvalidArgument("number of shares must fit share indexes"));
    }
    Ok(())
}

/// Split `secret` into `share_count` shares, any `threshold` of which
/// recover it, under a freshly generated modulus of
/// `secret.len() * 8 + 1` bits.
///
/// The modulus is returned alongside the shares and must be kept with them.
/// Leading zero bytes of `secret` are not preserved by [`combine`].
pub fn split(
    threshold: usize,
    share_count: usize,
    secret: &[u8],
    rng: &mut impl RandomNumberGenerator,
) -> Result<SplitResult> {
    validate_parameters(threshold, share_count)?;
    let field = PrimeField::new(find_modulus(secret, rng)?)?;
    split_in_field(threshold, share_count, &field, secret, rng)
}

/// Split `secret` under a caller-chosen prime `modulus`.
///
/// The modulus must pass a probabilistic primality check. The secret, read
/// as a big-endian unsigned integer, must be smaller than the modulus, and
/// so must `share_count`.
pub fn split_with_modulus(
    threshold: usize,
    share_count: usize,
    modulus: &BigUint,
    secret: &[u8],
    rng: &mut impl RandomNumberGenerator,
) -> Result<SplitResult> {
    validate_parameters(threshold, share_count)?;
    let field = checked_field(modulus)?;
    split_in_field(threshold, share_count, &field, secret, rng)
}

/// A field over `modulus` after a probabilistic primality check.
pub(crate) fn checked_field(modulus: &BigUint) -> Result<PrimeField> {
    let field = PrimeField::new(modulus.clone())?;
    if !is_probable_prime(modulus, MODULUS_CHECK_CERTAINTY) {
        return Err(Error::InvalidArgument("modulus must be prime"));
    }
    Ok(field)
}

/// Split under a field whose modulus is already known to be prime.
pub(crate) fn split_in_field(
    threshold: usize,
    share_count: usize,
    field: &PrimeField,
    secret: &[u8],
    rng: &mut impl RandomNumberGenerator,
) -> Result<SplitResult> {
    validate_parameters(threshold, share_count)?;
    let modulus = field.modulus();

    let secret = Zeroizing::new(BigUint::from_bytes_be(secret));
    if !field.contains(&secret) {
        return Err(Error::InvalidArgument("secret must be smaller than the modulus"));
    }
    if !field.contains(&BigUint::from(share_count as u64)) {
        return Err(Error::InvalidArgument("number of shares must be smaller than the modulus"));
    }

    debug!(
        "splitting secret into {} shares with threshold {} over a {}-bit modulus",
        share_count,
        threshold,
        modulus.bits()
    );

    let mut fill = |buf: &mut [u8]| rng.fill_random_data(buf);
    let coefficients = sample_coefficients(threshold, field, &mut fill)?;

    // share_count fits in u32 (validated above)
    let shares: Vec<Share> = (0..share_count as u32)
        .into_par_iter()
        .map(|index| {
            let value = evaluate(field, &secret, &coefficients, u64::from(index) + 1);
            Share::new(index, value)
        })
        .collect();

    Ok(SplitResult::new(ShareSet::try_from_shares(shares)?, modulus.clone()))
}

/// Recover the secret from `shares` under `modulus`.
///
/// Exact duplicates are ignored. Two shares with the same index and
/// different values fail with [`Error::NotInvertible`]. Share values must be
/// canonical field elements, smaller than the modulus.
///
/// The threshold is not checked: passing fewer shares than were required at
/// split time returns a well-formed but wrong secret, and gives no
/// indication that it is wrong.
pub fn combine<'a, I>(modulus: &BigUint, shares: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Share>,
{
    let field = PrimeField::new(modulus.clone())?;
    let shares = ShareSet::try_from_shares(shares.into_iter().cloned())?;
    if shares.iter().any(|share| !field.contains(share.value())) {
        return Err(Error::InvalidArgument("share values must be smaller than the modulus"));
    }
    debug!("combining {} shares over a {}-bit modulus", shares.len(), modulus.bits());

    let secret = Zeroizing::new(interpolate_at_zero(&field, &shares)?);
    Ok(secret.to_bytes_be())
}

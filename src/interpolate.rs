use num_bigint_dig::BigUint;
use num_traits::Zero;
use rayon::prelude::*;

use crate::{Result, field::PrimeField, share::ShareSet};

/// Evaluate `secret + Σ coefficients[j-1] * x^j (mod p)` for `j` in
/// `1..=coefficients.len()`.
pub(crate) fn evaluate(
    field: &PrimeField,
    secret: &BigUint,
    coefficients: &[BigUint],
    x: u64,
) -> BigUint {
    let x = field.element(x);
    let mut power = field.one();
    let mut accumulate = field.reduce(secret);
    for coefficient in coefficients {
        power = field.mul(&power, &x);
        let term = field.mul(coefficient, &power);
        accumulate = field.add(&accumulate, &term);
    }
    accumulate
}

/// Lagrange-interpolate the polynomial through `shares` at `x = 0`.
///
/// For each share `k`:
///
/// ```text
///              ---    -x_j
///   l_k(0) =   | |  ---------
///             j != k  x_k - x_j
/// ```
///
/// and the result is `Σ y_k * l_k(0)`. Per-share terms are computed in
/// parallel and summed afterwards.
///
/// Nothing here knows the threshold. Fewer shares than the polynomial's
/// degree + 1 interpolate a different polynomial and give a wrong value
/// without any error.
pub(crate) fn interpolate_at_zero(field: &PrimeField, shares: &ShareSet) -> Result<BigUint> {
    let points = shares.as_map();
    points
        .par_iter()
        .map(|(&k, share_k)| -> Result<BigUint> {
            let x_k = field.element(share_k.abscissa());
            let mut numerator = field.one();
            let mut denominator = field.one();
            for (_, share_j) in points.iter().filter(|(j, _)| **j != k) {
                let x_j = field.element(share_j.abscissa());
                numerator = field.mul(&numerator, &field.neg(&x_j));
                denominator = field.mul(&denominator, &field.sub(&x_k, &x_j));
            }
            let basis = field.mul(&numerator, &field.inverse(&denominator)?);
            Ok(field.mul(share_k.value(), &basis))
        })
        .try_reduce(BigUint::zero, |a, b| Ok(field.add(&a, &b)))
}

use num_bigint_dig::{BigInt, BigUint, ModInverse, Sign, ToBigUint};
use num_traits::{One, Zero};

use crate::{Error, Result};

/// The prime field GF(p). Every result is reduced into `[0, p)`.
///
/// Primality of the modulus is checked by callers that accept one from
/// outside. Inversion uses the extended Euclidean algorithm, so an element
/// sharing a factor with a composite modulus fails instead of producing a
/// wrong inverse.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(2u32) {
            return Err(Error::InvalidArgument("modulus must be at least 2"));
        }
        Ok(Self { modulus })
    }

    /// For moduli known to be prime by construction.
    pub(crate) fn from_prime(modulus: BigUint) -> Self {
        Self { modulus }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Whether `a` is already a canonical element of the field.
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b`. Both operands are reduced first, then `p` is added back so
    /// the intermediate never goes negative.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    pub fn pow(&self, base: &BigUint, exponent: &BigUint) -> BigUint {
        base.modpow(exponent, &self.modulus)
    }

    /// Multiplicative inverse. Zero, and anything not coprime to the
    /// modulus, has none.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(Error::NotInvertible);
        }
        let inverse = a.mod_inverse(&self.modulus).ok_or(Error::NotInvertible)?;
        let modulus = BigInt::from_biguint(Sign::Plus, self.modulus.clone());
        let inverse = ((inverse % &modulus) + &modulus) % &modulus;
        inverse.to_biguint().ok_or(Error::NotInvertible)
    }

    /// The field element `x` for a plain machine integer.
    pub fn element(&self, x: u64) -> BigUint {
        self.reduce(&BigUint::from(x))
    }

    pub fn one(&self) -> BigUint {
        self.reduce(&BigUint::one())
    }
}

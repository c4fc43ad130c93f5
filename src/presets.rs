use bc_rand::RandomNumberGenerator;
use num_bigint_dig::BigUint;
use num_traits::One;

use crate::{
    Error, Result,
    codec::{decode_shares, encode_shares},
    field::PrimeField,
    shamir::{checked_field, combine, split_in_field},
};

/// Bundled moduli. Each is a Mersenne prime `2^bits - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Mersenne127,
    Mersenne521,
    Mersenne1279,
    Mersenne4423,
}

impl Preset {
    pub const ALL: [Preset; 4] = [
        Preset::Mersenne127,
        Preset::Mersenne521,
        Preset::Mersenne1279,
        Preset::Mersenne4423,
    ];

    pub fn bits(self) -> usize {
        match self {
            Preset::Mersenne127 => 127,
            Preset::Mersenne521 => 521,
            Preset::Mersenne1279 => 1279,
            Preset::Mersenne4423 => 4423,
        }
    }

    pub fn modulus(self) -> BigUint {
        (BigUint::one() << self.bits()) - BigUint::one()
    }

    /// The longest secret, in bytes, guaranteed to be smaller than the
    /// modulus.
    pub fn max_secret_len(self) -> usize {
        (self.bits() - 1) / 8
    }
}

/// Splits and combines under one agreed modulus, trading shares as encoded
/// tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSharer {
    field: PrimeField,
    max_secret_len: Option<usize>,
}

impl FixedSharer {
    pub fn new(preset: Preset) -> Self {
        Self {
            field: PrimeField::from_prime(preset.modulus()),
            max_secret_len: Some(preset.max_secret_len()),
        }
    }

    /// Use a caller-supplied prime, checked once here. Secrets are only
    /// bounded by the modulus itself.
    pub fn with_modulus(modulus: BigUint) -> Result<Self> {
        Ok(Self { field: checked_field(&modulus)?, max_secret_len: None })
    }

    pub fn modulus(&self) -> &BigUint {
        self.field.modulus()
    }

    pub fn max_secret_len(&self) -> Option<usize> {
        self.max_secret_len
    }

    pub fn split(
        &self,
        threshold: usize,
        share_count: usize,
        secret: &[u8],
        rng: &mut impl RandomNumberGenerator,
    ) -> Result<Vec<String>> {
        match self.max_secret_len {
            Some(max) if secret.len() > max => {
                return Err(Error::SecretTooLong { len: secret.len(), max });
            }
            _ => {}
        }
        let result = split_in_field(threshold, share_count, &self.field, secret, rng)?;
        Ok(encode_shares(result.shares()))
    }

    pub fn combine<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<u8>> {
        let shares = decode_shares(tokens)?;
        combine(self.modulus(), &shares)
    }
}

impl From<Preset> for FixedSharer {
    fn from(preset: Preset) -> Self {
        Self::new(preset)
    }
}

#[cfg(test)]
mod tests {
    use bc_rand::make_fake_random_number_generator;

    use super::*;
    use crate::prime::is_probable_prime;

    #[test]
    fn test_presets_are_prime() {
        for preset in Preset::ALL {
            let modulus = preset.modulus();
            assert_eq!(modulus.bits(), preset.bits());
            assert!(is_probable_prime(&modulus, 8), "{preset:?}");
        }
    }

    #[test]
    fn test_capacity() {
        assert_eq!(Preset::Mersenne127.max_secret_len(), 15);
        assert_eq!(Preset::Mersenne521.max_secret_len(), 65);
        assert_eq!(Preset::Mersenne1279.max_secret_len(), 159);
        assert_eq!(Preset::Mersenne4423.max_secret_len(), 552);
        for preset in Preset::ALL {
            let largest = vec![0xffu8; preset.max_secret_len()];
            assert!(BigUint::from_bytes_be(&largest) < preset.modulus());
        }
    }

    #[test]
    fn test_split_and_combine_each_preset() {
        let mut rng = make_fake_random_number_generator();
        for preset in Preset::ALL {
            let sharer = FixedSharer::from(preset);
            let secret = b"secret";
            let tokens = sharer.split(3, 5, secret, &mut rng).unwrap();
            assert_eq!(tokens.len(), 5);
            assert_eq!(sharer.combine(&tokens[1..4]).unwrap(), secret);
        }
    }

    #[test]
    fn test_largest_secret() {
        let mut rng = make_fake_random_number_generator();
        let sharer = FixedSharer::new(Preset::Mersenne1279);
        let secret = "x".repeat(159);
        let tokens = sharer.split(9, 10, secret.as_bytes(), &mut rng).unwrap();
        assert_eq!(sharer.combine(&tokens).unwrap(), secret.as_bytes());
    }

    #[test]
    fn test_secret_too_long() {
        let mut rng = make_fake_random_number_generator();
        let sharer = FixedSharer::new(Preset::Mersenne127);
        let result = sharer.split(2, 3, &[1u8; 16], &mut rng);
        assert_eq!(result, Err(Error::SecretTooLong { len: 16, max: 15 }));
    }

    #[test]
    fn test_custom_modulus() {
        let mut rng = make_fake_random_number_generator();
        let sharer = FixedSharer::with_modulus("3802326154978466566103".parse().unwrap()).unwrap();
        assert_eq!(sharer.max_secret_len(), None);
        let tokens = sharer.split(2, 4, b"my secret", &mut rng).unwrap();
        assert_eq!(sharer.combine(&tokens[2..]).unwrap(), b"my secret");
        assert!(sharer.split(2, 4, b"my secretx", &mut rng).is_err());
    }

    #[test]
    fn test_custom_modulus_must_be_prime() {
        let composite = BigUint::from(3u32) * BigUint::from(5u32) * BigUint::from(1613u32);
        assert_eq!(
            FixedSharer::with_modulus(composite),
            Err(Error::InvalidArgument("modulus must be prime"))
        );
    }
}

/// Default primality certainty: a generated modulus is composite with
/// probability at most `2^-DEFAULT_PRIME_CERTAINTY`.
pub const DEFAULT_PRIME_CERTAINTY: u32 = 200;

/// Certainty used to check a modulus supplied by the caller.
pub const MODULUS_CHECK_CERTAINTY: u32 = 40;

/// The smallest prime has two bits.
pub const MIN_MODULUS_BITS: usize = 2;

/// Consecutive out-of-range samples tolerated before the random source is
/// declared broken. Each sample is accepted with probability close to 1/2.
pub const MAX_SAMPLE_REJECTIONS: usize = 128;

/// Prime candidates tried per requested bit before the random source is
/// declared broken.
pub const PRIME_ATTEMPTS_PER_BIT: usize = 64;

/// Token separator between share index and encoded value.
pub const SHARE_SEPARATOR: char = ':';

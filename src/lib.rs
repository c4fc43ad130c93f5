#![doc(html_root_url = "https://docs.rs/prime-shamir/0.1.0")]
#![warn(rust_2018_idioms)]

//! # Introduction
//!
//! An implementation of Shamir's Secret Sharing (SSS) over prime fields of
//! arbitrary size. A secret of any length is read as a big-endian integer,
//! embedded as the constant term of a random polynomial of degree
//! `threshold - 1` over GF(p), and split into `share_count` evaluations of
//! that polynomial. Any `threshold` of them recover the secret by Lagrange
//! interpolation; fewer reveal nothing about it.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! prime-shamir = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use bc_rand::SecureRandomNumberGenerator;
//! use prime_shamir::{combine, split};
//!
//! let mut rng = SecureRandomNumberGenerator;
//! let secret = b"my secret belongs to me.";
//! let result = split(3, 5, secret, &mut rng).unwrap();
//!
//! let some: Vec<_> = result.shares().iter().skip(2).collect();
//! let recovered = combine(result.modulus(), some).unwrap();
//! assert_eq!(recovered, secret);
//! ```
//!
//! # Caveats
//!
//! - The modulus must travel with the shares, or be agreed in advance (see
//!   [`Preset`] and [`FixedSharer`]).
//! - [`combine`] does not know the threshold. Too few shares produce a
//!   plausible but wrong secret, never an error.
//! - Shares carry no integrity protection.
//! - Leading zero bytes of a secret are not preserved, and an empty secret
//!   comes back as a single zero byte.

mod constants;
pub use constants::{
    DEFAULT_PRIME_CERTAINTY, MAX_SAMPLE_REJECTIONS, MIN_MODULUS_BITS, MODULUS_CHECK_CERTAINTY,
    PRIME_ATTEMPTS_PER_BIT, SHARE_SEPARATOR,
};

mod error;
pub use error::{Error, Result};

mod field;
pub use field::PrimeField;

mod random;

mod prime;
pub use prime::{find_modulus, find_modulus_with_certainty, generate_prime, is_probable_prime};

mod share;
pub use share::{Share, ShareSet, SplitResult};

mod interpolate;

mod shamir;
pub use shamir::{combine, split, split_with_modulus};

mod codec;
pub use codec::{decode_share, decode_shares, encode_share, encode_shares};

mod presets;
pub use presets::{FixedSharer, Preset};

pub use num_bigint_dig::BigUint;

use std::{fmt, str::FromStr};

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use bc_crypto::memzero;
use num_bigint_dig::BigUint;

use crate::{
    Error, Result,
    constants::SHARE_SEPARATOR,
    share::{Share, ShareSet},
};

/// Encode a share as `<index>:<base64url, unpadded, big-endian value>`.
pub fn encode_share(share: &Share) -> String {
    let mut bytes = share.value().to_bytes_be();
    let value = URL_SAFE_NO_PAD.encode(&bytes);
    memzero(&mut bytes);
    format!("{}{}{}", share.index(), SHARE_SEPARATOR, value)
}

/// Parse a token produced by [`encode_share`]. Only the first separator
/// splits the token.
pub fn decode_share(token: &str) -> Result<Share> {
    let (index, value) = token
        .split_once(SHARE_SEPARATOR)
        .ok_or_else(|| Error::MalformedShare("missing separator".to_string()))?;
    let index: u32 = index
        .parse()
        .map_err(|_| Error::MalformedShare(format!("invalid index {:?}", index)))?;
    if value.is_empty() {
        return Err(Error::MalformedShare(format!("missing value for share {}", index)));
    }
    let mut bytes = URL_SAFE_NO_PAD
        .decode(value)
        .map_err(|e| Error::MalformedShare(format!("invalid value for share {}: {}", index, e)))?;
    let value = BigUint::from_bytes_be(&bytes);
    memzero(&mut bytes);
    Ok(Share::new(index, value))
}

pub fn encode_shares(shares: &ShareSet) -> Vec<String> {
    shares.iter().map(encode_share).collect()
}

/// Decode a batch of tokens into a set. Exact duplicates collapse.
pub fn decode_shares<S: AsRef<str>>(tokens: &[S]) -> Result<ShareSet> {
    let shares = tokens
        .iter()
        .map(|token| decode_share(token.as_ref()))
        .collect::<Result<Vec<_>>>()?;
    ShareSet::try_from_shares(shares)
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_share(self))
    }
}

impl FromStr for Share {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        decode_share(s)
    }
}

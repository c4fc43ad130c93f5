use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Secret is too long: {len} bytes exceeds the {max} byte capacity of the modulus")]
    SecretTooLong { len: usize, max: usize },

    #[error("Value is not invertible modulo the prime")]
    NotInvertible,

    #[error("Malformed share: {0}")]
    MalformedShare(String),

    #[error("Entropy source failure: {0}")]
    EntropySourceFailure(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidArgument("threshold must be positive").to_string(),
            "Invalid argument: threshold must be positive"
        );
        assert_eq!(
            Error::SecretTooLong { len: 20, max: 15 }.to_string(),
            "Secret is too long: 20 bytes exceeds the 15 byte capacity of the modulus"
        );
        assert_eq!(
            Error::MalformedShare("missing separator".to_string()).to_string(),
            "Malformed share: missing separator"
        );
    }
}

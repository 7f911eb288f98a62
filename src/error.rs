// Error types for key generation and the message pipeline

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, RsaError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("character {ch:?} has code point {code_point}, only code points below 1000 can be encoded")]
    UnrepresentableChar { ch: char, code_point: u32 },

    #[error("malformed digit string: {0}")]
    MalformedDigits(String),

    #[error("no inverse exists")]
    NoInverse,

    #[error("modulus must be positive")]
    NonPositiveModulus,

    #[error("invalid block length: {0}")]
    InvalidBlockLength(String),

    #[error("prime size of {bits} bits is below the minimum of {min}")]
    InvalidKeySize { bits: u64, min: u64 },

    #[error("invalid key generation setting: {0}")]
    InvalidConfig(String),

    #[error("gave up sampling {what} after {attempts} attempts")]
    KeyGenerationExhausted { what: &'static str, attempts: u32 },

    #[error("prime generation failed: {0}")]
    PrimeGeneration(String),

    #[error("ciphertext block {index} is not below the modulus")]
    CiphertextOutOfRange { index: usize },
}

/// Coarse classification of [`RsaError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Arithmetic,
    Configuration,
    KeyGeneration,
    Cipher,
}

impl RsaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RsaError::UnrepresentableChar { .. } | RsaError::MalformedDigits(_) => {
                ErrorKind::Encoding
            }
            RsaError::NoInverse | RsaError::NonPositiveModulus => ErrorKind::Arithmetic,
            RsaError::InvalidBlockLength(_)
            | RsaError::InvalidKeySize { .. }
            | RsaError::InvalidConfig(_) => ErrorKind::Configuration,
            RsaError::KeyGenerationExhausted { .. } | RsaError::PrimeGeneration(_) => {
                ErrorKind::KeyGeneration
            }
            RsaError::CiphertextOutOfRange { .. } => ErrorKind::Cipher,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::Encoding => "ENCODING",
            ErrorKind::Arithmetic => "ARITHMETIC",
            ErrorKind::Configuration => "CONFIGURATION",
            ErrorKind::KeyGeneration => "KEY_GENERATION",
            ErrorKind::Cipher => "CIPHER",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err = RsaError::UnrepresentableChar { ch: 'Ϩ', code_point: 1000 };
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(RsaError::NoInverse.kind(), ErrorKind::Arithmetic);
        assert_eq!(RsaError::NoInverse.to_string(), "no inverse exists");
        assert_eq!(ErrorKind::KeyGeneration.to_string(), "KEY_GENERATION");
    }
}

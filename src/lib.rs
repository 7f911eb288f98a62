//! Textbook RSA over short text messages.
//!
//! Each character becomes its three-digit code point, the digit string is cut
//! into fixed-width blocks and every block is raised to the key exponent modulo
//! `n`. Only characters below code point 1000 are supported.
//!
//! This is the unpadded, deterministic scheme from the textbooks. It is
//! malleable and not IND-CPA secure; use it to learn how RSA works, not to
//! protect data.
//!
//! ```rust
//! use textbook_rsa::{decrypt, encrypt, generate_keypair};
//!
//! let (public, private) = generate_keypair(64).unwrap();
//! let ciphertext = encrypt("This is my message :)", &public, None).unwrap();
//! let text = decrypt(&ciphertext.blocks, &private, ciphertext.padding, None).unwrap();
//! assert_eq!(text, "This is my message :)");
//! ```

pub mod config;
pub mod error;
pub mod rsa;

pub use config::{BlockLength, KeyGenConfig};
pub use error::{ErrorKind, Result, RsaError};
pub use rsa::{
    decrypt, encrypt, generate_keypair, generate_keypair_with, Ciphertext, PrivateKey, PublicKey,
    RandomSource, SecureSource,
};

// RSA Module - Main module file
// Exports key generation and the text encryption pipeline

pub mod arith;
pub mod chunk;
pub mod codec;
pub mod decrypt;
pub mod encrypt;
pub mod keygen;
pub mod prime;

pub use arith::{extended_gcd, is_coprime, mod_inverse, mod_inverse_unsigned};
pub use chunk::{chunk, reassemble, Chunked};
pub use codec::{decode, encode, encode_char};
pub use decrypt::{decrypt, decrypt_blocks};
pub use encrypt::{encrypt, encrypt_blocks, Ciphertext};
pub use keygen::{generate_keypair, generate_keypair_with, PrivateKey, PublicKey};
pub use prime::{is_probable_prime, RandomSource, SecureSource};

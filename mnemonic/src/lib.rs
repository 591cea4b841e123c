//! wordseed mnemonic codes
//!
//! Converts secret entropy to and from human-transcribable word sequences:
//! - 11-bit packing of entropy plus a SHA-256 checksum
//! - Per-language wordlists with NFKD-keyed lookup
//! - Checksum validation of untrusted phrases
//! - PBKDF2-HMAC-SHA512 seed derivation with an optional passphrase

pub mod bits;
pub mod checksum;
pub mod codec;
pub mod entropy;
pub mod error;
pub mod language;
pub mod mnemonic;
pub mod seed;

pub use bits::{BitBuffer, WordCount};
pub use checksum::{validate, verify_checksum};
pub use codec::{decode, decode_to_entropy, encode};
pub use entropy::Entropy;
pub use error::{MnemonicError, Result};
pub use language::{Language, Wordlist, WORDLIST_SIZE};
pub use mnemonic::{
    new_mnemonic, new_mnemonic_from_entropy, validate_mnemonic, Mnemonic, MnemonicGenerator,
};
pub use seed::{derive_seed, derive_seed_async, Seed};
pub use wordseed_crypto::{CryptoError, EntropySource, OsEntropy, SEED_LEN};

//! wordseed cryptography
//!
//! Digest, key-stretching, normalization and randomness primitives consumed by
//! the mnemonic codec.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::TryRngCore;
use sha2::{Digest, Sha256, Sha512};
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::Zeroizing;

/// Output length of the seed derivation primitive, in bytes.
pub const SEED_LEN: usize = 64;

/// PBKDF2 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Entropy source failure: {0}")]
    EntropySource(String),
}

/// Source of cryptographically secure random bytes
pub trait EntropySource {
    /// Fill `dest` completely or fail; partial fills are never reported as success.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// Operating system randomness
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            log::warn!("OS entropy source failed: {}", e);
            CryptoError::EntropySource(e.to_string())
        })
    }
}

/// Draw `len` fresh bytes from `source`
pub fn random_bytes<S: EntropySource + ?Sized>(
    source: &mut S,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut bytes = Zeroizing::new(vec![0u8; len]);
    source.fill(&mut bytes)?;
    Ok(bytes)
}

/// Hash data with SHA256
pub fn hash_sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Unicode Normalization Form KD
pub fn nfkd(text: &str) -> String {
    text.nfkd().collect()
}

/// PBKDF2-HMAC-SHA512 with the fixed round count and output length
pub fn pbkdf2_sha512(password: &[u8], salt: &[u8]) -> Zeroizing<[u8; SEED_LEN]> {
    let mut out = Zeroizing::new([0u8; SEED_LEN]);
    pbkdf2_hmac::<Sha512>(password, salt, PBKDF2_ROUNDS, &mut out[..]);
    out
}

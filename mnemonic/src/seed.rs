//! Seed derivation from a mnemonic and optional passphrase

use crate::error::{MnemonicError, Result};
use std::fmt;
use wordseed_crypto::{nfkd, pbkdf2_sha512, SEED_LEN};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const SALT_PREFIX: &str = "mnemonic";

/// 64-byte seed; computed on demand and wiped on drop
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LEN]);

impl Seed {
    pub fn as_bytes(&self) -> &[u8; SEED_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

/// PBKDF2-HMAC-SHA512 over the NFKD-normalized mnemonic, salted with
/// `"mnemonic" + passphrase` (also NFKD-normalized).
///
/// The checksum is not checked here; an invalid mnemonic still yields a
/// deterministic seed. Validate first when the phrase comes from a user.
///
/// # Arguments
/// * `mnemonic` - The mnemonic phrase
/// * `passphrase` - Optional passphrase (use "" for none)
///
/// # Returns
/// * `Result<Seed>` - The 64-byte seed, or `EmptyMnemonic` for blank input
///
/// # Example
/// ```
/// use wordseed::derive_seed;
///
/// let phrase = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";
/// let seed = derive_seed(phrase, "TREZOR").unwrap();
/// assert!(seed.to_hex().starts_with("c55257c3"));
/// ```
pub fn derive_seed(mnemonic: &str, passphrase: &str) -> Result<Seed> {
    if mnemonic.trim().is_empty() {
        return Err(MnemonicError::EmptyMnemonic);
    }

    let password = Zeroizing::new(nfkd(mnemonic));
    let salt = Zeroizing::new(nfkd(&Zeroizing::new(format!("{}{}", SALT_PREFIX, passphrase))));
    let out = pbkdf2_sha512(password.as_bytes(), salt.as_bytes());

    Ok(Seed(*out))
}

/// [`derive_seed`] on a blocking worker thread. The output is identical to
/// the synchronous path.
pub async fn derive_seed_async(mnemonic: String, passphrase: String) -> Result<Seed> {
    let mnemonic = Zeroizing::new(mnemonic);
    let passphrase = Zeroizing::new(passphrase);

    tokio::task::spawn_blocking(move || derive_seed(&mnemonic, &passphrase))
        .await
        .map_err(|e| MnemonicError::SeedTask(e.to_string()))?
}

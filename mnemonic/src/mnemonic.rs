//! Mnemonic phrases and the generation entry points

use crate::bits::WordCount;
use crate::checksum::{validate, verify_checksum};
use crate::codec::{decode, decode_to_entropy, encode, join_indices};
use crate::entropy::Entropy;
use crate::error::{MnemonicError, Result};
use crate::language::Language;
use crate::seed::{derive_seed, derive_seed_async, Seed};
use std::fmt;
use wordseed_crypto::{EntropySource, OsEntropy};
use zeroize::Zeroizing;

/// A checksum-valid mnemonic together with the passphrase used for seeds
#[derive(Clone)]
pub struct Mnemonic {
    phrase: Zeroizing<String>,
    language: Language,
    word_count: WordCount,
    passphrase: Zeroizing<String>,
}

impl Mnemonic {
    /// Encode `entropy` as a new mnemonic with an empty passphrase
    pub fn from_entropy(entropy: &[u8], language: Language) -> Result<Self> {
        let word_count = WordCount::from_entropy_len(entropy.len())?;
        let phrase = encode(entropy, language)?;

        Ok(Self {
            phrase: Zeroizing::new(phrase),
            language,
            word_count,
            passphrase: Zeroizing::new(String::new()),
        })
    }

    /// Parse a user-supplied phrase, rejecting it unless it validates.
    ///
    /// Every failure is reported as [`MnemonicError::InvalidMnemonic`]; [`decode_to_entropy`] gives the
    /// specific reason. The stored phrase is rebuilt from the wordlist, so stray
    /// whitespace in `phrase` does not leak into seed derivation.
    pub fn from_phrase(phrase: &str, language: Language, passphrase: &str) -> Result<Self> {
        let (indices, entropy) = decode(phrase, language)
            .map(Zeroizing::new)
            .and_then(|indices| verify_checksum(&indices).map(|entropy| (indices, entropy)))
            .map_err(|e| {
                log::trace!("{} phrase rejected: {}", language, e.kind());
                MnemonicError::InvalidMnemonic
            })?;

        Ok(Self {
            phrase: Zeroizing::new(join_indices(&indices, language)?),
            language,
            word_count: entropy.word_count(),
            passphrase: Zeroizing::new(passphrase.to_string()),
        })
    }

    /// Replace the passphrase used by [`Mnemonic::seed`]
    pub fn with_passphrase(mut self, passphrase: &str) -> Self {
        self.passphrase = Zeroizing::new(passphrase.to_string());
        self
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.phrase.split(self.language.separator())
    }

    pub fn to_entropy(&self) -> Result<Entropy> {
        decode_to_entropy(&self.phrase, self.language)
    }

    pub fn seed(&self) -> Result<Seed> {
        derive_seed(&self.phrase, &self.passphrase)
    }

    pub async fn seed_async(&self) -> Result<Seed> {
        derive_seed_async(self.phrase.to_string(), self.passphrase.to_string()).await
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phrase)
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mnemonic")
            .field("language", &self.language)
            .field("word_count", &self.word_count)
            .finish_non_exhaustive()
    }
}

/// Produces mnemonics of a fixed size and language
#[derive(Debug, Clone, Copy)]
pub struct MnemonicGenerator {
    word_count: WordCount,
    language: Language,
}

impl MnemonicGenerator {
    /// `words` must be 12, 15, 18, 21 or 24
    pub fn new(words: usize, language: Language) -> Result<Self> {
        Ok(Self {
            word_count: WordCount::from_words(words)?,
            language,
        })
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Generate from operating system randomness
    pub fn generate(&self) -> Result<Mnemonic> {
        self.generate_with(&mut OsEntropy)
    }

    pub fn generate_with<S: EntropySource + ?Sized>(&self, source: &mut S) -> Result<Mnemonic> {
        let entropy = Entropy::generate(self.word_count, source)?;
        log::debug!(
            "generated {}-word {} mnemonic",
            self.word_count,
            self.language
        );
        Mnemonic::from_entropy(entropy.as_bytes(), self.language)
    }

    /// Encode caller-supplied entropy, which must match this generator's size
    pub fn from_entropy(&self, entropy: &[u8]) -> Result<Mnemonic> {
        if entropy.len() != self.word_count.entropy_len() {
            return Err(MnemonicError::InvalidEntropyLength(entropy.len()));
        }
        Mnemonic::from_entropy(entropy, self.language)
    }
}

/// Generate a new random mnemonic
///
/// # Arguments
/// * `word_count` - Number of words (12, 15, 18, 21, or 24)
/// * `language` - Wordlist to draw the words from
///
/// # Returns
/// * `Result<Mnemonic>` - Backed by fresh operating system randomness, with an
///   empty passphrase
///
/// # Example
/// ```
/// use wordseed::{new_mnemonic, Language};
///
/// let mnemonic = new_mnemonic(12, Language::English).unwrap();
/// assert_eq!(mnemonic.words().count(), 12);
/// ```
pub fn new_mnemonic(word_count: usize, language: Language) -> Result<Mnemonic> {
    MnemonicGenerator::new(word_count, language)?.generate()
}

/// Encode existing entropy as a mnemonic
///
/// # Arguments
/// * `entropy` - 16, 20, 24, 28, or 32 bytes
/// * `language` - Wordlist to render the words in
///
/// # Example
/// ```
/// use wordseed::{new_mnemonic_from_entropy, Language};
///
/// let mnemonic = new_mnemonic_from_entropy(&[0u8; 16], Language::English).unwrap();
/// assert!(mnemonic.phrase().ends_with("abandon about"));
/// ```
pub fn new_mnemonic_from_entropy(entropy: &[u8], language: Language) -> Result<Mnemonic> {
    Mnemonic::from_entropy(entropy, language)
}

/// Validate a mnemonic phrase
///
/// # Arguments
/// * `phrase` - Words separated by any whitespace
/// * `language` - Wordlist the phrase was written in; never inferred
///
/// # Returns
/// * `bool` - `true` only for a supported word count, known words and a
///   matching checksum; any problem yields `false`
pub fn validate_mnemonic(phrase: &str, language: Language) -> bool {
    validate(phrase, language)
}

use crate::bits::WordCount;
use crate::error::Result;
use std::fmt;
use wordseed_crypto::{random_bytes, EntropySource};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret entropy of one of the five supported lengths
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Entropy {
    bytes: Vec<u8>,
    #[zeroize(skip)]
    word_count: WordCount,
}

impl Entropy {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let word_count = WordCount::from_entropy_len(bytes.len())?;
        Ok(Self {
            bytes: bytes.to_vec(),
            word_count,
        })
    }

    /// Draw fresh entropy sized for `word_count` words
    pub fn generate<S: EntropySource + ?Sized>(word_count: WordCount, source: &mut S) -> Result<Self> {
        let bytes = random_bytes(source, word_count.entropy_len())?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }
}

impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entropy({} bytes)", self.bytes.len())
    }
}

use thiserror::Error;
use wordseed_crypto::CryptoError;

#[derive(Debug, Error)]
pub enum MnemonicError {
    #[error("Invalid word count: {0} (must be 12, 15, 18, 21, or 24)")]
    InvalidWordCount(usize),

    #[error("Invalid entropy length: {0} bytes (must be 16, 20, 24, 28, or 32)")]
    InvalidEntropyLength(usize),

    #[error("Unknown word: {0}")]
    UnknownWord(String),

    #[error("Invalid mnemonic")]
    InvalidMnemonic,

    #[error("Mnemonic is empty")]
    EmptyMnemonic,

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Entropy error: {0}")]
    Entropy(#[from] CryptoError),

    #[error("Seed derivation task failed: {0}")]
    SeedTask(String),
}

impl MnemonicError {
    /// Short label that never echoes caller input, for logging
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            MnemonicError::InvalidWordCount(_) => "invalid word count",
            MnemonicError::InvalidEntropyLength(_) => "invalid entropy length",
            MnemonicError::UnknownWord(_) => "unknown word",
            MnemonicError::InvalidMnemonic => "checksum mismatch",
            MnemonicError::EmptyMnemonic => "empty mnemonic",
            MnemonicError::UnknownLanguage(_) => "unknown language",
            MnemonicError::Entropy(_) => "entropy source failure",
            MnemonicError::SeedTask(_) => "seed task failure",
        }
    }
}

pub type Result<T> = std::result::Result<T, MnemonicError>;

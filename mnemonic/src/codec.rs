//! Conversion between entropy and mnemonic sentences

use crate::bits::{BitBuffer, WordCount};
use crate::checksum::verify_checksum;
use crate::entropy::Entropy;
use crate::error::{MnemonicError, Result};
use crate::language::Language;

/// Render `entropy` as a mnemonic in `language`
pub fn encode(entropy: &[u8], language: Language) -> Result<String> {
    let packed = BitBuffer::pack(entropy)?;
    join_indices(&packed.slice_indices(), language)
}

/// Look up every word of `mnemonic` in `language`'s wordlist.
///
/// Words may be separated by any whitespace, including the ideographic space,
/// and are matched in NFKD form. The first unknown word aborts decoding and is
/// reported as the caller wrote it; no partial result is returned.
pub fn decode(mnemonic: &str, language: Language) -> Result<Vec<u16>> {
    let words: Vec<&str> = mnemonic.split_whitespace().collect();
    WordCount::from_words(words.len())?;

    let wordlist = language.wordlist();
    words
        .iter()
        .map(|word| {
            wordlist
                .index_of(word)
                .ok_or_else(|| MnemonicError::UnknownWord((*word).to_string()))
        })
        .collect()
}

/// Decode `mnemonic` and recover its entropy, verifying the checksum
pub fn decode_to_entropy(mnemonic: &str, language: Language) -> Result<Entropy> {
    let indices = decode(mnemonic, language)?;
    verify_checksum(&indices)
}

/// An index outside the wordlist cannot belong to a valid mnemonic.
pub(crate) fn join_indices(indices: &[u16], language: Language) -> Result<String> {
    let wordlist = language.wordlist();
    let words = indices
        .iter()
        .map(|&index| wordlist.word(index).ok_or(MnemonicError::InvalidMnemonic))
        .collect::<Result<Vec<_>>>()?;
    Ok(words.join(language.separator()))
}

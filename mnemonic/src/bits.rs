//! Bit packing between entropy and 11-bit word indices
//!
//! Entropy bytes are laid out big-endian in a fixed buffer, followed by the
//! leading checksum bits of their SHA-256 digest. Word indices are cut from that
//! buffer left to right, eleven bits at a time, with masked shifts over a
//! three-byte window.

use crate::error::{MnemonicError, Result};
use std::fmt;
use wordseed_crypto::hash_sha256;
use zeroize::Zeroize;

pub const BITS_PER_WORD: usize = 11;

const INDEX_MASK: u32 = (1 << BITS_PER_WORD) - 1;

/// Largest entropy (32 bytes), its checksum byte, and slack for the read window.
const BUFFER_LEN: usize = 35;

/// The five supported mnemonic sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    pub fn from_words(count: usize) -> Result<Self> {
        match count {
            12 => Ok(WordCount::Words12),
            15 => Ok(WordCount::Words15),
            18 => Ok(WordCount::Words18),
            21 => Ok(WordCount::Words21),
            24 => Ok(WordCount::Words24),
            _ => Err(MnemonicError::InvalidWordCount(count)),
        }
    }

    pub fn from_entropy_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(WordCount::Words12),
            20 => Ok(WordCount::Words15),
            24 => Ok(WordCount::Words18),
            28 => Ok(WordCount::Words21),
            32 => Ok(WordCount::Words24),
            _ => Err(MnemonicError::InvalidEntropyLength(len)),
        }
    }

    pub fn words(self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    /// ENT = MS * 11 * 32 / 33
    pub fn entropy_bits(self) -> usize {
        self.words() * BITS_PER_WORD * 32 / 33
    }

    pub fn entropy_len(self) -> usize {
        self.entropy_bits() / 8
    }

    /// CS = ENT / 32
    pub fn checksum_bits(self) -> usize {
        self.entropy_bits() / 32
    }

    pub fn total_bits(self) -> usize {
        self.words() * BITS_PER_WORD
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.words())
    }
}

/// Leading checksum bits of SHA-256(entropy), right-aligned.
pub(crate) fn checksum(entropy: &[u8], word_count: WordCount) -> u8 {
    hash_sha256(entropy)[0] >> (8 - word_count.checksum_bits())
}

/// Entropy followed by its checksum, as one contiguous bitstream
#[derive(Clone)]
pub struct BitBuffer {
    bytes: [u8; BUFFER_LEN],
    word_count: WordCount,
}

impl BitBuffer {
    /// Lay out `entropy` and append its checksum. Fails on an unsupported length
    /// before anything is hashed.
    pub fn pack(entropy: &[u8]) -> Result<Self> {
        let word_count = WordCount::from_entropy_len(entropy.len())?;

        let mut bytes = [0u8; BUFFER_LEN];
        bytes[..entropy.len()].copy_from_slice(entropy);
        let checksum_bits = word_count.checksum_bits();
        bytes[entropy.len()] = checksum(entropy, word_count) << (8 - checksum_bits);

        Ok(Self { bytes, word_count })
    }

    /// Rebuild the bitstream from word indices
    pub fn from_indices(indices: &[u16]) -> Result<Self> {
        let word_count = WordCount::from_words(indices.len())?;

        let mut buffer = Self {
            bytes: [0u8; BUFFER_LEN],
            word_count,
        };
        for (i, &index) in indices.iter().enumerate() {
            buffer.write(i * BITS_PER_WORD, index);
        }
        Ok(buffer)
    }

    pub fn word_count(&self) -> WordCount {
        self.word_count
    }

    /// Consecutive 11-bit big-endian groups, left to right
    pub fn slice_indices(&self) -> Vec<u16> {
        (0..self.word_count.words())
            .map(|i| self.read(i * BITS_PER_WORD))
            .collect()
    }

    /// Split at the entropy boundary into the entropy bytes and the
    /// right-aligned checksum bits that follow them.
    pub fn unpack(&self) -> (&[u8], u8) {
        let len = self.word_count.entropy_len();
        let checksum = self.bytes[len] >> (8 - self.word_count.checksum_bits());
        (&self.bytes[..len], checksum)
    }

    fn read(&self, offset: usize) -> u16 {
        let byte = offset / 8;
        let shift = 24 - BITS_PER_WORD - offset % 8;
        let window = u32::from(self.bytes[byte]) << 16
            | u32::from(self.bytes[byte + 1]) << 8
            | u32::from(self.bytes[byte + 2]);
        ((window >> shift) & INDEX_MASK) as u16
    }

    fn write(&mut self, offset: usize, index: u16) {
        let byte = offset / 8;
        let shift = 24 - BITS_PER_WORD - offset % 8;
        let window = (u32::from(index) & INDEX_MASK) << shift;
        self.bytes[byte] |= (window >> 16) as u8;
        self.bytes[byte + 1] |= (window >> 8) as u8;
        self.bytes[byte + 2] |= window as u8;
    }
}

impl Drop for BitBuffer {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitBuffer")
            .field("word_count", &self.word_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_table() {
        // | ENT | CS | ENT+CS | MS |
        let table = [
            (128, 4, 132, 12),
            (160, 5, 165, 15),
            (192, 6, 198, 18),
            (224, 7, 231, 21),
            (256, 8, 264, 24),
        ];
        for (wc, (ent, cs, total, ms)) in WordCount::ALL.iter().zip(table) {
            assert_eq!(wc.entropy_bits(), ent);
            assert_eq!(wc.checksum_bits(), cs);
            assert_eq!(wc.total_bits(), total);
            assert_eq!(wc.words(), ms);
            assert_eq!(WordCount::from_words(ms).unwrap(), *wc);
            assert_eq!(WordCount::from_entropy_len(ent / 8).unwrap(), *wc);
        }
    }

    #[test]
    fn test_rejects_bad_sizes() {
        for count in [0, 11, 13, 25, 27] {
            assert!(matches!(
                WordCount::from_words(count),
                Err(MnemonicError::InvalidWordCount(c)) if c == count
            ));
        }
        for len in [0, 15, 17, 33, 64] {
            assert!(matches!(
                BitBuffer::pack(&vec![0u8; len]),
                Err(MnemonicError::InvalidEntropyLength(l)) if l == len
            ));
        }
    }

    #[test]
    fn test_zero_entropy_indices() {
        // SHA-256 of 16 zero bytes starts with 0x37, so the checksum nibble is 3
        let packed = BitBuffer::pack(&[0u8; 16]).unwrap();
        let indices = packed.slice_indices();

        assert_eq!(indices.len(), 12);
        assert!(indices[..11].iter().all(|&i| i == 0));
        assert_eq!(indices[11], 3);
    }

    #[test]
    fn test_all_ones_entropy_indices() {
        let packed = BitBuffer::pack(&[0xff; 32]).unwrap();
        let indices = packed.slice_indices();

        assert_eq!(indices.len(), 24);
        assert!(indices[..23].iter().all(|&i| i == 2047));
        // Last group: three entropy bits then the full checksum byte
        assert_eq!(indices[23] >> 8, 0b111);
        assert_eq!(
            u8::try_from(indices[23] & 0xff).unwrap(),
            checksum(&[0xff; 32], WordCount::Words24)
        );
    }

    #[test]
    fn test_indices_rebuild_entropy() {
        let entropy: Vec<u8> = (0u8..28).map(|b| b.wrapping_mul(37) ^ 0x5a).collect();
        let packed = BitBuffer::pack(&entropy).unwrap();

        let rebuilt = BitBuffer::from_indices(&packed.slice_indices()).unwrap();
        let (bytes, cs) = rebuilt.unpack();

        assert_eq!(bytes, &entropy[..]);
        assert_eq!(cs, checksum(&entropy, WordCount::Words21));
        assert_eq!(rebuilt.word_count(), WordCount::Words21);
    }

    #[test]
    fn test_indices_are_eleven_bits() {
        let packed = BitBuffer::pack(&[0xa5; 20]).unwrap();
        assert!(packed.slice_indices().iter().all(|&i| i < 2048));
    }
}

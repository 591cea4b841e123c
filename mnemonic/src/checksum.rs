//! Checksum verification for untrusted mnemonics

use crate::bits::{checksum, BitBuffer};
use crate::codec::decode;
use crate::entropy::Entropy;
use crate::error::{MnemonicError, Result};
use crate::language::Language;

/// Rebuild the bitstream from `indices` and compare its trailing checksum
/// bits against a fresh digest of the recovered entropy.
pub fn verify_checksum(indices: &[u16]) -> Result<Entropy> {
    let bits = BitBuffer::from_indices(indices)?;
    let (entropy, embedded) = bits.unpack();

    if embedded != checksum(entropy, bits.word_count()) {
        return Err(MnemonicError::InvalidMnemonic);
    }
    Entropy::from_bytes(entropy)
}

/// Whether `mnemonic` is a well-formed, checksum-valid sentence in `language`.
///
/// Every failure collapses to `false`; use [`crate::decode_to_entropy`] for
/// the reason.
pub fn validate(mnemonic: &str, language: Language) -> bool {
    match decode(mnemonic, language).and_then(|indices| verify_checksum(&indices)) {
        Ok(_) => true,
        Err(e) => {
            log::trace!("{} mnemonic rejected: {}", language, e.kind());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_english() {
        assert!(validate(
            "check fiscal fit sword unlock rough lottery tool sting pluck bulb random",
            Language::English
        ));
        assert!(validate(
            "rich soon pool legal busy add couch tower goose security raven anger",
            Language::English
        ));
    }

    #[test]
    fn test_invalid_english() {
        // Eleven words
        assert!(!validate(
            "rich soon pool legal busy add couch tower goose security raven",
            Language::English
        ));
        // Not in the wordlist
        assert!(!validate(
            "rich soon pool legal busy add couch tower goose security women",
            Language::English
        ));
        // Eleven words with a different ending
        assert!(!validate(
            "rich soon pool legal busy add couch tower goose security base",
            Language::English
        ));
        assert!(!validate("", Language::English));
    }

    #[test]
    fn test_checksum_mismatch() {
        // Same all-zero entropy as "... abandon about", but a zero checksum nibble
        let phrase = vec!["abandon"; 12].join(" ");
        assert!(!validate(&phrase, Language::English));
        assert!(matches!(
            crate::decode_to_entropy(&phrase, Language::English),
            Err(MnemonicError::InvalidMnemonic)
        ));
    }

    #[test]
    fn test_last_word_substitution() {
        let valid = "check fiscal fit sword unlock rough lottery tool sting pluck bulb random";
        let indices = decode(valid, Language::English).unwrap();
        let last = indices[11];
        let wordlist = Language::English.wordlist();

        // Keep the seven entropy bits of the last word and vary only its checksum
        for nibble in 0..16u16 {
            let candidate = (last & !0xf) | nibble;
            if candidate == last {
                continue;
            }
            let mut words: Vec<&str> = valid.split(' ').collect();
            words[11] = wordlist.word(candidate).unwrap();
            assert!(!validate(&words.join(" "), Language::English), "{}", words[11]);
        }
    }

    #[test]
    fn test_single_word_substitution() {
        let valid = "rich soon pool legal busy add couch tower goose security raven anger";
        let original: Vec<&str> = valid.split(' ').collect();
        let vocabulary = Language::English.wordlist().words();

        // Each of the 2047 substitutes at a position survives the 4-bit
        // checksum with probability 1/16, so about 128 per position.
        let mut total = 0;
        for position in 0..original.len() {
            let mut words = original.clone();
            let mut still_valid = 0;
            for &word in vocabulary {
                if word == original[position] {
                    continue;
                }
                words[position] = word;
                if validate(&words.join(" "), Language::English) {
                    still_valid += 1;
                }
            }
            assert!(
                (64..=192).contains(&still_valid),
                "position {}: {} of 2047 substitutes validate",
                position,
                still_valid
            );
            total += still_valid;
        }
        assert!((1300..=1770).contains(&total), "{} substitutes validate", total);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let phrase = "check fiscal fit sword unlock rough lottery tool sting pluck bulb random";
        let first = validate(phrase, Language::English);
        for _ in 0..5 {
            assert_eq!(validate(phrase, Language::English), first);
        }
    }

    #[test]
    fn test_other_languages() {
        let cases = [
            ("氮 冠 锋 枪 做 到 容 枯 获 槽 弧 部", Language::ChineseSimplified),
            ("氮 冠 鋒 槍 做 到 容 枯 獲 槽 弧 部", Language::ChineseTraditional),
            (
                "ねほりはほり　ひらがな　とさか　そつう　おうじ　あてな　きくらげ　みもと　してつ　ぱそこん　にってい　いこつ",
                Language::Japanese,
            ),
            (
                "posible ruptura ozono ligero bobina acto chuleta tetera gol realidad pez alerta",
                Language::Spanish,
            ),
            (
                "pieuvre revivre nuptial implorer blinder accroche chute syntaxe félin promener parcelle aimable",
                Language::French,
            ),
            (
                "risultato siccome prenotare mimosa bosco adottare continuo tifare ignaro sbloccato residente alticcio",
                Language::Italian,
            ),
            ("전망 차선 이전 실장 기간 간판 대접 판단 생명 존재 잠깐 건축", Language::Korean),
        ];

        for (phrase, language) in cases {
            assert!(validate(phrase, language), "{}", language);
        }
    }

    #[test]
    fn test_language_is_not_inferred() {
        let italian = "risultato siccome prenotare mimosa bosco adottare continuo tifare ignaro sbloccato residente alticcio";
        assert!(!validate(italian, Language::English));
        assert!(!validate(italian, Language::Spanish));
    }
}

//! Per-language vocabularies
//!
//! Each wordlist is built once per process on first use and then shared by
//! reference. Lookups are keyed by the NFKD form of every entry so composed and
//! decomposed input resolve to the same index.

use crate::error::MnemonicError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use wordseed_crypto::nfkd;

/// Number of entries in every wordlist (one per 11-bit index)
pub const WORDLIST_SIZE: usize = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Language {
    #[default]
    English,
    ChineseSimplified,
    ChineseTraditional,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Spanish,
}

const ALL_LANGUAGES: [Language; 9] = [
    Language::English,
    Language::ChineseSimplified,
    Language::ChineseTraditional,
    Language::Czech,
    Language::French,
    Language::Italian,
    Language::Japanese,
    Language::Korean,
    Language::Spanish,
];

static WORDLISTS: [OnceLock<Wordlist>; ALL_LANGUAGES.len()] =
    [const { OnceLock::new() }; ALL_LANGUAGES.len()];

impl Language {
    pub fn all() -> &'static [Language] {
        &ALL_LANGUAGES
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::ChineseSimplified => "chinese-simplified",
            Language::ChineseTraditional => "chinese-traditional",
            Language::Czech => "czech",
            Language::French => "french",
            Language::Italian => "italian",
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Spanish => "spanish",
        }
    }

    /// Word separator used when rendering a mnemonic
    pub fn separator(self) -> &'static str {
        match self {
            Language::Japanese => "\u{3000}",
            _ => " ",
        }
    }

    pub fn wordlist(self) -> &'static Wordlist {
        WORDLISTS[self as usize].get_or_init(|| {
            log::debug!("building {} wordlist index", self);
            Wordlist::new(self.table())
        })
    }

    fn table(self) -> &'static [&'static str; WORDLIST_SIZE] {
        let source = match self {
            Language::English => bip39::Language::English,
            Language::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Language::ChineseTraditional => bip39::Language::TraditionalChinese,
            Language::Czech => bip39::Language::Czech,
            Language::French => bip39::Language::French,
            Language::Italian => bip39::Language::Italian,
            Language::Japanese => bip39::Language::Japanese,
            Language::Korean => bip39::Language::Korean,
            Language::Spanish => bip39::Language::Spanish,
        };
        source.word_list()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = MnemonicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "english" | "en" => Language::English,
            "chinese-simplified" | "zh-hans" | "zh-cn" => Language::ChineseSimplified,
            "chinese-traditional" | "zh-hant" | "zh-tw" => Language::ChineseTraditional,
            "czech" | "cs" => Language::Czech,
            "french" | "fr" => Language::French,
            "italian" | "it" => Language::Italian,
            "japanese" | "ja" | "jp" => Language::Japanese,
            "korean" | "ko" => Language::Korean,
            "spanish" | "es" => Language::Spanish,
            _ => return Err(MnemonicError::UnknownLanguage(s.to_string())),
        };
        Ok(language)
    }
}

/// Ordered vocabulary of exactly [`WORDLIST_SIZE`] words
pub struct Wordlist {
    words: &'static [&'static str; WORDLIST_SIZE],
    index: HashMap<String, u16>,
}

impl Wordlist {
    fn new(words: &'static [&'static str; WORDLIST_SIZE]) -> Self {
        let index = words
            .iter()
            .enumerate()
            .map(|(i, word)| (nfkd(word), i as u16))
            .collect::<HashMap<_, _>>();
        debug_assert_eq!(index.len(), WORDLIST_SIZE, "wordlist entries must be unique");

        Self { words, index }
    }

    /// Word at `index`, or `None` past the end of the list
    pub fn word(&self, index: u16) -> Option<&'static str> {
        self.words.get(usize::from(index)).copied()
    }

    pub fn index_of(&self, word: &str) -> Option<u16> {
        if word.is_ascii() {
            self.index.get(word).copied()
        } else {
            self.index.get(&nfkd(word)).copied()
        }
    }

    pub fn words(&self) -> &'static [&'static str] {
        self.words
    }
}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wordlist")
            .field("first", &self.words[0])
            .field("last", &self.words[WORDLIST_SIZE - 1])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_wordlist_is_complete() {
        for &language in Language::all() {
            let list = language.wordlist();
            assert_eq!(list.words().len(), WORDLIST_SIZE);

            for (i, word) in list.words().iter().enumerate() {
                assert_eq!(list.index_of(word), Some(i as u16), "{} #{}", language, i);
            }
        }
    }

    #[test]
    fn test_english_bounds() {
        let list = Language::English.wordlist();
        assert_eq!(list.word(0), Some("abandon"));
        assert_eq!(list.word(2047), Some("zoo"));
        assert_eq!(list.word(2048), None);
        assert_eq!(list.word(u16::MAX), None);
        assert_eq!(list.index_of("about"), Some(3));
        assert_eq!(list.index_of("women"), None);
    }

    #[test]
    fn test_wordlist_shared() {
        let a = Language::Italian.wordlist() as *const Wordlist;
        let b = Language::Italian.wordlist() as *const Wordlist;
        assert_eq!(a, b);
        assert_eq!(Language::Italian.wordlist().word(0), Some("abaco"));
    }

    #[test]
    fn test_composed_lookup() {
        // "félin" in the French list, written with a precomposed é
        let list = Language::French.wordlist();
        let composed = list.index_of("f\u{e9}lin");
        let decomposed = list.index_of("fe\u{301}lin");
        assert!(composed.is_some());
        assert_eq!(composed, decomposed);
    }

    #[test]
    fn test_separator() {
        assert_eq!(Language::Japanese.separator(), "\u{3000}");
        assert_eq!(Language::English.separator(), " ");
        assert_eq!(Language::Korean.separator(), " ");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("English".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ja".parse::<Language>().unwrap(), Language::Japanese);
        assert_eq!(
            "chinese_traditional".parse::<Language>().unwrap(),
            Language::ChineseTraditional
        );
        assert!(matches!(
            "klingon".parse::<Language>(),
            Err(MnemonicError::UnknownLanguage(_))
        ));

        for &language in Language::all() {
            assert_eq!(language.name().parse::<Language>().unwrap(), language);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Language::ChineseSimplified).unwrap();
        assert_eq!(json, "\"chinese-simplified\"");

        let parsed: Language = serde_json::from_str("\"korean\"").unwrap();
        assert_eq!(parsed, Language::Korean);
    }
}

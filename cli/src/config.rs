//! Optional TOML configuration for the wordseed CLI

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wordseed::{Language, WordCount};

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub mnemonic: MnemonicConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MnemonicConfig {
    pub language: Language,
    pub words: usize,
}

impl Default for MnemonicConfig {
    fn default() -> Self {
        Self {
            language: Language::English,
            words: 12,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub json: bool,
}

impl Config {
    /// Load `path` if given, else the per-user default file when it exists.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => {
                    log::debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        WordCount::from_words(config.mnemonic.words)?;
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".wordseed").join("config.toml"))
}

//! wordseed CLI - generate, check and stretch mnemonic phrases

mod config;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use config::Config;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::PathBuf;
use std::process::ExitCode;
use wordseed::{
    decode_to_entropy, derive_seed, validate_mnemonic, Language, Mnemonic, MnemonicGenerator,
};
use zeroize::Zeroizing;

#[derive(Parser)]
#[command(name = "wordseed")]
#[command(about = "Mnemonic phrase and seed tool", version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new mnemonic
    Generate {
        /// Number of words (12, 15, 18, 21 or 24)
        #[arg(short, long)]
        words: Option<usize>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,

        /// Encode this hex entropy instead of drawing fresh randomness
        #[arg(long, value_name = "HEX")]
        entropy: Option<String>,

        /// Also print the entropy
        #[arg(long)]
        show_entropy: bool,
    },

    /// Check a mnemonic's words and checksum
    Validate {
        /// Mnemonic words (quoted or as separate arguments)
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// Derive the 64-byte seed
    Seed {
        /// Mnemonic words (quoted or as separate arguments)
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Optional passphrase
        #[arg(short, long, env = "WORDSEED_PASSPHRASE", default_value = "", hide_env_values = true)]
        passphrase: String,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,

        /// Derive even if the checksum does not verify
        #[arg(long)]
        no_verify: bool,
    },

    /// Recover the entropy encoded by a mnemonic
    Entropy {
        /// Mnemonic words (quoted or as separate arguments)
        #[arg(required = true, num_args = 1..)]
        phrase: Vec<String>,

        /// Wordlist language
        #[arg(short, long)]
        language: Option<Language>,
    },

    /// List supported wordlist languages
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    let json = cli.json || config.output.json;

    match cli.command {
        Commands::Generate {
            words,
            language,
            entropy,
            show_entropy,
        } => {
            let language = language.unwrap_or(config.mnemonic.language);
            let mnemonic = match entropy {
                Some(hex_str) => {
                    let bytes = Zeroizing::new(
                        hex::decode(hex_str.trim()).context("Entropy must be hex encoded")?,
                    );
                    match words {
                        Some(words) => MnemonicGenerator::new(words, language)?.from_entropy(&bytes)?,
                        None => Mnemonic::from_entropy(&bytes, language)?,
                    }
                }
                None => {
                    let words = words.unwrap_or(config.mnemonic.words);
                    MnemonicGenerator::new(words, language)?.generate()?
                }
            };
            let entropy_hex = show_entropy
                .then(|| mnemonic.to_entropy().map(|e| e.to_hex()))
                .transpose()?;

            if json {
                let mut out = json!({
                    "mnemonic": mnemonic.phrase(),
                    "language": mnemonic.language(),
                    "words": mnemonic.word_count().words(),
                });
                if let Some(hex) = &entropy_hex {
                    out["entropy"] = json!(hex);
                }
                println!("{}", out);
            } else {
                println!("{}", mnemonic);
                if let Some(hex) = &entropy_hex {
                    println!("{}: {}", "Entropy".yellow().bold(), hex);
                }
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Validate { phrase, language } => {
            let phrase = Zeroizing::new(phrase.join(" "));
            let language = language.unwrap_or(config.mnemonic.language);
            let valid = validate_mnemonic(&phrase, language);

            if json {
                println!("{}", json!({ "valid": valid, "language": language }));
            } else if valid {
                println!("{} valid {} mnemonic", "✓".green(), language);
            } else {
                println!("{} invalid {} mnemonic", "✗".red(), language);
            }
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }

        Commands::Seed {
            phrase,
            passphrase,
            language,
            no_verify,
        } => {
            let phrase = Zeroizing::new(phrase.join(" "));
            let passphrase = Zeroizing::new(passphrase);
            let language = language.unwrap_or(config.mnemonic.language);

            let seed = if no_verify {
                log::warn!("deriving seed without checksum verification");
                derive_seed(&phrase, &passphrase)?
            } else {
                Mnemonic::from_phrase(&phrase, language, &passphrase)
                    .context("Mnemonic failed verification (use --no-verify to derive anyway)")?
                    .seed()?
            };

            if json {
                println!("{}", json!({ "seed": seed.to_hex() }));
            } else {
                println!("{}", seed.to_hex());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Entropy { phrase, language } => {
            let phrase = Zeroizing::new(phrase.join(" "));
            let language = language.unwrap_or(config.mnemonic.language);
            let entropy = decode_to_entropy(&phrase, language)?;

            if json {
                println!(
                    "{}",
                    json!({ "entropy": entropy.to_hex(), "bits": entropy.as_bytes().len() * 8 })
                );
            } else {
                println!("{}", entropy.to_hex());
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Languages => {
            if json {
                let names: Vec<&str> = Language::all().iter().map(|l| l.name()).collect();
                println!("{}", json!(names));
            } else {
                for language in Language::all() {
                    println!("{}", language);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

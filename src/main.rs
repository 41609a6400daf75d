use anyhow::{Context, Result};
use classic_ciphers::{caesar, playfair, KeySquare};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// classic-ciphers - classical substitution ciphers
///
/// Encrypt and decrypt text with the Playfair and Caesar ciphers.
/// Historical encoding only - do not protect real data with this.
#[derive(Parser)]
#[command(name = "classic-ciphers")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text (Playfair with --key, Caesar with --shift)
    Encrypt {
        /// Text to encrypt
        text: String,

        /// Playfair key phrase (falls back to the configured default key)
        #[arg(long, short)]
        key: Option<String>,

        /// Caesar shift amount (selects the Caesar cipher)
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i32>,

        /// Filler letter for Playfair padding (default x)
        #[arg(long)]
        filler: Option<char>,
    },

    /// Decrypt text (Playfair with --key, Caesar with --shift)
    Decrypt {
        /// Text to decrypt
        text: String,

        /// Playfair key phrase (falls back to the configured default key)
        #[arg(long, short)]
        key: Option<String>,

        /// Caesar shift amount used during encryption
        #[arg(long, short, allow_negative_numbers = true)]
        shift: Option<i32>,
    },

    /// Print the 5x5 Playfair key square for a key
    Square {
        /// Key phrase (falls back to the configured default key)
        key: Option<String>,
    },

    /// Generate a random 25-letter Playfair key
    Keygen,

    /// Set, show, or clear the default Playfair key
    Key {
        /// Key phrase to store as the default
        key: Option<String>,

        /// Remove the stored default key
        #[arg(long, default_value_t = false)]
        clear: bool,
    },

    /// Show version information
    Version,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct CipherConfig {
    /// Default Playfair key used when no --key is given
    default_key: Option<String>,
    /// Default filler letter for Playfair padding
    filler: Option<char>,
}

impl CipherConfig {
    fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_yaml::from_str(&content).context("Failed to parse config")
        } else {
            Ok(Self::default())
        }
    }

    fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("classic-ciphers").join("config.yaml"))
    }
}

/// Resolve the Playfair key: explicit argument first, then the configured
/// default key.
fn resolve_key(key: Option<String>, config: &CipherConfig) -> Result<String> {
    key.or_else(|| config.default_key.clone()).context(
        "No key given - pass --key or store a default with the `key` command",
    )
}

fn handle_encrypt(
    text: String,
    key: Option<String>,
    shift: Option<i32>,
    filler: Option<char>,
) -> Result<()> {
    if key.is_some() && shift.is_some() {
        anyhow::bail!("--key and --shift are mutually exclusive; pick one cipher");
    }

    if let Some(shift) = shift {
        println!("{}", caesar::encrypt(&text, shift));
        return Ok(());
    }

    let config = CipherConfig::load()?;
    let key = resolve_key(key, &config)?;
    let filler = filler
        .or(config.filler)
        .unwrap_or(playfair::DEFAULT_FILLER);

    let cipher = playfair::encrypt_with_filler(&text, &key, filler)?;
    println!("{}", cipher);
    Ok(())
}

fn handle_decrypt(text: String, key: Option<String>, shift: Option<i32>) -> Result<()> {
    if key.is_some() && shift.is_some() {
        anyhow::bail!("--key and --shift are mutually exclusive; pick one cipher");
    }

    if let Some(shift) = shift {
        println!("{}", caesar::decrypt(&text, shift));
        return Ok(());
    }

    let config = CipherConfig::load()?;
    let key = resolve_key(key, &config)?;

    let plain = playfair::decrypt(&text, &key)?;
    println!("{}", plain);
    Ok(())
}

fn handle_square(key: Option<String>) -> Result<()> {
    let config = CipherConfig::load()?;
    let key = resolve_key(key, &config)?;
    println!("{}", KeySquare::new(&key));
    Ok(())
}

fn handle_keygen() -> Result<()> {
    let square = KeySquare::random();
    println!("Key: {}", square.key_string());
    println!();
    println!("{}", square);
    Ok(())
}

fn handle_key(key: Option<String>, clear: bool) -> Result<()> {
    let mut config = CipherConfig::load()?;

    if clear {
        if config.default_key.take().is_some() {
            config.save()?;
            println!("Default key cleared.");
        } else {
            println!("No default key was set.");
        }
        return Ok(());
    }

    match key {
        Some(key) => {
            config.default_key = Some(key.clone());
            config.save()?;
            println!("Default key set: {}", key);
        }
        None => match &config.default_key {
            Some(key) => println!("Default key: {}", key),
            None => println!("No default key set."),
        },
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt {
            text,
            key,
            shift,
            filler,
        } => handle_encrypt(text, key, shift, filler),
        Commands::Decrypt { text, key, shift } => handle_decrypt(text, key, shift),
        Commands::Square { key } => handle_square(key),
        Commands::Keygen => handle_keygen(),
        Commands::Key { key, clear } => handle_key(key, clear),
        Commands::Version => {
            println!("classic-ciphers {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_encrypt_with_key() {
        let cli = Cli::parse_from(["cc", "encrypt", "hello", "--key", "playfair example"]);
        match cli.command {
            Commands::Encrypt {
                text, key, shift, ..
            } => {
                assert_eq!(text, "hello");
                assert_eq!(key, Some("playfair example".to_string()));
                assert_eq!(shift, None);
            }
            _ => panic!("Expected Encrypt command"),
        }
    }

    #[test]
    fn test_cli_parses_encrypt_with_shift() {
        let cli = Cli::parse_from(["cc", "encrypt", "hello", "--shift", "-3"]);
        match cli.command {
            Commands::Encrypt { shift, key, .. } => {
                assert_eq!(shift, Some(-3));
                assert_eq!(key, None);
            }
            _ => panic!("Expected Encrypt command"),
        }
    }

    #[test]
    fn test_cli_parses_encrypt_with_filler() {
        let cli = Cli::parse_from(["cc", "encrypt", "aaa", "-k", "key", "--filler", "q"]);
        match cli.command {
            Commands::Encrypt { filler, .. } => assert_eq!(filler, Some('q')),
            _ => panic!("Expected Encrypt command"),
        }
    }

    #[test]
    fn test_cli_parses_decrypt() {
        let cli = Cli::parse_from(["cc", "decrypt", "BMOD", "-k", "key"]);
        match cli.command {
            Commands::Decrypt { text, key, shift } => {
                assert_eq!(text, "BMOD");
                assert_eq!(key, Some("key".to_string()));
                assert_eq!(shift, None);
            }
            _ => panic!("Expected Decrypt command"),
        }
    }

    #[test]
    fn test_cli_parses_square() {
        let cli = Cli::parse_from(["cc", "square", "monarchy"]);
        match cli.command {
            Commands::Square { key } => assert_eq!(key, Some("monarchy".to_string())),
            _ => panic!("Expected Square command"),
        }
    }

    #[test]
    fn test_cli_parses_key_clear() {
        let cli = Cli::parse_from(["cc", "key", "--clear"]);
        match cli.command {
            Commands::Key { key, clear } => {
                assert_eq!(key, None);
                assert!(clear);
            }
            _ => panic!("Expected Key command"),
        }
    }

    #[test]
    fn test_encrypt_rejects_both_ciphers() {
        let err = handle_encrypt("hi".into(), Some("key".into()), Some(3), None).unwrap_err();
        assert!(err.to_string().contains("mutually exclusive"));
    }

    #[test]
    fn test_resolve_key_prefers_explicit_argument() {
        let config = CipherConfig {
            default_key: Some("stored".into()),
            filler: None,
        };
        let key = resolve_key(Some("explicit".into()), &config).unwrap();
        assert_eq!(key, "explicit");
        assert_eq!(resolve_key(None, &config).unwrap(), "stored");
    }

    #[test]
    fn test_resolve_key_errors_without_any_key() {
        let config = CipherConfig::default();
        assert!(resolve_key(None, &config).is_err());
    }
}

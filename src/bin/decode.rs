//! Standalone Playfair decoder binary
//!
//! Minimal binary that decrypts one ciphertext argument to stdout.
//! Designed for scripting pipelines where the full CLI is overkill.
//!
//! Usage:
//!   decode <ciphertext> [key]
//!
//! Key lookup:
//!   1. KEY argument (if given)
//!   2. $PLAYFAIR_KEY (if set)
//!   3. default_key from ~/.config/classic-ciphers/config.yaml

use std::env;
use std::fs;
use std::process;

/// Config structure (subset of the CLI's config for minimal deps)
#[derive(serde::Deserialize)]
struct CipherConfig {
    default_key: Option<String>,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: decode <ciphertext> [key]");
        process::exit(1);
    }

    let ciphertext = &args[1];
    let key = resolve_key(args.get(2))?;

    let plain = classic_ciphers::playfair::decrypt(ciphertext, &key)?;
    println!("{}", plain);

    Ok(())
}

/// Resolve the Playfair key
/// Priority: argv > $PLAYFAIR_KEY > config file default_key
fn resolve_key(arg: Option<&String>) -> Result<String, String> {
    if let Some(key) = arg {
        return Ok(key.clone());
    }

    if let Ok(key) = env::var("PLAYFAIR_KEY") {
        return Ok(key);
    }

    let config_dir = dirs::config_dir().ok_or("Could not determine config directory")?;
    let config_path = config_dir.join("classic-ciphers").join("config.yaml");

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config {:?}: {}", config_path, e))?;
        let config: CipherConfig = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        if let Some(key) = config.default_key {
            return Ok(key);
        }
    }

    Err(format!(
        "No key given. Pass a KEY argument, set PLAYFAIR_KEY, \
         or store a default key at {:?}.",
        config_path
    ))
}

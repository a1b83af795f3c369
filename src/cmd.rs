//! Module containing subcommands.

pub mod generate;
pub mod public_key;
pub mod ski;

use anyhow::{Context as _, Result};
use clap::Args;
use eckey::EcdsaKey;
use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
};

/// Shared key input options.
#[derive(Debug, Args)]
struct KeyOptions {
    /// Path to the EC key material in JSON format. Use `-` for standard in.
    #[clap(name = "KEY", default_value = "-")]
    key: PathBuf,
}

impl KeyOptions {
    /// Reads and validates the key material.
    fn key(&self) -> Result<EcdsaKey> {
        let input = read_input(&self.key)?;
        let material = serde_json::from_slice::<serde_json::Value>(&input)
            .context("key material is not valid JSON")?;
        Ok(EcdsaKey::new(Some(material))?)
    }
}

/// Reads the input from the specified path, or standard in for `-`.
fn read_input(path: &Path) -> Result<Vec<u8>> {
    if path == Path::new("-") {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))
    }
}

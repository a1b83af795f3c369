//! Module implementing the `public-key` subcommand for displaying the PEM
//! encoded public key for EC key material.

use crate::cmd::KeyOptions;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write as _};

#[derive(Debug, Parser)]
pub struct Options {
    #[clap(flatten)]
    key: KeyOptions,
}

pub fn run(options: Options) -> Result<()> {
    let bytes = options.key.key()?.to_bytes()?;
    io::stdout().write_all(&bytes)?;
    Ok(())
}

//! Module implementing the `ski` subcommand for displaying the subject key
//! identifier for EC key material.

use crate::cmd::KeyOptions;
use anyhow::Result;
use clap::Parser;

#[derive(Debug, Parser)]
pub struct Options {
    #[clap(flatten)]
    key: KeyOptions,
}

pub fn run(options: Options) -> Result<()> {
    println!("{}", options.key.key()?.ski()?);
    Ok(())
}

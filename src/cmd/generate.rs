//! Module implementing the `generate` subcommand for creating a new EC key
//! pair.

use anyhow::Result;
use clap::Parser;
use eckey::{keyutil, Curve};

#[derive(Debug, Parser)]
pub struct Options {
    /// The curve to generate the key pair on.
    #[clap(short, long, env = "ECKEY_CURVE", default_value_t)]
    curve: Curve,

    /// Only output the public key object.
    #[clap(long)]
    public: bool,
}

pub fn run(options: Options) -> Result<()> {
    let pair = keyutil::generate_keypair(options.curve);
    let material = if options.public {
        &pair.public
    } else {
        &pair.private
    };
    println!("{}", serde_json::to_string_pretty(material)?);
    Ok(())
}

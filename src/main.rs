mod cmd;

use crate::cmd::*;
use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "eckey", about = "Elliptic curve key utility", version)]
enum Options {
    /// Generate a new EC key pair.
    Generate(generate::Options),
    /// Print the PEM encoded public key for EC key material.
    PublicKey(public_key::Options),
    /// Print the subject key identifier for EC key material.
    Ski(ski::Options),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = match Options::parse() {
        Options::Generate(options) => generate::run(options),
        Options::PublicKey(options) => public_key::run(options),
        Options::Ski(options) => ski::run(options),
    } {
        if cfg!(debug_assertions) {
            eprintln!("ERROR: {:?}", err);
        } else {
            eprintln!("ERROR: {}", err);
        }
        process::exit(-1);
    }
}

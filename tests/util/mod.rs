#![allow(dead_code)]

use std::{
    io::Write as _,
    process::{Command, Stdio},
    str, thread,
};

/// Public key material for the `secp256r1` generator point, which has the
/// private scalar 1.
pub const GENERATOR_PUBLIC_KEY: &str = r#"{
    "type": "EC",
    "curveName": "secp256r1",
    "prvKeyHex": null,
    "pubKeyHex": "046b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5"
}"#;

/// Utility type for building an `eckey` command for integration tests.
pub struct Eckey {
    command: Command,
    stdin: Option<Vec<u8>>,
}

impl Eckey {
    /// Create a new `eckey` command builder.
    pub fn new(subcommand: &str, args: &[&str]) -> Self {
        let mut command = Command::new("cargo");
        command
            .env_remove("ECKEY_CURVE")
            .args(["run", "--quiet", "--", subcommand])
            .args(args);
        Self {
            command,
            stdin: None,
        }
    }

    /// Sets an environment variable for the command.
    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.command.env(key, value);
        self
    }

    /// Sets the standard input to be used for the command.
    pub fn stdin(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.stdin = Some(data.into());
        self
    }

    /// Executes the command and returns the standard output on success and
    /// standard error on failure.
    pub fn execute(mut self) -> Result<String, String> {
        self.command.stdout(Stdio::piped()).stderr(Stdio::piped());
        if self.stdin.is_some() {
            self.command.stdin(Stdio::piped());
        }

        let mut process = self.command.spawn().unwrap();

        let input = self.stdin.map(|data| {
            let mut stdin = process.stdin.take().unwrap();
            thread::spawn(move || {
                stdin.write_all(&data).unwrap();
            })
        });

        let output = process.wait_with_output().unwrap();
        if let Some(input) = input {
            input.join().unwrap();
        }

        if output.status.success() {
            Ok(string_from_utf8(output.stdout))
        } else {
            Err(string_from_utf8(output.stderr))
        }
    }

    /// Builds and executes an `eckey` command.
    pub fn run(subcommand: &str, args: &[&str]) -> String {
        Eckey::new(subcommand, args).execute().unwrap()
    }
}

fn string_from_utf8(bytes: Vec<u8>) -> String {
    str::from_utf8(&bytes).unwrap().trim().to_string()
}

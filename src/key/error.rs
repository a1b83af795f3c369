//! Key errors.

use thiserror::Error;

/// An error constructing or encoding an EC key.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum KeyError {
    #[error(
        "the key parameter is required by this key class implementation, \
         whether this instance is for the public key or private key"
    )]
    MissingKey,

    #[error(
        "this key implementation only supports EC key material, \
         it must have a \"type\" property of value \"EC\""
    )]
    UnsupportedKeyType,

    #[error("malformed EC key material: missing {0} property")]
    MalformedKey(&'static str),

    #[error("unsupported curve '{0}'")]
    UnsupportedCurve(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("key encoding failed: {0}")]
    Encoding(String),
}

//! Module implementing EC key pair generation in the shape produced by key
//! utilities: a private key object and a matching public key object.

use crate::{
    curve::Curve,
    key::{KeyError, RawKeyMaterial},
};
use rand_core::OsRng;

/// A private key object and its public counterpart.
#[derive(Clone, Debug)]
pub struct KeyPair {
    pub private: RawKeyMaterial,
    pub public: RawKeyMaterial,
}

impl KeyPair {
    fn new(curve: Curve, scalar: &[u8], point: &[u8]) -> Self {
        let public_key_hex = hex::encode(point);
        Self {
            private: RawKeyMaterial::private(
                curve.name(),
                hex::encode(scalar),
                public_key_hex.clone(),
            ),
            public: RawKeyMaterial::public(Some(curve.name()), public_key_hex),
        }
    }
}

/// Generates a random key pair on the specified curve using the operating
/// system's secure random number generator.
pub fn generate_keypair(curve: Curve) -> KeyPair {
    let (scalar, point) = curve.generate(&mut OsRng);
    tracing::debug!(%curve, "generated key pair");
    KeyPair::new(curve, &scalar, &point)
}

/// Creates the key pair for a known hex-encoded private scalar.
pub fn keypair_from_private_hex(curve: Curve, private_key_hex: &str) -> Result<KeyPair, KeyError> {
    let private_key_hex = private_key_hex
        .strip_prefix("0x")
        .unwrap_or(private_key_hex);
    let scalar = hex::decode(private_key_hex)
        .map_err(|err| KeyError::InvalidPrivateKey(err.to_string()))?;
    let point = curve.public_point(&scalar)?;
    Ok(KeyPair::new(curve, &scalar, &point))
}

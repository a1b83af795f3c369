//! Module implementing the supported named curves and their key encodings.

use crate::key::KeyError;
use p256::elliptic_curve::{
    pkcs8::{AssociatedOid, EncodePrivateKey as _, EncodePublicKey as _, LineEnding},
    rand_core::CryptoRngCore,
    sec1::{FromEncodedPoint, ModulusSize, ToEncodedPoint},
    zeroize::Zeroizing,
    AffinePoint, CurveArithmetic, FieldBytesSize, PublicKey, SecretKey,
};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A named elliptic curve.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Curve {
    /// NIST P-256, also known as `prime256v1`.
    Secp256r1,
    /// NIST P-384.
    Secp384r1,
    /// The Koblitz curve used by Bitcoin and Ethereum.
    Secp256k1,
}

impl Curve {
    /// Returns the canonical SEC 2 name of the curve.
    pub fn name(self) -> &'static str {
        match self {
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp256k1 => "secp256k1",
        }
    }

    /// Returns the size of a field element in bytes.
    pub fn field_size(self) -> usize {
        match self {
            Self::Secp256r1 | Self::Secp256k1 => 32,
            Self::Secp384r1 => 48,
        }
    }

    /// Guesses the curve of an SEC1 encoded point from its length.
    ///
    /// The NIST curves are assumed, as `secp256r1` and `secp256k1` points
    /// cannot be told apart by length.
    pub fn from_point_len(len: usize) -> Option<Self> {
        match len {
            33 | 65 => Some(Self::Secp256r1),
            49 | 97 => Some(Self::Secp384r1),
            _ => None,
        }
    }

    /// Returns the uncompressed SEC1 encoding of a point.
    pub fn uncompressed_point(self, point: &[u8]) -> Result<Vec<u8>, KeyError> {
        match self {
            Self::Secp256r1 => uncompressed_point::<p256::NistP256>(point),
            Self::Secp384r1 => uncompressed_point::<p384::NistP384>(point),
            Self::Secp256k1 => uncompressed_point::<k256::Secp256k1>(point),
        }
    }

    /// Encodes a point as a DER `SubjectPublicKeyInfo` document.
    pub fn public_key_der(self, point: &[u8]) -> Result<Vec<u8>, KeyError> {
        match self {
            Self::Secp256r1 => public_key_der::<p256::NistP256>(point),
            Self::Secp384r1 => public_key_der::<p384::NistP384>(point),
            Self::Secp256k1 => public_key_der::<k256::Secp256k1>(point),
        }
    }

    /// Encodes a point as a PEM `PUBLIC KEY` document with CRLF line endings.
    pub fn public_key_pem(self, point: &[u8]) -> Result<String, KeyError> {
        match self {
            Self::Secp256r1 => public_key_pem::<p256::NistP256>(point),
            Self::Secp384r1 => public_key_pem::<p384::NistP384>(point),
            Self::Secp256k1 => public_key_pem::<k256::Secp256k1>(point),
        }
    }

    /// Encodes a private scalar as a PKCS#8 PEM `PRIVATE KEY` document with
    /// CRLF line endings.
    pub fn private_key_pem(self, scalar: &[u8]) -> Result<Zeroizing<String>, KeyError> {
        match self {
            Self::Secp256r1 => private_key_pem::<p256::NistP256>(scalar),
            Self::Secp384r1 => private_key_pem::<p384::NistP384>(scalar),
            Self::Secp256k1 => private_key_pem::<k256::Secp256k1>(scalar),
        }
    }

    /// Computes the uncompressed public point for a private scalar.
    pub fn public_point(self, scalar: &[u8]) -> Result<Vec<u8>, KeyError> {
        match self {
            Self::Secp256r1 => public_point::<p256::NistP256>(scalar),
            Self::Secp384r1 => public_point::<p384::NistP384>(scalar),
            Self::Secp256k1 => public_point::<k256::Secp256k1>(scalar),
        }
    }

    /// Generates a random private scalar and its uncompressed public point.
    pub fn generate(self, rng: &mut impl CryptoRngCore) -> (Zeroizing<Vec<u8>>, Vec<u8>) {
        match self {
            Self::Secp256r1 => generate::<p256::NistP256>(rng),
            Self::Secp384r1 => generate::<p384::NistP384>(rng),
            Self::Secp256k1 => generate::<k256::Secp256k1>(rng),
        }
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::Secp256r1
    }
}

impl Display for Curve {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Curve {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secp256r1" | "prime256v1" | "P-256" | "NIST P-256" => Ok(Self::Secp256r1),
            "secp384r1" | "P-384" | "NIST P-384" => Ok(Self::Secp384r1),
            "secp256k1" => Ok(Self::Secp256k1),
            _ => Err(KeyError::UnsupportedCurve(s.to_owned())),
        }
    }
}

fn parse_point<C>(point: &[u8]) -> Result<PublicKey<C>, KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    PublicKey::<C>::from_sec1_bytes(point)
        .map_err(|_| KeyError::InvalidPublicKey("not a point on the curve".to_owned()))
}

fn parse_scalar<C>(scalar: &[u8]) -> Result<SecretKey<C>, KeyError>
where
    C: CurveArithmetic,
{
    SecretKey::<C>::from_slice(scalar)
        .map_err(|_| KeyError::InvalidPrivateKey("not a valid scalar for the curve".to_owned()))
}

fn uncompressed_point<C>(point: &[u8]) -> Result<Vec<u8>, KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let key = parse_point::<C>(point)?;
    Ok(key.to_encoded_point(false).as_bytes().to_vec())
}

fn public_key_der<C>(point: &[u8]) -> Result<Vec<u8>, KeyError>
where
    C: AssociatedOid + CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let document = parse_point::<C>(point)?
        .to_public_key_der()
        .map_err(|err| KeyError::Encoding(err.to_string()))?;
    Ok(document.into_vec())
}

fn public_key_pem<C>(point: &[u8]) -> Result<String, KeyError>
where
    C: AssociatedOid + CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    parse_point::<C>(point)?
        .to_public_key_pem(LineEnding::CRLF)
        .map_err(|err| KeyError::Encoding(err.to_string()))
}

fn private_key_pem<C>(scalar: &[u8]) -> Result<Zeroizing<String>, KeyError>
where
    C: AssociatedOid + CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    parse_scalar::<C>(scalar)?
        .to_pkcs8_pem(LineEnding::CRLF)
        .map_err(|err| KeyError::Encoding(err.to_string()))
}

fn public_point<C>(scalar: &[u8]) -> Result<Vec<u8>, KeyError>
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let key = parse_scalar::<C>(scalar)?;
    Ok(key.public_key().to_encoded_point(false).as_bytes().to_vec())
}

fn generate<C>(rng: &mut impl CryptoRngCore) -> (Zeroizing<Vec<u8>>, Vec<u8>)
where
    C: CurveArithmetic,
    AffinePoint<C>: FromEncodedPoint<C> + ToEncodedPoint<C>,
    FieldBytesSize<C>: ModulusSize,
{
    let key = SecretKey::<C>::random(rng);
    let scalar = Zeroizing::new(key.to_bytes().to_vec());
    let point = key.public_key().to_encoded_point(false).as_bytes().to_vec();
    (scalar, point)
}

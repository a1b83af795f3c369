//! Module implementing the EC key object.

mod error;
mod material;

pub use self::{
    error::KeyError,
    material::{Field, KeyMaterial, RawKeyMaterial, EC},
};
use crate::{curve::Curve, hash};
use p256::elliptic_curve::zeroize::Zeroizing;
use std::{
    fmt::{self, Debug, Formatter},
    sync::Arc,
};

/// An elliptic curve key backed by externally produced key material.
///
/// The key material is validated on construction and shared, never copied;
/// the key itself is immutable.
#[derive(Clone)]
pub struct EcdsaKey {
    material: Arc<dyn KeyMaterial>,
    private: bool,
}

impl EcdsaKey {
    /// Creates a key from EC key material.
    ///
    /// Validation fails, in order, if no material is given, if its type is
    /// not `"EC"`, if it has no `prvKeyHex` property (a `null` value is
    /// accepted for public keys) or if its `pubKeyHex` property is missing or
    /// `null`.
    pub fn new<K>(material: Option<K>) -> Result<Self, KeyError>
    where
        K: KeyMaterial + 'static,
    {
        Self::from_shared(material.map(|material| Arc::new(material) as Arc<dyn KeyMaterial>))
    }

    /// Creates a key from already shared EC key material.
    pub fn from_shared(material: Option<Arc<dyn KeyMaterial>>) -> Result<Self, KeyError> {
        let material = material.ok_or(KeyError::MissingKey)?;
        let private = validate(&*material).map_err(|err| {
            tracing::debug!(%err, "rejected key material");
            err
        })?;

        Ok(Self { material, private })
    }

    /// Returns `true` if the key holds a private scalar.
    pub fn is_private(&self) -> bool {
        self.private
    }

    /// Returns `true` for symmetric keys, which EC keys never are.
    pub fn is_symmetric(&self) -> bool {
        false
    }

    /// Returns the public portion of this key.
    pub fn public_key(&self) -> Self {
        if !self.private {
            return self.clone();
        }

        let material = RawKeyMaterial {
            key_type: Some(EC.to_owned()),
            curve_name: self.material.curve_name().map(str::to_owned),
            private_key_hex: Field::Null,
            public_key_hex: Field::Present(self.public_key_hex().to_owned()),
        };
        Self {
            material: Arc::new(material),
            private: false,
        }
    }

    /// Returns the curve of the key.
    ///
    /// The curve is read from the key material's curve name, falling back to
    /// guessing it from the length of the encoded public point.
    pub fn curve(&self) -> Result<Curve, KeyError> {
        match self.material.curve_name() {
            Some(name) => name.parse(),
            None => {
                let point = self.public_point()?;
                Curve::from_point_len(point.len()).ok_or_else(|| {
                    KeyError::UnsupportedCurve(format!("{}-byte point", point.len()))
                })
            }
        }
    }

    /// Returns the public key as a PEM encoded `SubjectPublicKeyInfo`
    /// document with CRLF line endings.
    ///
    /// Only the public portion is encoded, even for private keys. The output
    /// is 182 bytes long for 256-bit curves and 220 bytes for 384-bit curves.
    pub fn to_bytes(&self) -> Result<Vec<u8>, KeyError> {
        let pem = self.curve()?.public_key_pem(&self.public_point()?)?;
        tracing::trace!(len = pem.len(), "encoded public key");
        Ok(pem.into_bytes())
    }

    /// Returns the public key as a DER encoded `SubjectPublicKeyInfo`.
    pub fn to_der(&self) -> Result<Vec<u8>, KeyError> {
        self.curve()?.public_key_der(&self.public_point()?)
    }

    /// Returns the private key as a PKCS#8 PEM document, or `None` for public
    /// keys.
    pub fn private_key_pem(&self) -> Result<Option<Zeroizing<String>>, KeyError> {
        let Field::Present(private_key_hex) = self.material.private_key_hex() else {
            return Ok(None);
        };

        let scalar = Zeroizing::new(
            hex::decode(private_key_hex)
                .map_err(|err| KeyError::InvalidPrivateKey(err.to_string()))?,
        );
        self.curve()?.private_key_pem(&scalar).map(Some)
    }

    /// Returns the hex-encoded subject key identifier: the SHA-256 hash of
    /// the uncompressed public point.
    pub fn ski(&self) -> Result<String, KeyError> {
        let point = self.curve()?.uncompressed_point(&self.public_point()?)?;
        Ok(hex::encode(hash::sha256(point)))
    }

    fn public_key_hex(&self) -> &str {
        self.material
            .public_key_hex()
            .present()
            .expect("public key presence checked on construction")
    }

    fn public_point(&self) -> Result<Vec<u8>, KeyError> {
        hex::decode(self.public_key_hex())
            .map_err(|err| KeyError::InvalidPublicKey(err.to_string()))
    }
}

impl Debug for EcdsaKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("EcdsaKey")
            .field("curve", &self.material.curve_name())
            .field("private", &self.private)
            .field("public_key", &self.public_key_hex())
            .finish()
    }
}

/// Validates key material, returning whether it holds a private scalar.
fn validate(material: &dyn KeyMaterial) -> Result<bool, KeyError> {
    if material.key_type() != Some(EC) {
        return Err(KeyError::UnsupportedKeyType);
    }

    let private_key_hex = material.private_key_hex();
    if private_key_hex.is_absent() {
        return Err(KeyError::MalformedKey("prvKeyHex"));
    }
    if !material.public_key_hex().is_present() {
        return Err(KeyError::MalformedKey("pubKeyHex"));
    }

    Ok(private_key_hex.is_present())
}

//! Key material as produced by an external key utility.
//!
//! Key utilities represent EC keys as loosely typed objects where a property
//! may be missing entirely, may be present with a `null` value, or may hold a
//! hexadecimal string. The [`KeyMaterial`] trait exposes exactly these
//! properties so that any key source can back an [`EcdsaKey`].
//!
//! [`EcdsaKey`]: super::EcdsaKey

use crate::serialization;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The key type tag for elliptic curve keys.
pub const EC: &str = "EC";

/// A key material property that distinguishes being absent from being `null`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Field<T> {
    /// The property does not exist.
    Absent,
    /// The property exists with a `null` value.
    Null,
    /// The property exists with a value.
    Present(T),
}

impl<T> Field<T> {
    /// Returns `true` if the property does not exist.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the property exists and is not `null`.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Returns the property value, if any.
    pub fn present(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            _ => None,
        }
    }
}

impl Field<String> {
    /// Converts from `&Field<String>` to `Field<&str>`.
    pub fn as_deref(&self) -> Field<&str> {
        match self {
            Self::Absent => Field::Absent,
            Self::Null => Field::Null,
            Self::Present(value) => Field::Present(value.as_str()),
        }
    }
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Present(value),
            None => Self::Null,
        }
    }
}

/// A source of EC key material.
///
/// Implementations must not change the values they report once a key has
/// been constructed from them.
pub trait KeyMaterial: Send + Sync {
    /// The key family tag, `"EC"` for elliptic curve keys.
    fn key_type(&self) -> Option<&str>;

    /// The name of the curve the key belongs to, if known.
    fn curve_name(&self) -> Option<&str> {
        None
    }

    /// The hex-encoded private scalar.
    fn private_key_hex(&self) -> Field<&str>;

    /// The hex-encoded SEC1 public point.
    fn public_key_hex(&self) -> Field<&str>;
}

/// Typed key material record with the property names used by key utilities.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct RawKeyMaterial {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub key_type: Option<String>,
    #[serde(
        rename = "curveName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub curve_name: Option<String>,
    #[serde(
        rename = "prvKeyHex",
        default,
        skip_serializing_if = "Field::is_absent",
        with = "serialization::field"
    )]
    pub private_key_hex: Field<String>,
    #[serde(
        rename = "pubKeyHex",
        default,
        skip_serializing_if = "Field::is_absent",
        with = "serialization::field"
    )]
    pub public_key_hex: Field<String>,
}

impl RawKeyMaterial {
    /// Creates EC key material for a private key.
    pub fn private(curve_name: &str, private_key_hex: String, public_key_hex: String) -> Self {
        Self {
            key_type: Some(EC.to_owned()),
            curve_name: Some(curve_name.to_owned()),
            private_key_hex: Field::Present(private_key_hex),
            public_key_hex: Field::Present(public_key_hex),
        }
    }

    /// Creates EC key material for a public key.
    pub fn public(curve_name: Option<&str>, public_key_hex: String) -> Self {
        Self {
            key_type: Some(EC.to_owned()),
            curve_name: curve_name.map(str::to_owned),
            private_key_hex: Field::Null,
            public_key_hex: Field::Present(public_key_hex),
        }
    }
}

impl KeyMaterial for RawKeyMaterial {
    fn key_type(&self) -> Option<&str> {
        self.key_type.as_deref()
    }

    fn curve_name(&self) -> Option<&str> {
        self.curve_name.as_deref()
    }

    fn private_key_hex(&self) -> Field<&str> {
        self.private_key_hex.as_deref()
    }

    fn public_key_hex(&self) -> Field<&str> {
        self.public_key_hex.as_deref()
    }
}

/// Dynamic key material, for example as parsed from a key utility's JSON
/// output. Values that are not objects have no properties at all.
impl KeyMaterial for Value {
    fn key_type(&self) -> Option<&str> {
        self.get("type").and_then(Value::as_str)
    }

    fn curve_name(&self) -> Option<&str> {
        self.get("curveName").and_then(Value::as_str)
    }

    fn private_key_hex(&self) -> Field<&str> {
        property(self, "prvKeyHex")
    }

    fn public_key_hex(&self) -> Field<&str> {
        property(self, "pubKeyHex")
    }
}

/// Reads a string property. Non-string values can never be hex and are
/// reported as `null`.
fn property<'a>(value: &'a Value, name: &str) -> Field<&'a str> {
    match value.get(name) {
        None => Field::Absent,
        Some(value) => value.as_str().into(),
    }
}

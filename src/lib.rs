//! Elliptic curve key objects.
//!
//! This crate wraps EC key material produced by external key utilities in a
//! small key object that validates the material, distinguishes private from
//! public keys, derives public keys and exports them as PEM encoded
//! `SubjectPublicKeyInfo` documents.

pub mod curve;
pub mod hash;
pub mod key;
pub mod keyutil;
mod serialization;

pub use self::{
    curve::Curve,
    key::{EcdsaKey, Field, KeyError, KeyMaterial, RawKeyMaterial},
};

mod util;

use eckey::{EcdsaKey, RawKeyMaterial};

use crate::util::Eckey;

fn parse_key(output: &str) -> EcdsaKey {
    let material = serde_json::from_str::<RawKeyMaterial>(output).unwrap();
    EcdsaKey::new(Some(material)).unwrap()
}

#[test]
fn generates_private_key() {
    let key = parse_key(&Eckey::run("generate", &[]));
    assert!(key.is_private());
    assert_eq!(key.public_key().to_bytes().unwrap().len(), 182);
}

#[test]
fn generates_public_key_on_curve() {
    let key = parse_key(&Eckey::run("generate", &["--curve", "secp384r1", "--public"]));
    assert!(!key.is_private());
    assert_eq!(key.to_bytes().unwrap().len(), 220);
}

#[test]
fn reads_curve_from_environment() {
    let output = Eckey::new("generate", &[])
        .env("ECKEY_CURVE", "P-384")
        .execute()
        .unwrap();
    assert_eq!(parse_key(&output).to_der().unwrap().len(), 120);
}

#[test]
fn errors_on_unknown_curve() {
    assert!(Eckey::new("generate", &["--curve", "secp521r1"])
        .execute()
        .is_err());
}

mod util;

use crate::util::{Eckey, GENERATOR_PUBLIC_KEY};

#[test]
fn prints_public_key_pem() {
    let pem = Eckey::new("public-key", &["-"])
        .stdin(GENERATOR_PUBLIC_KEY)
        .execute()
        .unwrap();
    assert_eq!(
        pem,
        "-----BEGIN PUBLIC KEY-----\r\n\
         MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEaxfR8uEsQkf4vOblY6RA8ncDfYEt\r\n\
         6zOg9KE5RdiYwpZP40Li/hp/m47n60p8D54WK84zV2sxXs7LtkBoN79R9Q==\r\n\
         -----END PUBLIC KEY-----",
    );
}

#[test]
fn prints_subject_key_identifier() {
    let ski = Eckey::new("ski", &[])
        .stdin(GENERATOR_PUBLIC_KEY)
        .execute()
        .unwrap();
    assert_eq!(
        ski,
        "698bea63dc44a344663ff1429aea10842df27b6b991ef25866b2c6c02cdcc5be",
    );
}

#[test]
fn errors_on_malformed_key_material() {
    let err = Eckey::new("public-key", &[])
        .stdin(r#"{ "type": "EC", "pubKeyHex": "04" }"#)
        .execute()
        .unwrap_err();
    assert!(err.contains("missing prvKeyHex property"));

    assert!(Eckey::new("public-key", &[])
        .stdin(r#"{ "type": "RSA" }"#)
        .execute()
        .is_err());
}

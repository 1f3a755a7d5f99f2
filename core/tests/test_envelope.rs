#[cfg(test)]
mod tests {
    use base64::engine::general_purpose::URL_SAFE;
    use base64::Engine;
    use proptest::prelude::*;
    use relay_core::constants::ENCRYPTION_MARKER;
    use relay_core::crypto::envelope::{decrypt, decrypt_or_passthrough, encrypt, Envelope};
    use relay_core::crypto::CryptoError;
    use relay_core::types::RelayError;

    #[test]
    fn split_uses_first_marker_only() {
        let text = format!("KEY{m}part1{m}part2", m = ENCRYPTION_MARKER);
        let env = Envelope::split(&text).unwrap();
        assert_eq!(env.key, "KEY");
        assert_eq!(env.ciphertext, format!("part1{}part2", ENCRYPTION_MARKER));
    }

    #[test]
    fn split_without_marker_is_none() {
        assert!(Envelope::split("just text").is_none());
        assert_eq!(decrypt("just text").unwrap(), None);
    }

    #[test]
    fn wire_shape_is_key_marker_ciphertext() {
        let wire = encrypt("payload", true).unwrap();
        let env = Envelope::split(&wire).unwrap();
        assert_eq!(URL_SAFE.decode(env.key).unwrap().len(), 32);
        assert_eq!(wire.matches(ENCRYPTION_MARKER).count(), 1);
    }

    #[test]
    fn every_call_uses_a_fresh_key() {
        let a = encrypt("same", true).unwrap();
        let b = encrypt("same", true).unwrap();
        assert_ne!(Envelope::split(&a).unwrap().key, Envelope::split(&b).unwrap().key);
    }

    #[test]
    fn wrong_key_fails_closed() {
        let a = encrypt("secret", true).unwrap();
        let b = encrypt("other", true).unwrap();
        let forged = Envelope {
            key: Envelope::split(&b).unwrap().key,
            ciphertext: Envelope::split(&a).unwrap().ciphertext,
        }
        .compose();
        match decrypt(&forged).unwrap_err() {
            RelayError::DecryptionFailed(CryptoError::TagMismatch) => {}
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn tampered_ciphertext_fails_closed() {
        let wire = encrypt("secret", true).unwrap();
        let env = Envelope::split(&wire).unwrap();
        let mut token = URL_SAFE.decode(env.ciphertext).unwrap();
        let last = token.len() - 1;
        token[last] ^= 0x01;
        let tampered_ct = URL_SAFE.encode(&token);
        let tampered = Envelope { key: env.key, ciphertext: &tampered_ct }.compose();
        assert!(matches!(decrypt(&tampered), Err(RelayError::DecryptionFailed(_))));
    }

    #[test]
    fn marker_inside_ciphertext_is_not_a_split_point() {
        let wire = encrypt("x", true).unwrap();
        let doubled = format!("{}{}junk", wire, ENCRYPTION_MARKER);
        // The trailing marker lands in the ciphertext half, which then fails to decode.
        assert!(matches!(decrypt(&doubled), Err(RelayError::DecryptionFailed(_))));
    }

    #[test]
    fn disabled_is_identity() {
        assert_eq!(encrypt("as is", false).unwrap(), "as is");
    }

    proptest! {
        #[test]
        fn prop_encrypt_roundtrip(p in any::<String>()) {
            let wire = encrypt(&p, true).unwrap();
            prop_assert_eq!(decrypt_or_passthrough(&wire).unwrap(), p);
        }

        #[test]
        fn prop_passthrough_roundtrip(p in any::<String>()) {
            prop_assume!(!p.contains(ENCRYPTION_MARKER));
            let wire = encrypt(&p, false).unwrap();
            prop_assert_eq!(decrypt_or_passthrough(&wire).unwrap(), p);
        }
    }
}

// Round-trip suite: every record, every format, through the receiver's probe chain.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use relay_core::classify::{classify, PayloadKind};
    use relay_core::codec::{encode, Format};
    use relay_core::exchange::{compose, recover};
    use relay_core::input::SendInput;
    use relay_core::record::{Record, RecoveredValue, Scalar};

    fn scalar() -> impl Strategy<Value = Scalar> {
        prop_oneof![
            any::<i64>().prop_map(Scalar::Int),
            (-1.0e9..1.0e9f64).prop_map(Scalar::Float),
            any::<bool>().prop_map(Scalar::Bool),
            any::<String>().prop_filter("no NUL", |s| !s.contains('\0')).prop_map(Scalar::Str),
            prop::sample::select(vec!["a\nb", "\r\n", "\ttab", "it's", "back\\slash", "<&>\"", "héllo ✓", "\u{1}\u{7f}"])
                .prop_map(|s| Scalar::Str(s.to_string())),
            Just(Scalar::None),
        ]
    }

    // Element-name-safe keys (no leading `x` so nothing starts with "xml").
    fn record() -> impl Strategy<Value = Record> {
        prop::collection::btree_map("[a-wA-W_][A-Za-z0-9_]{0,8}", scalar(), 0..6)
            .prop_map(|m| Record::from_pairs(m).unwrap())
    }

    fn recovered_canonical(text: &str) -> Vec<(String, String)> {
        let c = classify(text).unwrap();
        match c.value {
            RecoveredValue::Mapping(r) => r.canonical(),
            RecoveredValue::Text(t) => panic!("expected a mapping, got text via {}: {}", c.kind, t),
        }
    }

    proptest! {
        #[test]
        fn prop_every_format_roundtrips(r in record()) {
            for format in Format::ALL {
                let wire = encode(&r, format).unwrap();
                prop_assert_eq!(recovered_canonical(&wire), r.canonical(), "format {}", format);
            }
        }

        #[test]
        fn prop_binary_roundtrip_is_exact(r in record()) {
            let wire = encode(&r, Format::Binary).unwrap();
            let c = classify(&wire).unwrap();
            prop_assert_eq!(c.kind, PayloadKind::OpaqueBinary);
            prop_assert_eq!(c.value, RecoveredValue::Mapping(r));
        }

        #[test]
        fn prop_encrypted_record_recovers_payload(r in record()) {
            let input = SendInput::Record(r.clone());
            let wire = compose(&input, Format::Json, true).unwrap();
            let c = recover(wire.as_bytes()).unwrap();
            prop_assert_eq!(c.kind, PayloadKind::Decrypted);
            prop_assert_eq!(c.value, RecoveredValue::Text(encode(&r, Format::Json).unwrap()));
        }
    }

    #[test]
    fn non_empty_records_keep_their_probe() {
        let r = Record::from_pairs([("Test", 1i64), ("Data", 2), ("Sample", 3)]).unwrap();
        let expected = [
            (Format::Literal, PayloadKind::LiteralMapping),
            (Format::Binary, PayloadKind::OpaqueBinary),
            (Format::Json, PayloadKind::Json),
            (Format::Xml, PayloadKind::Markup),
        ];
        for (format, kind) in expected {
            let wire = encode(&r, format).unwrap();
            assert_eq!(classify(&wire).unwrap().kind, kind, "format {format}");
        }
    }
}

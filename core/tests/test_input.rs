#[cfg(test)]
mod tests {
    use std::fs;

    use relay_core::classify::PayloadKind;
    use relay_core::codec::Format;
    use relay_core::exchange::{compose, recover};
    use relay_core::input::{read_text_file, SendInput};
    use relay_core::record::{Record, RecoveredValue};
    use relay_core::types::RelayError;

    #[test]
    fn mapping_input_becomes_record() {
        let input = SendInput::resolve("{'Test': 1, 'Data': 2, 'Sample': 3}", 4096).unwrap();
        let expected = Record::from_pairs([("Test", 1i64), ("Data", 2), ("Sample", 3)]).unwrap();
        assert_eq!(input, SendInput::Record(expected));
    }

    #[test]
    fn other_input_is_malformed() {
        let err = SendInput::resolve("UoL_logo.jpg", 4096).unwrap_err();
        assert!(matches!(err, RelayError::MalformedInput(_)));
    }

    #[test]
    fn text_file_lines_are_joined() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test2.txt");
        fs::write(&path, "Hello\nUniversity\r\nof Liverpool!\n").unwrap();

        let input = SendInput::resolve(path.to_str().unwrap(), 4096).unwrap();
        assert_eq!(input, SendInput::Text("HelloUniversityof Liverpool!".into()));
    }

    #[test]
    fn empty_missing_and_oversized_files_are_rejected() {
        let dir = tempfile::tempdir().unwrap();

        let empty = dir.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        let missing = dir.path().join("missing.txt");
        let big = dir.path().join("big.txt");
        fs::write(&big, "x".repeat(200)).unwrap();

        for (path, buffer) in [(&empty, 4096), (&missing, 4096), (&big, 100)] {
            let err = read_text_file(path, buffer).unwrap_err();
            assert!(matches!(err, RelayError::EmptyOrMissingInputFile { .. }), "{}", path.display());
        }
    }

    #[test]
    fn text_exchange_with_and_without_encryption() {
        let input = SendInput::Text("Hello University of Liverpool!".into());

        let plain = recover(compose(&input, Format::Json, false).unwrap().as_bytes()).unwrap();
        assert_eq!(plain.kind, PayloadKind::PlainText);

        let sealed = recover(compose(&input, Format::Json, true).unwrap().as_bytes()).unwrap();
        assert_eq!(sealed.kind, PayloadKind::Decrypted);
        assert_eq!(sealed.value, RecoveredValue::Text("Hello University of Liverpool!".into()));
    }

    #[test]
    fn empty_and_non_utf8_buffers() {
        assert!(matches!(recover(b""), Err(RelayError::EmptyMessage)));
        assert!(matches!(recover(&[0xff, 0xfe]), Err(RelayError::MalformedInput(_))));
    }
}

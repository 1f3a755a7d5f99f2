// Loopback exchanges: one sender, one receiver, one message each.

#[cfg(test)]
mod tests {
    use relay_cli::config::{ClientConfig, RelayConfig, ServerConfig, Setting};
    use relay_cli::{receiver, sender, transport};
    use relay_core::classify::PayloadKind;
    use relay_core::record::{Record, RecoveredValue};
    use relay_core::types::RelayError;

    fn config(port: u16, input: &str, format: &str, encryption: bool, file: Option<String>) -> RelayConfig {
        RelayConfig {
            setting: Setting { host: "127.0.0.1".into(), port, buffer: 4096 },
            client: Some(ClientConfig { input: input.into(), encryption, format: format.into() }),
            server: Some(ServerConfig {
                print: false,
                save: file.is_some(),
                file: file.unwrap_or_else(|| "received.txt".into()),
            }),
        }
    }

    async fn exchange(input: &str, format: &str, encryption: bool, file: Option<String>)
        -> relay_core::types::Result<relay_core::classify::Classified>
    {
        let listener = transport::listen("127.0.0.1", 0).await?;
        let port = listener.local_addr().unwrap().port();
        let cfg = config(port, input, format, encryption, file);

        let server_cfg = cfg.clone();
        let server = tokio::spawn(async move { receiver::serve_once(listener, &server_cfg).await });
        sender::run(&cfg).await?;
        server.await.unwrap()
    }

    fn sample() -> Record {
        Record::from_pairs([("Test", 1i64), ("Data", 2), ("Sample", 3)]).unwrap()
    }

    #[tokio::test]
    async fn json_record_over_loopback() {
        let c = exchange("{'Test': 1, 'Data': 2, 'Sample': 3}", "json", false, None).await.unwrap();
        assert_eq!(c.kind, PayloadKind::Json);
        assert_eq!(c.value, RecoveredValue::Mapping(sample()));
    }

    #[tokio::test]
    async fn xml_record_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("received.xml");
        let c = exchange(
            "{'Test': 1, 'Data': 2, 'Sample': 3}",
            "xml",
            false,
            Some(out.to_string_lossy().into_owned()),
        )
        .await
        .unwrap();

        assert_eq!(c.kind, PayloadKind::Markup);
        assert_eq!(
            std::fs::read_to_string(&out).unwrap(),
            "<root><Test>1</Test><Data>2</Data><Sample>3</Sample></root>"
        );
    }

    #[tokio::test]
    async fn encrypted_text_file_over_loopback() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("test2.txt");
        std::fs::write(&input, "Hello University of Liverpool!\n").unwrap();

        let c = exchange(input.to_str().unwrap(), "xml", true, None).await.unwrap();
        assert_eq!(c.kind, PayloadKind::Decrypted);
        assert_eq!(c.value.as_text(), Some("Hello University of Liverpool!"));
    }

    #[tokio::test]
    async fn connect_to_closed_port_fails() {
        let listener = transport::listen("127.0.0.1", 0).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let cfg = config(port, "{'a': 1}", "json", false, None);
        assert!(matches!(sender::run(&cfg).await, Err(RelayError::ConnectFailed { .. })));
    }

    #[tokio::test]
    async fn receiver_rejects_message_longer_than_buffer() {
        use tokio::io::AsyncWriteExt;

        let listener = transport::listen("127.0.0.1", 0).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let mut cfg = config(port, "{'a': 1}", "json", false, None);
        cfg.setting.buffer = 8;

        let server_cfg = cfg.clone();
        let server = tokio::spawn(async move { receiver::serve_once(listener, &server_cfg).await });

        let mut peer = tokio::net::TcpStream::connect(("127.0.0.1", port)).await.unwrap();
        peer.write_all(b"Hello University of Liverpool!").await.unwrap();
        // The receiver may already have hung up on the surplus bytes.
        let _ = peer.shutdown().await;

        let err = server.await.unwrap().unwrap_err();
        assert!(matches!(err, RelayError::MessageTooLarge { len: 9, limit: 8 }), "{err}");
    }

    #[tokio::test]
    async fn message_of_exactly_buffer_size_is_accepted() {
        use tokio::io::AsyncWriteExt;

        let listener = transport::listen("127.0.0.1", 0).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let mut stream = transport::accept(&listener).await?;
            transport::receive(&mut stream, 5).await
        });

        let mut peer = tokio::net::TcpStream::connect(("127.0.0.1", port)).await.unwrap();
        peer.write_all(b"Hello").await.unwrap();
        peer.shutdown().await.unwrap();

        assert_eq!(server.await.unwrap().unwrap(), b"Hello".to_vec());
    }

    #[tokio::test]
    async fn oversized_message_is_refused() {
        let listener = transport::listen("127.0.0.1", 0).await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let mut stream = transport::connect("127.0.0.1", port).await.unwrap();
        let err = transport::send(&"x".repeat(10), &mut stream, 4).await.unwrap_err();
        assert!(matches!(err, RelayError::MessageTooLarge { len: 10, limit: 4 }));
    }
}

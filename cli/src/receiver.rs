// ## 📂 File: `cli/src/receiver.rs`

use std::path::Path;

use relay_core::classify::Classified;
use relay_core::exchange::recover;
use relay_core::persist::{persist, OutputFormat};
use relay_core::types::Result;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::transport;

/// Bind, accept one sender, classify its message, then print and/or save it.
pub async fn run(config: &RelayConfig) -> Result<Classified> {
    let server = config.server();
    if server.save {
        // reject a bad output name before anyone connects
        OutputFormat::from_path(Path::new(&server.file))?;
    }
    let listener = transport::listen(&config.setting.host, config.setting.port).await?;
    serve_once(listener, config).await
}

/// One exchange on an already-bound listener. The listener is dropped on return.
pub async fn serve_once(listener: TcpListener, config: &RelayConfig) -> Result<Classified> {
    let server = config.server();

    let mut stream = transport::accept(&listener).await?;
    let data = transport::receive(&mut stream, config.setting.buffer).await?;
    drop(stream);
    drop(listener);

    let classified = recover(&data)?;
    info!(kind = %classified.kind, "received data is {}", classified.kind);

    if server.print {
        println!("The received data:");
        println!("{}", classified.value);
    }
    if server.save {
        if let Err(e) = persist(&classified.value, &server.file) {
            warn!(file = %server.file, error = %e, "output file may be incomplete");
            return Err(e);
        }
    }
    info!("task completed, connection closed");
    Ok(classified)
}

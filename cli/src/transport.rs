// ## 📂 File: `cli/src/transport.rs`

//! One TCP connection, one message.
//!
//! Design notes:
//! - Socket creation, connect/accept, send and receive each map to their own error.
//! - The sender writes the whole message then shuts down its write half; the
//!   receiver reads until EOF. A message longer than the configured buffer
//!   aborts the exchange instead of being cut short.
//! - No timeouts here. A receive blocks until data, EOF or a socket error.

use std::io;
use std::net::SocketAddr;

use relay_core::types::{RelayError, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpListener, TcpSocket, TcpStream};
use tracing::{debug, info};

/// Backlog for the receiver's listening socket.
pub const LISTEN_BACKLOG: u32 = 5;

async fn resolve(host: &str, port: u16) -> Result<SocketAddr> {
    let addr = format!("{}:{}", host, port);
    let mut addrs = lookup_host((host, port))
        .await
        .map_err(|source| RelayError::ConnectFailed { addr: addr.clone(), source })?;
    addrs.next().ok_or_else(|| RelayError::ConnectFailed {
        addr,
        source: io::Error::new(io::ErrorKind::NotFound, "host resolved to no address"),
    })
}

fn new_socket(addr: &SocketAddr) -> Result<TcpSocket> {
    let socket = if addr.is_ipv4() { TcpSocket::new_v4() } else { TcpSocket::new_v6() };
    socket.map_err(RelayError::SocketCreateFailed)
}

/// Sender: create a socket and connect to the receiver.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream> {
    let addr = resolve(host, port).await?;
    let socket = new_socket(&addr)?;
    debug!(%addr, "client socket created");
    let stream = socket
        .connect(addr)
        .await
        .map_err(|source| RelayError::ConnectFailed { addr: addr.to_string(), source })?;
    info!(%addr, "connected to receiver");
    Ok(stream)
}

/// Send `text` as one message, then close our write half.
pub async fn send(text: &str, stream: &mut TcpStream, buffer: usize) -> Result<()> {
    if text.len() > buffer {
        return Err(RelayError::MessageTooLarge { len: text.len(), limit: buffer });
    }
    stream.write_all(text.as_bytes()).await.map_err(RelayError::SendFailed)?;
    stream.shutdown().await.map_err(RelayError::SendFailed)?;
    info!(bytes = text.len(), "data sent to receiver");
    Ok(())
}

/// Receiver: bind and listen on `host:port`.
pub async fn listen(host: &str, port: u16) -> Result<TcpListener> {
    let addr = resolve(host, port).await.map_err(|e| match e {
        RelayError::ConnectFailed { source, .. } => RelayError::SocketCreateFailed(source),
        other => other,
    })?;
    let socket = new_socket(&addr)?;
    socket.set_reuseaddr(true).map_err(RelayError::SocketCreateFailed)?;
    socket.bind(addr).map_err(RelayError::SocketCreateFailed)?;
    let listener = socket.listen(LISTEN_BACKLOG).map_err(RelayError::SocketCreateFailed)?;
    info!(addr = %listener.local_addr().unwrap_or(addr), "waiting for connection");
    Ok(listener)
}

pub async fn accept(listener: &TcpListener) -> Result<TcpStream> {
    let (stream, peer) = listener.accept().await.map_err(RelayError::AcceptFailed)?;
    info!(%peer, "connected to sender");
    Ok(stream)
}

/// Read one message: everything up to EOF, at most `buffer` bytes.
pub async fn receive(stream: &mut TcpStream, buffer: usize) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(buffer.min(64 * 1024));
    // One byte past the limit is enough to tell an oversized message apart.
    stream
        .take(buffer as u64 + 1)
        .read_to_end(&mut data)
        .await
        .map_err(RelayError::ReceiveFailed)?;
    if data.len() > buffer {
        return Err(RelayError::MessageTooLarge { len: data.len(), limit: buffer });
    }
    debug!(bytes = data.len(), "message read");
    Ok(data)
}

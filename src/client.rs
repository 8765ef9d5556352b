//! One-shot TCP client
//!
//! Each request opens a new connection, sends the payload once, reads a
//! single capped response, and closes. Connections are never reused and
//! only one request is ever outstanding.

use std::io::{Read, Write};
use std::net::TcpStream;
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{PronosticoError, Result};

/// Performs one request/response exchange per call
pub struct Client {
    config: ClientConfig,
}

impl Client {
    /// Create a client for the given session configuration
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// The session configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send one payload and capture one response
    ///
    /// Performs exactly one `write` and one capped `read`: the servers
    /// answer with a single buffer and close, so there are no
    /// continuation reads. A read timeout reports as NoResponse rather
    /// than blocking indefinitely.
    pub fn request(&self, payload: &[u8]) -> Result<Vec<u8>> {
        let addr = (self.config.host.as_str(), self.config.port);
        let stream = TcpStream::connect(addr)?;

        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        tracing::debug!("Connected to {}", peer_addr);

        // Disable Nagle's algorithm for low latency
        stream.set_nodelay(true)?;
        if self.config.read_timeout_ms > 0 {
            stream.set_read_timeout(Some(Duration::from_millis(self.config.read_timeout_ms)))?;
        }

        self.exchange(stream, payload)
    }

    fn exchange(&self, mut stream: TcpStream, payload: &[u8]) -> Result<Vec<u8>> {
        stream.write_all(payload)?;
        stream.flush()?;
        tracing::debug!("Sent {} bytes", payload.len());

        let mut buf = vec![0u8; self.config.recv_max];
        let n = match stream.read(&mut buf) {
            Ok(n) => n,
            Err(ref e)
                if e.kind() == std::io::ErrorKind::WouldBlock
                    || e.kind() == std::io::ErrorKind::TimedOut =>
            {
                // Read timeout (Windows uses TimedOut instead of WouldBlock)
                return Err(PronosticoError::NoResponse(self.config.read_timeout_ms));
            }
            Err(e) => return Err(e.into()),
        };

        buf.truncate(n);
        tracing::debug!("Received {} bytes", n);

        Ok(buf)
    }
}

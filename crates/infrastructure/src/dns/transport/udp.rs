//! UDP transport for forwarded queries (RFC 1035 §4.2.1).
//!
//! Every exchange uses a fresh socket on an ephemeral port. Messages are
//! sent as-is, without framing.

use dnsrelay_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Receive buffer for upstream answers (EDNS(0) sized).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 4096;

pub struct UdpTransport {
    server_addr: SocketAddr,
    timeout: Duration,
    max_response_size: usize,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr, timeout: Duration) -> Self {
        Self {
            server_addr,
            timeout,
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }

    pub fn with_max_response_size(mut self, size: usize) -> Self {
        self.max_response_size = size.max(12);
        self
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Sends `message_bytes` and waits for the matching answer.
    ///
    /// Datagrams from another source or carrying another transaction id are
    /// discarded; the whole exchange shares one deadline, after which
    /// [`DomainError::QueryTimeout`] is returned.
    pub async fn send(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let bind_addr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| self.transport_error(format!("failed to bind UDP socket: {}", e)))?;

        let deadline = Instant::now() + self.timeout;

        let send = socket.send_to(message_bytes, self.server_addr);
        let bytes_sent = tokio::time::timeout_at(deadline, send)
            .await
            .map_err(|_| DomainError::QueryTimeout)?
            .map_err(|e| self.transport_error(format!("failed to send UDP query: {}", e)))?;

        debug!(
            server = %self.server_addr,
            bytes_sent = bytes_sent,
            "UDP query sent"
        );

        let mut recv_buf = vec![0u8; self.max_response_size];

        loop {
            let (bytes_received, from_addr) =
                tokio::time::timeout_at(deadline, socket.recv_from(&mut recv_buf))
                    .await
                    .map_err(|_| DomainError::QueryTimeout)?
                    .map_err(|e| {
                        self.transport_error(format!("failed to receive UDP response: {}", e))
                    })?;

            if from_addr.ip() != self.server_addr.ip() {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source discarded"
                );
                continue;
            }

            let response = &recv_buf[..bytes_received];
            if let Err(e) = validate_response_id(message_bytes, response, self.server_addr) {
                warn!(error = %e, "Discarding UDP response");
                continue;
            }

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );
            return Ok(response.to_vec());
        }
    }

    fn transport_error(&self, reason: String) -> DomainError {
        DomainError::TransportError {
            server: self.server_addr.to_string(),
            reason,
        }
    }
}

/// Checks that `response` echoes the transaction id of `query`.
pub(crate) fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "message from {} too short to carry a transaction id",
            server
        )));
    }
    if query[..2] != response[..2] {
        return Err(DomainError::InvalidDnsResponse(format!(
            "transaction id mismatch from {}: expected {:02x}{:02x}, got {:02x}{:02x}",
            server, query[0], query[1], response[0], response[1]
        )));
    }
    Ok(())
}
